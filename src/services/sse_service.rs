use std::{convert::Infallible, time::Duration};

use axum::response::sse::{Event, KeepAlive, Sse};
use futures::Stream;
use tokio::sync::broadcast::{self, error::RecvError};

use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

use crate::{
    dto::{
        events::{ClockTickEvent, ServerEvent},
        scoreboard::MatchSnapshot,
    },
    state::{SharedState, SseHub},
};

/// Subscribe to the shared scoreboard SSE stream.
pub fn subscribe(state: &SharedState) -> broadcast::Receiver<ServerEvent> {
    state.scoreboard_sse().subscribe()
}

/// Convert a broadcast receiver into an SSE response, forwarding events and
/// cleaning up once the client disconnects.
pub fn to_sse_stream(
    mut receiver: broadcast::Receiver<ServerEvent>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    // small bounded channel between forwarder and response
    let (tx, rx) = mpsc::channel::<Result<Event, Infallible>>(8);

    // forwarder task: reads from broadcast and pushes into mpsc
    tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = tx.closed() => break,
                recv_result = receiver.recv() => {
                    match recv_result {
                        Ok(payload) => {
                            let mut event = Event::default().data(payload.data);
                            if let Some(name) = payload.event {
                                event = event.event(name);
                            }

                            if tx.send(Ok(event)).await.is_err() {
                                break;
                            }
                        }
                        Err(RecvError::Closed) => break,
                        Err(RecvError::Lagged(_)) => {
                            // Skip lagged messages but keep the stream alive.
                            continue;
                        }
                    }
                }
            }
        }

        tracing::info!("scoreboard SSE stream disconnected");
    });

    // response stream reads from mpsc; when client disconnects axum drops this stream
    let stream = ReceiverStream::new(rx);
    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("keep-alive"),
    )
}

/// Broadcast a full scoreboard snapshot.
pub fn broadcast_snapshot(hub: &SseHub, snapshot: &MatchSnapshot) {
    if let Ok(event) = ServerEvent::json(Some("snapshot".to_string()), snapshot) {
        hub.broadcast(event);
    }
}

/// Broadcast a whole-second clock change without the full snapshot.
pub fn broadcast_clock_tick(hub: &SseHub, snapshot: &MatchSnapshot) {
    let payload = ClockTickEvent {
        remaining_seconds: snapshot.remaining_seconds,
        phase: snapshot.phase,
    };
    if let Ok(event) = ServerEvent::json(Some("clock".to_string()), &payload) {
        hub.broadcast(event);
    }
}

/// Send a human-readable info message onto the scoreboard SSE stream.
pub fn broadcast_info(hub: &SseHub, message: &str) {
    hub.broadcast(ServerEvent::new(
        Some("info".to_string()),
        message.to_string(),
    ));
}
