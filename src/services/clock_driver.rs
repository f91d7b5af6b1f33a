//! Background task recomputing the period clock against wall-clock time.

use std::time::{Duration, Instant};

use tokio::time::{MissedTickBehavior, interval};
use tracing::info;

use crate::{
    dto::scoreboard::MatchSnapshot,
    services::{alarm_service, sse_service},
    state::{SharedState, timer::TickEvent},
};

/// How often the clock is recomputed while the process is awake.
///
/// The displayed value derives from the stored deadline rather than from the
/// number of ticks, so a delayed or missed tick resynchronises on the next
/// pass instead of drifting.
pub const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Drive the active match clock until the process shuts down.
pub async fn run(state: SharedState) {
    let mut ticker = interval(TICK_INTERVAL);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        ticker.tick().await;
        advance(&state, Instant::now()).await;
    }
}

/// Recompute the clock once against `now` and broadcast what changed.
///
/// Split out of the loop (with the clock injected) so the expiry path is
/// testable without real waits.
pub async fn advance(state: &SharedState, now: Instant) {
    let outcome = {
        let mut slot = state.current_match().write().await;
        let Some(session) = slot.as_mut() else {
            return;
        };
        session
            .timer
            .tick(now)
            .map(|event| (event, MatchSnapshot::from(&*session)))
    };

    let Some((event, snapshot)) = outcome else {
        return;
    };

    match event {
        TickEvent::Updated => {
            sse_service::broadcast_clock_tick(state.scoreboard_sse(), &snapshot);
        }
        TickEvent::Expired => {
            info!(period = snapshot.period, "period expired");
            sse_service::broadcast_snapshot(state.scoreboard_sse(), &snapshot);
            tokio::spawn(alarm_service::fire_period_alarm(state.clone()));
        }
        TickEvent::EndedCleared => {
            sse_service::broadcast_snapshot(state.scoreboard_sse(), &snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        dto::scoreboard::{ClockPhase, CreateMatchRequest},
        services::match_service,
        state::AppState,
    };

    #[tokio::test]
    async fn expiry_broadcasts_an_ended_snapshot() {
        let state = AppState::new(None);
        match_service::create_match(
            &state,
            CreateMatchRequest {
                format_id: "u7".into(),
            },
        )
        .await
        .unwrap();
        match_service::start_clock(&state).await.unwrap();

        let mut receiver = state.scoreboard_sse().subscribe();
        let jump = Instant::now() + Duration::from_secs(600);
        advance(&state, jump).await;

        let event = receiver.recv().await.unwrap();
        assert_eq!(event.event.as_deref(), Some("snapshot"));
        let snapshot: serde_json::Value = serde_json::from_str(&event.data).unwrap();
        assert_eq!(snapshot["phase"], "ended");
        assert_eq!(snapshot["remaining_seconds"], 0);
        assert_eq!(snapshot["ended"], true);

        // The clock is already stopped; another pass must not re-fire.
        advance(&state, jump + Duration::from_secs(1)).await;
        let seen = match_service::snapshot(&state).await.unwrap();
        assert_eq!(seen.phase, ClockPhase::Ended);
    }

    #[tokio::test]
    async fn whole_second_progress_broadcasts_clock_ticks() {
        let state = AppState::new(None);
        match_service::create_match(
            &state,
            CreateMatchRequest {
                format_id: "u7".into(),
            },
        )
        .await
        .unwrap();
        match_service::start_clock(&state).await.unwrap();

        let mut receiver = state.scoreboard_sse().subscribe();
        advance(&state, Instant::now() + Duration::from_secs(2)).await;

        let event = receiver.recv().await.unwrap();
        assert_eq!(event.event.as_deref(), Some("clock"));
        let tick: serde_json::Value = serde_json::from_str(&event.data).unwrap();
        assert_eq!(tick["phase"], "running");
        assert!(tick["remaining_seconds"].as_u64().unwrap() <= 598);
    }

    #[tokio::test]
    async fn idle_passes_broadcast_nothing() {
        let state = AppState::new(None);
        let mut receiver = state.scoreboard_sse().subscribe();
        advance(&state, Instant::now()).await;
        assert!(receiver.try_recv().is_err());
    }
}
