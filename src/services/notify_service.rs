//! Relay endpoint logic: validation, scheduling, and the hold ceiling.

use std::time::Duration;

use time::OffsetDateTime;
use tokio::time::sleep;
use tracing::{info, warn};

use crate::{
    dto::push::{PushSendRequest, PushSendResponse, RegisterPushRequest},
    error::ServiceError,
    state::{PushRegistration, SharedState},
};

/// Longest delay the handler will hold its own execution open for.
///
/// Beyond this the process may be torn down before the delay elapses, so the
/// send degrades to best-effort and the response says so. Accepted platform
/// constraint; there is no durable job queue behind it.
pub const HOLD_CEILING: Duration = Duration::from_secs(150);

/// Warning attached when a requested delay exceeds [`HOLD_CEILING`].
pub const DELIVERY_WARNING: &str =
    "Delay exceeds the relay hold ceiling. Notification delivery not guaranteed.";

/// How a notification request will be carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendPlan {
    /// No delivery time, or one already in the past: send right away.
    Immediate,
    /// Delivery time within the hold ceiling: wait in the handler, then send.
    Hold {
        delay: Duration,
        deliver_at: OffsetDateTime,
    },
    /// Delivery time beyond the ceiling: detached best-effort timed send.
    Detached {
        delay: Duration,
        deliver_at: OffsetDateTime,
    },
}

/// Decide how to carry out a request given its delivery time and `now`.
pub fn plan_send(scheduled_at: Option<OffsetDateTime>, now: OffsetDateTime) -> SendPlan {
    let Some(deliver_at) = scheduled_at else {
        return SendPlan::Immediate;
    };

    let delay = deliver_at - now;
    if delay <= time::Duration::ZERO {
        return SendPlan::Immediate;
    }

    let delay = Duration::try_from(delay).unwrap_or(Duration::MAX);
    if delay <= HOLD_CEILING {
        SendPlan::Hold { delay, deliver_at }
    } else {
        SendPlan::Detached { delay, deliver_at }
    }
}

/// Handle a relay request end to end.
pub async fn send_notification(
    state: &SharedState,
    request: PushSendRequest,
) -> Result<PushSendResponse, ServiceError> {
    let Some(token) = request.token.filter(|token| !token.trim().is_empty()) else {
        return Err(ServiceError::InvalidInput("missing device token".into()));
    };
    let Some(relay) = state.relay() else {
        return Err(ServiceError::RelayUnconfigured);
    };

    let title = request.title.unwrap_or_default();
    let body = request.body.unwrap_or_default();

    match plan_send(request.scheduled_at, OffsetDateTime::now_utc()) {
        SendPlan::Immediate => {
            let message_id = relay.send(&token, &title, &body).await?;
            info!(%message_id, "notification sent");
            Ok(PushSendResponse::sent(message_id))
        }
        SendPlan::Hold { delay, deliver_at } => {
            info!(
                delay_secs = delay.as_secs(),
                %deliver_at,
                "holding notification until its delivery time"
            );
            sleep(delay).await;
            // The response stays a success either way; a failed deferred send
            // is logged and stops here.
            match relay.send(&token, &title, &body).await {
                Ok(message_id) => info!(%message_id, "scheduled notification sent"),
                Err(err) => warn!(error = %err, "scheduled notification failed"),
            }
            Ok(PushSendResponse::scheduled(deliver_at))
        }
        SendPlan::Detached { delay, deliver_at } => {
            warn!(
                delay_secs = delay.as_secs(),
                "delay exceeds the hold ceiling; delivery not guaranteed"
            );
            tokio::spawn(async move {
                sleep(delay).await;
                match relay.send(&token, &title, &body).await {
                    Ok(message_id) => info!(%message_id, "detached notification sent"),
                    Err(err) => warn!(error = %err, "detached notification failed"),
                }
            });
            Ok(PushSendResponse::scheduled(deliver_at).with_warning(DELIVERY_WARNING))
        }
    }
}

/// Store the session's device token for the remote alarm channel.
pub async fn register_device(state: &SharedState, request: RegisterPushRequest) {
    let prefix: String = request.token.chars().take(20).collect();
    info!(token_prefix = %prefix, "device registered for remote alarms");

    let mut slot = state.push_registration().write().await;
    *slot = Some(PushRegistration {
        token: request.token,
    });
}

/// Forget the registered device token, disabling the remote alarm channel.
pub async fn clear_device(state: &SharedState) {
    let mut slot = state.push_registration().write().await;
    if slot.take().is_some() {
        info!("device registration cleared");
    }
}
