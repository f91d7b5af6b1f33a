use futures::future::BoxFuture;
use tracing::info;

use crate::state::SharedState;

use super::{AlarmChannel, ChannelOutcome, PeriodAlarm};

/// Asks the push relay to deliver the alarm to the registered device, so it
/// still lands while the scoreboard client is backgrounded or closed.
///
/// A missing registration or an unconfigured relay disables this channel
/// only; the other channels are unaffected.
pub struct RemoteNotificationChannel {
    state: SharedState,
}

impl RemoteNotificationChannel {
    /// Build the channel against the shared state's relay and registration.
    pub fn new(state: SharedState) -> Self {
        Self { state }
    }
}

impl AlarmChannel for RemoteNotificationChannel {
    fn name(&self) -> &'static str {
        "remote-notification"
    }

    fn attempt<'a>(&'a self, alarm: &'a PeriodAlarm) -> BoxFuture<'a, ChannelOutcome> {
        Box::pin(async move {
            let Some(relay) = self.state.relay() else {
                return ChannelOutcome::Skipped("push relay not configured");
            };

            let token = {
                let guard = self.state.push_registration().read().await;
                guard.as_ref().map(|registration| registration.token.clone())
            };
            let Some(token) = token else {
                return ChannelOutcome::Skipped("no device registration");
            };

            match relay.send(&token, &alarm.title, &alarm.body).await {
                Ok(message_id) => {
                    info!(%message_id, "remote alarm accepted upstream");
                    ChannelOutcome::Delivered
                }
                Err(err) => ChannelOutcome::Failed(err.to_string()),
            }
        })
    }
}
