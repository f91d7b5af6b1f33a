use futures::future::BoxFuture;

use crate::{
    dto::events::{LocalNotificationEvent, ServerEvent},
    state::SharedState,
};

use super::{AlarmChannel, ChannelOutcome, PeriodAlarm};

/// Tag so repeated alarms replace the previous notification rather than stack.
const NOTIFICATION_TAG: &str = "timer-alarm";

/// Publishes a local-notification directive on the scoreboard stream; the
/// attached client shows it, provided permission was granted at startup.
pub struct LocalNotificationChannel {
    state: SharedState,
}

impl LocalNotificationChannel {
    /// Build the channel against the shared state's event hub.
    pub fn new(state: SharedState) -> Self {
        Self { state }
    }
}

impl AlarmChannel for LocalNotificationChannel {
    fn name(&self) -> &'static str {
        "local-notification"
    }

    fn attempt<'a>(&'a self, alarm: &'a PeriodAlarm) -> BoxFuture<'a, ChannelOutcome> {
        Box::pin(async move {
            let payload = LocalNotificationEvent {
                title: alarm.title.clone(),
                body: alarm.body.clone(),
                tag: NOTIFICATION_TAG.to_string(),
            };
            match ServerEvent::json(Some("notify".to_string()), &payload) {
                Ok(event) => {
                    self.state.scoreboard_sse().broadcast(event);
                    ChannelOutcome::Delivered
                }
                Err(err) => ChannelOutcome::Failed(err.to_string()),
            }
        })
    }
}
