use futures::future::BoxFuture;

use crate::{
    dto::events::{ServerEvent, VibrationEvent},
    state::SharedState,
};

use super::{AlarmChannel, ChannelOutcome, PeriodAlarm};

/// Fixed pulse pattern: three long pulses with short gaps, in milliseconds.
const PULSE_PATTERN_MS: [u32; 5] = [500, 200, 500, 200, 500];

/// Publishes a vibration directive on the scoreboard stream for clients
/// running on devices with a vibration motor.
pub struct VibrationChannel {
    state: SharedState,
}

impl VibrationChannel {
    /// Build the channel against the shared state's event hub.
    pub fn new(state: SharedState) -> Self {
        Self { state }
    }
}

impl AlarmChannel for VibrationChannel {
    fn name(&self) -> &'static str {
        "vibration"
    }

    fn attempt<'a>(&'a self, _alarm: &'a PeriodAlarm) -> BoxFuture<'a, ChannelOutcome> {
        Box::pin(async move {
            let payload = VibrationEvent {
                pattern_ms: PULSE_PATTERN_MS.to_vec(),
            };
            match ServerEvent::json(Some("vibrate".to_string()), &payload) {
                Ok(event) => {
                    self.state.scoreboard_sse().broadcast(event);
                    ChannelOutcome::Delivered
                }
                Err(err) => ChannelOutcome::Failed(err.to_string()),
            }
        })
    }
}
