use futures::future::BoxFuture;

use crate::{
    dto::events::{AlarmToneEvent, ServerEvent},
    state::SharedState,
};

use super::{AlarmChannel, ChannelOutcome, PeriodAlarm};

/// Oscillator settings for the synthesized alarm tone.
const WAVEFORM: &str = "sine";
const FREQUENCY_HZ: u32 = 880;
const GAIN: f32 = 0.5;
const DURATION_MS: u32 = 1_000;

/// Publishes a tone directive on the scoreboard stream; the attached client
/// synthesizes the sound, or silently ignores the directive when it cannot.
pub struct ToneChannel {
    state: SharedState,
}

impl ToneChannel {
    /// Build the channel against the shared state's event hub.
    pub fn new(state: SharedState) -> Self {
        Self { state }
    }
}

impl AlarmChannel for ToneChannel {
    fn name(&self) -> &'static str {
        "tone"
    }

    fn attempt<'a>(&'a self, _alarm: &'a PeriodAlarm) -> BoxFuture<'a, ChannelOutcome> {
        Box::pin(async move {
            let payload = AlarmToneEvent {
                waveform: WAVEFORM.to_string(),
                frequency_hz: FREQUENCY_HZ,
                gain: GAIN,
                duration_ms: DURATION_MS,
            };
            match ServerEvent::json(Some("alarm_tone".to_string()), &payload) {
                Ok(event) => {
                    self.state.scoreboard_sse().broadcast(event);
                    ChannelOutcome::Delivered
                }
                Err(err) => ChannelOutcome::Failed(err.to_string()),
            }
        })
    }
}
