use serde::Serialize;
use utoipa::ToSchema;

use crate::dto::scoreboard::ClockPhase;

#[derive(Clone, Debug)]
/// Dispatched payload carried across the scoreboard SSE stream.
pub struct ServerEvent {
    pub event: Option<String>,
    pub data: String,
}

impl ServerEvent {
    /// Build an event with a plain string payload.
    pub fn new(event: Option<String>, data: String) -> Self {
        Self { event, data }
    }

    /// Convenience wrapper that serialises `payload` into the SSE data field.
    pub fn json<E, T>(event: E, payload: &T) -> serde_json::Result<Self>
    where
        E: Into<Option<String>>,
        T: Serialize,
    {
        Ok(Self {
            event: event.into(),
            data: serde_json::to_string(payload)?,
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
/// Broadcast on every whole-second change of the running clock.
pub struct ClockTickEvent {
    pub remaining_seconds: u32,
    pub phase: ClockPhase,
}

#[derive(Debug, Serialize, ToSchema)]
/// Directive asking the attached client to play the alarm tone.
pub struct AlarmToneEvent {
    /// Oscillator waveform.
    pub waveform: String,
    pub frequency_hz: u32,
    /// Initial gain, decaying exponentially over the duration.
    pub gain: f32,
    pub duration_ms: u32,
}

#[derive(Debug, Serialize, ToSchema)]
/// Directive asking the attached client to pulse the vibration motor.
pub struct VibrationEvent {
    /// Alternating vibrate/pause durations in milliseconds.
    pub pattern_ms: Vec<u32>,
}

#[derive(Debug, Serialize, ToSchema)]
/// Directive asking the attached client to show a local notification.
pub struct LocalNotificationEvent {
    pub title: String,
    pub body: String,
    /// Tag so repeated alarms replace rather than stack.
    pub tag: String,
}
