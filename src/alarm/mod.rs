//! Best-effort alarm fan-out fired when a period expires.
//!
//! Each channel implements the same contract: attempt delivery, report an
//! outcome, never fail the caller. Channels run independently; none is
//! retried and no channel's failure affects another.

mod notification;
mod remote;
mod tone;
mod vibration;

use futures::future::{BoxFuture, join_all};
use std::sync::Arc;
use tracing::{debug, warn};

pub use notification::LocalNotificationChannel;
pub use remote::RemoteNotificationChannel;
pub use tone::ToneChannel;
pub use vibration::VibrationChannel;

/// Default notification title for a period-ended alarm.
pub const ALARM_TITLE: &str = "\u{23f1}\u{fe0f} Period Ended!";
/// Default notification body for a period-ended alarm.
pub const ALARM_BODY: &str = "Time's up!";

/// Notification content carried to every channel of one alarm.
#[derive(Debug, Clone)]
pub struct PeriodAlarm {
    /// Notification title.
    pub title: String,
    /// Notification body.
    pub body: String,
}

impl PeriodAlarm {
    /// Alarm with the standard period-ended content.
    pub fn period_end() -> Self {
        Self {
            title: ALARM_TITLE.to_string(),
            body: ALARM_BODY.to_string(),
        }
    }
}

/// What happened when a channel attempted delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelOutcome {
    /// The channel handed the alarm off to its delivery mechanism.
    Delivered,
    /// The channel is not available in this session and stood down.
    Skipped(&'static str),
    /// The delivery attempt failed; the failure stops here.
    Failed(String),
}

/// One delivery mechanism for a period alarm.
pub trait AlarmChannel: Send + Sync {
    /// Short channel name used in logs.
    fn name(&self) -> &'static str;

    /// Attempt delivery. Implementations must not panic and must fold every
    /// failure into the returned outcome.
    fn attempt<'a>(&'a self, alarm: &'a PeriodAlarm) -> BoxFuture<'a, ChannelOutcome>;
}

/// Fan-out over a set of alarm channels.
pub struct AlarmDispatcher {
    channels: Vec<Arc<dyn AlarmChannel>>,
}

impl AlarmDispatcher {
    /// Build a dispatcher over the given channels.
    pub fn new(channels: Vec<Arc<dyn AlarmChannel>>) -> Self {
        Self { channels }
    }

    /// Fire the alarm on every channel concurrently, logging each outcome.
    pub async fn dispatch(&self, alarm: &PeriodAlarm) {
        let attempts = self
            .channels
            .iter()
            .map(|channel| async move { (channel.name(), channel.attempt(alarm).await) });

        for (name, outcome) in join_all(attempts).await {
            match outcome {
                ChannelOutcome::Delivered => debug!(channel = name, "alarm delivered"),
                ChannelOutcome::Skipped(reason) => {
                    debug!(channel = name, reason, "alarm channel skipped")
                }
                ChannelOutcome::Failed(reason) => {
                    warn!(channel = name, reason, "alarm channel failed")
                }
            }
        }
    }
}
