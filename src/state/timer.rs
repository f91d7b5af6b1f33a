//! Deadline-driven period timer for the active match.

use std::time::{Duration, Instant};

use thiserror::Error;

/// How long the ended flag stays visible before clearing on its own.
pub const ENDED_DISPLAY_WINDOW: Duration = Duration::from_secs(3);

/// Phases the period clock can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    /// Clock is idle at the top of a period (or frozen at zero).
    Stopped,
    /// Clock is counting down towards the deadline.
    Running,
    /// Clock was running and has been frozen by the operator.
    Paused,
    /// The period just expired; the ended flag is showing.
    Ended,
}

/// Error returned when a clock control cannot be applied in the current phase.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimerError {
    /// The clock is already counting down.
    #[error("timer is already running")]
    AlreadyRunning,
    /// The current period has no time left; starting is disabled.
    #[error("period has no time remaining")]
    NothingRemaining,
    /// Pause was requested while the clock was not counting down.
    #[error("timer is not running")]
    NotRunning,
}

/// Outcome of a clock recomputation worth reporting to observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// The displayed remaining seconds changed.
    Updated,
    /// The period reached zero on this tick. Reported exactly once per period.
    Expired,
    /// The ended display window elapsed and the flag cleared itself.
    EndedCleared,
}

/// Period clock deriving its remaining time from a stored deadline.
///
/// The remaining value is recomputed against the caller-supplied `now` on
/// every tick rather than decremented per tick, so it resynchronises after
/// the driving loop was suspended for an arbitrary interval.
#[derive(Debug, Clone)]
pub struct MatchTimer {
    period_count: u8,
    period_seconds: u32,
    current_period: u8,
    remaining_seconds: u32,
    phase: TimerPhase,
    deadline: Option<Instant>,
    ended_at: Option<Instant>,
}

impl MatchTimer {
    /// Build a clock at period 1 with the full duration, stopped.
    pub fn new(period_count: u8, period_seconds: u32) -> Self {
        Self {
            period_count,
            period_seconds,
            current_period: 1,
            remaining_seconds: period_seconds,
            phase: TimerPhase::Stopped,
            deadline: None,
            ended_at: None,
        }
    }

    /// Current phase of the clock.
    pub fn phase(&self) -> TimerPhase {
        self.phase
    }

    /// 1-based index of the period being played.
    pub fn current_period(&self) -> u8 {
        self.current_period
    }

    /// Seconds left in the current period, as of the last recomputation.
    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Whether the ended flag is currently showing.
    pub fn ended(&self) -> bool {
        self.phase == TimerPhase::Ended
    }

    /// Whether the clock may be started: not running and time remaining.
    pub fn can_start(&self) -> bool {
        self.phase != TimerPhase::Running && self.remaining_seconds > 0
    }

    /// Whether a later period exists to advance into.
    pub fn can_advance(&self) -> bool {
        self.current_period < self.period_count
    }

    /// Whether the match has been played out to the end of the last period.
    pub fn game_over(&self) -> bool {
        self.current_period == self.period_count && self.remaining_seconds == 0
    }

    /// Arm the deadline and start counting down from the frozen value.
    pub fn start(&mut self, now: Instant) -> Result<(), TimerError> {
        if self.phase == TimerPhase::Running {
            return Err(TimerError::AlreadyRunning);
        }
        if self.remaining_seconds == 0 {
            return Err(TimerError::NothingRemaining);
        }

        self.deadline = Some(now + Duration::from_secs(u64::from(self.remaining_seconds)));
        self.ended_at = None;
        self.phase = TimerPhase::Running;
        Ok(())
    }

    /// Freeze the countdown, discarding the deadline.
    pub fn pause(&mut self, now: Instant) -> Result<(), TimerError> {
        if self.phase != TimerPhase::Running {
            return Err(TimerError::NotRunning);
        }

        self.remaining_seconds = self.derive_remaining(now);
        self.deadline = None;
        self.phase = TimerPhase::Paused;
        Ok(())
    }

    /// Recompute the clock against `now`.
    ///
    /// Returns the transition worth broadcasting, if any. The expiry event
    /// fires exactly once: reaching zero moves the phase to [`TimerPhase::Ended`],
    /// and subsequent ticks only age the ended display window.
    pub fn tick(&mut self, now: Instant) -> Option<TickEvent> {
        match self.phase {
            TimerPhase::Running => {
                let remaining = self.derive_remaining(now);
                let changed = remaining != self.remaining_seconds;
                self.remaining_seconds = remaining;

                if remaining == 0 {
                    self.deadline = None;
                    self.ended_at = Some(now);
                    self.phase = TimerPhase::Ended;
                    return Some(TickEvent::Expired);
                }

                changed.then_some(TickEvent::Updated)
            }
            TimerPhase::Ended => {
                let opened = self.ended_at?;
                if now.saturating_duration_since(opened) >= ENDED_DISPLAY_WINDOW {
                    self.ended_at = None;
                    self.phase = TimerPhase::Stopped;
                    return Some(TickEvent::EndedCleared);
                }
                None
            }
            TimerPhase::Stopped | TimerPhase::Paused => None,
        }
    }

    /// Move to the next period at its full duration, stopped.
    ///
    /// A no-op when the last period is already reached; returns whether the
    /// clock advanced.
    pub fn next_period(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }

        self.current_period += 1;
        self.remaining_seconds = self.period_seconds;
        self.deadline = None;
        self.ended_at = None;
        self.phase = TimerPhase::Stopped;
        true
    }

    /// Return to period 1 at the full duration, stopped.
    pub fn reset(&mut self) {
        self.current_period = 1;
        self.remaining_seconds = self.period_seconds;
        self.deadline = None;
        self.ended_at = None;
        self.phase = TimerPhase::Stopped;
    }

    /// Seconds until the deadline, rounded up so the display only reaches
    /// zero once the deadline has actually passed.
    fn derive_remaining(&self, now: Instant) -> u32 {
        let Some(deadline) = self.deadline else {
            return self.remaining_seconds;
        };
        let left = deadline.saturating_duration_since(now);
        u32::try_from(left.as_millis().div_ceil(1_000)).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(value: u64) -> Duration {
        Duration::from_secs(value)
    }

    #[test]
    fn new_timer_is_stopped_at_period_one() {
        let timer = MatchTimer::new(4, 600);
        assert_eq!(timer.phase(), TimerPhase::Stopped);
        assert_eq!(timer.current_period(), 1);
        assert_eq!(timer.remaining_seconds(), 600);
        assert!(timer.can_start());
        assert!(!timer.game_over());
    }

    #[test]
    fn start_is_rejected_with_nothing_remaining() {
        let mut timer = MatchTimer::new(2, 10);
        let t0 = Instant::now();
        timer.start(t0).unwrap();
        timer.tick(t0 + secs(10));
        assert_eq!(timer.remaining_seconds(), 0);

        // Still ended, then stopped at zero: both refuse to start.
        assert_eq!(timer.start(t0 + secs(11)), Err(TimerError::NothingRemaining));
        timer.tick(t0 + secs(20));
        assert_eq!(timer.phase(), TimerPhase::Stopped);
        assert_eq!(timer.start(t0 + secs(21)), Err(TimerError::NothingRemaining));
        assert!(!timer.can_start());
    }

    #[test]
    fn start_while_running_is_rejected() {
        let mut timer = MatchTimer::new(2, 60);
        let t0 = Instant::now();
        timer.start(t0).unwrap();
        assert_eq!(timer.start(t0 + secs(1)), Err(TimerError::AlreadyRunning));
    }

    #[test]
    fn remaining_resynchronises_after_suspension() {
        let mut timer = MatchTimer::new(4, 600);
        let t0 = Instant::now();
        timer.start(t0).unwrap();

        // A tick that arrives late still derives from the deadline.
        assert_eq!(timer.tick(t0 + secs(123)), Some(TickEvent::Updated));
        assert_eq!(timer.remaining_seconds(), 477);

        // Sub-second progress rounds up.
        timer.tick(t0 + secs(123) + Duration::from_millis(400));
        assert_eq!(timer.remaining_seconds(), 477);
    }

    #[test]
    fn expiry_fires_exactly_once() {
        let mut timer = MatchTimer::new(4, 600);
        let t0 = Instant::now();
        timer.start(t0).unwrap();

        assert_eq!(timer.tick(t0 + secs(600)), Some(TickEvent::Expired));
        assert_eq!(timer.remaining_seconds(), 0);
        assert_eq!(timer.phase(), TimerPhase::Ended);
        assert!(timer.ended());

        // Further ticks inside the display window report nothing.
        assert_eq!(timer.tick(t0 + secs(601)), None);
        assert_eq!(timer.tick(t0 + secs(602)), None);
    }

    #[test]
    fn ended_flag_clears_after_display_window() {
        let mut timer = MatchTimer::new(4, 5);
        let t0 = Instant::now();
        timer.start(t0).unwrap();
        timer.tick(t0 + secs(5));
        assert!(timer.ended());

        assert_eq!(timer.tick(t0 + secs(7)), None);
        assert_eq!(timer.tick(t0 + secs(8)), Some(TickEvent::EndedCleared));
        assert_eq!(timer.phase(), TimerPhase::Stopped);
        assert_eq!(timer.remaining_seconds(), 0);
    }

    #[test]
    fn pause_freezes_the_derived_value() {
        let mut timer = MatchTimer::new(4, 600);
        let t0 = Instant::now();
        timer.start(t0).unwrap();
        timer.pause(t0 + secs(30)).unwrap();

        assert_eq!(timer.phase(), TimerPhase::Paused);
        assert_eq!(timer.remaining_seconds(), 570);

        // Time passing while paused changes nothing.
        assert_eq!(timer.tick(t0 + secs(300)), None);
        assert_eq!(timer.remaining_seconds(), 570);

        // Resuming arms a fresh deadline from the frozen value.
        timer.start(t0 + secs(300)).unwrap();
        timer.tick(t0 + secs(310));
        assert_eq!(timer.remaining_seconds(), 560);
    }

    #[test]
    fn pause_requires_a_running_clock() {
        let mut timer = MatchTimer::new(4, 600);
        assert_eq!(timer.pause(Instant::now()), Err(TimerError::NotRunning));
    }

    #[test]
    fn next_period_advances_until_the_last() {
        let mut timer = MatchTimer::new(2, 2700);
        let t0 = Instant::now();
        timer.start(t0).unwrap();
        timer.tick(t0 + secs(2700));

        assert!(timer.next_period());
        assert_eq!(timer.current_period(), 2);
        assert_eq!(timer.remaining_seconds(), 2700);
        assert_eq!(timer.phase(), TimerPhase::Stopped);
        assert!(!timer.can_advance());

        // Beyond the last period: no-op.
        assert!(!timer.next_period());
        assert_eq!(timer.current_period(), 2);
    }

    #[test]
    fn game_over_only_at_final_period_zero() {
        let mut timer = MatchTimer::new(2, 10);
        let t0 = Instant::now();
        timer.start(t0).unwrap();
        timer.tick(t0 + secs(10));
        assert!(!timer.game_over());

        timer.next_period();
        timer.start(t0 + secs(20)).unwrap();
        timer.tick(t0 + secs(30));
        assert!(timer.game_over());
    }

    #[test]
    fn reset_returns_to_the_first_period() {
        let mut timer = MatchTimer::new(4, 900);
        let t0 = Instant::now();
        timer.start(t0).unwrap();
        timer.tick(t0 + secs(900));
        timer.next_period();

        timer.reset();
        assert_eq!(timer.current_period(), 1);
        assert_eq!(timer.remaining_seconds(), 900);
        assert_eq!(timer.phase(), TimerPhase::Stopped);
        assert!(!timer.ended());
    }
}
