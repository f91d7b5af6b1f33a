//! Runtime state for the single active match.

use std::time::SystemTime;

use uuid::Uuid;

use crate::{
    catalog::GameFormat,
    state::{
        score::{PeriodScore, ScoreSheet, TeamSide},
        timer::MatchTimer,
    },
};

/// Name shown for the home side until the operator renames it.
pub const DEFAULT_HOME_NAME: &str = "HOME";
/// Name shown for the away side until the operator renames it.
pub const DEFAULT_AWAY_NAME: &str = "AWAY";

/// Aggregated state for the match currently on the scoreboard.
#[derive(Debug, Clone)]
pub struct MatchSession {
    /// Identifier for this session, fresh on every format selection.
    pub id: Uuid,
    /// Format the match is being played under.
    pub format: &'static GameFormat,
    /// Display name of the home side.
    pub home_name: String,
    /// Display name of the away side.
    pub away_name: String,
    /// Period clock.
    pub timer: MatchTimer,
    /// Per-period score sheet.
    pub score: ScoreSheet,
    /// Creation timestamp for auditing/debugging.
    pub created_at: SystemTime,
}

impl MatchSession {
    /// Open the scoreboard for the given format: period 1, clock stopped,
    /// all scores zero.
    pub fn new(format: &'static GameFormat) -> Self {
        Self {
            id: Uuid::new_v4(),
            format,
            home_name: DEFAULT_HOME_NAME.to_string(),
            away_name: DEFAULT_AWAY_NAME.to_string(),
            timer: MatchTimer::new(format.period_count, format.period_seconds()),
            score: ScoreSheet::new(format.period_count),
            created_at: SystemTime::now(),
        }
    }

    /// Adjust the current period's score for one side.
    pub fn adjust_score(&mut self, side: TeamSide, delta: i32) -> PeriodScore {
        self.score.adjust(self.timer.current_period(), side, delta)
    }

    /// Rename one side. Names are upper-cased to match the scoreboard display.
    pub fn rename(&mut self, side: TeamSide, name: &str) {
        let name = name.trim().to_uppercase();
        match side {
            TeamSide::Home => self.home_name = name,
            TeamSide::Away => self.away_name = name,
        }
    }

    /// Return to period 1 at full duration and clear all scores.
    pub fn reset(&mut self) {
        self.timer.reset();
        self.score.reset();
    }

    /// Label for the period currently on the clock.
    pub fn period_label(&self) -> String {
        self.format.period_label(self.timer.current_period())
    }
}
