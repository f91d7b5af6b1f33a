//! Per-period score tracking for both sides of a match.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The two sides of the scoreboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TeamSide {
    Home,
    Away,
}

/// Goals scored by each side during one period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PeriodScore {
    /// Goals for the home side in this period.
    pub home: u32,
    /// Goals for the away side in this period.
    pub away: u32,
}

/// Score sheet holding one [`PeriodScore`] entry per period.
///
/// Totals are always recomputed as the sum over the entries; there is no
/// separately maintained counter that could drift.
#[derive(Debug, Clone)]
pub struct ScoreSheet {
    periods: Vec<PeriodScore>,
}

impl ScoreSheet {
    /// Build an all-zero sheet for the given number of periods.
    pub fn new(period_count: u8) -> Self {
        Self {
            periods: vec![PeriodScore::default(); usize::from(period_count)],
        }
    }

    /// Per-period entries in period order.
    pub fn periods(&self) -> &[PeriodScore] {
        &self.periods
    }

    /// Apply a +1/-1 adjustment to one side of the given period (1-based).
    ///
    /// Decrements clamp at zero so no entry, and therefore no total, can go
    /// negative. Returns the updated entry.
    pub fn adjust(&mut self, period: u8, side: TeamSide, delta: i32) -> PeriodScore {
        let index = usize::from(period.saturating_sub(1)).min(self.periods.len().saturating_sub(1));
        let entry = &mut self.periods[index];
        match side {
            TeamSide::Home => entry.home = entry.home.saturating_add_signed(delta),
            TeamSide::Away => entry.away = entry.away.saturating_add_signed(delta),
        }
        *entry
    }

    /// Cumulative score per side across all periods.
    pub fn totals(&self) -> PeriodScore {
        self.periods
            .iter()
            .fold(PeriodScore::default(), |acc, entry| PeriodScore {
                home: acc.home + entry.home,
                away: acc.away + entry.away,
            })
    }

    /// Zero every period for both sides.
    pub fn reset(&mut self) {
        self.periods.fill(PeriodScore::default());
    }
}
