use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::{format_system_time, formats::FormatSummary, validation::validate_score_delta},
    state::{
        MatchSession,
        score::TeamSide,
        timer::TimerPhase,
    },
};

/// Payload selecting the format a new match is played under.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateMatchRequest {
    /// Catalog identifier of the chosen format (e.g. `u8-9`).
    #[validate(length(min = 1, message = "format id must not be empty"))]
    pub format_id: String,
}

/// Payload adjusting one side's score by a single goal.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct ScoreAdjustRequest {
    /// Side whose score changes.
    pub team: TeamSide,
    /// Either `1` or `-1`.
    #[validate(custom(function = validate_score_delta))]
    pub delta: i32,
}

/// Payload renaming one side of the scoreboard.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct RenameTeamRequest {
    /// Side being renamed.
    pub team: TeamSide,
    /// New display name; upper-cased by the scoreboard.
    #[validate(length(min = 1, max = 12, message = "team name must be 1 to 12 characters"))]
    pub name: String,
}

/// Phase of the period clock as exposed to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ClockPhase {
    Stopped,
    Running,
    Paused,
    Ended,
}

impl From<TimerPhase> for ClockPhase {
    fn from(value: TimerPhase) -> Self {
        match value {
            TimerPhase::Stopped => ClockPhase::Stopped,
            TimerPhase::Running => ClockPhase::Running,
            TimerPhase::Paused => ClockPhase::Paused,
            TimerPhase::Ended => ClockPhase::Ended,
        }
    }
}

/// One side's name and cumulative score.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TeamSnapshot {
    pub name: String,
    pub score: u32,
}

/// Goals per side for one period.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PeriodScoreSummary {
    pub home: u32,
    pub away: u32,
}

/// Full scoreboard snapshot broadcast to clients after every change.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MatchSnapshot {
    pub id: Uuid,
    pub format: FormatSummary,
    /// 1-based period currently on the clock.
    pub period: u8,
    /// Display label for the current period (e.g. "3rd Quarter").
    pub period_label: String,
    pub phase: ClockPhase,
    pub remaining_seconds: u32,
    /// Whether the transient period-ended flash is showing.
    pub ended: bool,
    /// Whether the final period has been played out to zero.
    pub game_over: bool,
    /// Whether the start control is enabled.
    pub can_start: bool,
    /// Whether the next-period control is enabled.
    pub can_advance: bool,
    pub home: TeamSnapshot,
    pub away: TeamSnapshot,
    /// Per-period score breakdown in period order.
    pub periods: Vec<PeriodScoreSummary>,
    pub created_at: String,
}

impl From<&MatchSession> for MatchSnapshot {
    fn from(session: &MatchSession) -> Self {
        let totals = session.score.totals();
        Self {
            id: session.id,
            format: session.format.into(),
            period: session.timer.current_period(),
            period_label: session.period_label(),
            phase: session.timer.phase().into(),
            remaining_seconds: session.timer.remaining_seconds(),
            ended: session.timer.ended(),
            game_over: session.timer.game_over(),
            can_start: session.timer.can_start(),
            can_advance: session.timer.can_advance(),
            home: TeamSnapshot {
                name: session.home_name.clone(),
                score: totals.home,
            },
            away: TeamSnapshot {
                name: session.away_name.clone(),
                score: totals.away,
            },
            periods: session
                .score
                .periods()
                .iter()
                .map(|entry| PeriodScoreSummary {
                    home: entry.home,
                    away: entry.away,
                })
                .collect(),
            created_at: format_system_time(session.created_at),
        }
    }
}
