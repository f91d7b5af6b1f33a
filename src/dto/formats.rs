use serde::Serialize;
use utoipa::ToSchema;

use crate::catalog::{GameFormat, GameRules, PeriodName};

/// Public projection of one catalog format.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FormatSummary {
    pub id: String,
    pub age_group: String,
    pub format: String,
    pub period_count: u8,
    pub period_duration_minutes: u16,
    pub period_name: PeriodName,
}

impl From<&GameFormat> for FormatSummary {
    fn from(value: &GameFormat) -> Self {
        Self {
            id: value.id.to_string(),
            age_group: value.age_group.to_string(),
            format: value.format.to_string(),
            period_count: value.period_count,
            period_duration_minutes: value.period_duration_minutes,
            period_name: value.period_name,
        }
    }
}

/// Rules reference sheet returned for a format.
#[derive(Debug, Serialize, ToSchema)]
pub struct RulesSummary {
    pub format: String,
    pub play_time: String,
    pub field: String,
    pub goals: String,
    pub ball: String,
    pub ranking: String,
    pub substitutions: String,
    pub offside: String,
    pub penalty: String,
    pub goal_kick: String,
    pub free_kick: String,
    pub corner_kick: String,
    pub throw_in: String,
    pub cards: String,
    pub fairplay: String,
    pub shoes: String,
}

impl From<&GameRules> for RulesSummary {
    fn from(value: &GameRules) -> Self {
        Self {
            format: value.format.to_string(),
            play_time: value.play_time.to_string(),
            field: value.field.to_string(),
            goals: value.goals.to_string(),
            ball: value.ball.to_string(),
            ranking: value.ranking.to_string(),
            substitutions: value.substitutions.to_string(),
            offside: value.offside.to_string(),
            penalty: value.penalty.to_string(),
            goal_kick: value.goal_kick.to_string(),
            free_kick: value.free_kick.to_string(),
            corner_kick: value.corner_kick.to_string(),
            throw_in: value.throw_in.to_string(),
            cards: value.cards.to_string(),
            fairplay: value.fairplay.to_string(),
            shoes: value.shoes.to_string(),
        }
    }
}
