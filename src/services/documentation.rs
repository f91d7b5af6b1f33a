use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for Pitchside Back.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::formats::list_formats,
        crate::routes::formats::format_rules,
        crate::routes::scoreboard::create_match,
        crate::routes::scoreboard::match_snapshot,
        crate::routes::scoreboard::clear_match,
        crate::routes::scoreboard::start_clock,
        crate::routes::scoreboard::pause_clock,
        crate::routes::scoreboard::next_period,
        crate::routes::scoreboard::reset_match,
        crate::routes::scoreboard::adjust_score,
        crate::routes::scoreboard::rename_team,
        crate::routes::push::register_device,
        crate::routes::push::clear_device,
        crate::routes::push::send_notification,
        crate::routes::sse::scoreboard_stream,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::catalog::PeriodName,
            crate::state::score::TeamSide,
            crate::dto::formats::FormatSummary,
            crate::dto::formats::RulesSummary,
            crate::dto::scoreboard::CreateMatchRequest,
            crate::dto::scoreboard::ScoreAdjustRequest,
            crate::dto::scoreboard::RenameTeamRequest,
            crate::dto::scoreboard::MatchSnapshot,
            crate::dto::scoreboard::TeamSnapshot,
            crate::dto::scoreboard::PeriodScoreSummary,
            crate::dto::scoreboard::ClockPhase,
            crate::dto::push::RegisterPushRequest,
            crate::dto::push::PushSendRequest,
            crate::dto::push::PushSendResponse,
            crate::dto::events::ClockTickEvent,
            crate::dto::events::AlarmToneEvent,
            crate::dto::events::VibrationEvent,
            crate::dto::events::LocalNotificationEvent,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "formats", description = "Game format catalog and rules reference"),
        (name = "scoreboard", description = "Match, clock, and score operations"),
        (name = "push", description = "Device registration and the notification relay"),
        (name = "sse", description = "Server-sent scoreboard event stream"),
    )
)]
pub struct ApiDoc;
