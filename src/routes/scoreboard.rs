use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{post, put},
};
use validator::Validate;

use crate::{
    dto::scoreboard::{CreateMatchRequest, MatchSnapshot, RenameTeamRequest, ScoreAdjustRequest},
    error::AppError,
    services::match_service,
    state::SharedState,
};

/// Routes handling the active match: lifecycle, clock, and scores.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route(
            "/match",
            post(create_match).get(match_snapshot).delete(clear_match),
        )
        .route("/match/clock/start", post(start_clock))
        .route("/match/clock/pause", post(pause_clock))
        .route("/match/clock/next-period", post(next_period))
        .route("/match/reset", post(reset_match))
        .route("/match/score", post(adjust_score))
        .route("/match/teams", put(rename_team))
}

#[utoipa::path(
    post,
    path = "/match",
    tag = "scoreboard",
    request_body = CreateMatchRequest,
    responses(
        (status = 200, description = "Match opened", body = MatchSnapshot),
        (status = 404, description = "Unknown format"),
        (status = 409, description = "A match is already active")
    )
)]
/// Open the scoreboard for the chosen format.
pub async fn create_match(
    State(state): State<SharedState>,
    Json(payload): Json<CreateMatchRequest>,
) -> Result<Json<MatchSnapshot>, AppError> {
    payload.validate()?;
    let snapshot = match_service::create_match(&state, payload).await?;
    Ok(Json(snapshot))
}

#[utoipa::path(
    get,
    path = "/match",
    tag = "scoreboard",
    responses(
        (status = 200, description = "Current scoreboard snapshot", body = MatchSnapshot),
        (status = 404, description = "No active match")
    )
)]
/// Snapshot of the active match.
pub async fn match_snapshot(
    State(state): State<SharedState>,
) -> Result<Json<MatchSnapshot>, AppError> {
    let snapshot = match_service::snapshot(&state).await?;
    Ok(Json(snapshot))
}

#[utoipa::path(
    delete,
    path = "/match",
    tag = "scoreboard",
    responses((status = 204, description = "Match cleared"))
)]
/// Drop the active match and return to format selection.
pub async fn clear_match(State(state): State<SharedState>) -> StatusCode {
    match_service::clear_match(&state).await;
    StatusCode::NO_CONTENT
}

#[utoipa::path(
    post,
    path = "/match/clock/start",
    tag = "scoreboard",
    responses(
        (status = 200, description = "Clock started", body = MatchSnapshot),
        (status = 409, description = "Clock cannot start (already running or no time left)")
    )
)]
/// Start (or resume) the period clock.
pub async fn start_clock(State(state): State<SharedState>) -> Result<Json<MatchSnapshot>, AppError> {
    let snapshot = match_service::start_clock(&state).await?;
    Ok(Json(snapshot))
}

#[utoipa::path(
    post,
    path = "/match/clock/pause",
    tag = "scoreboard",
    responses(
        (status = 200, description = "Clock paused", body = MatchSnapshot),
        (status = 409, description = "Clock is not running")
    )
)]
/// Freeze the period clock.
pub async fn pause_clock(State(state): State<SharedState>) -> Result<Json<MatchSnapshot>, AppError> {
    let snapshot = match_service::pause_clock(&state).await?;
    Ok(Json(snapshot))
}

#[utoipa::path(
    post,
    path = "/match/clock/next-period",
    tag = "scoreboard",
    responses((status = 200, description = "Advanced (or already at the last period)", body = MatchSnapshot))
)]
/// Advance to the next period; a no-op at the last one.
pub async fn next_period(State(state): State<SharedState>) -> Result<Json<MatchSnapshot>, AppError> {
    let snapshot = match_service::advance_period(&state).await?;
    Ok(Json(snapshot))
}

#[utoipa::path(
    post,
    path = "/match/reset",
    tag = "scoreboard",
    responses((status = 200, description = "Match reset to period 1", body = MatchSnapshot))
)]
/// Return to period 1 at full duration and clear all scores.
pub async fn reset_match(State(state): State<SharedState>) -> Result<Json<MatchSnapshot>, AppError> {
    let snapshot = match_service::reset_match(&state).await?;
    Ok(Json(snapshot))
}

#[utoipa::path(
    post,
    path = "/match/score",
    tag = "scoreboard",
    request_body = ScoreAdjustRequest,
    responses(
        (status = 200, description = "Score adjusted", body = MatchSnapshot),
        (status = 400, description = "Delta out of range")
    )
)]
/// Adjust the current period's score by one goal.
pub async fn adjust_score(
    State(state): State<SharedState>,
    Json(payload): Json<ScoreAdjustRequest>,
) -> Result<Json<MatchSnapshot>, AppError> {
    payload.validate()?;
    let snapshot = match_service::adjust_score(&state, payload).await?;
    Ok(Json(snapshot))
}

#[utoipa::path(
    put,
    path = "/match/teams",
    tag = "scoreboard",
    request_body = RenameTeamRequest,
    responses(
        (status = 200, description = "Team renamed", body = MatchSnapshot),
        (status = 400, description = "Name out of range")
    )
)]
/// Rename one side of the scoreboard.
pub async fn rename_team(
    State(state): State<SharedState>,
    Json(payload): Json<RenameTeamRequest>,
) -> Result<Json<MatchSnapshot>, AppError> {
    payload.validate()?;
    let snapshot = match_service::rename_team(&state, payload).await?;
    Ok(Json(snapshot))
}

#[cfg(test)]
mod tests {
    use axum::{
        Router,
        body::{Body, to_bytes},
        http::{Request, StatusCode, header::CONTENT_TYPE},
    };
    use tower::ServiceExt;

    use crate::{routes, state::AppState};

    fn app() -> Router<()> {
        routes::router(AppState::new(None))
    }

    async fn send(
        app: &Router<()>,
        method: &str,
        uri: &str,
        body: Option<&str>,
    ) -> (StatusCode, serde_json::Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let payload = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, payload)
    }

    #[tokio::test]
    async fn match_lifecycle_over_http() {
        let app = app();

        let (status, created) =
            send(&app, "POST", "/match", Some(r#"{"format_id":"u14-17"}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(created["period_label"], "1st Quarter");
        assert_eq!(created["remaining_seconds"], 1200);

        let (status, _) = send(&app, "POST", "/match", Some(r#"{"format_id":"u7"}"#)).await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, scored) = send(
            &app,
            "POST",
            "/match/score",
            Some(r#"{"team":"home","delta":1}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(scored["home"]["score"], 1);
        assert_eq!(scored["periods"][0]["home"], 1);

        let (status, _) = send(&app, "DELETE", "/match", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(&app, "GET", "/match", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn score_delta_outside_unit_range_is_rejected() {
        let app = app();
        send(&app, "POST", "/match", Some(r#"{"format_id":"u7"}"#)).await;

        let (status, payload) = send(
            &app,
            "POST",
            "/match/score",
            Some(r#"{"team":"away","delta":2}"#),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(payload["error"].as_str().unwrap().contains("validation"));
    }

    #[tokio::test]
    async fn decrement_never_goes_below_zero() {
        let app = app();
        send(&app, "POST", "/match", Some(r#"{"format_id":"u7"}"#)).await;

        let (_, snapshot) = send(
            &app,
            "POST",
            "/match/score",
            Some(r#"{"team":"home","delta":-1}"#),
        )
        .await;
        assert_eq!(snapshot["home"]["score"], 0);
        assert_eq!(snapshot["periods"][0]["home"], 0);
    }

    #[tokio::test]
    async fn clock_start_and_pause_over_http() {
        let app = app();
        send(&app, "POST", "/match", Some(r#"{"format_id":"u7"}"#)).await;

        let (status, running) = send(&app, "POST", "/match/clock/start", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(running["phase"], "running");

        let (status, _) = send(&app, "POST", "/match/clock/start", None).await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, paused) = send(&app, "POST", "/match/clock/pause", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(paused["phase"], "paused");
    }

    #[tokio::test]
    async fn next_period_is_a_no_op_at_the_last() {
        let app = app();
        send(&app, "POST", "/match", Some(r#"{"format_id":"u19-21"}"#)).await;

        let (_, second) = send(&app, "POST", "/match/clock/next-period", None).await;
        assert_eq!(second["period"], 2);
        assert_eq!(second["can_advance"], false);

        let (status, still_second) = send(&app, "POST", "/match/clock/next-period", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(still_second["period"], 2);
    }

    #[tokio::test]
    async fn rename_is_uppercased_and_bounded() {
        let app = app();
        send(&app, "POST", "/match", Some(r#"{"format_id":"u7"}"#)).await;

        let (status, renamed) = send(
            &app,
            "PUT",
            "/match/teams",
            Some(r#"{"team":"away","name":"Falcons"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(renamed["away"]["name"], "FALCONS");

        let (status, _) = send(
            &app,
            "PUT",
            "/match/teams",
            Some(r#"{"team":"away","name":"name that is way too long"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
