use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::post,
};
use validator::Validate;

use crate::{
    dto::push::{PushSendRequest, PushSendResponse, RegisterPushRequest},
    error::AppError,
    services::notify_service,
    state::SharedState,
};

/// Routes for device registration and the notification relay.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route(
            "/push/registration",
            post(register_device).delete(clear_device),
        )
        .route("/notifications/send", post(send_notification))
}

#[utoipa::path(
    post,
    path = "/push/registration",
    tag = "push",
    request_body = RegisterPushRequest,
    responses(
        (status = 204, description = "Device registered"),
        (status = 400, description = "Empty token")
    )
)]
/// Register the session's device token for remote alarms.
pub async fn register_device(
    State(state): State<SharedState>,
    Json(payload): Json<RegisterPushRequest>,
) -> Result<StatusCode, AppError> {
    payload.validate()?;
    notify_service::register_device(&state, payload).await;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/push/registration",
    tag = "push",
    responses((status = 204, description = "Registration cleared"))
)]
/// Forget the registered device token.
pub async fn clear_device(State(state): State<SharedState>) -> StatusCode {
    notify_service::clear_device(&state).await;
    StatusCode::NO_CONTENT
}

#[utoipa::path(
    post,
    path = "/notifications/send",
    tag = "push",
    request_body = PushSendRequest,
    responses(
        (status = 200, description = "Sent, or scheduled for later delivery", body = PushSendResponse),
        (status = 400, description = "Missing device token"),
        (status = 500, description = "Relay unconfigured or upstream failure")
    )
)]
/// Relay a notification to the push-messaging backend, optionally delayed.
pub async fn send_notification(
    State(state): State<SharedState>,
    Json(payload): Json<PushSendRequest>,
) -> Result<Json<PushSendResponse>, AppError> {
    let response = notify_service::send_notification(&state, payload).await?;
    Ok(Json(response))
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

    async fn post_json(app: &Router<()>, uri: &str, json: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap();
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
    async fn missing_token_yields_a_structured_bad_request() {
        let app = app();
        let (status, payload) =
            post_json(&app, "/notifications/send", r#"{"title":"X","body":"Y"}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(
            payload["error"]
                .as_str()
                .unwrap()
                .contains("missing device token")
        );
    }

    #[tokio::test]
    async fn unconfigured_relay_yields_a_structured_server_error() {
        let app = app();
        let (status, payload) = post_json(
            &app,
            "/notifications/send",
            r#"{"token":"t1","title":"X","body":"Y"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(
            payload["error"]
                .as_str()
                .unwrap()
                .contains("push relay not configured")
        );
    }

    #[tokio::test]
    async fn registration_accepts_and_clears_a_token() {
        let app = app();
        let (status, _) =
            post_json(&app, "/push/registration", r#"{"token":"device-token-1"}"#).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let request = Request::builder()
            .method("DELETE")
            .uri("/push/registration")
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn empty_registration_token_is_rejected() {
        let app = app();
        let (status, _) = post_json(&app, "/push/registration", r#"{"token":""}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
