use serde::Serialize;
use utoipa::ToSchema;

/// Simple health response returned by the `/healthcheck` route.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status ("ok" or "degraded").
    pub status: String,
    /// Whether the push relay credential is configured.
    pub push_relay: bool,
}

impl HealthResponse {
    /// Create a health response indicating full operation.
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            push_relay: true,
        }
    }

    /// Create a health response indicating remote delivery is disabled.
    pub fn degraded() -> Self {
        Self {
            status: "degraded".to_string(),
            push_relay: false,
        }
    }
}
