use tracing::warn;

use crate::{dto::health::HealthResponse, state::SharedState};

/// Respond with the health payload, logging when remote delivery is off.
pub fn health_status(state: &SharedState) -> HealthResponse {
    if state.relay_configured() {
        HealthResponse::ok()
    } else {
        warn!("push relay unconfigured; remote alarms disabled");
        HealthResponse::degraded()
    }
}
