use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;
use validator::Validate;

use crate::dto::format_timestamp;

/// Payload registering the session's device token for remote alarms.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct RegisterPushRequest {
    /// Opaque device token issued by the push-messaging backend.
    #[validate(length(min = 1, message = "token must not be empty"))]
    pub token: String,
}

/// Inbound notification request handled by the relay endpoint.
///
/// Field names follow the wire contract of the hosted relay, hence the
/// camelCase `scheduledAt`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct PushSendRequest {
    /// Target device token. Requests without one are rejected.
    #[serde(default)]
    pub token: Option<String>,
    /// Notification title; the alarm default applies when omitted.
    #[serde(default)]
    pub title: Option<String>,
    /// Notification body; the alarm default applies when omitted.
    #[serde(default)]
    pub body: Option<String>,
    /// Optional ISO-8601 delivery time for a delayed send.
    #[serde(default, rename = "scheduledAt", with = "time::serde::rfc3339::option")]
    #[schema(value_type = Option<String>)]
    pub scheduled_at: Option<OffsetDateTime>,
}

/// Response returned by the relay endpoint on success.
#[derive(Debug, Serialize, ToSchema)]
pub struct PushSendResponse {
    pub success: bool,
    /// Upstream message id, present for immediate sends.
    #[serde(rename = "messageId", skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    /// Present when the send was deferred to the requested delivery time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled: Option<bool>,
    /// Echo of the requested delivery time.
    #[serde(rename = "scheduledAt", skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<String>,
    /// Set when delivery past the hold ceiling cannot be guaranteed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl PushSendResponse {
    /// Response for an immediate send accepted upstream.
    pub fn sent(message_id: String) -> Self {
        Self {
            success: true,
            message_id: Some(message_id),
            scheduled: None,
            scheduled_at: None,
            warning: None,
        }
    }

    /// Response for a send deferred to `scheduled_at`.
    pub fn scheduled(scheduled_at: OffsetDateTime) -> Self {
        Self {
            success: true,
            message_id: None,
            scheduled: Some(true),
            scheduled_at: Some(format_timestamp(scheduled_at)),
            warning: None,
        }
    }

    /// Attach a delivery warning to a scheduled response.
    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warning = Some(warning.into());
        self
    }
}
