//! Error types shared by the push relay client.

use reqwest::StatusCode;
use thiserror::Error;

/// Convenient result alias returning [`RelayError`] failures.
pub type RelayResult<T> = Result<T, RelayError>;

/// Failures that can occur while relaying a notification upstream.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Building the HTTP client failed (invalid TLS setup, etc).
    #[error("failed to build relay HTTP client")]
    ClientBuilder {
        #[source]
        source: reqwest::Error,
    },
    /// Signing the service-account assertion failed (bad private key, etc).
    #[error("failed to sign service account assertion")]
    Assertion {
        #[source]
        source: jsonwebtoken::errors::Error,
    },
    /// The token exchange request could not be sent.
    #[error("failed to send token exchange request")]
    TokenRequest {
        #[source]
        source: reqwest::Error,
    },
    /// The OAuth2 endpoint rejected the assertion.
    #[error("token exchange rejected with status {status}: {detail}")]
    TokenExchange { status: StatusCode, detail: String },
    /// The push send request could not be sent.
    #[error("failed to send push message request")]
    SendRequest {
        #[source]
        source: reqwest::Error,
    },
    /// The push-messaging backend rejected the message.
    #[error("push send rejected with status {status}: {detail}")]
    SendRejected { status: StatusCode, detail: String },
    /// A response payload could not be decoded.
    #[error("failed to decode {context} response")]
    Decode {
        context: &'static str,
        #[source]
        source: reqwest::Error,
    },
}
