//! Outbound push-messaging boundary: service-account credentials, bearer
//! token derivation, and the FCM v1 send call.

pub mod client;
pub mod credentials;
pub mod error;

pub use client::FcmRelay;
pub use credentials::ServiceAccount;
pub use error::{RelayError, RelayResult};
