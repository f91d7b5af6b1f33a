pub mod match_session;
pub mod score;
mod sse;
pub mod timer;

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::relay::FcmRelay;

pub use self::match_session::MatchSession;
pub use self::sse::SseHub;

pub type SharedState = Arc<AppState>;

/// Capacity of the scoreboard event broadcast channel.
const SSE_CAPACITY: usize = 16;

/// Device registration for the remote alarm channel.
#[derive(Debug, Clone)]
pub struct PushRegistration {
    /// Opaque device token issued by the push-messaging backend.
    pub token: String,
}

/// Central application state owning the active match, the scoreboard event
/// hub, the push registration, and the relay client handle.
pub struct AppState {
    relay: Option<Arc<FcmRelay>>,
    current_match: RwLock<Option<MatchSession>>,
    push_registration: RwLock<Option<PushRegistration>>,
    sse: SseHub,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    ///
    /// The relay handle is built once at startup; `None` disables remote
    /// notification delivery for the whole process lifetime.
    pub fn new(relay: Option<FcmRelay>) -> SharedState {
        Arc::new(Self {
            relay: relay.map(Arc::new),
            current_match: RwLock::new(None),
            push_registration: RwLock::new(None),
            sse: SseHub::new(SSE_CAPACITY),
        })
    }

    /// Handle to the push relay client, if one was configured.
    pub fn relay(&self) -> Option<Arc<FcmRelay>> {
        self.relay.clone()
    }

    /// Whether remote notification delivery is possible at all.
    pub fn relay_configured(&self) -> bool {
        self.relay.is_some()
    }

    /// Slot holding the currently active match, if any.
    pub fn current_match(&self) -> &RwLock<Option<MatchSession>> {
        &self.current_match
    }

    /// Slot holding the registered push token, if any.
    pub fn push_registration(&self) -> &RwLock<Option<PushRegistration>> {
        &self.push_registration
    }

    /// Broadcast hub used for the scoreboard SSE stream.
    pub fn scoreboard_sse(&self) -> &SseHub {
        &self.sse
    }
}
