use axum::Router;

use crate::state::SharedState;

pub mod docs;
pub mod formats;
pub mod health;
pub mod push;
pub mod scoreboard;
pub mod sse;

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    let api_router = health::router()
        .merge(formats::router())
        .merge(scoreboard::router())
        .merge(push::router())
        .merge(sse::router());

    let docs_router = docs::router(state.clone());

    api_router.merge(docs_router).with_state(state)
}
