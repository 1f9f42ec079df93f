//! HTTP server for tripmatch.

pub mod logging;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use crate::state::AppState;

/// Build the application router around `state`.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::page::router())
        .merge(routes::plans::router())
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
