//! Router assembly.

mod api;
mod common;

pub use api::api_routes;
pub use common::common_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Full application: every route, open CORS and request tracing.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes())
        .merge(api_routes(state))
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
}
