//! Store-backed routes.

use crate::handlers::{create_inquiry, database_diagnostic, entity_schemas, list_menu};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/menu", get(list_menu))
        .route("/inquiry", post(create_inquiry))
        .route("/schema", get(entity_schemas))
        .route("/test", get(database_diagnostic))
        .with_state(state)
}
