//! Common routes with no dependencies: liveness and the static location list.

use crate::models::Locations;
use axum::{routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct RootBody {
    message: &'static str,
}

async fn root() -> Json<RootBody> {
    Json(RootBody {
        message: "Flavor Factory backend is running",
    })
}

async fn locations() -> Json<Locations> {
    Json(Locations::all())
}

/// Common routes (no state): GET /, GET /locations.
pub fn common_routes() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/locations", get(locations))
}
