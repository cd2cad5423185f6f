pub mod convert;
pub mod routes;

use axum::{
    extract::OriginalUri,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use crate::{errors::ApiError, SharedState};

pub fn get_router() -> Router<SharedState> {
    Router::new()
        .route("/convert", post(convert::convert))
        .route("/convert/base64", post(convert::convert_base64))
        .route("/routes", get(routes::routes))
        .route("/health", get(health))
        .fallback(not_found)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// API clients get a JSON error, not the HTML not-found page.
async fn not_found(OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
