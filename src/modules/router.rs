use crate::{types::Context, utils::error::Error};
use axum::{
    extract::{Json, OriginalUri},
    http::{Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use serde_json::json;
use std::sync::Arc;

use super::{dish, order};

async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({ "message": "Welcome to the restaurant API" })),
    )
}

/// Fallback for verbs a known path does not serve.
pub async fn method_not_allowed(method: Method, OriginalUri(uri): OriginalUri) -> Error {
    Error::MethodNotAllowed(format!("{} not allowed for {}", method, uri.path()))
}

async fn path_not_found(OriginalUri(uri): OriginalUri) -> Error {
    Error::PathNotFound(format!("Path not found: {}", uri.path()))
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/", get(health_check).fallback(method_not_allowed))
        .nest("/dishes", dish::get_router())
        .nest("/orders", order::get_router())
        .fallback(path_not_found)
}
