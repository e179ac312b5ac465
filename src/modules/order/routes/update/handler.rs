use super::{service::service, types::request};
use crate::{
    types::Context,
    utils::{error::Error, extract::Body},
};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    Path(id): Path<String>,
    body: Result<Body<request::Body>, Error>,
) -> impl IntoResponse {
    let body = body.map(|Body(body)| body);
    service(ctx, request::Payload { id, body }).await
}
