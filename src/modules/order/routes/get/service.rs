use super::types::{request, response};
use crate::{modules::order::validation, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    validation::exists(ctx.orders.as_ref(), &payload.id)
        .await
        .map(response::Success::Order)
}
