use super::types::{request, response};
use crate::{modules::dish::validation, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    validation::exists(ctx.dishes.as_ref(), &payload.id)
        .await
        .map(response::Success::Dish)
}
