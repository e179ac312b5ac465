use super::types::{request, response};
use crate::{modules::dish::validation, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let dish = validation::validate(&payload.body.data)?;

    Ok(response::Success::DishCreated(ctx.dishes.create(dish).await))
}
