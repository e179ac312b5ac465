use super::types::{request, response};
use crate::{modules::dish::validation, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let dish = validation::exists(ctx.dishes.as_ref(), &payload.id).await?;
    let body = payload.body?;
    let update = validation::validate(&body.data)?;
    validation::id_matches(body.data.id.as_deref(), &dish)?;

    ctx.dishes
        .update_by_id(&dish.id, update)
        .await
        .ok_or_else(|| validation::not_found(&dish.id))
        .map(response::Success::DishUpdated)
}
