use super::types::{request, response};
use crate::{
    modules::order::{repository::OrderPayload, validation},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let order = validation::exists(ctx.orders.as_ref(), &payload.id).await?;
    let body = payload.body?;
    let update = validation::validate(&body.data)?;
    validation::id_matches(body.data.id.as_deref(), &order)?;
    let status = validation::required_status(update.status)?;

    ctx.orders
        .update_by_id(
            &order.id,
            OrderPayload {
                deliver_to: update.deliver_to,
                mobile_number: update.mobile_number,
                status,
                dishes: update.dishes,
            },
            &validation::not_delivered,
        )
        .await?
        .ok_or_else(|| validation::not_found(&order.id))
        .map(response::Success::OrderUpdated)
}
