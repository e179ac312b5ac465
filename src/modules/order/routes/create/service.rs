use super::types::{request, response};
use crate::{
    modules::order::{repository::OrderPayload, validation},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let order = validation::validate(&payload.body.data)?;

    let order = ctx
        .orders
        .create(OrderPayload {
            deliver_to: order.deliver_to,
            mobile_number: order.mobile_number,
            status: order.status.unwrap_or_default(),
            dishes: order.dishes,
        })
        .await;

    Ok(response::Success::OrderCreated(order))
}
