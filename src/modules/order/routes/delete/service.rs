use super::types::{request, response};
use crate::{modules::order::validation, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    ctx.orders
        .delete_by_id(&payload.id, &validation::status_allows_delete)
        .await?
        .ok_or_else(|| validation::not_found(&payload.id))
        .map(|_| response::Success::OrderDeleted)
}
