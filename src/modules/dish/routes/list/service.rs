use super::types::response;
use crate::types::Context;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>) -> response::Response {
    response::Success::Dishes(ctx.dishes.find_many().await)
}
