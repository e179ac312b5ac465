mod create {
    pub mod handler;
    mod service;
    mod types;
}
mod get {
    pub mod handler;
    mod service;
    mod types;
}
mod list {
    pub mod handler;
    mod service;
    mod types;
}
mod update {
    pub mod handler;
    mod service;
    mod types;
}

use crate::{modules::router::method_not_allowed, types::Context};
use axum::routing::{get, Router};
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route(
            "/",
            get(list::handler::handler)
                .post(create::handler::handler)
                .fallback(method_not_allowed),
        )
        .route(
            "/:dish_id",
            get(get::handler::handler)
                .put(update::handler::handler)
                .fallback(method_not_allowed),
        )
}
