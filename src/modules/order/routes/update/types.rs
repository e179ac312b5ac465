pub mod request {
    use crate::{
        modules::order::validation::OrderData,
        utils::{error::Error, extract::Envelope},
    };

    pub type Body = Envelope<OrderData>;

    pub struct Payload {
        pub id: String,
        /// Parse failures wait until the routed record is known to exist.
        pub body: Result<Body, Error>,
    }
}

pub mod response {
    use crate::{modules::order::repository::Order, utils::error::Error};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        OrderUpdated(Order),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderUpdated(order) => {
                    (StatusCode::OK, Json(json!({ "data": order }))).into_response()
                }
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
