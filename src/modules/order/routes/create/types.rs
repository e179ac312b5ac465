pub mod request {
    use crate::{modules::order::validation::OrderData, utils::extract::Envelope};

    pub type Body = Envelope<OrderData>;

    pub struct Payload {
        pub body: Body,
    }
}

pub mod response {
    use crate::{modules::order::repository::Order, utils::error::Error};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        OrderCreated(Order),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderCreated(order) => {
                    (StatusCode::CREATED, Json(json!({ "data": order }))).into_response()
                }
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
