pub mod request {
    pub struct Payload {
        pub id: String,
    }
}

pub mod response {
    use crate::{modules::order::repository::Order, utils::error::Error};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Order(Order),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Order(order) => {
                    (StatusCode::OK, Json(json!({ "data": order }))).into_response()
                }
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
