pub mod response {
    use crate::modules::order::repository::Order;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Orders(Vec<Order>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Orders(orders) => {
                    (StatusCode::OK, Json(json!({ "data": orders }))).into_response()
                }
            }
        }
    }

    pub type Response = Success;
}
