pub mod response {
    use crate::modules::dish::repository::Dish;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Dishes(Vec<Dish>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Dishes(dishes) => {
                    (StatusCode::OK, Json(json!({ "data": dishes }))).into_response()
                }
            }
        }
    }

    pub type Response = Success;
}
