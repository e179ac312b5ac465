pub mod request {
    use crate::{modules::dish::validation::DishData, utils::extract::Envelope};

    pub type Body = Envelope<DishData>;

    pub struct Payload {
        pub body: Body,
    }
}

pub mod response {
    use crate::{modules::dish::repository::Dish, utils::error::Error};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        DishCreated(Dish),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::DishCreated(dish) => {
                    (StatusCode::CREATED, Json(json!({ "data": dish }))).into_response()
                }
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
