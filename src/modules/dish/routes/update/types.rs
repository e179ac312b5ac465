pub mod request {
    use crate::{
        modules::dish::validation::DishData,
        utils::{error::Error, extract::Envelope},
    };

    pub type Body = Envelope<DishData>;

    pub struct Payload {
        pub id: String,
        /// Parse failures wait until the routed record is known to exist.
        pub body: Result<Body, Error>,
    }
}

pub mod response {
    use crate::{modules::dish::repository::Dish, utils::error::Error};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        DishUpdated(Dish),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::DishUpdated(dish) => {
                    (StatusCode::OK, Json(json!({ "data": dish }))).into_response()
                }
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
