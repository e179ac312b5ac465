use super::error::Error;
use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::Deserialize;

/// The `{ "data": { ... } }` wrapper every request body arrives in. A missing `data`
/// member is treated as an empty object.
#[derive(Deserialize, Debug)]
pub struct Envelope<T> {
    #[serde(default)]
    pub data: T,
}

/// JSON body extractor that turns parse failures into the API's own error shape instead of
/// axum's plain-text rejections.
pub struct Body<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for Body<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(body)) => Ok(Body(body)),
            Err(rejection) => {
                tracing::warn!("Error occurred while parsing body: {}", rejection.body_text());
                Err(Error::InvalidBody(format!(
                    "Invalid request body: {}",
                    rejection.body_text()
                )))
            }
        }
    }
}
