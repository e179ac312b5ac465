use axum::{
    extract::Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Every way a request can be turned away. Each variant carries the message sent back to
/// the client.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    ImmutableState(String),
    #[error("{message}")]
    IdMismatch { status: StatusCode, message: String },
    #[error("{0}")]
    InvalidBody(String),
    #[error("{0}")]
    MethodNotAllowed(String),
    #[error("{0}")]
    PathNotFound(String),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::ImmutableState(_) | Self::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound(_) | Self::PathNotFound(_) => StatusCode::NOT_FOUND,
            Self::IdMismatch { status, .. } => *status,
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!("Request rejected with {}: {}", status.as_u16(), self);

        (
            status,
            Json(json!({
                "status": status.as_u16(),
                "message": self.to_string(),
            })),
        )
            .into_response()
    }
}
