//! Errors surfaced by the todo service.
//!
//! Every variant renders as a JSON body of the form `{"message": "..."}`
//! with the status code given by [`TodoError::status`].

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum TodoError {
    /// A required field or query parameter is missing.
    #[error("{0}")]
    Validation(String),

    #[error("Todo not found")]
    NotFound,

    /// The request body could not be read as JSON.
    #[error("Invalid JSON body: {0}")]
    InvalidBody(String),

    /// Collation data for message sorting could not be loaded.
    #[error("Collation unavailable: {0}")]
    Collation(String),
}

impl TodoError {
    pub fn status(&self) -> StatusCode {
        match self {
            TodoError::Validation(_) | TodoError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            TodoError::NotFound => StatusCode::NOT_FOUND,
            TodoError::Collation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for TodoError {
    fn from(rejection: JsonRejection) -> Self {
        TodoError::InvalidBody(rejection.body_text())
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
