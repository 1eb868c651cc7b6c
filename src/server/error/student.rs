use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum StudentError {
    /// No student exists with the requested id.
    ///
    /// Results in a 404 Not Found response.
    #[error("Student with id {0} not found")]
    NotFound(i32),

    /// No student exists with the requested email.
    ///
    /// Results in a 404 Not Found response.
    #[error("Student with email '{0}' not found")]
    EmailNotFound(String),

    /// The email is already used by another student.
    ///
    /// Raised either by the pre-insert existence check or by the storage unique
    /// index when two writers race. Results in a 400 Bad Request response.
    #[error("A student with email '{0}' already exists")]
    DuplicateEmail(String),
}

/// Converts student errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `DuplicateEmail`
/// - 404 Not Found - For `NotFound` and `EmailNotFound`
impl IntoResponse for StudentError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotFound(_) | Self::EmailNotFound(_) => StatusCode::NOT_FOUND,
            Self::DuplicateEmail(_) => StatusCode::BAD_REQUEST,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
