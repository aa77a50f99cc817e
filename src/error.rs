use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// No matching record in the store.
    #[error("no matching record")]
    NotFound,
    /// Malformed or non-current year segment. Rankings are only
    /// addressable for the current calendar year; anything else is
    /// indistinguishable from a missing route to the caller.
    #[error("year {0:?} is not open for judging")]
    InvalidYear(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("template error: {0}")]
    Render(#[from] askama::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound | AppError::InvalidYear(_) => {
                (StatusCode::NOT_FOUND, "Not Found")
            }
            AppError::Database(ref err) => {
                // Method and URI come from the enclosing TraceLayer span.
                tracing::error!("Database error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
            AppError::Render(ref err) => {
                tracing::error!("Template error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        };

        // The client only ever sees the generic status text.
        (status, message).into_response()
    }
}
