use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // Client input errors
    #[error("No file uploaded.")]
    FileMissing,

    #[error("multipart request is malformed: {0}")]
    Multipart(#[from] MultipartError),

    #[error("uploaded file is not valid UTF-8 text: {0}")]
    NotUtf8(#[from] std::string::FromUtf8Error),

    // External collaborators
    #[error("{service} is unavailable: {source}")]
    ServiceUnavailable {
        service: &'static str,
        #[source]
        source: anyhow::Error,
    },

    #[error("record store error: {0}")]
    Sqlx(#[from] sqlx::Error),

    // Everything else
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Client errors carry their message; server errors get a generic
        // body and the full chain goes to the log only.
        let (status, message) = match &self {
            AppError::FileMissing | AppError::Multipart(_) | AppError::NotUtf8(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::ServiceUnavailable { .. } | AppError::Sqlx(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "a backing service is unavailable".to_string(),
            ),
            AppError::Unexpected(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "an internal error occurred; see logs for details".to_string(),
            ),
        };

        if status.is_server_error() {
            tracing::error!("request failed: {self:?}");
        } else {
            tracing::warn!("rejected request: {self}");
        }

        (status, message).into_response()
    }
}
