//! Mapping of [`Error`] onto HTTP responses.
//!
//! Client errors carry their message; server errors are logged in full and
//! answered with a generic message.

use crate::{api::responses::ErrorResponse, errors::Error};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

impl Error {
    /// HTTP status code this error is reported with.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::MenuItemNotFound { .. } | Self::NotFound => StatusCode::NOT_FOUND,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Config { .. } | Self::Upload { .. } | Self::Database(_) | Self::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            Self::Validation { message } => message.clone(),
            Self::MenuItemNotFound { .. } | Self::NotFound => "not found".to_string(),
            Self::Unauthorized => "unauthorized".to_string(),
            Self::Upload { .. } | Self::Io(_) => {
                error!("Upload failed: {self}");
                "save failed".to_string()
            }
            Self::Config { .. } | Self::Database(_) => {
                error!("Request failed: {self}");
                "internal server error".to_string()
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
