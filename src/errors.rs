use thiserror::Error;

/// Unified error type for every layer of the service.
#[derive(Debug, Error)]
pub enum Error {
    /// Startup configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// Request payload failed validation
    #[error("{message}")]
    Validation {
        /// Message returned to the caller
        message: String,
    },

    /// No menu item row matches the id
    #[error("Menu item not found: {id}")]
    MenuItemNotFound {
        /// The id that was looked up
        id: i64,
    },

    /// Request path does not name a resource
    #[error("not found")]
    NotFound,

    /// Missing or incorrect admin secret
    #[error("unauthorized")]
    Unauthorized,

    /// Failure while receiving an uploaded file
    #[error("Upload error: {message}")]
    Upload {
        /// What went wrong
        message: String,
    },

    /// Any `SeaORM` failure
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Filesystem failure (uploads, seed files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Shorthand for building a [`Error::Validation`].
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
