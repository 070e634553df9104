//! Request handlers, one function per route.

/// Admin menu curation and subscriber listing
pub mod admin;
/// Analytics summary and recommendations
pub mod analytics;
/// Liveness probe
pub mod health;
/// Public menu catalog
pub mod menu;
/// Public sign-up
pub mod subscribe;
/// Admin image upload
pub mod upload;

use crate::errors::{Error, Result};
use axum::{
    Json,
    extract::{
        Path,
        rejection::{JsonRejection, PathRejection},
    },
};

/// Unwraps a numeric `:id` path segment; anything else names no resource.
pub(crate) fn path_id(path: std::result::Result<Path<i64>, PathRejection>) -> Result<i64> {
    path.map(|Path(id)| id).map_err(|_| Error::NotFound)
}

/// Unwraps a JSON body, turning malformed payloads into validation errors.
pub(crate) fn json_body<T>(payload: std::result::Result<Json<T>, JsonRejection>) -> Result<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| Error::validation(rejection.body_text()))
}
