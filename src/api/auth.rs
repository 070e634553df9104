//! Admin capability check and the gate built on it.
//!
//! A request has admin access when its `x-admin-pw` header is non-empty and
//! equal, byte for byte, to the configured `ADMIN_PASSWORD`. The same check
//! guards the `/admin` routes and unlocks the extra analytics fields.

use crate::{api::AppState, config::settings::Settings, errors::Error};
use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::warn;

/// Header carrying the admin secret
pub const ADMIN_HEADER: &str = "x-admin-pw";

/// Returns whether `headers` carry the configured admin secret.
///
/// Always false when no secret is configured.
#[must_use]
pub fn has_admin_access(headers: &HeaderMap, settings: &Settings) -> bool {
    let Some(expected) = settings.admin_password.as_deref() else {
        return false;
    };

    headers
        .get(ADMIN_HEADER)
        .map(|value| value.as_bytes())
        .is_some_and(|provided| !provided.is_empty() && provided == expected.as_bytes())
}

/// Middleware that rejects the request with 401 unless it has admin access.
pub async fn require_admin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if !has_admin_access(request.headers(), &state.settings) {
        warn!(
            method = %request.method(),
            path = %request.uri().path(),
            "Rejected admin request"
        );
        return Error::Unauthorized.into_response();
    }

    next.run(request).await
}
