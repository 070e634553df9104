//! Popularity-based routes.

use crate::{
    api::{
        AppState,
        auth::has_admin_access,
        responses::{AnalyticsResponse, MenuListResponse},
    },
    core::analytics,
    errors::Result,
};
use axum::{Json, extract::State, http::HeaderMap};

/// `GET /analytics`
///
/// Public callers get subscriber counts and the top items; callers passing the
/// admin check also get the most recent subscribers.
pub async fn analytics(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<AnalyticsResponse>> {
    let elevated = has_admin_access(&headers, &state.settings);
    let summary = analytics::summarize(&state.database, elevated).await?;
    Ok(Json(summary.into()))
}

/// `GET /recommendations`
pub async fn recommendations(State(state): State<AppState>) -> Result<Json<MenuListResponse>> {
    let items = analytics::recommendations(&state.database).await?;
    Ok(Json(MenuListResponse { items }))
}
