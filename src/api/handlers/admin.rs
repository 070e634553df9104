//! Admin routes for menu curation and subscriber listing.
//!
//! Every handler here sits behind [`crate::api::auth::require_admin`].

use crate::{
    api::{
        AppState,
        handlers::{json_body, path_id},
        responses::OkResponse,
    },
    core::{
        menu::{self, MenuItemInput},
        subscription,
    },
    entities::{menu_item, subscriber},
    errors::Result,
};
use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use tracing::{info, instrument};

/// `POST /admin/menu`
#[instrument(skip_all)]
pub async fn add_menu_item(
    State(state): State<AppState>,
    payload: std::result::Result<Json<MenuItemInput>, JsonRejection>,
) -> Result<(StatusCode, Json<menu_item::Model>)> {
    let input = json_body(payload)?;
    let item = menu::create_menu_item(&state.database, input).await?;
    info!(id = item.id, name = %item.name, "Menu item added");
    Ok((StatusCode::CREATED, Json(item)))
}

/// `PUT /admin/menu/:id`
///
/// An empty `image_url` keeps the current image. A missing item is reported
/// as 404 even when the body is also invalid.
#[instrument(skip_all)]
pub async fn edit_menu_item(
    State(state): State<AppState>,
    path: std::result::Result<Path<i64>, PathRejection>,
    payload: std::result::Result<Json<MenuItemInput>, JsonRejection>,
) -> Result<Json<menu_item::Model>> {
    let id = path_id(path)?;
    let input = match json_body(payload) {
        Ok(input) => input,
        Err(err) => {
            menu::get_menu_item(&state.database, id).await?;
            return Err(err);
        }
    };
    let item = menu::update_menu_item(&state.database, id, input).await?;
    info!(id, "Menu item updated");
    Ok(Json(item))
}

/// `DELETE /admin/menu/:id`
///
/// Succeeds whether or not the item existed.
#[instrument(skip_all)]
pub async fn delete_menu_item(
    State(state): State<AppState>,
    path: std::result::Result<Path<i64>, PathRejection>,
) -> Result<Json<OkResponse>> {
    let id = path_id(path)?;
    let removed = menu::delete_menu_item(&state.database, id).await?;
    info!(id, removed, "Menu item deleted");
    Ok(Json(OkResponse { ok: true }))
}

/// `GET /admin/subscribers`
pub async fn list_subscribers(
    State(state): State<AppState>,
) -> Result<Json<Vec<subscriber::Model>>> {
    let subscribers = subscription::list_subscribers(&state.database).await?;
    Ok(Json(subscribers))
}
