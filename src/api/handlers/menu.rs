//! Public menu catalog routes.

use crate::{
    api::{AppState, handlers::path_id, responses::MenuListResponse},
    core::menu,
    entities::menu_item,
    errors::Result,
};
use axum::{
    Json,
    extract::{Path, Query, State, rejection::PathRejection},
};
use serde::Deserialize;

/// Query string of `GET /menus`
#[derive(Debug, Default, Deserialize)]
pub struct MenuQuery {
    /// Exact meal type to filter on; empty or absent means all
    pub meal_type: Option<String>,
}

/// `GET /menus?meal_type=`
pub async fn list_menus(
    State(state): State<AppState>,
    Query(query): Query<MenuQuery>,
) -> Result<Json<MenuListResponse>> {
    let items = menu::list_menu_items(&state.database, query.meal_type.as_deref()).await?;
    Ok(Json(MenuListResponse { items }))
}

/// `GET /menus/:id`
pub async fn get_menu(
    State(state): State<AppState>,
    path: std::result::Result<Path<i64>, PathRejection>,
) -> Result<Json<menu_item::Model>> {
    let id = path_id(path)?;
    let item = menu::get_menu_item(&state.database, id).await?;
    Ok(Json(item))
}
