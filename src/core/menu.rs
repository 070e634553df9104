//! Menu business logic - Handles all menu item operations.
//!
//! This module provides listing, lookup, creation, update and deletion of menu
//! items. Neither `price` nor `meal_type` is validated; the catalog accepts any
//! value the admin sends.

use crate::{
    entities::{MenuItem, menu_item},
    errors::{Error, Result},
};
use sea_orm::{PaginatorTrait, QueryOrder, QuerySelect, Set, prelude::*, sea_query::Expr};
use serde::Deserialize;
use tracing::{instrument, warn};

/// The four meal categories the storefront partitions its menu by.
pub const MEAL_TYPES: [&str; 4] = [
    "weekday-breakfast",
    "weekday-lunch",
    "weekend-breakfast",
    "weekend-lunch",
];

/// Whether `meal_type` is one of [`MEAL_TYPES`].
#[must_use]
pub fn is_known_meal_type(meal_type: &str) -> bool {
    MEAL_TYPES.contains(&meal_type)
}

fn warn_on_unknown_meal_type(meal_type: &str) {
    if !is_known_meal_type(meal_type) {
        warn!(meal_type, "Storing menu item with unknown meal type");
    }
}

/// Fields an admin supplies when adding or editing a menu item.
///
/// `meal_type` is expected to be one of [`MEAL_TYPES`], but other values are
/// stored as sent.
#[derive(Debug, Clone, Deserialize)]
pub struct MenuItemInput {
    /// Display name
    pub name: String,
    /// Short description, empty when omitted
    #[serde(default)]
    pub description: String,
    /// Price per serving
    pub price: f64,
    /// Meal category
    pub meal_type: String,
    /// Image URL, empty when omitted
    #[serde(default)]
    pub image_url: String,
}

/// Lists menu items, newest first, optionally restricted to one meal type.
///
/// An empty `meal_type` is treated as no filter.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn list_menu_items(
    db: &DatabaseConnection,
    meal_type: Option<&str>,
) -> Result<Vec<menu_item::Model>> {
    let mut query = MenuItem::find();
    if let Some(meal_type) = meal_type.filter(|m| !m.is_empty()) {
        query = query.filter(menu_item::Column::MealType.eq(meal_type));
    }

    query
        .order_by_desc(menu_item::Column::CreatedAt)
        .order_by_desc(menu_item::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Fetches a single menu item by id.
///
/// # Errors
/// Returns [`Error::MenuItemNotFound`] if no row matches, or a database error.
pub async fn get_menu_item(db: &DatabaseConnection, id: i64) -> Result<menu_item::Model> {
    MenuItem::find_by_id(id)
        .one(db)
        .await?
        .ok_or(Error::MenuItemNotFound { id })
}

/// Inserts a new menu item stamped with the current time.
///
/// # Errors
/// Returns an error if the database insert fails.
#[instrument(skip(db))]
pub async fn create_menu_item(
    db: &DatabaseConnection,
    input: MenuItemInput,
) -> Result<menu_item::Model> {
    warn_on_unknown_meal_type(&input.meal_type);
    let item = menu_item::ActiveModel {
        name: Set(input.name),
        description: Set(input.description),
        price: Set(input.price),
        meal_type: Set(input.meal_type),
        image_url: Set(input.image_url),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };
    item.insert(db).await.map_err(Into::into)
}

/// Overwrites an existing menu item in a single conditional `UPDATE`.
///
/// Name, description, price and meal type are always replaced. The image URL
/// is only replaced when `input.image_url` is non-empty.
///
/// # Errors
/// Returns [`Error::MenuItemNotFound`] if no row has this id, or a database error.
#[instrument(skip(db))]
pub async fn update_menu_item(
    db: &DatabaseConnection,
    id: i64,
    input: MenuItemInput,
) -> Result<menu_item::Model> {
    warn_on_unknown_meal_type(&input.meal_type);
    let mut update = MenuItem::update_many()
        .col_expr(menu_item::Column::Name, Expr::value(input.name))
        .col_expr(menu_item::Column::Description, Expr::value(input.description))
        .col_expr(menu_item::Column::Price, Expr::value(input.price))
        .col_expr(menu_item::Column::MealType, Expr::value(input.meal_type))
        .filter(menu_item::Column::Id.eq(id));

    if !input.image_url.is_empty() {
        update = update.col_expr(menu_item::Column::ImageUrl, Expr::value(input.image_url));
    }

    let result = update.exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::MenuItemNotFound { id });
    }

    get_menu_item(db, id).await
}

/// Deletes a menu item by id, returning how many rows were removed.
///
/// Deleting an id that does not exist is not an error.
///
/// # Errors
/// Returns an error if the database delete fails.
#[instrument(skip(db))]
pub async fn delete_menu_item(db: &DatabaseConnection, id: i64) -> Result<u64> {
    let result = MenuItem::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected)
}

/// Counts all menu items.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn count_menu_items(db: &DatabaseConnection) -> Result<u64> {
    MenuItem::find().count(db).await.map_err(Into::into)
}

/// Returns up to `limit` menu items ordered by price, cheapest first.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn cheapest_menu_items(
    db: &DatabaseConnection,
    limit: u64,
) -> Result<Vec<menu_item::Model>> {
    MenuItem::find()
        .order_by_asc(menu_item::Column::Price)
        .order_by_asc(menu_item::Column::Id)
        .limit(limit)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Fetches the menu items with the given ids, in the order of `ids`.
///
/// Ids with no matching row are skipped.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_menu_items_by_ids(
    db: &DatabaseConnection,
    ids: &[i64],
) -> Result<Vec<menu_item::Model>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let found = MenuItem::find()
        .filter(menu_item::Column::Id.is_in(ids.iter().copied()))
        .all(db)
        .await?;

    Ok(ids
        .iter()
        .filter_map(|id| found.iter().find(|item| item.id == *id).cloned())
        .collect())
}
