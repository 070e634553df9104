//! Menu item entity - A dish offered on the storefront menu.
//!
//! Menu items are partitioned by `meal_type` into the four weekday/weekend
//! breakfast/lunch categories. Neither the price nor the meal type is
//! constrained at the storage level.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Menu item database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "menu_items")]
pub struct Model {
    /// Unique identifier for the menu item
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name (e.g., "Jollof Rice & Chicken")
    pub name: String,
    /// Short description shown under the name
    pub description: String,
    /// Price per serving
    pub price: f64,
    /// One of `weekday-breakfast`, `weekday-lunch`, `weekend-breakfast`, `weekend-lunch`
    pub meal_type: String,
    /// Public relative URL of the item's image, empty when none was uploaded
    pub image_url: String,
    /// When the item was created
    pub created_at: DateTimeUtc,
}

/// Menu items have no declared relationships; orders reference them loosely
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
