//! Order entity - One delivered meal, used only for popularity analytics.
//!
//! `subscriber_id` and `menu_item_id` are plain columns without foreign keys,
//! so orders may outlive the menu items they point at.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Order database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    /// Unique identifier for the order
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Subscriber who received the meal
    pub subscriber_id: i64,
    /// Menu item that was ordered
    pub menu_item_id: i64,
    /// Delivery date
    pub date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
