//! Subscriber entity - A customer signed up to a meal plan.
//!
//! A subscription covers thirty days from `start_date`. Rows are created by
//! the public subscribe endpoint and never mutated through the API.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Subscriber database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "subscribers")]
pub struct Model {
    /// Unique identifier for the subscriber
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Subscriber's name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Plan name chosen at sign-up
    pub plan: String,
    /// First day of the subscription
    pub start_date: DateTimeUtc,
    /// Last day of the subscription (`start_date` + 30 days)
    pub end_date: DateTimeUtc,
    /// Whether the subscription is active
    pub active: bool,
    /// When the subscriber signed up
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
