//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables of the storefront.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod menu_item;
pub mod order;
pub mod subscriber;

// Re-export specific types to avoid conflicts
pub use menu_item::{Column as MenuItemColumn, Entity as MenuItem, Model as MenuItemModel};
pub use order::{Column as OrderColumn, Entity as Order, Model as OrderModel};
pub use subscriber::{Column as SubscriberColumn, Entity as Subscriber, Model as SubscriberModel};
