//! Starter menu seeding.
//!
//! Runs at every startup after table creation. Items are only inserted when
//! the menu table is empty, so repeated startups never duplicate them.

use crate::{
    config::seed::SeedMenu,
    core::menu::{self, MenuItemInput},
    errors::Result,
};
use sea_orm::DatabaseConnection;
use tracing::{info, instrument};

/// Inserts the seed menu if no menu items exist, returning how many rows were added.
///
/// # Errors
/// Returns an error if counting or inserting fails.
#[instrument(skip(db, seed))]
pub async fn seed_menu_if_empty(db: &DatabaseConnection, seed: &SeedMenu) -> Result<usize> {
    let existing = menu::count_menu_items(db).await?;
    if existing > 0 {
        info!("Menu already has {existing} items, skipping seed");
        return Ok(0);
    }

    for item in &seed.items {
        menu::create_menu_item(
            db,
            MenuItemInput {
                name: item.name.clone(),
                description: item.description.clone(),
                price: item.price,
                meal_type: item.meal_type.clone(),
                image_url: item.image_url.clone(),
            },
        )
        .await?;
    }

    info!("Seeded {} menu items", seed.items.len());
    Ok(seed.items.len())
}
