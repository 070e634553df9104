//! Shared test utilities for mealbox.
//!
//! This module provides common helper functions for setting up test databases,
//! creating test rows with sensible defaults, and building an application
//! state suitable for driving the router in-process.

use crate::{
    api::AppState,
    config::settings::Settings,
    core::{menu, order, subscription, upload},
    entities,
    errors::Result,
};
use sea_orm::DatabaseConnection;
use std::path::PathBuf;
use tempfile::TempDir;

/// Admin secret used by every test state
pub const TEST_ADMIN_PASSWORD: &str = "test-admin-pw";

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = crate::config::database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a menu item with an empty description and image.
pub async fn create_test_menu_item(
    db: &DatabaseConnection,
    name: &str,
    price: f64,
    meal_type: &str,
) -> Result<entities::menu_item::Model> {
    menu::create_menu_item(
        db,
        menu::MenuItemInput {
            name: name.to_string(),
            description: String::new(),
            price,
            meal_type: meal_type.to_string(),
            image_url: String::new(),
        },
    )
    .await
}

/// Creates a subscriber on the `"weekly"` plan.
pub async fn create_test_subscriber(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::subscriber::Model> {
    subscription::create_subscriber(
        db,
        subscription::SubscribeInput {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            plan: "weekly".to_string(),
        },
    )
    .await
}

/// Records `count` orders of `menu_item_id` for subscriber 1.
pub async fn create_test_orders(
    db: &DatabaseConnection,
    menu_item_id: i64,
    count: usize,
) -> Result<()> {
    for _ in 0..count {
        order::record_order(db, 1, menu_item_id).await?;
    }
    Ok(())
}

/// Builds settings with the test admin secret and the given upload directory.
pub fn test_settings(upload_dir: impl Into<PathBuf>) -> Settings {
    Settings {
        port: 0,
        admin_password: Some(TEST_ADMIN_PASSWORD.to_string()),
        database_url: "sqlite::memory:".to_string(),
        upload_dir: upload_dir.into(),
        menu_seed_path: None,
    }
}

/// Sets up an in-memory database and an application state whose upload
/// directory lives in a temp dir.
///
/// The directory is removed when the returned [`TempDir`] is dropped, so
/// callers must keep it alive for as long as the state is in use.
pub async fn setup_test_state() -> Result<(AppState, TempDir)> {
    let db = setup_test_db().await?;
    let temp = tempfile::tempdir()?;
    let settings = test_settings(temp.path().join("uploads"));
    upload::ensure_upload_dir(&settings.upload_dir).await?;
    Ok((AppState::new(db, settings), temp))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_state_upload_dir_removed_on_drop() -> Result<()> {
        let (state, temp) = setup_test_state().await?;
        let upload_dir = state.settings.upload_dir.clone();
        assert!(upload_dir.is_dir());
        assert!(upload_dir.starts_with(temp.path()));

        drop(temp);
        assert!(!upload_dir.exists());

        Ok(())
    }
}
