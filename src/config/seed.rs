//! Seed menu loading from TOML
//!
//! The starter menu inserted into an empty database is described as a TOML
//! document. The default document is compiled into the binary from
//! `seed/menu.toml`; `MENU_SEED_PATH` can point at a replacement file with the
//! same shape.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

const BUILTIN_MENU: &str = include_str!("../../seed/menu.toml");

/// Structure of a seed menu file
#[derive(Debug, Deserialize)]
pub struct SeedMenu {
    /// Menu items to insert, in order
    pub items: Vec<SeedItem>,
}

/// A single starter menu item
#[derive(Debug, Deserialize, Clone)]
pub struct SeedItem {
    /// Display name
    pub name: String,
    /// Short description
    #[serde(default)]
    pub description: String,
    /// Price per serving
    pub price: f64,
    /// Meal category, e.g. `weekday-lunch`
    pub meal_type: String,
    /// Optional image URL
    #[serde(default)]
    pub image_url: String,
}

/// Parses a seed menu from TOML text
///
/// # Errors
/// Returns an error if the TOML syntax is invalid or required fields are missing.
pub fn parse_seed_menu(contents: &str) -> Result<SeedMenu> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse seed menu: {e}"),
    })
}

/// Loads a seed menu from a TOML file
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn load_seed_menu<P: AsRef<Path>>(path: P) -> Result<SeedMenu> {
    let path_ref = path.as_ref();
    tracing::debug!("Loading seed menu from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read seed menu {}: {e}", path_ref.display()),
    })?;
    parse_seed_menu(&contents)
}

/// Returns the starter menu compiled into the binary
///
/// # Errors
/// Only fails if the embedded document is malformed.
pub fn builtin_seed_menu() -> Result<SeedMenu> {
    parse_seed_menu(BUILTIN_MENU)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_builtin_menu_has_five_items() {
        let menu = builtin_seed_menu().unwrap();
        assert_eq!(menu.items.len(), 5);
        assert_eq!(menu.items[0].name, "Akamu & Akara");
        assert_eq!(menu.items[0].price, 600.0);
        assert_eq!(menu.items[4].meal_type, "weekend-lunch");
        assert!(menu.items.iter().all(|item| item.image_url.is_empty()));
    }

    #[test]
    fn test_parse_seed_menu_defaults_optional_fields() {
        let toml_str = r#"
            [[items]]
            name = "Pancakes"
            price = 450.0
            meal_type = "weekend-breakfast"
        "#;

        let menu = parse_seed_menu(toml_str).unwrap();
        assert_eq!(menu.items.len(), 1);
        assert_eq!(menu.items[0].description, "");
        assert_eq!(menu.items[0].image_url, "");
    }

    #[test]
    fn test_parse_seed_menu_rejects_missing_price() {
        let toml_str = r#"
            [[items]]
            name = "Pancakes"
            meal_type = "weekend-breakfast"
        "#;

        let result = parse_seed_menu(toml_str);
        assert!(matches!(result, Err(Error::Config { message: _ })));
    }

    #[test]
    fn test_load_seed_menu_missing_file() {
        let result = load_seed_menu("definitely/not/here.toml");
        assert!(matches!(result, Err(Error::Config { message: _ })));
    }
}
