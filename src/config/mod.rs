/// Database connection and table creation
pub mod database;

/// Starter menu loading from TOML
pub mod seed;

/// Environment-driven process settings
pub mod settings;
