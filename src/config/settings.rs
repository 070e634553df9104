//! Process settings loaded from environment variables.
//!
//! `main` calls [`Settings::from_env`] once after loading `.env`; the result is
//! stored in the application state and handed to every handler. Changing a
//! value (the admin password included) therefore needs a restart.

use crate::config::database::DEFAULT_DATABASE_URL;
use crate::errors::{Error, Result};
use std::path::PathBuf;
use tracing::info;

/// Default listen port when `PORT` is not set
pub const DEFAULT_PORT: u16 = 8080;

/// Default directory for uploaded images
pub const DEFAULT_UPLOAD_DIR: &str = "uploads";

/// Runtime settings for the HTTP service.
#[derive(Debug, Clone)]
pub struct Settings {
    /// TCP port to listen on (`PORT`)
    pub port: u16,
    /// Shared admin secret (`ADMIN_PASSWORD`); `None` disables the admin surface
    pub admin_password: Option<String>,
    /// `SeaORM` connection URL (`DATABASE_URL`)
    pub database_url: String,
    /// Directory uploaded images are written to and served from (`UPLOAD_DIR`)
    pub upload_dir: PathBuf,
    /// Optional TOML file overriding the built-in seed menu (`MENU_SEED_PATH`)
    pub menu_seed_path: Option<PathBuf>,
}

impl Settings {
    /// Reads all settings from the process environment, falling back to defaults.
    ///
    /// # Errors
    /// Returns [`Error::Config`] if `PORT` is set but is not a valid port number.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup.
    ///
    /// Empty values are treated the same as missing ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let port = match get("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| Error::Config {
                message: format!("Invalid PORT value {raw:?}: {e}"),
            })?,
            None => {
                info!("PORT not set, using default: {DEFAULT_PORT}");
                DEFAULT_PORT
            }
        };

        let admin_password = lookup("ADMIN_PASSWORD").filter(|value| !value.is_empty());
        if admin_password.is_none() {
            info!("ADMIN_PASSWORD not set, admin endpoints will reject every request");
        }

        Ok(Self {
            port,
            admin_password,
            database_url: get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            upload_dir: get("UPLOAD_DIR")
                .map_or_else(|| PathBuf::from(DEFAULT_UPLOAD_DIR), PathBuf::from),
            menu_seed_path: get("MENU_SEED_PATH").map(PathBuf::from),
        })
    }
}
