//! Image upload storage.
//!
//! Uploaded files are written into a flat directory under a generated name:
//! the current UNIX time in nanoseconds followed by the original file's
//! extension. The directory is served read-only under [`UPLOAD_URL_PREFIX`].

use crate::errors::{Error, Result};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{info, instrument};

/// Public URL prefix the upload directory is served under
pub const UPLOAD_URL_PREFIX: &str = "/uploads";

/// Where an upload ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredUpload {
    /// Generated file name inside the upload directory
    pub file_name: String,
    /// Public relative URL of the file
    pub url: String,
}

/// Returns the extension of `original_name` including its leading dot, or `""`.
///
/// Only the last path component is considered and the extension is taken from
/// its last dot, so `"photo.final.PNG"` yields `".PNG"` and `".hidden"` yields
/// `".hidden"`.
#[must_use]
pub fn file_extension(original_name: &str) -> &str {
    let base = original_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(original_name);
    base.rfind('.').map_or("", |idx| &base[idx..])
}

/// Builds the stored file name from a nanosecond timestamp and the original name.
#[must_use]
pub fn generated_file_name(nanos: u128, original_name: &str) -> String {
    format!("{nanos}{}", file_extension(original_name))
}

/// Creates the upload directory if it is missing.
///
/// # Errors
/// Returns an I/O error if the directory cannot be created.
pub async fn ensure_upload_dir(dir: &Path) -> Result<()> {
    tokio::fs::create_dir_all(dir).await.map_err(Into::into)
}

/// Writes `bytes` into `dir` under a generated name and returns its public URL.
///
/// # Errors
/// Returns an error if the system clock is before the UNIX epoch or the write fails.
#[instrument(skip(dir, bytes), fields(size = bytes.len()))]
pub async fn store_upload(dir: &Path, original_name: &str, bytes: &[u8]) -> Result<StoredUpload> {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| Error::Upload {
            message: format!("System clock error: {e}"),
        })?
        .as_nanos();

    let file_name = generated_file_name(nanos, original_name);
    tokio::fs::write(dir.join(&file_name), bytes).await?;
    info!("Stored upload as {file_name}");

    Ok(StoredUpload {
        url: format!("{UPLOAD_URL_PREFIX}/{file_name}"),
        file_name,
    })
}
