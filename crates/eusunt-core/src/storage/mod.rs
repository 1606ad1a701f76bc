mod config;
pub mod database;
pub mod migrations;
mod store;

pub use config::{Config, ExportConfig, UiConfig};
pub use database::Database;
pub use store::{keys, DataResetOptions, DataResetSummary, Store};

use std::path::PathBuf;

use crate::error::StorageError;

/// Returns `~/.config/eusunt[-dev]/` based on EUSUNT_ENV.
///
/// Set EUSUNT_ENV=dev to use a separate development data directory.
///
/// # Errors
/// Returns an error if the config directory cannot be created.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("EUSUNT_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("eusunt-dev")
    } else {
        base_dir.join("eusunt")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
