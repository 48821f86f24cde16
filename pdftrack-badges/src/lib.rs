pub mod annotate;
pub mod config;
pub mod model;
pub mod repository;
pub mod version;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::repository::JsonFileStore;

/// Opens the persisted version store, creating an empty record file on first run.
pub fn open_store(path: &Path) -> Result<JsonFileStore> {
    if !path.exists() {
        info!("Creating version store at {path:?}");
        fs::write(path, "{}")
            .with_context(|| format!("Failed to create version store at {path:?}"))?;
        info!("Version store created successfully.");
    } else {
        info!("Using existing version store at {path:?}");
    }
    Ok(JsonFileStore::new(path.to_path_buf()))
}
