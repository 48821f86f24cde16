use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use log::warn;

use crate::version::numeric_value;

/// Storage seam for the persisted base-name -> last-seen-token map.
/// Failures never propagate: loads fall back to an empty map, saves are
/// logged and dropped.
pub trait VersionStore {
    fn load(&self) -> HashMap<String, String>;
    fn save(&self, versions: &HashMap<String, String>);
}

/// One JSON object in one file, the browser-storage analog.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl VersionStore for JsonFileStore {
    fn load(&self) -> HashMap<String, String> {
        match fs::read_to_string(&self.path) {
            Ok(data) => serde_json::from_str(&data).unwrap_or_else(|e| {
                warn!("Failed to parse saved versions in {:?}: {e}", self.path);
                HashMap::new()
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => HashMap::new(),
            Err(e) => {
                warn!("Failed to load saved versions from {:?}: {e}", self.path);
                HashMap::new()
            }
        }
    }

    fn save(&self, versions: &HashMap<String, String>) {
        let data = match serde_json::to_string(versions) {
            Ok(data) => data,
            Err(e) => {
                warn!("Failed to serialize versions: {e}");
                return;
            }
        };
        if let Err(e) = fs::write(&self.path, data) {
            warn!("Failed to save versions to {:?}: {e}", self.path);
        }
    }
}

/// In-memory store for tests and ephemeral runs.
#[derive(Default)]
pub struct MemoryStore {
    versions: RefCell<HashMap<String, String>>,
}

impl VersionStore for MemoryStore {
    fn load(&self) -> HashMap<String, String> {
        self.versions.borrow().clone()
    }

    fn save(&self, versions: &HashMap<String, String>) {
        *self.versions.borrow_mut() = versions.clone();
    }
}

/// Last-seen bookkeeping over an injected store.
pub struct VersionRepository<S: VersionStore> {
    store: S,
}

impl<S: VersionStore> VersionRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// True when this token has not been acknowledged for the base name yet.
    pub fn is_new_version(&self, base_name: &str, token: &str) -> bool {
        let saved = self.store.load();
        match saved.get(base_name) {
            None => true, // first time seeing this document
            Some(seen) => numeric_value(token) > numeric_value(seen),
        }
    }

    /// Records the token as the last seen version for the base name.
    pub fn mark_seen(&self, base_name: &str, token: &str) {
        let mut versions = self.store.load();
        versions.insert(base_name.to_string(), token.to_string());
        self.store.save(&versions);
    }
}
