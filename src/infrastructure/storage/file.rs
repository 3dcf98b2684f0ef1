use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use log::{debug, info, warn};

use crate::domain::errors::DeskError;
use crate::domain::traits::KeyValueStore;

/// Key-value store persisted as a single JSON object on disk
pub struct JsonFileStore {
    file_path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl JsonFileStore {
    /// Open the store at `path`. A missing, unreadable or malformed file
    /// opens as an empty store.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let file_path = path.as_ref().to_path_buf();
        let entries = Self::load(&file_path);
        Self {
            file_path,
            entries: Mutex::new(entries),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load(path: &Path) -> BTreeMap<String, String> {
        if !path.exists() {
            debug!("No store file at {}, starting empty", path.display());
            return BTreeMap::new();
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Failed to read store file '{}': {}", path.display(), e);
                return BTreeMap::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(entries) => {
                info!("Loaded store from {}", path.display());
                entries
            }
            Err(e) => {
                warn!("Malformed store file '{}', starting empty: {}", path.display(), e);
                BTreeMap::new()
            }
        }
    }

    // Write to a temp file then rename over the store file
    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<(), DeskError> {
        let content = serde_json::to_string_pretty(entries)?;
        let temp_path = self.file_path.with_extension("tmp");
        fs::write(&temp_path, content)?;
        fs::rename(&temp_path, &self.file_path)?;
        debug!("Saved store to {}", self.file_path.display());
        Ok(())
    }

    fn update<F>(&self, mutate: F) -> Result<(), DeskError>
    where
        F: FnOnce(&mut BTreeMap<String, String>),
    {
        let mut guard = self
            .entries
            .lock()
            .map_err(|_| DeskError::storage("file store lock poisoned"))?;

        let mut next = guard.clone();
        mutate(&mut next);
        self.persist(&next)?;
        *guard = next;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, DeskError> {
        let guard = self
            .entries
            .lock()
            .map_err(|_| DeskError::storage("file store lock poisoned"))?;
        Ok(guard.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DeskError> {
        self.update(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> Result<(), DeskError> {
        self.update(|entries| {
            entries.remove(key);
        })
    }
}
