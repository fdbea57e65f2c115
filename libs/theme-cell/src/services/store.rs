// libs/theme-cell/src/services/store.rs
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use shared_dom::{PreferenceStore, PreferenceStoreError};

/// Preference flags persisted as a small JSON map on disk; the page's
/// local-storage analogue. A missing file just means nothing stored yet.
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_map(&self) -> Result<HashMap<String, String>, PreferenceStoreError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => {
                serde_json::from_str(&raw).map_err(|e| PreferenceStoreError::Read(e.to_string()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(PreferenceStoreError::Read(e.to_string())),
        }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>, PreferenceStoreError> {
        Ok(self.read_map()?.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), PreferenceStoreError> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.to_string());
        let raw = serde_json::to_string_pretty(&map)
            .map_err(|e| PreferenceStoreError::Write(e.to_string()))?;
        fs::write(&self.path, raw).map_err(|e| PreferenceStoreError::Write(e.to_string()))
    }
}
