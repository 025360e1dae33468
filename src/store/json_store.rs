//! Key/value state persisted as a single JSON document

use crate::error::{CompassError, Result};
use crate::store::keys::StoreKey;
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

pub struct JsonStore {
    path: PathBuf,
    values: Map<String, Value>,
}

impl JsonStore {
    /// Open the store at `path`. A missing or corrupt file starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            match serde_json::from_str::<Map<String, Value>>(&content) {
                Ok(values) => values,
                Err(e) => {
                    warn!("Ignoring unreadable state file {}: {}", path.display(), e);
                    Map::new()
                }
            }
        } else {
            Map::new()
        };

        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored value for `key`, or `fallback` when absent or of the wrong shape
    pub fn read<T: DeserializeOwned>(&self, key: StoreKey, fallback: T) -> T {
        match self.values.get(key.as_str()) {
            Some(Value::Null) | None => fallback,
            Some(value) => match serde_json::from_value(value.clone()) {
                Ok(parsed) => parsed,
                Err(e) => {
                    debug!("Falling back to default for {}: {}", key, e);
                    fallback
                }
            },
        }
    }

    pub fn write<T: Serialize>(&mut self, key: StoreKey, value: &T) -> Result<()> {
        let value = serde_json::to_value(value)?;
        self.write_many(vec![(key, value)])
    }

    /// Set several keys and flush once
    pub fn write_many(&mut self, entries: Vec<(StoreKey, Value)>) -> Result<()> {
        for (key, value) in entries {
            self.values.insert(key.as_str().to_string(), value);
        }
        self.flush()
    }

    /// Drop the given keys and flush once
    pub fn remove_keys(&mut self, keys: &[StoreKey]) -> Result<()> {
        let mut changed = false;
        for key in keys {
            changed |= self.values.remove(key.as_str()).is_some();
        }
        if changed {
            self.flush()?;
        }
        Ok(())
    }

    pub fn contains(&self, key: StoreKey) -> bool {
        self.values.contains_key(key.as_str())
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, content).map_err(|e| {
            CompassError::Storage(format!("Failed to write {}: {}", self.path.display(), e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_round_trip_and_fallback() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state").join("store.json");

        let mut store = JsonStore::open(&path).unwrap();
        assert_eq!(store.read(StoreKey::UserSkills, String::from("none")), "none");

        store.write(StoreKey::UserSkills, &"python, sql").unwrap();
        store.write(StoreKey::Saved, &vec!["a1", "b2"]).unwrap();

        let reopened = JsonStore::open(&path).unwrap();
        assert_eq!(reopened.read(StoreKey::UserSkills, String::new()), "python, sql");
        assert_eq!(reopened.read::<Vec<String>>(StoreKey::Saved, Vec::new()), vec!["a1", "b2"]);

        // Wrong shape falls back
        assert_eq!(reopened.read::<Vec<String>>(StoreKey::UserSkills, Vec::new()), Vec::<String>::new());
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = JsonStore::open(&path).unwrap();
        assert!(!store.contains(StoreKey::Saved));
    }

    #[test]
    fn test_remove_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");
        let mut store = JsonStore::open(&path).unwrap();
        store
            .write_many(vec![
                (StoreKey::CvFileName, Value::from("cv.pdf")),
                (StoreKey::Rejected, Value::from(vec!["x"])),
                (StoreKey::UserSkills, Value::from("rust")),
            ])
            .unwrap();

        store
            .remove_keys(&[StoreKey::CvFileName, StoreKey::Rejected, StoreKey::Saved])
            .unwrap();
        assert!(!store.contains(StoreKey::CvFileName));
        assert!(!store.contains(StoreKey::Rejected));

        let reopened = JsonStore::open(&path).unwrap();
        assert!(!reopened.contains(StoreKey::Rejected));
        assert_eq!(reopened.read(StoreKey::UserSkills, String::new()), "rust");
    }
}
