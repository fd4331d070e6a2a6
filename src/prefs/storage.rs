use std::{fs, path::PathBuf};

use anyhow::{Context, Result};

/// Minimal capability surface over durable key-value storage. Production
/// keeps one JSON file per key in the app data directory; tests swap in
/// [`MemoryStorage`].
pub trait Storage: Send + Sync {
    /// Raw value stored under `key`, or `None` when nothing usable is there.
    fn load(&self, key: &str) -> Option<String>;

    fn save(&self, key: &str, value: &str) -> Result<()>;
}

pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn load(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        fs::write(&path, value).with_context(|| format!("failed to write {}", path.display()))
    }
}

/// In-memory backend for tests. `failing()` makes every save error so the
/// absorb-on-failure path can be exercised.
#[cfg(test)]
pub struct MemoryStorage {
    entries: std::sync::RwLock<std::collections::HashMap<String, String>>,
    fail_writes: bool,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            entries: std::sync::RwLock::new(std::collections::HashMap::new()),
            fail_writes: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::new()
        }
    }

    pub fn put(&self, key: &str, value: &str) {
        self.entries
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.entries.read().unwrap().get(key).cloned()
    }
}

#[cfg(test)]
impl Storage for MemoryStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.value(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            anyhow::bail!("storage unavailable");
        }
        self.put(key, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_storage_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf());

        assert!(storage.load("favorites").is_none());

        storage.save("favorites", r#"{"toast":true}"#).unwrap();
        assert_eq!(storage.load("favorites").as_deref(), Some(r#"{"toast":true}"#));
    }

    #[test]
    fn keys_map_to_separate_files() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf());

        storage.save("favorites", "{}").unwrap();
        storage.save("ratings", "{}").unwrap();

        assert!(dir.path().join("favorites.json").exists());
        assert!(dir.path().join("ratings.json").exists());
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("missing"));

        assert!(storage.save("favorites", "{}").is_err());
        assert!(storage.load("favorites").is_none());
    }
}
