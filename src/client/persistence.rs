//! Key-value persistence for the signed-in user, the equivalent of the
//! browser's local storage entry.

use super::error::{GalleryError, GalleryResult};
use crate::gallery::User;
use anyhow::{Context, Result};
use std::{
    collections::HashMap,
    fs::File,
    io::{Read, Write},
    path::PathBuf,
    sync::Mutex,
};
use tracing::{debug, warn};

pub const USER_KEY: &str = "user";

pub trait KeyValueStore: Send + Sync {
    /// Returns Ok(None) if the key is not set.
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: String) -> Result<()>;

    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

#[derive(Default)]
pub struct InMemoryKeyValueStore {
    entries: Mutex<HashMap<String, String>>,
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: String) -> Result<()> {
        self.entries.lock().unwrap().insert(key.to_owned(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}

/// Keeps all entries in a single pretty-printed JSON file, rewritten on
/// every change.
pub struct FileKeyValueStore {
    file_path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl FileKeyValueStore {
    fn load_entries_from_file(file_path: &PathBuf) -> Result<HashMap<String, String>> {
        let mut file = File::open(file_path)?;

        let mut content = String::new();
        file.read_to_string(&mut content)?;

        Ok(serde_json::from_str(&content)?)
    }

    /// A missing or unreadable file starts out empty.
    pub fn initialize(file_path: PathBuf) -> FileKeyValueStore {
        let entries = match Self::load_entries_from_file(&file_path) {
            Ok(entries) => entries,
            Err(err) => {
                debug!("Starting with empty store at {:?}: {}", file_path, err);
                HashMap::new()
            }
        };
        FileKeyValueStore {
            file_path,
            entries: Mutex::new(entries),
        }
    }

    fn save_entries(&self, entries: &HashMap<String, String>) -> Result<()> {
        let json_string = serde_json::to_string_pretty(entries)?;
        let mut file = File::create(&self.file_path)
            .with_context(|| format!("Failed to create {:?}", self.file_path))?;
        file.write_all(json_string.as_bytes())?;
        Ok(())
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    /// The file is written first; on failure the entries stay untouched.
    fn set(&self, key: &str, value: String) -> Result<()> {
        let mut entries = self.entries.lock().unwrap();
        let mut updated = entries.clone();
        updated.insert(key.to_owned(), value);
        self.save_entries(&updated)?;
        *entries = updated;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.lock().unwrap();
        if !entries.contains_key(key) {
            return Ok(());
        }
        let mut updated = entries.clone();
        updated.remove(key);
        self.save_entries(&updated)?;
        *entries = updated;
        Ok(())
    }
}

/// The persisted mirror of the signed-in user.
pub struct PersistedUser {
    store: Box<dyn KeyValueStore>,
}

impl PersistedUser {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// A corrupted entry is treated as signed out.
    pub fn load(&self) -> GalleryResult<Option<User>> {
        let raw = self
            .store
            .get(USER_KEY)
            .map_err(|err| GalleryError::Persistence(format!("{:#}", err)))?;
        match raw {
            None => Ok(None),
            Some(raw) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => Ok(Some(user)),
                Err(err) => {
                    warn!("Ignoring unreadable persisted user: {}", err);
                    Ok(None)
                }
            },
        }
    }

    pub fn save(&self, user: &User) -> GalleryResult<()> {
        let raw = serde_json::to_string(user)
            .map_err(|err| GalleryError::Persistence(err.to_string()))?;
        self.store
            .set(USER_KEY, raw)
            .map_err(|err| GalleryError::Persistence(format!("{:#}", err)))
    }

    pub fn clear(&self) -> GalleryResult<()> {
        self.store
            .remove(USER_KEY)
            .map_err(|err| GalleryError::Persistence(format!("{:#}", err)))
    }
}
