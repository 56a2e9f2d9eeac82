//! Local persistent store for the ProCompare client
//!
//! The dashboard mirrors per-user state (favorites, notes) into a local
//! key-value store so it can keep working when the backend is unreachable.
//! Each key is one JSON document on disk, fronted by a small in-memory LRU
//! tier that promotes disk reads:
//! - L1: in-memory LRU cache for repeated lookups
//! - L2: one `{key}.json` file per key under the store root
//!
//! Reads that hit a corrupt document purge the entry and report a miss;
//! stale-but-parseable data is always preferred over no data. Writes are
//! last-writer-wins, there is no cross-process locking.

use lru::LruCache;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::{
    fs,
    num::NonZeroUsize,
    path::{Path, PathBuf},
    sync::Mutex,
};

use crate::cli::types::Username;
use crate::error::Result;


/// Default number of documents held in the memory tier.
const MEMORY_CAPACITY: usize = 32;

/// Key for a user's cached favorites collection.
pub fn favorites_key(username: &Username) -> String {
    format!("favorites_{}", username)
}

/// Key for a user's notes map.
pub fn notes_key(username: &Username) -> String {
    format!("notes_{}", username)
}

/// JSON-document store with an LRU memory tier over per-key files.
pub struct LocalStore {
    root: PathBuf,
    memory: Mutex<LruCache<String, Value>>,
}

impl LocalStore {
    /// Create a store rooted at `root`; the directory is created lazily on
    /// first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            memory: Mutex::new(LruCache::new(
                NonZeroUsize::new(MEMORY_CAPACITY).expect("nonzero capacity"),
            )),
        }
    }

    /// Store under the platform data dir: `~/.local/share/procompare` on
    /// Linux, with a home-relative fallback when the platform dir is unknown.
    pub fn open_default() -> Self {
        let base = dirs::data_dir().unwrap_or_else(|| {
            let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.push(".local");
            home.push("share");
            home
        });
        Self::new(base.join("procompare"))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    /// Read a document, checking memory first, then disk.
    ///
    /// Returns `None` on a missing key. A document that exists but does not
    /// parse as `T` is treated as corrupt: the entry is purged from both
    /// tiers and the read reports a miss.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        // take the value out of the lock before any purge can re-enter it
        let cached = self.memory.lock().unwrap().get(key).cloned();
        if let Some(value) = cached {
            return match serde_json::from_value(value) {
                Ok(parsed) => Some(parsed),
                Err(_) => {
                    self.purge(key);
                    None
                }
            };
        }

        let content = fs::read_to_string(self.path_for(key)).ok()?;
        let value: Value = match serde_json::from_str(&content) {
            Ok(value) => value,
            Err(_) => {
                self.purge(key);
                return None;
            }
        };

        match serde_json::from_value::<T>(value.clone()) {
            Ok(parsed) => {
                // Promote to the memory tier
                self.memory.lock().unwrap().put(key.to_string(), value);
                Some(parsed)
            }
            Err(_) => {
                self.purge(key);
                None
            }
        }
    }

    /// Write a document through both tiers.
    pub fn put<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let value = serde_json::to_value(value)?;
        let content = serde_json::to_string_pretty(&value)?;

        self.memory.lock().unwrap().put(key.to_string(), value);

        let path = self.path_for(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }

    /// Remove a document from both tiers; missing keys are not an error.
    pub fn remove(&self, key: &str) -> Result<()> {
        self.memory.lock().unwrap().pop(key);
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    /// Best-effort removal used on corrupt entries.
    fn purge(&self, key: &str) {
        self.memory.lock().unwrap().pop(key);
        let _ = fs::remove_file(self.path_for(key));
    }

    /// (used, capacity) of the memory tier.
    pub fn memory_stats(&self) -> (usize, usize) {
        let memory = self.memory.lock().unwrap();
        (memory.len(), MEMORY_CAPACITY)
    }
}
