//! Durable key/value storage for best records.
//!
//! ## Layout
//!
//! Two keys, both holding decimal strings:
//! - `topScore`: best move count
//! - `topTime`: best elapsed seconds
//!
//! `JsonFileStore` keeps all keys in one JSON object on disk:
//! ```text
//! { "topScore": "12", "topTime": "41" }
//! ```
//!
//! Writes go to a sibling `.tmp` file that is then renamed over the target,
//! so a crash mid-write leaves the previous file intact. A file that still
//! fails to parse reads as empty and is replaced by the next write.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::{debug, warn};
use rustc_hash::FxHashMap;

use super::best::BestRecord;
use crate::error::Result;

/// Key holding the best move count.
pub const BEST_MOVES_KEY: &str = "topScore";

/// Key holding the best elapsed time in seconds.
pub const BEST_TIME_KEY: &str = "topTime";

/// Generic string key/value storage.
///
/// Single reader/writer; implementations need no locking.
pub trait KeyValueStore {
    /// Read a key. `Ok(None)` if the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a key, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Process-local store. Lost when dropped.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: FxHashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a single JSON file.
///
/// A missing or unparsable file reads as empty. Every `set` rewrites the
/// whole file.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<FxHashMap<String, String>> {
        if !self.path.exists() {
            return Ok(FxHashMap::default());
        }
        let content = fs::read_to_string(&self.path)?;
        match serde_json::from_str(&content) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                warn!("ignoring corrupt records file {}: {}", self.path.display(), e);
                Ok(FxHashMap::default())
            }
        }
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.read_all()?;
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, serde_json::to_string_pretty(&entries)?)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

/// Reads and writes the [`BestRecord`] through a key/value store.
#[derive(Clone, Debug)]
pub struct BestRecordStore<S> {
    store: S,
}

impl<S: KeyValueStore> BestRecordStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the record. Unparsable values count as absent.
    pub fn load(&self) -> Result<BestRecord> {
        Ok(BestRecord {
            best_moves: self.read_number(BEST_MOVES_KEY)?,
            best_time: self.read_number(BEST_TIME_KEY)?,
        })
    }

    /// Persist the fields that are present. Absent fields are left untouched.
    pub fn save(&mut self, record: &BestRecord) -> Result<()> {
        if let Some(moves) = record.best_moves {
            self.store.set(BEST_MOVES_KEY, &moves.to_string())?;
        }
        if let Some(time) = record.best_time {
            self.store.set(BEST_TIME_KEY, &time.to_string())?;
        }
        debug!("saved best record {:?}", record);
        Ok(())
    }

    /// Borrow the underlying store.
    #[must_use]
    pub fn inner(&self) -> &S {
        &self.store
    }

    fn read_number<T: FromStr>(&self, key: &str) -> Result<Option<T>> {
        let Some(raw) = self.store.get(key)? else {
            return Ok(None);
        };
        match raw.trim().parse() {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                warn!("ignoring corrupt value {:?} for key {}", raw, key);
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("v".to_string()));

        store.set("k", "w").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("w".to_string()));
    }

    #[test]
    fn test_load_empty() {
        let records = BestRecordStore::new(MemoryStore::new());
        assert_eq!(records.load().unwrap(), BestRecord::default());
    }

    #[test]
    fn test_save_then_load() {
        let mut records = BestRecordStore::new(MemoryStore::new());
        let record = BestRecord::new(Some(7), Some(33));

        records.save(&record).unwrap();
        assert_eq!(records.load().unwrap(), record);
        assert_eq!(
            records.inner().get(BEST_MOVES_KEY).unwrap(),
            Some("7".to_string())
        );
        assert_eq!(
            records.inner().get(BEST_TIME_KEY).unwrap(),
            Some("33".to_string())
        );
    }

    #[test]
    fn test_save_skips_absent_fields() {
        let mut store = MemoryStore::new();
        store.set(BEST_TIME_KEY, "50").unwrap();

        let mut records = BestRecordStore::new(store);
        records.save(&BestRecord::new(Some(4), None)).unwrap();

        assert_eq!(records.load().unwrap(), BestRecord::new(Some(4), Some(50)));
    }

    #[test]
    fn test_corrupt_value_reads_as_absent() {
        let mut store = MemoryStore::new();
        store.set(BEST_MOVES_KEY, "not a number").unwrap();
        store.set(BEST_TIME_KEY, "12").unwrap();

        let records = BestRecordStore::new(store);
        assert_eq!(records.load().unwrap(), BestRecord::new(None, Some(12)));
    }
}
