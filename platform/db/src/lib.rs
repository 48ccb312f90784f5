//! Durable key-value primitives shared by the product crates.
//!
//! The surface mirrors a browser-style storage area: string keys, string
//! values, and `get`/`set`/`remove`/`clear`. Two backends ship here: an
//! in-memory map (optionally quota-limited) and a directory of files.

mod file;
mod memory;

use std::path::PathBuf;

use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("invalid storage key {0:?}")]
    InvalidKey(String),
    #[error("storage quota exceeded writing {key}: {needed} bytes needed, {quota} allowed")]
    QuotaExceeded {
        key: String,
        needed: usize,
        quota: usize,
    },
    #[error("storage io failed for {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
}

pub type DbResult<T> = Result<T, DbError>;

/// String-keyed, string-valued durable storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> DbResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> DbResult<()>;
    fn remove(&mut self, key: &str) -> DbResult<()>;
    fn clear(&mut self) -> DbResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> DbResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> DbResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> DbResult<()> {
        (**self).remove(key)
    }

    fn clear(&mut self) -> DbResult<()> {
        (**self).clear()
    }
}

/// Keys end up as file names, so only a conservative character set is accepted.
pub fn validate_key(key: &str) -> DbResult<()> {
    let valid = !key.is_empty()
        && key != "."
        && key != ".."
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
    if valid {
        Ok(())
    } else {
        Err(DbError::InvalidKey(key.to_string()))
    }
}

/// Environment-driven settings for the file-backed store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreSettings {
    pub data_dir: PathBuf,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".hr-data")
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl StoreSettings {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Resolves `HR_DATA_DIR` through `lookup`, falling back to `.hr-data`
    /// in the working directory.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        lookup("HR_DATA_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(|dir| Self::new(dir.trim()))
            .unwrap_or_default()
    }

    pub fn open(&self) -> DbResult<FileStore> {
        FileStore::open(&self.data_dir)
    }
}
