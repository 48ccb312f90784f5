use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{DbError, DbResult, KeyValueStore, validate_key};

const ENTRY_EXTENSION: &str = "kv";

/// Directory-backed storage area: each key lives in `<dir>/<key>.kv`.
#[derive(Clone, Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Opens (and creates when missing) the storage directory.
    pub fn open(root: impl AsRef<Path>) -> DbResult<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).map_err(|source| DbError::Io {
            key: root.display().to_string(),
            source,
        })?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn entry_path(&self, key: &str) -> DbResult<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(format!("{key}.{ENTRY_EXTENSION}")))
    }
}

fn io_error(key: &str) -> impl FnOnce(std::io::Error) -> DbError + '_ {
    move |source| DbError::Io {
        key: key.to_string(),
        source,
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> DbResult<Option<String>> {
        let path = self.entry_path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(io_error(key)(err)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> DbResult<()> {
        let path = self.entry_path(key)?;
        let tmp = path.with_extension(format!("{ENTRY_EXTENSION}.tmp"));
        fs::write(&tmp, value.as_bytes()).map_err(io_error(key))?;
        fs::rename(&tmp, &path).map_err(io_error(key))?;
        debug!(key, bytes = value.len(), "storage entry written");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> DbResult<()> {
        let path = self.entry_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(io_error(key)(err)),
        }
    }

    fn clear(&mut self) -> DbResult<()> {
        let root_key = self.root.display().to_string();
        let entries = fs::read_dir(&self.root).map_err(io_error(&root_key))?;
        for entry in entries {
            let path = entry.map_err(io_error(&root_key))?.path();
            if path.extension().and_then(|ext| ext.to_str()) == Some(ENTRY_EXTENSION) {
                fs::remove_file(&path).map_err(io_error(&root_key))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn values_survive_reopening_the_directory() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();
        store.set("employee_management_data", "[]").unwrap();
        drop(store);

        let reopened = FileStore::open(dir.path()).unwrap();
        assert_eq!(
            reopened.get("employee_management_data").unwrap().as_deref(),
            Some("[]")
        );
        assert_eq!(reopened.get("other").unwrap(), None);
    }

    #[test]
    fn remove_and_clear_only_touch_entries() {
        let dir = TempDir::new().unwrap();
        let unrelated = dir.path().join("notes.txt");
        fs::write(&unrelated, "keep me").unwrap();

        let mut store = FileStore::open(dir.path()).unwrap();
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        store.remove("a").unwrap();
        store.remove("a").unwrap();
        assert_eq!(store.get("a").unwrap(), None);

        store.clear().unwrap();
        assert_eq!(store.get("b").unwrap(), None);
        assert!(unrelated.exists());
    }

    #[test]
    fn rejects_path_like_keys() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::open(dir.path().join("nested")).unwrap();
        assert!(matches!(
            store.set("../escape", "x"),
            Err(DbError::InvalidKey(_))
        ));
    }
}
