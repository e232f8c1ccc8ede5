//! File-backed backend: one JSON snapshot per store.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::{Backend, BackendError};

/// A backend persisted as a single JSON object of strings on disk.
///
/// The whole map is rewritten on every `set_item`, matching the synchronous
/// write-through model of the layers above. Suitable for small records, not
/// for bulk data.
pub struct FileBackend {
    path: PathBuf,
    data: HashMap<String, String>,
}

impl FileBackend {
    /// Open a snapshot file, starting empty if the file does not exist yet.
    ///
    /// # Errors
    ///
    /// `BackendError::Corrupt` when the file exists but is not a JSON
    /// object of strings; `BackendError::Io` for any other read failure.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, BackendError> {
        let path = path.into();
        let data = match fs::read_to_string(&path) {
            Ok(text) => {
                serde_json::from_str(&text).map_err(|e| BackendError::Corrupt {
                    message: format!("{}: {}", path.display(), e),
                })?
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(BackendError::Io(e)),
        };
        Ok(Self { path, data })
    }

    /// The snapshot file this backend writes to.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn flush(&self) -> Result<(), BackendError> {
        log::debug!("writing {}...", self.path.display());
        let text = serde_json::to_string(&self.data).map_err(io::Error::other)?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

impl Backend for FileBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, BackendError> {
        Ok(self.data.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), BackendError> {
        self.data.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn contains(&self, key: &str) -> Result<bool, BackendError> {
        Ok(self.data.contains_key(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("record.json");

        {
            let mut backend = FileBackend::open(&path).unwrap();
            backend.set_item("todo:title", "buy milk").unwrap();
            backend.set_item("todo:title:type", "string").unwrap();
        }

        let backend = FileBackend::open(&path).unwrap();
        assert_eq!(
            backend.get_item("todo:title").unwrap(),
            Some("buy milk".to_string())
        );
        assert!(backend.contains("todo:title:type").unwrap());
    }

    #[test]
    fn missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::open(dir.path().join("missing.json")).unwrap();
        assert_eq!(backend.get_item("anything").unwrap(), None);
    }

    #[test]
    fn corrupt_snapshot_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{not json").unwrap();

        let result = FileBackend::open(&path);
        assert!(matches!(result, Err(BackendError::Corrupt { .. })));
    }

    #[test]
    fn every_write_hits_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("record.json");

        let mut backend = FileBackend::open(&path).unwrap();
        backend.set_item("a", "1").unwrap();

        // No explicit flush or drop needed; set_item already persisted.
        let reread = FileBackend::open(&path).unwrap();
        assert_eq!(reread.get_item("a").unwrap(), Some("1".to_string()));
    }
}
