//! In-memory backend: the test substitute for real persistent storage.

use std::collections::HashMap;

use crate::{Backend, BackendError};

/// A backend over a plain `HashMap`. Never fails.
///
/// This is the in-memory substitute the higher layers are tested against;
/// nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    data: HashMap<String, String>,
}

impl MemoryBackend {
    /// Create a new empty backend.
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the backend holds no entries.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl Backend for MemoryBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, BackendError> {
        Ok(self.data.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), BackendError> {
        self.data.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn contains(&self, key: &str) -> Result<bool, BackendError> {
        Ok(self.data.contains_key(key))
    }
}
