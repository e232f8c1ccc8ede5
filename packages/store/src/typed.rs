//! Typed access over structured values.

use serde::de::DeserializeOwned;
use serde::Serialize;

use icebox_backend::Backend;

use crate::{KeyedStore, StoreError, Value};

impl<B: Backend> KeyedStore<B> {
    /// Serialize `data` and store it as a structured value.
    ///
    /// Serialization failures surface as [`StoreError::Encode`] and
    /// propagate; nothing is written in that case.
    pub fn set_as<T: Serialize>(&mut self, key: &str, data: &T) -> Result<(), StoreError> {
        let json = serde_json::to_value(data).map_err(|e| StoreError::Encode {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        self.set(key, &Value::Structured(json))
    }

    /// Read a structured value and deserialize it into `T`.
    ///
    /// Returns `Ok(None)` when the key reads as absent. A stored value of
    /// a non-structured kind, or one that does not match `T`, is a
    /// [`StoreError::Decode`].
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.get(key)? {
            Value::Absent => Ok(None),
            Value::Structured(json) => {
                let typed = serde_json::from_value(json).map_err(|e| StoreError::Decode {
                    key: key.to_string(),
                    message: e.to_string(),
                })?;
                Ok(Some(typed))
            }
            other => Err(StoreError::Decode {
                key: key.to_string(),
                message: format!("stored value is {}, not object", other.tag()),
            }),
        }
    }
}
