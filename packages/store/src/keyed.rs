//! Namespaced, type-tagged access over a raw backend.

use icebox_backend::Backend;

use crate::{StoreError, TypeTag, Value};

/// Suffix appended to a value key to form its type slot.
const TYPE_SUFFIX: &str = ":type";

/// Namespaced get/set/exists over a raw string backend, with per-value
/// type tags and type-aware decoding.
///
/// Layout per namespace `N` and key `K`:
///
/// ```text
/// N:K        -> serialized value
/// N:K:type   -> "undefined" | "number" | "string" | "object"
/// ```
///
/// Every [`set`](Self::set) is two backend writes (value then tag);
/// [`set_raw`](Self::set_raw) suppresses the tag write. There is no
/// batching or transaction boundary: each call hits the backend
/// immediately, and backend failures propagate to the caller with no
/// retry.
pub struct KeyedStore<B: Backend> {
    namespace: String,
    backend: B,
}

impl<B: Backend> KeyedStore<B> {
    /// Create a store over `namespace`.
    ///
    /// The namespace is taken verbatim; callers that need a non-empty
    /// namespace validate it at their own boundary.
    pub fn new(namespace: impl Into<String>, backend: B) -> Self {
        Self {
            namespace: namespace.into(),
            backend,
        }
    }

    /// The namespace all keys are prefixed with.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Get a reference to the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Get a mutable reference to the underlying backend.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Consume the store, returning the backend.
    pub fn into_backend(self) -> B {
        self.backend
    }

    /// The backing-store key for `key`: `"<namespace>:<key>"`.
    pub fn namespaced_key(&self, key: &str) -> String {
        format!("{}:{}", self.namespace, key)
    }

    fn type_key(&self, key: &str) -> String {
        format!("{}{}", self.namespaced_key(key), TYPE_SUFFIX)
    }

    /// Whether a value slot exists for `key`.
    pub fn exists(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.backend.contains(&self.namespaced_key(key))?)
    }

    /// Read the undecoded value slot. `None` means the key was never set.
    pub fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.backend.get_item(&self.namespaced_key(key))?)
    }

    /// Read and decode the value stored under `key`.
    ///
    /// Decoding degrades instead of erroring: an unknown or missing type
    /// tag logs a warning and returns the raw string as text, and a
    /// corrupt structured payload logs an error and reads as absent. Only
    /// backend failures surface as `Err`.
    pub fn get(&self, key: &str) -> Result<Value, StoreError> {
        let raw = self.backend.get_item(&self.namespaced_key(key))?;
        let tag = self.backend.get_item(&self.type_key(key))?;

        let tag = match tag.as_deref().map(TypeTag::parse) {
            Some(Some(tag)) => tag,
            // Tag slot missing or not in the decode table. A never-set key
            // (no value slot either) reads as absent; otherwise fall back
            // to the raw string.
            Some(None) | None => {
                return Ok(match raw {
                    Some(raw) => {
                        log::warn!(
                            "type of {}.{} is unknown; returning value as a string",
                            self.namespace,
                            key
                        );
                        Value::Text(raw)
                    }
                    None => Value::Absent,
                });
            }
        };

        Ok(self.decode(key, tag, raw))
    }

    fn decode(&self, key: &str, tag: TypeTag, raw: Option<String>) -> Value {
        let Some(raw) = raw else {
            // Tag without a value slot; nothing usable to decode.
            return Value::Absent;
        };
        match tag {
            TypeTag::Absent => Value::Absent,
            TypeTag::Number => Value::Number(raw.parse().unwrap_or(f64::NAN)),
            TypeTag::Text => Value::Text(raw),
            TypeTag::Structured => {
                // The null literal decodes without invoking the parser.
                if raw == "null" {
                    return Value::Structured(serde_json::Value::Null);
                }
                match serde_json::from_str(&raw) {
                    Ok(json) => Value::Structured(json),
                    Err(e) => {
                        log::error!(
                            "error parsing object for {}.{}: {}",
                            self.namespace,
                            key,
                            e
                        );
                        Value::Absent
                    }
                }
            }
        }
    }

    /// Write `value` under `key`: one backend write for the value slot and
    /// one for the type tag.
    pub fn set(&mut self, key: &str, value: &Value) -> Result<(), StoreError> {
        let encoded = value.encode().map_err(|e| StoreError::Encode {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        self.backend.set_item(&self.namespaced_key(key), &encoded)?;
        self.backend
            .set_item(&self.type_key(key), value.tag().as_str())?;
        Ok(())
    }

    /// Write the raw string form only; the type slot is left untouched.
    pub fn set_raw(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.backend.set_item(&self.namespaced_key(key), value)?;
        Ok(())
    }
}
