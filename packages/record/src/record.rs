//! The live record: property cells with write-through persistence.

use std::collections::HashMap;

use icebox_backend::Backend;
use icebox_store::{KeyedStore, Value};

use crate::manifest::KeyManifest;
use crate::RecordError;

/// A live object whose tracked properties transparently synchronize with
/// persistent storage.
///
/// Each tracked property has an in-memory cell read by [`get`](Self::get)
/// and written through to the store by [`set`](Self::set). The set of
/// tracked names lives in the persisted [`KeyManifest`], so constructing a
/// record over a previously used namespace restores everything declared
/// there before.
///
/// Two registration flavors differ only in precedence:
/// - [`define`](Self::define): persisted state wins over provided defaults,
/// - [`add`](Self::add): provided values overwrite persisted state.
///
/// Property cells can only be created through those two methods and are
/// never deleted; [`remove`](Self::remove) mutates the manifest alone.
pub struct ReactiveRecord<B: Backend> {
    store: KeyedStore<B>,
    cells: HashMap<String, Value>,
}

impl<B: Backend> ReactiveRecord<B> {
    /// Build a record over `namespace` and register `initial` with
    /// [`define`](Self::define) semantics (stored values win over the
    /// provided defaults).
    ///
    /// # Errors
    ///
    /// `RecordError::InvalidArgument` when `namespace` is empty.
    pub fn new<I, S, V>(namespace: &str, initial: I, backend: B) -> Result<Self, RecordError>
    where
        I: IntoIterator<Item = (S, V)>,
        S: Into<String>,
        V: Into<Value>,
    {
        if namespace.is_empty() {
            return Err(RecordError::InvalidArgument {
                message: "namespace must be a non-empty string".to_string(),
            });
        }
        let mut record = Self {
            store: KeyedStore::new(namespace, backend),
            cells: HashMap::new(),
        };
        record.define(initial)?;
        Ok(record)
    }

    /// Build a record over `namespace` with no new properties, restoring
    /// whatever the manifest tracks.
    pub fn open(namespace: &str, backend: B) -> Result<Self, RecordError> {
        Self::new(namespace, Vec::<(String, Value)>::new(), backend)
    }

    /// Register `props` and install a property cell for each.
    ///
    /// Persisted state always wins over code-provided defaults: for every
    /// manifest entry (old and new) with a persisted value, that value
    /// replaces the provided one. Defaults that had no persisted value are
    /// write-through persisted immediately. Returns the finalized pairs.
    pub fn define<I, S, V>(&mut self, props: I) -> Result<Vec<(String, Value)>, RecordError>
    where
        I: IntoIterator<Item = (S, V)>,
        S: Into<String>,
        V: Into<Value>,
    {
        let mut pairs: Vec<(String, Value)> = props
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        // Track the new names; the manifest keeps first-declared order.
        KeyManifest::add(&mut self.store, pairs.iter().map(|(k, _)| k.clone()))?;

        // Names tracked by an earlier record that are not in `props` come
        // back too, provided they have persisted state.
        for name in KeyManifest::get(&self.store)? {
            if !pairs.iter().any(|(k, _)| *k == name) && self.store.exists(&name)? {
                let stored = self.store.get(&name)?;
                pairs.push((name, stored));
            }
        }

        for (key, value) in &mut pairs {
            *value = self.install(key, value.clone(), true)?;
        }
        Ok(pairs)
    }

    /// Like [`define`](Self::define), but the provided values overwrite
    /// any persisted state. Use this when intentionally replacing stored
    /// data rather than restoring it.
    pub fn add<I, S, V>(&mut self, props: I) -> Result<Vec<(String, Value)>, RecordError>
    where
        I: IntoIterator<Item = (S, V)>,
        S: Into<String>,
        V: Into<Value>,
    {
        let pairs: Vec<(String, Value)> = props
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        KeyManifest::add(&mut self.store, pairs.iter().map(|(k, _)| k.clone()))?;

        for (key, value) in &pairs {
            self.install(key, value.clone(), false)?;
        }
        Ok(pairs)
    }

    /// Install one property cell. With `prefer_stored`, a persisted value
    /// overrides `value`; otherwise `value` is written through. Returns
    /// the cell's resulting value.
    fn install(
        &mut self,
        key: &str,
        value: Value,
        prefer_stored: bool,
    ) -> Result<Value, RecordError> {
        let resolved = if prefer_stored && self.store.exists(key)? {
            self.store.get(key)?
        } else {
            self.store.set(key, &value)?;
            value
        };
        self.cells.insert(key.to_string(), resolved.clone());
        Ok(resolved)
    }

    /// Stop tracking `keys`, leaving other manifest entries untouched.
    ///
    /// Only the manifest changes: the live cells stay readable and
    /// writable until the record is dropped, and the underlying store
    /// entries are not erased. Erasure is skipped to keep removal cheap;
    /// declaring the key again later restores the persisted value.
    pub fn remove<I, S>(&mut self, keys: I) -> Result<(), RecordError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let doomed: Vec<String> = keys.into_iter().map(|k| k.as_ref().to_string()).collect();
        let kept: Vec<String> = KeyManifest::get(&self.store)?
            .into_iter()
            .filter(|name| !doomed.contains(name))
            .collect();
        KeyManifest::set(&mut self.store, &kept)
    }

    /// Stop tracking everything: the no-argument form of removal.
    pub fn clear(&mut self) -> Result<(), RecordError> {
        KeyManifest::set(&mut self.store, &[])
    }

    /// Read a property's cell. `None` for names never installed on this
    /// record.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.cells.get(name)
    }

    /// Write a property: persist through the store first, then update the
    /// cell. Two backend writes per call (value and tag).
    ///
    /// # Errors
    ///
    /// `RecordError::UntrackedProperty` when `name` was never installed
    /// through `define`/`add`.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<(), RecordError> {
        if !self.cells.contains_key(name) {
            return Err(RecordError::UntrackedProperty {
                name: name.to_string(),
            });
        }
        let value = value.into();
        self.store.set(name, &value)?;
        self.cells.insert(name.to_string(), value);
        Ok(())
    }

    /// Tracked names in declaration order.
    pub fn tracked_keys(&self) -> Result<Vec<String>, RecordError> {
        KeyManifest::get(&self.store)
    }

    /// `(name, value)` pairs for every tracked property with a live cell,
    /// in declaration order.
    pub fn properties(&self) -> Result<Vec<(String, Value)>, RecordError> {
        let mut out = Vec::new();
        for name in KeyManifest::get(&self.store)? {
            if let Some(value) = self.cells.get(&name) {
                out.push((name, value.clone()));
            }
        }
        Ok(out)
    }

    /// The namespace this record persists under.
    pub fn namespace(&self) -> &str {
        self.store.namespace()
    }

    /// The underlying store, for direct namespaced access.
    pub fn store(&self) -> &KeyedStore<B> {
        &self.store
    }

    /// Consume the record, returning the backend.
    pub fn into_backend(self) -> B {
        self.store.into_backend()
    }
}
