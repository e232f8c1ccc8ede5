//! The persisted manifest of tracked property names.

use icebox_backend::Backend;
use icebox_store::KeyedStore;

use crate::RecordError;

/// Reserved key the manifest is persisted under.
///
/// Must not collide with a real property name; records never validate
/// this, they just rely on nobody naming a property `_manifest_`.
pub const MANIFEST_KEY: &str = "_manifest_";

/// Delimiter between names in the persisted manifest string.
///
/// Constraint, not a validated precondition: a property name containing
/// this character corrupts the manifest on the next round-trip.
pub const DELIMITER: &str = ":";

/// An ordered, de-duplicated list of property names for one namespace,
/// persisted through the same store as the properties themselves.
///
/// The manifest is always a string, so it is read and written in raw mode
/// and carries no type tag.
pub struct KeyManifest;

impl KeyManifest {
    /// The current list. Empty when nothing has been persisted yet.
    pub fn get<B: Backend>(store: &KeyedStore<B>) -> Result<Vec<String>, RecordError> {
        match store.get_raw(MANIFEST_KEY)? {
            Some(joined) if !joined.is_empty() => {
                Ok(joined.split(DELIMITER).map(str::to_string).collect())
            }
            _ => Ok(Vec::new()),
        }
    }

    /// Replace the persisted list with `names`.
    pub fn set<B: Backend>(
        store: &mut KeyedStore<B>,
        names: &[String],
    ) -> Result<(), RecordError> {
        store.set_raw(MANIFEST_KEY, &names.join(DELIMITER))?;
        Ok(())
    }

    /// Append each name not already present, preserving first-occurrence
    /// order, then persist. Returns the resulting list.
    pub fn add<B, I, S>(store: &mut KeyedStore<B>, names: I) -> Result<Vec<String>, RecordError>
    where
        B: Backend,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self::get(store)?;
        for name in names {
            let name = name.into();
            if !list.contains(&name) {
                list.push(name);
            }
        }
        Self::set(store, &list)?;
        Ok(list)
    }
}
