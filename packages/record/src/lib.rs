//! Icebox record: live objects with write-through persistence.
//!
//! A [`ReactiveRecord`] is a set of named property cells over one
//! namespace. Reading a property hits the in-memory cell; writing one
//! persists through the store first, then updates the cell. The set of
//! tracked names is kept in a persisted manifest ([`KeyManifest`]) so a
//! later record over the same namespace restores the same properties.
//!
//! # Example
//!
//! ```rust
//! use icebox_backend::MemoryBackend;
//! use icebox_record::ReactiveRecord;
//! use icebox_store::Value;
//!
//! let mut record = ReactiveRecord::new(
//!     "settings",
//!     [("volume", Value::from(0.8)), ("theme", Value::from("dark"))],
//!     MemoryBackend::new(),
//! )
//! .unwrap();
//!
//! record.set("theme", "light").unwrap();
//! assert_eq!(record.get("theme"), Some(&Value::from("light")));
//! ```

mod error;
mod manifest;
mod record;

pub use error::RecordError;
pub use manifest::{KeyManifest, DELIMITER, MANIFEST_KEY};
pub use record::ReactiveRecord;
