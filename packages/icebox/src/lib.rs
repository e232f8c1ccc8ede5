//! Icebox: persistent typed records over a plain key-value backend.
//!
//! Persistent string storage hands back strings; icebox hands back what
//! you put in. Declare a record's properties once, and every write is
//! mirrored into the backing store together with a type tag, so a later
//! record over the same namespace reads numbers as numbers and structured
//! data as structured data.
//!
//! The stack is three layers, re-exported here:
//! - [`Backend`]: the raw string key-value contract ([`MemoryBackend`],
//!   [`FileBackend`])
//! - [`KeyedStore`]: namespaced, type-tagged get/set/exists
//! - [`ReactiveRecord`]: live property cells with write-through
//!   persistence and a persisted manifest of tracked names
//!
//! # Example
//!
//! ```rust
//! use icebox::{MemoryBackend, ReactiveRecord, Value};
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

pub use icebox_backend::{Backend, BackendError, FileBackend, MemoryBackend};
pub use icebox_record::{KeyManifest, ReactiveRecord, RecordError, DELIMITER, MANIFEST_KEY};
pub use icebox_store::{KeyedStore, StoreError, TypeTag, Value};
