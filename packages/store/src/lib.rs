//! Icebox store: the semantic layer.
//!
//! This layer adds meaning to the raw strings of the backend:
//! - `TypeTag`: the closed set of persisted value kinds
//! - `Value`: a tagged union of storable values
//! - `KeyedStore`: namespaced get/set/exists with type-aware decoding
//!
//! Every value written through [`KeyedStore::set`] lands in two backing
//! slots: `<namespace>:<key>` holds the serialized string and
//! `<namespace>:<key>:type` holds the tag used to decode it back. By
//! default persistent string storage returns strings; this layer is what
//! gives you back a number when you stored a number.
//!
//! # Example
//!
//! ```rust
//! use icebox_backend::MemoryBackend;
//! use icebox_store::{KeyedStore, Value};
//!
//! let mut store = KeyedStore::new("cart", MemoryBackend::new());
//! store.set("qty", &Value::from(3.0)).unwrap();
//!
//! assert_eq!(store.get("qty").unwrap(), Value::Number(3.0));
//! ```

mod error;
mod keyed;
mod tag;
mod typed;
mod value;

pub use error::StoreError;
pub use keyed::KeyedStore;
pub use tag::TypeTag;
pub use value::Value;

// Re-export backend types for convenience
pub use icebox_backend::{Backend, BackendError};
