//! Icebox backend: the raw storage layer.
//!
//! This is the narrow waist of the icebox stack. Everything at this level is
//! plain strings - no namespacing, no type tags, no interpretation of values.
//!
//! The [`Backend`] trait mirrors the shape of a browser's persistent storage
//! object: `get_item`, `set_item`, and key membership. Anything with that
//! shape can sit under the higher layers, which is what makes the in-memory
//! substitute usable for tests.
//!
//! # Example
//!
//! ```rust
//! use icebox_backend::{Backend, MemoryBackend};
//!
//! let mut backend = MemoryBackend::new();
//! backend.set_item("greeting", "hello").unwrap();
//! assert_eq!(backend.get_item("greeting").unwrap().as_deref(), Some("hello"));
//! assert!(!backend.contains("other").unwrap());
//! ```

mod error;
mod file;
mod memory;
mod traits;

pub use error::BackendError;
pub use file::FileBackend;
pub use memory::MemoryBackend;
pub use traits::Backend;
