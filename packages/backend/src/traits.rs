//! The backend trait: the exact shape of the backing store.

use crate::BackendError;

/// A persistent string key-value primitive.
///
/// Keys and values are opaque strings. There is deliberately no removal
/// operation in the contract: the layers above never erase entries, they
/// only stop tracking them.
///
/// # Object Safety
///
/// This trait is object-safe: you can use `Box<dyn Backend>`.
pub trait Backend: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// Returns `Ok(None)` when the key was never set - that is not an
    /// error condition.
    fn get_item(&self, key: &str) -> Result<Option<String>, BackendError>;

    /// Write `value` under `key`, overwriting any previous value.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), BackendError>;

    /// Whether `key` is present in the store.
    ///
    /// The default implementation reads the value; backends with a cheaper
    /// membership check should override it.
    fn contains(&self, key: &str) -> Result<bool, BackendError> {
        Ok(self.get_item(key)?.is_some())
    }
}

// Blanket implementations for references and boxes

impl<T: Backend + ?Sized> Backend for &mut T {
    fn get_item(&self, key: &str) -> Result<Option<String>, BackendError> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), BackendError> {
        (**self).set_item(key, value)
    }

    fn contains(&self, key: &str) -> Result<bool, BackendError> {
        (**self).contains(key)
    }
}

impl<T: Backend + ?Sized> Backend for Box<T> {
    fn get_item(&self, key: &str) -> Result<Option<String>, BackendError> {
        self.as_ref().get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), BackendError> {
        self.as_mut().set_item(key, value)
    }

    fn contains(&self, key: &str) -> Result<bool, BackendError> {
        self.as_ref().contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryBackend;

    #[test]
    fn basic_read_write_works() {
        let mut backend = MemoryBackend::new();

        backend.set_item("users:123", "alice").unwrap();
        assert_eq!(
            backend.get_item("users:123").unwrap(),
            Some("alice".to_string())
        );

        assert_eq!(backend.get_item("nonexistent").unwrap(), None);
    }

    #[test]
    fn object_safety_works() {
        let mut backend = MemoryBackend::new();
        let boxed: &mut dyn Backend = &mut backend;

        boxed.set_item("test", "data").unwrap();
        assert_eq!(boxed.get_item("test").unwrap(), Some("data".to_string()));
        assert!(boxed.contains("test").unwrap());
    }

    #[test]
    fn mut_ref_blanket_impl_works() {
        let mut backend = MemoryBackend::new();
        let backend_ref: &mut MemoryBackend = &mut backend;

        backend_ref.set_item("ref_test", "ref_data").unwrap();
        assert_eq!(
            backend_ref.get_item("ref_test").unwrap(),
            Some("ref_data".to_string())
        );
    }

    #[test]
    fn box_dyn_works() {
        let mut boxed: Box<dyn Backend> = Box::new(MemoryBackend::new());

        boxed.set_item("dyn_test", "dyn_data").unwrap();
        assert_eq!(
            boxed.get_item("dyn_test").unwrap(),
            Some("dyn_data".to_string())
        );
    }
}
