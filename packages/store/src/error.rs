//! Error types for the store layer.

use icebox_backend::BackendError;

/// Errors at the store layer.
///
/// Decode problems are deliberately not represented here: a corrupt or
/// unknown-typed slot degrades to an absent or string value (see
/// [`KeyedStore::get`](crate::KeyedStore::get)) instead of failing the
/// read. Only backend failures and serialization failures surface as
/// errors.
#[derive(Debug)]
pub enum StoreError {
    /// Error from the backend layer.
    Backend(BackendError),

    /// A value could not be serialized for storage.
    Encode { key: String, message: String },

    /// A typed read could not deserialize the stored value.
    Decode { key: String, message: String },
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Backend(e) => write!(f, "backend error: {}", e),
            StoreError::Encode { key, message } => {
                write!(f, "encode error for '{}': {}", key, message)
            }
            StoreError::Decode { key, message } => {
                write!(f, "decode error for '{}': {}", key, message)
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Backend(e) => Some(e),
            _ => None,
        }
    }
}

impl From<BackendError> for StoreError {
    fn from(e: BackendError) -> Self {
        StoreError::Backend(e)
    }
}
