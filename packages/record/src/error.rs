//! Error types for the record layer.

use icebox_store::StoreError;

/// Errors at the record layer.
#[derive(Debug)]
pub enum RecordError {
    /// Bad construction arguments; the caller must not proceed.
    InvalidArgument { message: String },

    /// Writing a property that was never installed on this record.
    ///
    /// Properties only come into existence through `define`/`add`, which
    /// is what keeps the manifest and the live record from drifting.
    UntrackedProperty { name: String },

    /// Error from the store layer.
    Store(StoreError),
}

impl std::fmt::Display for RecordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordError::InvalidArgument { message } => {
                write!(f, "invalid argument: {}", message)
            }
            RecordError::UntrackedProperty { name } => {
                write!(f, "property '{}' is not tracked by this record", name)
            }
            RecordError::Store(e) => write!(f, "store error: {}", e),
        }
    }
}

impl std::error::Error for RecordError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RecordError::Store(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StoreError> for RecordError {
    fn from(e: StoreError) -> Self {
        RecordError::Store(e)
    }
}
