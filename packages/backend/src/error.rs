//! Error types for the backend layer.
//!
//! Errors at this level are storage-primitive failures only. Semantic errors
//! (unknown type tags, decode failures) belong in higher layers.

use std::io;

/// Errors raised by a [`Backend`](crate::Backend) implementation.
///
/// The upper layers add no retry or fallback: a failing backend write is
/// fatal to that call and propagates to the caller unmodified.
#[derive(Debug)]
pub enum BackendError {
    /// Generic I/O failure from the storage primitive.
    Io(io::Error),

    /// The store refused a write because it is out of space.
    ///
    /// The analog of a browser storage quota error.
    QuotaExceeded,

    /// A persisted snapshot exists but could not be read back.
    Corrupt { message: String },
}

impl std::fmt::Display for BackendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendError::Io(e) => write!(f, "backend i/o error: {}", e),
            BackendError::QuotaExceeded => write!(f, "backend quota exceeded"),
            BackendError::Corrupt { message } => {
                write!(f, "backend snapshot corrupt: {}", message)
            }
        }
    }
}

impl std::error::Error for BackendError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BackendError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for BackendError {
    fn from(e: io::Error) -> Self {
        BackendError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    #[test]
    fn error_display_works() {
        let e = BackendError::QuotaExceeded;
        assert_eq!(format!("{}", e), "backend quota exceeded");

        let e = BackendError::Corrupt {
            message: "bad snapshot".to_string(),
        };
        assert!(format!("{}", e).contains("bad snapshot"));
    }

    #[test]
    fn io_error_converts() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let e: BackendError = io_err.into();
        assert!(matches!(e, BackendError::Io(_)));
        assert!(StdError::source(&e).is_some());
    }

    #[test]
    fn quota_source_is_none() {
        assert!(StdError::source(&BackendError::QuotaExceeded).is_none());
    }
}
