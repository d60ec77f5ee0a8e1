//! Error taxonomy for the store layer.
//!
//! Expected conditions - a product unknown to the catalog, an entry missing
//! from a user's list - are not errors here. They are reported as
//! [`AddOutcome`](crate::itemlist::AddOutcome) /
//! [`RemoveOutcome`](crate::itemlist::RemoveOutcome) values so callers can
//! branch on them for UI feedback. `StoreError` covers the conditions that
//! abort an operation outright.

use std::path::PathBuf;

use thiserror::Error;

use greengrocer_core::UsernameError;

/// Errors surfaced by the item list stores and the identity seam.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file could not be created, read, or replaced.
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file contents are not valid for the expected schema.
    ///
    /// Fatal for the current operation. The file is left untouched and no
    /// automatic repair is attempted.
    #[error("corrupt store file {path}: {source}")]
    Corrupt {
        /// Path of the offending file.
        path: PathBuf,
        /// The underlying decode failure.
        #[source]
        source: serde_json::Error,
    },

    /// No caller identity was available where one is required.
    ///
    /// Callers are expected to redirect to authentication.
    #[error("no authenticated user for this request")]
    Unauthenticated,

    /// An externally supplied identity failed username validation.
    #[error("invalid username: {0}")]
    InvalidUsername(#[from] UsernameError),
}

/// Result type alias for `StoreError`.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = StoreError::Unauthenticated;
        assert_eq!(err.to_string(), "no authenticated user for this request");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = StoreError::from(io);
        assert!(matches!(err, StoreError::Io(_)));
    }

    #[test]
    fn test_corrupt_names_the_path() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = StoreError::Corrupt {
            path: PathBuf::from("cart.json"),
            source,
        };
        assert!(err.to_string().contains("cart.json"));
    }
}
