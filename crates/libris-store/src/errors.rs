//! Error helpers for libris-store
//!
//! Map filesystem and serde failures onto `LibraryError` variants

use libris_core::errors::LibraryError;
use std::io;
use std::path::Path;

/// Classify a read failure: a missing file is `StoreNotFound`, anything
/// else is `Io`
pub fn read_error(path: &Path, err: io::Error) -> LibraryError {
    if err.kind() == io::ErrorKind::NotFound {
        LibraryError::StoreNotFound {
            path: path.display().to_string(),
        }
    } else {
        io_error("read_store", path, err)
    }
}

/// Create an IO error
pub fn io_error(operation: &str, path: &Path, err: io::Error) -> LibraryError {
    LibraryError::Io {
        op: operation.to_string(),
        path: path.display().to_string(),
        message: err.to_string(),
    }
}

/// Create a malformed-store error from a decode failure
pub fn malformed(path: &Path, err: serde_json::Error) -> LibraryError {
    LibraryError::StoreMalformed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Create an encode error
pub fn serialization(err: serde_json::Error) -> LibraryError {
    LibraryError::Serialization {
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_store_not_found() {
        let err = read_error(
            Path::new("books.json"),
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(
            err,
            LibraryError::StoreNotFound {
                path: "books.json".to_string()
            }
        );
    }

    #[test]
    fn test_permission_denied_maps_to_io() {
        let err = read_error(
            Path::new("books.json"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, LibraryError::Io { ref op, .. } if op == "read_store"));
    }

    #[test]
    fn test_malformed_keeps_reason() {
        let decode_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err = malformed(Path::new("books.json"), decode_err);
        match err {
            LibraryError::StoreMalformed { path, reason } => {
                assert_eq!(path, "books.json");
                assert!(!reason.is_empty());
            }
            other => panic!("Expected StoreMalformed, got {other:?}"),
        }
    }
}
