use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a dictionary file.
///
/// All variants are recoverable: a missing or unreadable main dictionary
/// puts the engine into disabled mode, and a missing user dictionary is
/// treated as an empty one.
#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("dictionary not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("dictionary too large: {} is {} bytes (limit {})", .path.display(), .size, .limit)]
    TooLarge { path: PathBuf, size: u64, limit: u64 },

    #[error("failed to read dictionary: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DictionaryError::NotFound {
            path: PathBuf::from("/tmp/missing.txt"),
        };
        assert_eq!(err.to_string(), "dictionary not found: /tmp/missing.txt");

        let err = DictionaryError::TooLarge {
            path: PathBuf::from("big.txt"),
            size: 100,
            limit: 10,
        };
        assert!(err.to_string().contains("100 bytes"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = DictionaryError::from(io_error);
        assert!(matches!(err, DictionaryError::Io(_)));
    }
}
