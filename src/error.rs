//! Error type shared by every fallible `LinearProbingMap` operation

use thiserror::Error;

/// Errors returned by `LinearProbingMap` operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// The caller passed an argument the map cannot act on
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The requested key is not stored in the map
    #[error("Key not found")]
    KeyNotFound,
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, MapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = MapError::InvalidArgument("length must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid argument: length must be positive");
        assert_eq!(MapError::KeyNotFound.to_string(), "Key not found");
    }
}
