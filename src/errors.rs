// Copyright 2025 Cowboy AI, LLC.

//! Error types for binding table operations

use thiserror::Error;

/// Errors that can occur when storing or looking up bindings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    /// An equal key is already bound
    #[error("Binding already exists: {key}")]
    AlreadyBound {
        /// Description of the conflicting key
        key: String,
    },

    /// No binding for the requested key
    #[error("No binding for: {key}")]
    NotBound {
        /// Description of the requested key
        key: String,
    },
}

/// Result type for binding operations
pub type BindingResult<T> = Result<T, BindingError>;

impl BindingError {
    /// Check if this is a missing binding error
    pub fn is_not_bound(&self) -> bool {
        matches!(self, BindingError::NotBound { .. })
    }

    /// Check if this is a duplicate binding error
    pub fn is_already_bound(&self) -> bool {
        matches!(self, BindingError::AlreadyBound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = BindingError::AlreadyBound {
            key: "Database/primary".to_string(),
        };
        assert_eq!(err.to_string(), "Binding already exists: Database/primary");
        assert!(err.is_already_bound());
        assert!(!err.is_not_bound());

        let err = BindingError::NotBound {
            key: "Cache".to_string(),
        };
        assert_eq!(err.to_string(), "No binding for: Cache");
        assert!(err.is_not_bound());
    }
}
