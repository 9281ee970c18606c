//! Error types for the core library.

use thiserror::Error;

use crate::mapper::MappingError;
use crate::validation::ValidationError;

/// Errors that can occur while executing a use case.
#[derive(Debug, Error)]
pub enum Error {
    /// The request was rejected before reaching any data source.
    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] ValidationError),

    /// A single-item operation referenced an identifier that does not exist.
    #[error("{resource} not found: {id}")]
    NotFound {
        /// Kind of resource that was looked up ("email", "folder").
        resource: &'static str,
        /// The identifier that was not found.
        id: String,
    },

    /// A record could not be translated into its other representation.
    #[error("Mapping error: {0}")]
    Mapping(#[from] MappingError),

    /// The adapter behind a gateway failed (storage, network, ...).
    #[error("Backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Creates a not-found error for the given resource kind and identifier.
    #[must_use]
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    /// Wraps an adapter-specific failure.
    pub fn backend(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Backend(err.into())
    }

    /// Returns true if this error is a not-found outcome.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = Error::not_found("email", 42);
        assert_eq!(err.to_string(), "email not found: 42");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_validation_converts() {
        let err: Error = ValidationError::ZeroLimit.into();
        assert!(matches!(err, Error::InvalidRequest(ValidationError::ZeroLimit)));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_backend_keeps_source() {
        let err = Error::backend("connection reset");
        assert_eq!(err.to_string(), "Backend error: connection reset");
        assert!(std::error::Error::source(&err).is_some());
    }
}
