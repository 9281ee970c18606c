//! Bidirectional translation between two representations of the same data.
//!
//! A mapper converts an outer representation `I` (an entity, or an external
//! payload) into an inner representation `O` and back. Implementations must
//! satisfy the round-trip law: for every `x` in the mapper's domain,
//! `map_to(map_from(x)?)? == x`. Missing required fields fail with a
//! [`MappingError`], never with placeholder values.

use async_trait::async_trait;

mod dto;

pub use dto::{DraftDto, DraftDtoMapper, EmailDto, EmailDtoMapper, FolderDto, FolderDtoMapper};

/// Errors raised when a value cannot be translated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MappingError {
    /// A field required by the target representation is absent.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// A field is present but cannot be represented on the other side.
    #[error("Invalid field {field}: {reason}")]
    InvalidField {
        /// Name of the offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

/// Synchronous bidirectional mapper.
pub trait Mapper<I, O> {
    /// Translate the outer representation into the inner one.
    ///
    /// # Errors
    ///
    /// Returns a `MappingError` if `input` lacks a required field or holds a
    /// value the inner representation cannot express.
    fn map_from(&self, input: I) -> Result<O, MappingError>;

    /// Translate the inner representation back into the outer one.
    ///
    /// # Errors
    ///
    /// Returns a `MappingError` if `output` lacks a required field or holds a
    /// value the outer representation cannot express.
    fn map_to(&self, output: O) -> Result<I, MappingError>;
}

/// Mapper whose directions may suspend (e.g. to resolve references over I/O).
///
/// Every [`Mapper`] is also an `AsyncMapper` that resolves immediately.
#[async_trait]
pub trait AsyncMapper<I, O>: Send + Sync {
    /// Asynchronous [`Mapper::map_from`].
    ///
    /// # Errors
    ///
    /// Same as the synchronous direction.
    async fn map_from(&self, input: I) -> Result<O, MappingError>;

    /// Asynchronous [`Mapper::map_to`].
    ///
    /// # Errors
    ///
    /// Same as the synchronous direction.
    async fn map_to(&self, output: O) -> Result<I, MappingError>;
}

#[async_trait]
impl<I, O, M> AsyncMapper<I, O> for M
where
    M: Mapper<I, O> + Send + Sync,
    I: Send + 'static,
    O: Send + 'static,
{
    async fn map_from(&self, input: I) -> Result<O, MappingError> {
        Mapper::map_from(self, input)
    }

    async fn map_to(&self, output: O) -> Result<I, MappingError> {
        Mapper::map_to(self, output)
    }
}

/// Returns the value of a required field or a `MissingField` error.
pub(crate) fn required<T>(value: Option<T>, field: &'static str) -> Result<T, MappingError> {
    value.ok_or(MappingError::MissingField(field))
}
