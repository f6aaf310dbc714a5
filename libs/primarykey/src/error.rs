//! Error types for ID construction and parsing.

use thiserror::Error;

/// Errors that can occur when building an [`Id`](crate::Id) from external data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The short-form string is empty.
    #[error("ID cannot be empty")]
    Empty,

    /// A raw byte buffer did not hold exactly 16 bytes.
    #[error("invalid ID length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// The short-form string contains a character outside the alphabet.
    #[error("invalid character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    /// The short-form string decodes to a value wider than 128 bits.
    #[error("short ID overflows 128 bits")]
    Overflow,

    /// The long-form (UUID) string is malformed.
    #[error("invalid UUID: {0}")]
    InvalidUuid(String),

    /// A storage driver handed over a value shape that cannot hold an ID.
    #[error("unsupported source type for ID: {0}")]
    UnsupportedSourceType(String),
}

impl IdError {
    /// Returns true if this error came from parsing malformed text, in
    /// either the short or the long form.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            IdError::Empty
                | IdError::InvalidCharacter { .. }
                | IdError::Overflow
                | IdError::InvalidUuid(_)
        )
    }

    /// Returns true if this error indicates a byte buffer of the wrong size.
    pub fn is_length_error(&self) -> bool {
        matches!(self, IdError::InvalidLength { .. })
    }
}
