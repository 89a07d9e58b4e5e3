//! Error types for the signature canonicalization pipeline.

use thiserror::Error;

/// Errors that can occur while canonicalizing a single interface declaration.
///
/// Every variant but `InvalidHex` is a format failure of the declaration
/// text: no partial signature is ever produced and nothing is hashed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    #[error("Invalid interface format '{input}': {reason}")]
    InvalidFormat { input: String, reason: String },

    /// `offset` is a byte offset into the argument list, or into the raw
    /// input for text following the argument list.
    #[error("Unbalanced '{delimiter}' at offset {offset}")]
    UnbalancedNesting { delimiter: char, offset: usize },

    #[error("Empty argument at position {index}")]
    EmptyArgument { index: usize },

    #[error("Invalid hex '{input}': {reason}")]
    InvalidHex { input: String, reason: String },
}

impl SignatureError {
    pub(crate) fn invalid_format(input: &str, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    /// Returns `true` when the error stems from the shape of the declaration
    /// text rather than from parsing a hex selector or hash.
    pub fn is_format_error(&self) -> bool {
        !matches!(self, Self::InvalidHex { .. })
    }
}
