//! Shared error taxonomy for the randomness primitives.

use thiserror::Error;

/// Errors reported by the randomness primitives.
///
/// Every failure is returned synchronously to the immediate caller. Nothing
/// is retried or suppressed internally, and there is no fallback to a
/// non-secure generator. Partial output produced before a failure is
/// unspecified and must not be used.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RandomError {
    /// The requested range has its minimum above its maximum.
    #[error("invalid range: minimum {min} exceeds maximum {max}")]
    InvalidRange { min: i64, max: i64 },
    /// A negative output length was requested.
    #[error("invalid length: {0} is negative")]
    InvalidLength(isize),
    /// The supplied charset contains no characters.
    #[error("charset must contain at least one character")]
    InvalidCharset,
    /// A selection was attempted on an empty sequence.
    #[error("cannot pick from an empty sequence")]
    EmptySequence,
    /// The operating system entropy source failed to supply bytes.
    #[error("secure entropy source is unavailable")]
    EntropyUnavailable,
}
