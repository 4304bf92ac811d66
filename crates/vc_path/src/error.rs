use alloc::string::String;

use thiserror::Error;

// -----------------------------------------------------------------------------
// Error

/// An error returned when a property path string cannot be parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    #[error("The property path must not be empty")]
    Empty,

    #[error("Could not parse property path \"{path}\". Unexpected token \"{token}\" at position {offset}")]
    UnexpectedToken {
        /// The path that the error occurred in.
        path: String,
        /// First character of the part that could not be consumed.
        token: char,
        /// Byte offset of `token` in `path`.
        offset: usize,
    },
}

impl ParseError {
    /// Returns the byte offset the error occurred at.
    ///
    /// An empty path fails at offset `0`.
    #[inline]
    pub fn offset(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::UnexpectedToken { offset, .. } => *offset,
        }
    }

    /// Returns the unexpected character, if any.
    #[inline]
    pub fn token(&self) -> Option<char> {
        match self {
            Self::Empty => None,
            Self::UnexpectedToken { token, .. } => Some(*token),
        }
    }
}
