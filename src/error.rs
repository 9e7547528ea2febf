//! Error types for bit sequence operations.
//!
//! This module provides a unified error type for every fallible operation on a
//! [`BitSequence`](crate::BitSequence), using the `thiserror` crate for
//! ergonomic error handling.

use thiserror::Error;

/// The main error type for `bitseq` operations.
///
/// Every variant is returned at the point of violation; no operation falls
/// back to a default value.
#[derive(Error, Debug)]
pub enum BitSeqError {
    /// Positional argument outside the valid range for the operation
    #[error("Index out of range: index {index}, length {length}")]
    OutOfRange {
        /// The offending index
        index: usize,
        /// The sequence length at the time of the call
        length: usize,
    },

    /// A parse source contained something other than '0' or '1'
    #[error("Invalid bit character {character:?} at position {position}")]
    InvalidFormat {
        /// The rejected character
        character: char,
        /// Character position within the source
        position: usize,
    },

    /// Operation is not defined for the sequence in its current state
    #[error("Invalid state: {0}")]
    InvalidState(&'static str),

    /// A stream read found no bit characters before the source ran out
    #[error("End of data: no bit characters found")]
    EndOfData,

    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for `bitseq` operations.
///
/// This is a type alias for `Result<T, BitSeqError>` and is used
/// throughout the crate for consistency.
pub type Result<T> = std::result::Result<T, BitSeqError>;
