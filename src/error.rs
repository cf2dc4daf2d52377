//! Error types for xsd2xpath
//!
//! This module defines all error types used throughout the library.
//! At the public boundary every error collapses onto one of two kinds,
//! see [`ErrorKind`].

use thiserror::Error;

/// Result type alias using xsd2xpath Error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for xsd2xpath operations
#[derive(Error, Debug)]
pub enum Error {
    /// The schema text is not well-formed XML
    #[error("{message} at {row}:{col}")]
    MalformedDocument {
        /// Parser message
        message: String,
        /// 1-based line of the offending text
        row: u32,
        /// 1-based column of the offending text
        col: u32,
    },

    /// Resource loading error
    #[error("resource error: {0}")]
    Resource(String),

    /// Limit exceeded error
    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Boundary classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The document could not be parsed as XML
    MalformedDocument,
    /// Anything else that went wrong while loading or traversing
    UnexpectedFailure,
}

impl Error {
    /// Classify this error for reporting
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MalformedDocument { .. } => ErrorKind::MalformedDocument,
            _ => ErrorKind::UnexpectedFailure,
        }
    }
}

impl From<roxmltree::Error> for Error {
    fn from(err: roxmltree::Error) -> Self {
        let pos = err.pos();
        Error::MalformedDocument {
            message: err.to_string(),
            row: pos.row,
            col: pos.col,
        }
    }
}
