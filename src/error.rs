// src/error.rs
//! Crate-wide error type.
//!
//! Parsing and encoding either produce a complete result or fail; nothing is
//! persisted or exported from a failed operation. Store and sink failures
//! surface as `Io`/`Json` and end the current operation without retry.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The page or a row lacks the structure the parser reads from.
    #[error("Structural precondition failed: {0}")]
    StructuralPrecondition(String),

    /// An exported line did not split into the expected number of fields.
    #[error("Malformed export line {line}: expected {expected} fields, found {found}")]
    MalformedLine {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// Bad command line.
    #[error("{0}")]
    Usage(String),

    /// The store (or a persisted value) could not be read back.
    #[error("Store error: {0}")]
    Store(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn structural(message: impl Into<String>) -> Self {
        Self::StructuralPrecondition(message.into())
    }

    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }

    pub fn store(message: impl Into<String>) -> Self {
        Self::Store(message.into())
    }

    /// Collaborator failures (store/sink I/O) as opposed to bad input.
    pub fn is_collaborator_failure(&self) -> bool {
        matches!(self, Self::Io(_) | Self::Json(_) | Self::Store(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
