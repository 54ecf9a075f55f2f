//! Error type for matrix file I/O

use smtx_core::{ErrorCategory, SmtxError};
use std::path::PathBuf;
use thiserror::Error;

/// Errors from reading, parsing, or writing matrix files
#[derive(Error, Debug)]
pub enum Error {
    /// Parsing, shape, or not-found errors from the core
    #[error(transparent)]
    Matrix(#[from] SmtxError),

    /// Any I/O failure other than a missing input file
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Check whether the input file could not be found
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Matrix(SmtxError::NotFound { .. }))
    }

    /// Get the broad category of this error
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Matrix(err) => err.category(),
            Error::Io { .. } => ErrorCategory::Input,
        }
    }
}

/// Result type for matrix file I/O
pub type Result<T> = std::result::Result<T, Error>;
