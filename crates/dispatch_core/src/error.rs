use std::path::PathBuf;

use thiserror::Error;

use crate::heap::HeapError;

/// Errors that abort a dispatch run.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("cannot open locations file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read locations: {0}")]
    Read(#[from] std::io::Error),
    #[error("locations exhausted after {consumed} records")]
    InsufficientRecords { consumed: usize },
    #[error("malformed location on line {line}: {content:?}")]
    MalformedRecord { line: usize, content: String },
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
    #[error(transparent)]
    Heap(#[from] HeapError),
}

impl SimError {
    /// True for failures detected before the first heap operation.
    pub fn is_configuration(&self) -> bool {
        matches!(self, SimError::Io { .. } | SimError::InvalidParameter { .. })
    }
}
