use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, EvalError>;

#[derive(Debug, Error)]
pub enum EvalError {
    /// Read or write failure on an already opened stream
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure to open, stat, read or write a named file
    #[error("I/O error for path '{}': {source}", .path.display())]
    File { path: PathBuf, source: io::Error },

    /// The reference stream does not line up with the produced stream.
    /// `line` is the 1-based produced line at which this was detected.
    #[error("produced and reference streams are misaligned at line {line}")]
    Misaligned { line: usize },

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),
}

impl EvalError {
    pub(crate) fn file(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::File {
            path: path.into(),
            source,
        }
    }
}
