use std::path::PathBuf;

use thiserror::Error;

use super::literal::LiteralError;

/// Why a single field of a progress line could not be decoded.
#[derive(Debug, Error, PartialEq)]
pub enum FieldError {
    #[error("missing ':' between time and data")]
    MissingColon,
    #[error("expected 4 ';'-separated fields after ':', found {0}")]
    FieldCount(usize),
    #[error("{field} '{text}' is not an integer")]
    NotAnInteger { field: &'static str, text: String },
    #[error("vector literal: {0}")]
    Vector(#[from] LiteralError),
}

/// Errors produced while loading a progress log.
///
/// Every variant aborts the whole load; no partial dataset is produced.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `line` is 1-based.
    #[error("line {line}: {reason} (in '{content}')")]
    Parse {
        line: usize,
        content: String,
        reason: FieldError,
    },

    #[error("line {line}: vector has {found} components but line 1 has {expected}")]
    Schema {
        line: usize,
        expected: usize,
        found: usize,
    },
}
