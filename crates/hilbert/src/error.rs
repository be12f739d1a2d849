use std::{io, result};

use thiserror::Error;

use crate::curve::MAX_DEPTH;

/// Errors produced while building, generating or exporting curves.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested recursion depth would produce an unreasonable number of points.
    #[error("recursion depth {0} exceeds the maximum of {max}", max = MAX_DEPTH)]
    DepthTooLarge(u32),
    /// Nothing has been generated yet, so there is nothing to export.
    #[error("no {0} to save")]
    NoData(&'static str),
    /// A line of a point file could not be parsed.
    #[error("line {line}: cannot parse point from '{content}'")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// Offending line, trimmed.
        content: String,
    },
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Crate-wide result alias.
pub type Result<T> = result::Result<T, Error>;
