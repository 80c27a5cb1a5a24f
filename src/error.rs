//! Error types for stamping runs.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors produced while loading, incrementing, or persisting a build number.
#[derive(Debug, Error)]
pub enum StampError {
    /// The counter store exists but does not hold a usable build number.
    #[error("{}: invalid build number: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },

    /// Reading or writing a file failed.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The counter file and the generated header resolve to the same file.
    #[error("{}: counter file and header must be different files", .0.display())]
    SamePath(PathBuf),

    /// Incrementing would overflow the counter.
    #[error("build number {0} cannot be incremented without overflow")]
    Overflow(i64),
}

impl StampError {
    pub(crate) fn parse(path: &Path, reason: impl Into<String>) -> Self {
        StampError::Parse {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }

    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        StampError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, StampError>;
