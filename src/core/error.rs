//! Custom error types for the shell.
//!
//! - [`FsError`] - filesystem outcomes that commands translate into messages
//! - [`ShellError`] - session-level failures that end the process

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Typed outcome of a failed filesystem operation.
#[derive(Debug, Error)]
pub enum FsError {
    /// Item absent
    #[error("{0}: no such file or directory")]
    NotFound(PathBuf),
    /// Directory expected but file found, or vice versa
    #[error("{0}: wrong item type")]
    WrongType(PathBuf),
    /// Name collision on create
    #[error("{0}: already exists")]
    AlreadyExists(PathBuf),
    /// Removal of a directory that still has entries
    #[error("{0}: directory not empty")]
    NotEmpty(PathBuf),
    /// Any other OS-level failure
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FsError {
    /// Classify an `io::Error` raised while operating on `path`.
    pub fn from_io(path: impl Into<PathBuf>, err: io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound(path),
            io::ErrorKind::AlreadyExists => Self::AlreadyExists(path),
            io::ErrorKind::DirectoryNotEmpty => Self::NotEmpty(path),
            io::ErrorKind::NotADirectory | io::ErrorKind::IsADirectory => Self::WrongType(path),
            _ => Self::Io { path, source: err },
        }
    }
}

/// Failures that abort the whole session.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("root directory {0} does not exist or is not a directory")]
    InvalidRoot(PathBuf),
    #[error("cannot read root directory: {0}")]
    RootUnreadable(#[source] FsError),
    #[error("line editor failed: {0}")]
    Editor(#[from] rustyline::error::ReadlineError),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}
