use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Application-level errors (file and command layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Input file '{}' not found", path.display())]
    FileNotFound { path: PathBuf },

    #[error("No permission to access '{}'", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot write output file '{}': {source}", path.display())]
    OutputNotWritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    ServiceError(#[from] trimics_service::error::ServiceError),

    #[error(transparent)]
    RfcError(#[from] trimics_rfc::error::RfcError),

    #[error(transparent)]
    CoreError(#[from] trimics_core::error::CoreError),
}

impl AppError {
    /// Classifies a failure to read the input file.
    #[must_use]
    pub fn from_read(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => Self::FileNotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Io { path, source },
        }
    }

    /// Wraps a failure to write the output file, whatever its cause.
    #[must_use]
    pub fn from_write(path: &Path, source: io::Error) -> Self {
        Self::OutputNotWritable {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;
