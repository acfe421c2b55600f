//! Error types for keydiff

use std::path::PathBuf;

use thiserror::Error;

/// Fatal conditions that stop a comparison before or during its single pass
#[derive(Debug, Error)]
pub enum ReconError {
    #[error("invalid arguments: {0}")]
    InvalidArgumentShape(String),

    #[error("invalid file name: '{0}'")]
    InvalidFileName(String),

    #[error("invalid key column: '{0}'")]
    InvalidKeyName(String),

    #[error("invalid degree of precision: '{0}'")]
    InvalidPrecisionValue(String),

    #[error("invalid exclude column: '{0}'")]
    InvalidExcludeName(String),

    #[error("key and exclude columns overlap: '{0}'")]
    KeyExcludeOverlap(String),

    #[error("incorrect number of files specified: expected 2, found {0}")]
    WrongFileCount(usize),

    #[error("key column '{column}' was not found in the header of {}", .file.display())]
    KeyNotFoundInHeader { column: String, file: PathBuf },

    #[error("exclude column '{column}' was not found in the header of {}", .file.display())]
    ExcludeNotFoundInHeader { column: String, file: PathBuf },

    #[error("the headers of {} and {} do not match", .reference.display(), .subject.display())]
    HeaderMismatch { reference: PathBuf, subject: PathBuf },

    #[error("no header line in file: {}", .0.display())]
    EmptyFile(PathBuf),

    #[error("failed to open {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ReconError {
    /// Process exit status reported for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            ReconError::InvalidArgumentShape(_) => 1,
            ReconError::InvalidFileName(_) => 2,
            ReconError::InvalidKeyName(_) => 3,
            ReconError::InvalidPrecisionValue(_) => 4,
            ReconError::InvalidExcludeName(_) => 5,
            ReconError::KeyExcludeOverlap(_) => 6,
            ReconError::WrongFileCount(_) => 7,
            ReconError::KeyNotFoundInHeader { .. } => 8,
            ReconError::ExcludeNotFoundInHeader { .. } => 9,
            ReconError::HeaderMismatch { .. } => 10,
            ReconError::EmptyFile(_) => 11,
            ReconError::Io { .. } | ReconError::Read { .. } => 12,
        }
    }
}

pub type Result<T, E = ReconError> = std::result::Result<T, E>;
