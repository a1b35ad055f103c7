//! File-system specific error type wrapping io and image errors.

use std::path::{Path, PathBuf};

use homewatch_domain::error::{HomewatchError, NotFoundError};

/// Errors originating from the file-system adapter.
#[derive(Debug, thiserror::Error)]
pub enum FsError {
    /// The path does not exist.
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// Any other io failure.
    #[error("io error")]
    Io(#[from] std::io::Error),

    /// The file is not a decodable image, or encoding failed.
    #[error("image error")]
    Image(#[from] image::ImageError),

    /// The blocking render task panicked or was cancelled.
    #[error("render task failed")]
    Join(#[from] tokio::task::JoinError),
}

impl FsError {
    /// Classify an io error raised while accessing `path`.
    pub(crate) fn at(path: &Path, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound(path.to_path_buf())
        } else {
            Self::Io(err)
        }
    }
}

impl From<FsError> for HomewatchError {
    fn from(err: FsError) -> Self {
        match err {
            FsError::NotFound(path) => NotFoundError {
                kind: "File",
                name: path.display().to_string(),
            }
            .into(),
            other => Self::io(other),
        }
    }
}
