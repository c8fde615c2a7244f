use std::io;
use std::path::PathBuf;

/// Error type for icon generation.
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("source file '{}' does not exist", .0.display())]
    MissingSource(PathBuf),

    #[error("unsupported input format '{extension}' for '{}'", .path.display())]
    UnsupportedFormat { path: PathBuf, extension: String },

    #[error("failed to decode '{}': {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to rasterize '{}': {reason}", .path.display())]
    Rasterize { path: PathBuf, reason: String },

    #[error("failed to encode '{}': {reason}", .path.display())]
    Encode { path: PathBuf, reason: String },

    #[error("failed to create directory '{}': {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl IconError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        IconError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn encode(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        IconError::Encode {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
