//! Error types for the colortween crate.

use std::io;
use std::path::PathBuf;

use colortween_codec::CodecError;
use thiserror::Error;

/// Errors that can occur when configuring or running color tweens.
#[derive(Debug, Error)]
pub enum TweenError {
    /// A color string or color space name could not be read.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// The configuration is malformed or names an unsupported mode.
    #[error("invalid configuration{}: {message}", location(.path))]
    Config {
        /// Source file, when the configuration came from disk.
        path: Option<PathBuf>,
        /// What was wrong.
        message: String,
    },

    /// A configuration file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// The file that failed to load.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl TweenError {
    /// Creates a configuration error with no source file.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            path: None,
            message: message.into(),
        }
    }

    /// Attaches a source file to a configuration error.
    pub fn in_file(self, file: impl Into<PathBuf>) -> Self {
        match self {
            Self::Config { message, .. } => Self::Config {
                path: Some(file.into()),
                message,
            },
            other => other,
        }
    }
}

fn location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" in {}", p.display()))
        .unwrap_or_default()
}

/// Result type for colortween operations.
pub type Result<T> = std::result::Result<T, TweenError>;
