//! Error types for the codec crate.

use thiserror::Error;

/// Errors that can occur when reading color strings or color space names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The input matches none of the accepted color grammars.
    #[error("unrecognized color format: '{0}'")]
    UnrecognizedColorFormat(String),

    /// The input is not the name of a supported color space.
    #[error("unknown color space '{0}' (expected \"rgb\" or \"hsl\")")]
    UnknownColorSpace(String),
}

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;
