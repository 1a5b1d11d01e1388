//! Error types for texture encoding operations.

use thiserror::Error;

/// Errors that can occur while converting an image to a TPL texture.
///
/// Every variant is terminal for the conversion: no partial output is
/// produced.
#[derive(Debug, Error)]
pub enum TextureError {
    /// Image dimensions cannot be encoded.
    #[error("Invalid image {width}×{height}: {reason}")]
    InvalidImage {
        width: u32,
        height: u32,
        reason: String,
    },

    /// The output buffer size overflows or cannot be allocated.
    #[error("Buffer allocation failed for {width}×{height}: {reason}")]
    BufferAllocation {
        width: u32,
        height: u32,
        reason: String,
    },

    /// Writing the container header failed.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] std::io::Error),
}
