//! TPL texture encoder implementation.
//!
//! Provides a `TextureEncoder` implementation that encodes RGBA images to
//! single-image TPL files.

use image::RgbaImage;
use tracing::debug;

use crate::encode::{encode_payload, payload_size};
use crate::format::TextureFormat;
use crate::texel::{RasterImage, TexelSource};
use crate::texture::{TextureEncoder, TextureError};
use crate::tpl::{build_blob, TplHeader, HEADER_SIZE};

/// TPL texture encoder.
///
/// # Example
///
/// ```
/// use tplconv::texture::{TextureEncoder, TplTextureEncoder};
/// use tplconv::TextureFormat;
///
/// let encoder = TplTextureEncoder::new(TextureFormat::RGB5A3);
///
/// assert_eq!(encoder.extension(), "tpl");
/// assert_eq!(encoder.name(), "TPL RGB5A3");
/// assert_eq!(encoder.expected_size(4, 4), 56 + 32);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TplTextureEncoder {
    format: TextureFormat,
}

impl TplTextureEncoder {
    pub fn new(format: TextureFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> TextureFormat {
        self.format
    }

    /// Encode any texel source into a TPL file.
    ///
    /// # Errors
    ///
    /// - [`TextureError::InvalidImage`] for zero or >65535 dimensions
    /// - [`TextureError::BufferAllocation`] if the payload cannot be allocated
    /// - [`TextureError::Serialization`] if the header cannot be written
    pub fn encode_source<S>(&self, source: &S) -> Result<Vec<u8>, TextureError>
    where
        S: TexelSource + ?Sized,
    {
        // Reject dimensions the header cannot describe before reading any pixel.
        let (width, height) = source.bounds();
        let header = TplHeader::new(width, height, self.format)?;
        let raster = RasterImage::from_source(source)?;
        let payload = encode_payload(self.format, &raster)?;
        let blob = build_blob(&header, &payload)?;

        debug!(
            format = %self.format,
            width = raster.width(),
            height = raster.height(),
            bytes = blob.len(),
            "Encoded TPL texture"
        );

        Ok(blob)
    }
}

impl TextureEncoder for TplTextureEncoder {
    fn encode(&self, image: &RgbaImage) -> Result<Vec<u8>, TextureError> {
        self.encode_source(image)
    }

    /// Returns only the header size when the payload size is not computable.
    fn expected_size(&self, width: u32, height: u32) -> usize {
        HEADER_SIZE + payload_size(self.format, width, height).unwrap_or(0)
    }

    fn extension(&self) -> &str {
        "tpl"
    }

    fn name(&self) -> &str {
        match self.format {
            TextureFormat::I4 => "TPL I4",
            TextureFormat::IA4 => "TPL IA4",
            TextureFormat::RGB565 => "TPL RGB565",
            TextureFormat::RGB5A3 => "TPL RGB5A3",
        }
    }
}
