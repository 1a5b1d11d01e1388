//! tplconv - encode raster images into TPL hardware textures
//!
//! This library converts an in-memory RGBA image into a single-image TPL
//! texture container in one of four texel formats: I4, IA4, RGB565 or
//! RGB5A3.
//!
//! Conversion is a pure, synchronous transform:
//!
//! ```text
//! TexelSource ─► RasterImage ─► encode_payload(format) ─► TplHeader + payload
//! ```
//!
//! # Example
//!
//! ```
//! use image::{Rgba, RgbaImage};
//! use tplconv::{convert, TextureFormat};
//!
//! let image = RgbaImage::from_pixel(1, 1, Rgba([255, 255, 255, 255]));
//! let blob = convert(&image, TextureFormat::I4).unwrap();
//!
//! assert_eq!(&blob[0..4], &[0x00, 0x20, 0xAF, 0x30]);
//! assert_eq!(blob[tplconv::tpl::HEADER_SIZE], 0xF0);
//! ```

pub mod encode;
pub mod format;
pub mod texel;
pub mod texture;
pub mod tiling;
pub mod tpl;

pub use format::TextureFormat;
pub use texel::{RasterImage, Texel, TexelSource};
pub use texture::{TextureEncoder, TextureError, TplTextureEncoder};

/// Convert `source` into a complete TPL file using `format`.
///
/// The result is the 56-byte container header followed by the encoded texel
/// payload. Calling this twice with the same input yields identical bytes.
///
/// # Errors
///
/// See [`TextureError`]. A failed conversion produces no output.
pub fn convert<S>(source: &S, format: TextureFormat) -> Result<Vec<u8>, TextureError>
where
    S: TexelSource + ?Sized,
{
    TplTextureEncoder::new(format).encode_source(source)
}
