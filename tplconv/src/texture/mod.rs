//! Texture encoding abstractions.
//!
//! The [`TextureEncoder`] trait is the seam between callers that hold a
//! decoded RGBA image and the container encoder that turns it into file
//! bytes. Texel formats themselves are not trait objects: a single
//! [`TplTextureEncoder`] dispatches on [`TextureFormat`](crate::TextureFormat).
//!
//! ```text
//! RgbaImage / TexelSource
//!            │
//!            ▼
//! ┌─────────────────────┐
//! │  TextureEncoder     │ (trait)
//! └──────────┬──────────┘
//!            ▼
//! ┌─────────────────────┐
//! │ TplTextureEncoder   │── TextureFormat ──► I4 | IA4 | RGB565 | RGB5A3
//! └─────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use tplconv::texture::{TextureEncoder, TplTextureEncoder};
//! use tplconv::TextureFormat;
//! use image::RgbaImage;
//!
//! let encoder = TplTextureEncoder::new(TextureFormat::I4);
//! let bytes = encoder.encode(&RgbaImage::new(8, 8)).unwrap();
//! assert_eq!(bytes.len(), encoder.expected_size(8, 8));
//! ```

mod encoder;
mod error;
mod tpl;

pub use encoder::TextureEncoder;
pub use error::TextureError;
pub use tpl::TplTextureEncoder;
