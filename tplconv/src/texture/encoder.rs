//! The texture encoder trait.

use image::RgbaImage;

use super::TextureError;

/// Encodes RGBA images into a texture container.
///
/// Implementations must be pure: encoding the same image twice yields the
/// same bytes.
pub trait TextureEncoder: Send + Sync {
    /// Encode `image` into a complete texture file.
    fn encode(&self, image: &RgbaImage) -> Result<Vec<u8>, TextureError>;

    /// Total size in bytes of the file [`encode`](Self::encode) produces for
    /// an image of the given dimensions.
    fn expected_size(&self, width: u32, height: u32) -> usize;

    /// File extension without the leading dot.
    fn extension(&self) -> &str;

    /// Human-readable encoder name.
    fn name(&self) -> &str;
}
