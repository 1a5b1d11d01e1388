//! Per-format texel encoders.
//!
//! Each format lives in its own module as a stateless function over a
//! [`RasterImage`]. [`encode_payload`] sizes and allocates the output once,
//! then dispatches on [`TextureFormat`].
//!
//! All encoders share the same shape: walk the padded image in tiled order
//! (see [`BlockGeometry::positions`](crate::tiling::BlockGeometry::positions))
//! and emit the packed bytes for each position. Positions outside the image
//! are encoded as transparent black rather than skipped, so every block has
//! its full size.

mod i4;
mod ia4;
mod rgb565;
mod rgb5a3;

use tracing::trace;

use crate::format::TextureFormat;
use crate::texel::RasterImage;
use crate::texture::TextureError;

/// Reduce an 8-bit channel to `max` levels: `(value * max) / 255`.
pub(crate) const fn quantize(value: u8, max: u32) -> u32 {
    value as u32 * max / 255
}

/// Size in bytes of the encoded texel data for a `width`×`height` image.
///
/// This is `pad(width) * pad(height) * bits_per_texel / 8` for the format's
/// block geometry.
///
/// # Errors
///
/// - [`TextureError::InvalidImage`] if either dimension is zero
/// - [`TextureError::BufferAllocation`] if the padded size overflows
pub fn payload_size(
    format: TextureFormat,
    width: u32,
    height: u32,
) -> Result<usize, TextureError> {
    if width == 0 || height == 0 {
        return Err(TextureError::InvalidImage {
            width,
            height,
            reason: "dimensions must be non-zero".to_string(),
        });
    }

    let geometry = format.geometry();
    let overflow = || TextureError::BufferAllocation {
        width,
        height,
        reason: format!("{} payload size overflows", format),
    };

    // Padded dimensions must stay addressable as u32 for the tiled walk.
    let padded_width = padded_u32(width, geometry.block.width).ok_or_else(overflow)?;
    let padded_height = padded_u32(height, geometry.block.height).ok_or_else(overflow)?;

    let bits = (padded_width as u64)
        .checked_mul(padded_height as u64)
        .and_then(|texels| texels.checked_mul(geometry.bits_per_texel as u64))
        .ok_or_else(overflow)?;

    usize::try_from(bits / 8).map_err(|_| overflow())
}

fn padded_u32(value: u32, block: u32) -> Option<u32> {
    let padded = (value as u64).div_ceil(block as u64) * block as u64;
    u32::try_from(padded).ok()
}

/// Encode `image` into the texel layout of `format`.
///
/// The returned buffer is exactly [`payload_size`] bytes long.
///
/// # Errors
///
/// Returns [`TextureError::BufferAllocation`] if the output size overflows
/// or the buffer cannot be allocated.
pub fn encode_payload(format: TextureFormat, image: &RasterImage) -> Result<Vec<u8>, TextureError> {
    let size = payload_size(format, image.width(), image.height())?;

    let mut output = Vec::new();
    output
        .try_reserve_exact(size)
        .map_err(|e| TextureError::BufferAllocation {
            width: image.width(),
            height: image.height(),
            reason: e.to_string(),
        })?;

    match format {
        TextureFormat::I4 => i4::encode(image, &mut output),
        TextureFormat::IA4 => ia4::encode(image, &mut output),
        TextureFormat::RGB565 => rgb565::encode(image, &mut output),
        TextureFormat::RGB5A3 => rgb5a3::encode(image, &mut output),
    }

    debug_assert_eq!(output.len(), size);
    trace!(
        format = %format,
        width = image.width(),
        height = image.height(),
        bytes = output.len(),
        "Encoded texel payload"
    );

    Ok(output)
}


#[cfg(test)]
mod tests {
    use super::test_support::{gradient, solid};
    use super::*;
    use crate::texel::Texel;

    #[test]
    fn test_quantize() {
        assert_eq!(quantize(255, 15), 15);
        assert_eq!(quantize(254, 15), 14);
        assert_eq!(quantize(0, 31), 0);
        assert_eq!(quantize(255, 7), 7);
        assert_eq!(quantize(0xDA, 7), 5);
    }

    #[test]
    fn test_payload_size_exact_multiples() {
        assert_eq!(payload_size(TextureFormat::I4, 8, 8).unwrap(), 32);
        assert_eq!(payload_size(TextureFormat::IA4, 8, 4).unwrap(), 32);
        assert_eq!(payload_size(TextureFormat::RGB565, 4, 4).unwrap(), 32);
        assert_eq!(payload_size(TextureFormat::RGB5A3, 16, 8).unwrap(), 256);
    }

    #[test]
    fn test_payload_size_padded() {
        // 1×1 pads to one whole block
        assert_eq!(payload_size(TextureFormat::I4, 1, 1).unwrap(), 32);
        assert_eq!(payload_size(TextureFormat::IA4, 1, 1).unwrap(), 32);
        assert_eq!(payload_size(TextureFormat::RGB565, 1, 1).unwrap(), 32);
        // 10×5 → 16×8 for I4
        assert_eq!(payload_size(TextureFormat::I4, 10, 5).unwrap(), 64);
    }

    #[test]
    fn test_payload_size_zero_dimensions() {
        assert!(matches!(
            payload_size(TextureFormat::RGB565, 0, 4),
            Err(TextureError::InvalidImage { .. })
        ));
    }

    #[test]
    fn test_payload_size_overflowing_dimensions() {
        assert!(matches!(
            payload_size(TextureFormat::I4, u32::MAX, 1),
            Err(TextureError::BufferAllocation { .. })
        ));
    }

    #[test]
    fn test_encode_payload_matches_size() {
        let image = gradient(13, 7);
        for format in TextureFormat::ALL {
            let payload = encode_payload(format, &image).unwrap();
            assert_eq!(payload.len(), payload_size(format, 13, 7).unwrap());
        }
    }

    #[test]
    fn test_encode_payload_transparent_image_is_zero() {
        let image = solid(5, 3, Texel::TRANSPARENT);
        for format in TextureFormat::ALL {
            let payload = encode_payload(format, &image).unwrap();
            assert!(payload.iter().all(|&b| b == 0), "{} not all zero", format);
        }
    }

    mod property_tests {
        use super::*;
        use crate::tiling::pad;
        use proptest::prelude::*;

        fn any_format() -> impl Strategy<Value = TextureFormat> {
            prop::sample::select(TextureFormat::ALL.to_vec())
        }

        proptest! {
            #[test]
            fn test_payload_length_matches_padded_geometry(
                width in 1u32..48,
                height in 1u32..48,
                format in any_format()
            ) {
                let geometry = format.geometry();
                let expected = pad(width, geometry.block.width)
                    * pad(height, geometry.block.height)
                    * geometry.bits_per_texel / 8;

                let payload = encode_payload(format, &gradient(width, height))?;
                prop_assert_eq!(payload.len(), expected as usize);
            }

            #[test]
            fn test_encoding_is_deterministic(
                width in 1u32..24,
                height in 1u32..24,
                format in any_format()
            ) {
                let image = gradient(width, height);
                let first = encode_payload(format, &image)?;
                let second = encode_payload(format, &image)?;
                prop_assert_eq!(first, second);
            }
        }
    }
}
