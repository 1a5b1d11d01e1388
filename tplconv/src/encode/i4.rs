//! I4: 4-bit intensity, two texels per byte, 8×8 blocks.

use super::quantize;
use crate::format::TextureFormat;
use crate::texel::RasterImage;

/// Pack texel pairs as `(first << 4) | second`.
///
/// The second texel of a pair is looked up by linear index rather than by
/// `(x + 1, y)`. On odd-width images the last pair of a row therefore takes
/// its low nibble from the first texel of the next row, and only an index
/// past the end of the texel array reads as zero.
pub(super) fn encode(image: &RasterImage, output: &mut Vec<u8>) {
    let block = TextureFormat::I4.geometry().block;
    let texels = image.texels();

    for (x, y) in block
        .positions(image.width(), image.height())
        .filter(|(x, _)| x % 2 == 0)
    {
        if x >= image.width() || y >= image.height() {
            output.push(0);
            continue;
        }

        let index = image.linear_index(x, y);
        let first = quantize(texels[index].intensity(), 15);
        let second = texels
            .get(index + 1)
            .map_or(0, |texel| quantize(texel.intensity(), 15));

        output.push(((first << 4) | second) as u8);
    }
}
