//! RGB565: 16-bit colour, alpha ignored, 4×4 blocks.

use crate::format::TextureFormat;
use crate::texel::{RasterImage, Texel};

/// Pack a texel as `(r >> 3) | (g >> 2) << 5 | (b >> 3) << 11`.
///
/// Red occupies the low bits and blue the high bits.
pub(crate) fn pack(texel: Texel) -> u16 {
    let r = (texel.r() >> 3) as u16;
    let g = (texel.g() >> 2) as u16;
    let b = (texel.b() >> 3) as u16;
    r | (g << 5) | (b << 11)
}

pub(super) fn encode(image: &RasterImage, output: &mut Vec<u8>) {
    let block = TextureFormat::RGB565.geometry().block;

    for (x, y) in block.positions(image.width(), image.height()) {
        let value = pack(image.texel_or_transparent(x, y));
        output.extend_from_slice(&value.to_be_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::test_support::solid;

    #[test]
    fn test_pack_channels() {
        assert_eq!(pack(Texel::new(255, 0, 0, 255)), 0x001F);
        assert_eq!(pack(Texel::new(0, 255, 0, 255)), 0x07E0);
        assert_eq!(pack(Texel::new(0, 0, 255, 255)), 0xF800);
        assert_eq!(pack(Texel::new(255, 255, 255, 0)), 0xFFFF);
    }

    #[test]
    fn test_pack_truncates_low_bits() {
        // 0x0F >> 3 = 1, 0x07 >> 2 = 1, 0x17 >> 3 = 2
        assert_eq!(pack(Texel::new(0x0F, 0x07, 0x17, 0)), 1 | (1 << 5) | (2 << 11));
    }

    #[test]
    fn test_encode_big_endian() {
        let mut output = Vec::new();
        encode(&solid(4, 4, Texel::new(0, 0, 255, 255)), &mut output);
        assert_eq!(output.len(), 32);
        assert!(output.chunks(2).all(|pair| pair == [0xF8, 0x00]));
    }

    #[test]
    fn test_encode_padding_in_place() {
        let mut output = Vec::new();
        encode(&solid(1, 1, Texel::new(255, 255, 255, 255)), &mut output);
        assert_eq!(&output[0..2], &[0xFF, 0xFF]);
        assert!(output[2..].iter().all(|&b| b == 0));
    }
}
