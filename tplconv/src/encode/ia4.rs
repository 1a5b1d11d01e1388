//! IA4: 4-bit intensity and 4-bit alpha per byte, 8×4 blocks.

use super::quantize;
use crate::format::TextureFormat;
use crate::texel::RasterImage;

/// Each texel becomes `(alpha << 4) | intensity`.
pub(super) fn encode(image: &RasterImage, output: &mut Vec<u8>) {
    let block = TextureFormat::IA4.geometry().block;

    for (x, y) in block.positions(image.width(), image.height()) {
        let texel = image.texel_or_transparent(x, y);
        let intensity = quantize(texel.intensity(), 15);
        let alpha = quantize(texel.a(), 15);
        output.push(((alpha << 4) | intensity) as u8);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::test_support::solid;
    use crate::texel::Texel;

    fn run(image: &RasterImage) -> Vec<u8> {
        let mut output = Vec::new();
        encode(image, &mut output);
        output
    }

    #[test]
    fn test_alpha_high_intensity_low() {
        let output = run(&solid(8, 4, Texel::new(255, 255, 255, 0)));
        assert_eq!(output, vec![0x0F; 32]);

        let output = run(&solid(8, 4, Texel::new(0, 0, 0, 255)));
        assert_eq!(output, vec![0xF0; 32]);
    }

    #[test]
    fn test_quantization() {
        // intensity (90+90+90)/3 = 90 → 5; alpha 136 → 8
        let output = run(&solid(1, 1, Texel::new(90, 90, 90, 136)));
        assert_eq!(output[0], 0x85);
    }

    #[test]
    fn test_padding_is_zero_in_place() {
        // 9×1 → two 8×4 blocks; texel x=8 is the first of block 2
        let output = run(&solid(9, 1, Texel::new(255, 255, 255, 255)));
        assert_eq!(output.len(), 64);
        assert_eq!(&output[0..8], &[0xFF; 8]);
        assert!(output[8..32].iter().all(|&b| b == 0));
        assert_eq!(output[32], 0xFF);
        assert!(output[33..].iter().all(|&b| b == 0));
    }
}
