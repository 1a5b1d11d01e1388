//! RGB5A3: 16-bit colour with a per-texel alpha mode, 4×4 blocks.
//!
//! Bit 15 selects the mode:
//!
//! ```text
//! 0 | aaa | rrrr | gggg | bbbb     alpha <= 0xDA
//! 1 | rrrrr | ggggg | bbbbb        alpha >  0xDA (opaque, alpha dropped)
//! ```

use super::quantize;
use crate::format::TextureFormat;
use crate::texel::{RasterImage, Texel};

/// Highest alpha still stored in the translucent 4-4-4-3 mode.
pub const OPAQUE_THRESHOLD: u8 = 0xDA;

const OPAQUE_BIT: u16 = 1 << 15;

pub(crate) fn pack(texel: Texel) -> u16 {
    if texel.a() <= OPAQUE_THRESHOLD {
        let a = quantize(texel.a(), 7);
        let r = quantize(texel.r(), 15);
        let g = quantize(texel.g(), 15);
        let b = quantize(texel.b(), 15);
        ((a << 12) | (r << 8) | (g << 4) | b) as u16
    } else {
        let r = quantize(texel.r(), 31);
        let g = quantize(texel.g(), 31);
        let b = quantize(texel.b(), 31);
        OPAQUE_BIT | ((r << 10) | (g << 5) | b) as u16
    }
}

pub(super) fn encode(image: &RasterImage, output: &mut Vec<u8>) {
    let block = TextureFormat::RGB5A3.geometry().block;

    for (x, y) in block.positions(image.width(), image.height()) {
        let value = pack(image.texel_or_transparent(x, y));
        output.extend_from_slice(&value.to_be_bytes());
    }
}
