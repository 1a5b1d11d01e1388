//! Common types shared across CLI commands.

use clap::ValueEnum;
use tplconv::TextureFormat;

/// TPL texel format selection for CLI arguments.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum FormatArg {
    /// 4-bit intensity (greyscale, no alpha)
    I4,
    /// 4-bit intensity with 4-bit alpha
    Ia4,
    /// 16-bit colour without alpha
    Rgb565,
    /// 16-bit colour with 3-bit alpha for translucent texels
    Rgb5a3,
}

impl From<FormatArg> for TextureFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::I4 => TextureFormat::I4,
            FormatArg::Ia4 => TextureFormat::IA4,
            FormatArg::Rgb565 => TextureFormat::RGB565,
            FormatArg::Rgb5a3 => TextureFormat::RGB5A3,
        }
    }
}
