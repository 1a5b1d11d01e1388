//! Supported TPL texel formats.

use std::fmt;
use std::str::FromStr;

use crate::tiling::BlockGeometry;

/// Fixed block geometry and texel size of a format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatGeometry {
    pub block: BlockGeometry,
    pub bits_per_texel: u32,
}

/// Texel formats this crate can encode.
///
/// The discriminants are the format ids stored in the TPL image header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum TextureFormat {
    /// 4-bit intensity, 8×8 blocks.
    I4 = 0,
    /// 4-bit intensity + 4-bit alpha, 8×4 blocks.
    IA4 = 2,
    /// 16-bit colour without alpha, 4×4 blocks.
    RGB565 = 4,
    /// 16-bit colour with either 3-bit alpha or 1-bit opaque mode, 4×4 blocks.
    RGB5A3 = 5,
}

impl TextureFormat {
    /// Every supported format, in id order.
    pub const ALL: [TextureFormat; 4] = [
        TextureFormat::I4,
        TextureFormat::IA4,
        TextureFormat::RGB565,
        TextureFormat::RGB5A3,
    ];

    /// Format id written to the image header.
    pub const fn id(self) -> u32 {
        self as u32
    }

    /// Look up a format by its header id.
    pub fn from_id(id: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|format| format.id() == id)
    }

    pub const fn geometry(self) -> FormatGeometry {
        match self {
            TextureFormat::I4 => FormatGeometry {
                block: BlockGeometry::new(8, 8),
                bits_per_texel: 4,
            },
            TextureFormat::IA4 => FormatGeometry {
                block: BlockGeometry::new(8, 4),
                bits_per_texel: 8,
            },
            TextureFormat::RGB565 | TextureFormat::RGB5A3 => FormatGeometry {
                block: BlockGeometry::new(4, 4),
                bits_per_texel: 16,
            },
        }
    }

    /// Short upper-case name, as used in tooling output.
    pub const fn name(self) -> &'static str {
        match self {
            TextureFormat::I4 => "I4",
            TextureFormat::IA4 => "IA4",
            TextureFormat::RGB565 => "RGB565",
            TextureFormat::RGB5A3 => "RGB5A3",
        }
    }
}

impl fmt::Display for TextureFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown format name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown texture format: {0}")]
pub struct ParseFormatError(String);

impl FromStr for TextureFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseFormatError(s.to_string()))
    }
}
