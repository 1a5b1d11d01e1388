//! TPL container header.
//!
//! A single-image TPL file starts with a 56-byte header, written big-endian
//! with no alignment padding between fields:
//!
//! ```text
//! 0x00  u32  magic                 0x0020AF30
//! 0x04  u32  image count           1
//! 0x08  u32  image table offset    0x0C
//! 0x0C  u32  image header offset   0x14
//! 0x10  u32  palette header offset 0
//! 0x14  u16  height
//! 0x16  u16  width
//! 0x18  u32  format id
//! 0x1C  u32  data offset           64
//! 0x20  u32  wrap S
//! 0x24  u32  wrap T
//! 0x28  u32  min filter
//! 0x2C  u32  mag filter
//! 0x30  f32  LOD bias
//! 0x34  u8   edge LOD enable
//! 0x35  u8   min LOD
//! 0x36  u8   max LOD
//! 0x37  u8   unpacked
//! ```
//!
//! The texel payload follows the header directly.

use std::io::Write;

use crate::format::TextureFormat;
use crate::texture::TextureError;

/// TPL file magic.
pub const TPL_MAGIC: u32 = 0x0020_AF30;

/// Serialized size of [`TplHeader`].
pub const HEADER_SIZE: usize = 56;

pub const IMAGE_TABLE_OFFSET: u32 = 0x0C;
pub const IMAGE_HEADER_OFFSET: u32 = 0x14;

/// Data offset recorded in the image header.
pub const DATA_OFFSET: u32 = 64;

/// Texture coordinate wrap mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[repr(u32)]
pub enum WrapMode {
    #[default]
    Clamp = 0,
    Repeat = 1,
    Mirror = 2,
}

impl WrapMode {
    pub fn from_u32(value: u32) -> Option<Self> {
        match value {
            0 => Some(WrapMode::Clamp),
            1 => Some(WrapMode::Repeat),
            2 => Some(WrapMode::Mirror),
            _ => None,
        }
    }
}

/// Texture sampling filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[repr(u32)]
pub enum FilterMode {
    Near = 0,
    #[default]
    Linear = 1,
    NearMipNear = 2,
    LinearMipNear = 3,
    NearMipLinear = 4,
    LinearMipLinear = 5,
}

impl FilterMode {
    pub fn from_u32(value: u32) -> Option<Self> {
        match value {
            0 => Some(FilterMode::Near),
            1 => Some(FilterMode::Linear),
            2 => Some(FilterMode::NearMipNear),
            3 => Some(FilterMode::LinearMipNear),
            4 => Some(FilterMode::NearMipLinear),
            5 => Some(FilterMode::LinearMipLinear),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    pub magic: u32,
    pub image_count: u32,
    pub image_table_offset: u32,
}

/// One entry of the image table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageTableEntry {
    pub image_header_offset: u32,
    pub palette_header_offset: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageHeader {
    pub height: u16,
    pub width: u16,
    /// Raw format id; see [`ImageHeader::format`].
    pub format: u32,
    pub data_offset: u32,
    pub wrap_s: WrapMode,
    pub wrap_t: WrapMode,
    pub min_filter: FilterMode,
    pub mag_filter: FilterMode,
    pub lod_bias: f32,
    pub edge_lod_enable: u8,
    pub min_lod: u8,
    pub max_lod: u8,
    pub unpacked: u8,
}

impl ImageHeader {
    /// The texel format, if it is one this crate encodes.
    pub fn format(&self) -> Option<TextureFormat> {
        TextureFormat::from_id(self.format)
    }
}

/// Header of a single-image TPL file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TplHeader {
    pub file: FileHeader,
    pub table: ImageTableEntry,
    pub image: ImageHeader,
}

impl TplHeader {
    /// Header for one `width`×`height` image of `format`.
    ///
    /// Sampler fields default to clamped wrapping and linear filtering; LOD
    /// fields are zero.
    ///
    /// # Errors
    ///
    /// Returns [`TextureError::InvalidImage`] if a dimension is zero or does
    /// not fit the 16-bit header fields.
    pub fn new(width: u32, height: u32, format: TextureFormat) -> Result<Self, TextureError> {
        let invalid = |reason: &str| TextureError::InvalidImage {
            width,
            height,
            reason: reason.to_string(),
        };

        if width == 0 || height == 0 {
            return Err(invalid("dimensions must be non-zero"));
        }
        let w = u16::try_from(width).map_err(|_| invalid("width exceeds 65535"))?;
        let h = u16::try_from(height).map_err(|_| invalid("height exceeds 65535"))?;

        Ok(Self {
            file: FileHeader {
                magic: TPL_MAGIC,
                image_count: 1,
                image_table_offset: IMAGE_TABLE_OFFSET,
            },
            table: ImageTableEntry {
                image_header_offset: IMAGE_HEADER_OFFSET,
                palette_header_offset: 0,
            },
            image: ImageHeader {
                height: h,
                width: w,
                format: format.id(),
                data_offset: DATA_OFFSET,
                wrap_s: WrapMode::default(),
                wrap_t: WrapMode::default(),
                min_filter: FilterMode::default(),
                mag_filter: FilterMode::default(),
                lod_bias: 0.0,
                edge_lod_enable: 0,
                min_lod: 0,
                max_lod: 0,
                unpacked: 0,
            },
        })
    }

    /// Write the header big-endian, field by field.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), TextureError> {
        let file = &self.file;
        writer.write_all(&file.magic.to_be_bytes())?;
        writer.write_all(&file.image_count.to_be_bytes())?;
        writer.write_all(&file.image_table_offset.to_be_bytes())?;

        writer.write_all(&self.table.image_header_offset.to_be_bytes())?;
        writer.write_all(&self.table.palette_header_offset.to_be_bytes())?;

        let image = &self.image;
        writer.write_all(&image.height.to_be_bytes())?;
        writer.write_all(&image.width.to_be_bytes())?;
        writer.write_all(&image.format.to_be_bytes())?;
        writer.write_all(&image.data_offset.to_be_bytes())?;
        writer.write_all(&(image.wrap_s as u32).to_be_bytes())?;
        writer.write_all(&(image.wrap_t as u32).to_be_bytes())?;
        writer.write_all(&(image.min_filter as u32).to_be_bytes())?;
        writer.write_all(&(image.mag_filter as u32).to_be_bytes())?;
        writer.write_all(&image.lod_bias.to_be_bytes())?;
        writer.write_all(&[
            image.edge_lod_enable,
            image.min_lod,
            image.max_lod,
            image.unpacked,
        ])?;

        Ok(())
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, TextureError> {
        let mut bytes = Vec::with_capacity(HEADER_SIZE);
        self.write_to(&mut bytes)?;
        Ok(bytes)
    }

    /// Parse a header from the start of `bytes`.
    ///
    /// Returns `None` if the input is too short, the magic does not match,
    /// or a sampler field holds an unknown value.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < HEADER_SIZE {
            return None;
        }

        let u32_at = |offset: usize| {
            u32::from_be_bytes([
                bytes[offset],
                bytes[offset + 1],
                bytes[offset + 2],
                bytes[offset + 3],
            ])
        };
        let u16_at = |offset: usize| u16::from_be_bytes([bytes[offset], bytes[offset + 1]]);

        let magic = u32_at(0x00);
        if magic != TPL_MAGIC {
            return None;
        }

        Some(Self {
            file: FileHeader {
                magic,
                image_count: u32_at(0x04),
                image_table_offset: u32_at(0x08),
            },
            table: ImageTableEntry {
                image_header_offset: u32_at(0x0C),
                palette_header_offset: u32_at(0x10),
            },
            image: ImageHeader {
                height: u16_at(0x14),
                width: u16_at(0x16),
                format: u32_at(0x18),
                data_offset: u32_at(0x1C),
                wrap_s: WrapMode::from_u32(u32_at(0x20))?,
                wrap_t: WrapMode::from_u32(u32_at(0x24))?,
                min_filter: FilterMode::from_u32(u32_at(0x28))?,
                mag_filter: FilterMode::from_u32(u32_at(0x2C))?,
                lod_bias: f32::from_bits(u32_at(0x30)),
                edge_lod_enable: bytes[0x34],
                min_lod: bytes[0x35],
                max_lod: bytes[0x36],
                unpacked: bytes[0x37],
            },
        })
    }
}

/// Concatenate the serialized header and the texel payload.
pub fn build_blob(header: &TplHeader, payload: &[u8]) -> Result<Vec<u8>, TextureError> {
    let mut blob = Vec::with_capacity(HEADER_SIZE + payload.len());
    header.write_to(&mut blob)?;
    blob.extend_from_slice(payload);
    Ok(blob)
}
