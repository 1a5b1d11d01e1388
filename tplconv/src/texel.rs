//! Texel source adapter.
//!
//! Normalizes any pixel-addressable image into a flat, row-major array of
//! packed ARGB [`Texel`]s. Every encoder works on a [`RasterImage`] so the
//! per-format code never has to care where the pixels came from.
//!
//! # Channel narrowing
//!
//! Source channels are narrowed to 8 bits by **masking** the native value,
//! not by scaling it. For 8-bit images this is the identity; for 16-bit
//! images only the low byte survives.

use image::{GenericImageView, Pixel};

use crate::texture::TextureError;

/// A single texel packed as `(a << 24) | (r << 16) | (g << 8) | b`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Texel(u32);

impl Texel {
    /// Fully transparent black. Used for positions outside the image.
    pub const TRANSPARENT: Texel = Texel(0);

    /// Create a texel from 8-bit channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// Create a texel from native channel values, keeping the low 8 bits of each.
    pub const fn from_native(r: u32, g: u32, b: u32, a: u32) -> Self {
        Self(((a & 0xff) << 24) | ((r & 0xff) << 16) | ((g & 0xff) << 8) | (b & 0xff))
    }

    /// Packed ARGB value.
    pub const fn argb(self) -> u32 {
        self.0
    }

    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    pub const fn a(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Average of the colour channels, truncated.
    pub const fn intensity(self) -> u8 {
        ((self.r() as u32 + self.g() as u32 + self.b() as u32) / 3) as u8
    }
}

/// Anything that can report its bounds and the channels of a pixel.
///
/// Channel values are returned in the source's native range, in
/// `[r, g, b, a]` order. Implemented for every [`GenericImageView`] whose
/// sub-pixel type widens losslessly into `u32` (`u8` and `u16` images,
/// including [`image::DynamicImage`]).
pub trait TexelSource {
    /// Width and height in pixels.
    fn bounds(&self) -> (u32, u32);

    /// Native channel values of the pixel at `(x, y)`.
    fn channels(&self, x: u32, y: u32) -> [u32; 4];
}

impl<I> TexelSource for I
where
    I: GenericImageView,
    <I::Pixel as Pixel>::Subpixel: Into<u32>,
{
    fn bounds(&self) -> (u32, u32) {
        GenericImageView::dimensions(self)
    }

    fn channels(&self, x: u32, y: u32) -> [u32; 4] {
        let [r, g, b, a] = self.get_pixel(x, y).to_rgba().0;
        [r.into(), g.into(), b.into(), a.into()]
    }
}

/// An immutable, row-major grid of texels with non-zero dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    texels: Vec<Texel>,
}

impl RasterImage {
    /// Flatten a texel source into a raster image.
    ///
    /// # Errors
    ///
    /// - [`TextureError::InvalidImage`] if either dimension is zero
    /// - [`TextureError::BufferAllocation`] if the texel array cannot be allocated
    pub fn from_source<S>(source: &S) -> Result<Self, TextureError>
    where
        S: TexelSource + ?Sized,
    {
        let (width, height) = source.bounds();
        let len = texel_count(width, height)?;

        let mut texels = Vec::new();
        texels
            .try_reserve_exact(len)
            .map_err(|e| TextureError::BufferAllocation {
                width,
                height,
                reason: e.to_string(),
            })?;

        for y in 0..height {
            for x in 0..width {
                let [r, g, b, a] = source.channels(x, y);
                texels.push(Texel::from_native(r, g, b, a));
            }
        }

        Ok(Self {
            width,
            height,
            texels,
        })
    }

    /// Wrap an existing row-major texel vector.
    ///
    /// # Errors
    ///
    /// Returns [`TextureError::InvalidImage`] if either dimension is zero or
    /// `texels.len()` is not `width * height`.
    pub fn from_texels(width: u32, height: u32, texels: Vec<Texel>) -> Result<Self, TextureError> {
        let len = texel_count(width, height)?;
        if texels.len() != len {
            return Err(TextureError::InvalidImage {
                width,
                height,
                reason: format!("expected {} texels, got {}", len, texels.len()),
            });
        }

        Ok(Self {
            width,
            height,
            texels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// All texels in row-major order.
    pub fn texels(&self) -> &[Texel] {
        &self.texels
    }

    /// Texel at `(x, y)`, or [`Texel::TRANSPARENT`] outside the image.
    pub fn texel_or_transparent(&self, x: u32, y: u32) -> Texel {
        if x >= self.width || y >= self.height {
            return Texel::TRANSPARENT;
        }
        self.texels[self.linear_index(x, y)]
    }

    /// Row-major index of an in-bounds position.
    pub(crate) fn linear_index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

fn texel_count(width: u32, height: u32) -> Result<usize, TextureError> {
    if width == 0 || height == 0 {
        return Err(TextureError::InvalidImage {
            width,
            height,
            reason: "dimensions must be non-zero".to_string(),
        });
    }

    (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| TextureError::InvalidImage {
            width,
            height,
            reason: "texel count overflows".to_string(),
        })
}
