//! Block tiling and padding.
//!
//! TPL texel data is stored as a sequence of fixed-size blocks. Blocks are
//! laid out row-major across the image, and texels inside each block are
//! row-major too. Images whose dimensions are not a multiple of the block
//! size are padded up to whole blocks.

/// Round `value` up to the next multiple of `block`.
///
/// Values that are already a multiple are returned unchanged.
///
/// # Example
///
/// ```
/// use tplconv::tiling::pad;
///
/// assert_eq!(pad(8, 8), 8);
/// assert_eq!(pad(9, 8), 16);
/// assert_eq!(pad(1, 4), 4);
/// ```
pub const fn pad(value: u32, block: u32) -> u32 {
    let rem = value % block;
    if rem == 0 {
        value
    } else {
        value + (block - rem)
    }
}

/// Width and height of one block, in texels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockGeometry {
    pub width: u32,
    pub height: u32,
}

impl BlockGeometry {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Padded `(width, height)` of an image with this block size.
    pub const fn padded(&self, width: u32, height: u32) -> (u32, u32) {
        (pad(width, self.width), pad(height, self.height))
    }

    /// Number of blocks horizontally and vertically.
    pub const fn block_counts(&self, width: u32, height: u32) -> (u32, u32) {
        let (w, h) = self.padded(width, height);
        (w / self.width, h / self.height)
    }

    /// Texel positions of a `width`×`height` image in tiled order.
    ///
    /// Partial edge blocks are walked in full, so positions beyond the image
    /// bounds are yielded as well. The walk covers exactly
    /// `pad(width) * pad(height)` positions.
    pub fn positions(&self, width: u32, height: u32) -> impl Iterator<Item = (u32, u32)> {
        let geometry = *self;
        let (blocks_x, blocks_y) = self.block_counts(width, height);

        (0..blocks_y).flat_map(move |by| {
            (0..blocks_x).flat_map(move |bx| {
                let x0 = bx * geometry.width;
                let y0 = by * geometry.height;
                (y0..y0 + geometry.height)
                    .flat_map(move |y| (x0..x0 + geometry.width).map(move |x| (x, y)))
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_exact_multiple() {
        assert_eq!(pad(16, 8), 16);
        assert_eq!(pad(4, 4), 4);
    }

    #[test]
    fn test_pad_rounds_up() {
        assert_eq!(pad(1, 8), 8);
        assert_eq!(pad(7, 4), 8);
        assert_eq!(pad(17, 8), 24);
    }

    #[test]
    fn test_block_counts() {
        let geometry = BlockGeometry::new(8, 4);
        assert_eq!(geometry.block_counts(9, 4), (2, 1));
        assert_eq!(geometry.block_counts(8, 5), (1, 2));
    }

    #[test]
    fn test_positions_single_block() {
        let geometry = BlockGeometry::new(2, 2);
        let positions: Vec<_> = geometry.positions(2, 2).collect();
        assert_eq!(positions, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn test_positions_block_order() {
        // 4×2 image in 2×2 blocks: left block first, then right block
        let geometry = BlockGeometry::new(2, 2);
        let positions: Vec<_> = geometry.positions(4, 2).collect();
        assert_eq!(
            positions,
            vec![
                (0, 0),
                (1, 0),
                (0, 1),
                (1, 1),
                (2, 0),
                (3, 0),
                (2, 1),
                (3, 1)
            ]
        );
    }

    #[test]
    fn test_positions_cover_padding() {
        let geometry = BlockGeometry::new(4, 4);
        let positions: Vec<_> = geometry.positions(5, 3).collect();
        assert_eq!(positions.len(), 8 * 4);
        assert!(positions.contains(&(7, 3)));
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_pad_is_smallest_multiple(value in 1u32..10_000, block in 1u32..64) {
                let padded = pad(value, block);
                prop_assert_eq!(padded % block, 0);
                prop_assert!(padded >= value);
                prop_assert!(padded - value < block);
            }

            #[test]
            fn test_positions_count(width in 1u32..40, height in 1u32..40) {
                let geometry = BlockGeometry::new(8, 4);
                let (pw, ph) = geometry.padded(width, height);
                prop_assert_eq!(geometry.positions(width, height).count(), (pw * ph) as usize);
            }
        }
    }
}
