// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Width and height in texels of one compressed block
pub const BLOCK_SIZE: u32 = 4;

#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum DimensionError {
    #[error("Texture dimensions {width}x{height} are not a non-zero multiple of {BLOCK_SIZE}")]
    UnsupportedDimensions { width: u32, height: u32 },
}

/// The size of a 2D texture made of whole 4x4 blocks.
///
/// Constructing one validates that both axes are non-zero multiples of [`BLOCK_SIZE`],
/// so every `Dimensions` value maps onto a complete block grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Dimensions {
    width: u32,
    height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Result<Self, DimensionError> {
        let valid = |x: u32| x > 0 && x % BLOCK_SIZE == 0;
        if valid(width) && valid(height) {
            Ok(Self { width, height })
        } else {
            Err(DimensionError::UnsupportedDimensions { width, height })
        }
    }

    pub fn width(self) -> u32 {
        self.width
    }

    pub fn height(self) -> u32 {
        self.height
    }

    /// Number of block columns
    pub fn blocks_wide(self) -> usize {
        (self.width / BLOCK_SIZE) as usize
    }

    /// Number of block rows
    pub fn blocks_high(self) -> usize {
        (self.height / BLOCK_SIZE) as usize
    }

    pub fn block_count(self) -> usize {
        self.blocks_wide() * self.blocks_high()
    }

    /// Iterate over `(row, column)` of every block, in raster order
    pub fn block_positions(self) -> impl Iterator<Item = (usize, usize)> {
        itertools::iproduct!(0..self.blocks_high(), 0..self.blocks_wide())
    }
}

impl TryFrom<[u32; 2]> for Dimensions {
    type Error = DimensionError;

    fn try_from([width, height]: [u32; 2]) -> Result<Self, Self::Error> {
        Self::new(width, height)
    }
}

impl From<Dimensions> for [u32; 2] {
    fn from(dimensions: Dimensions) -> Self {
        [dimensions.width, dimensions.height]
    }
}

pub trait Dimensioned {
    fn dimensions(&self) -> Dimensions;
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn accepts_block_multiples() {
        let d = Dimensions::new(12, 8).unwrap();
        assert_eq!(d.blocks_wide(), 3);
        assert_eq!(d.blocks_high(), 2);
        assert_eq!(d.block_count(), 6);
        assert_eq!(<[u32; 2]>::from(d), [12, 8]);
    }

    #[test]
    fn rejects_partial_blocks() {
        for [width, height] in [[6, 8], [8, 7], [0, 4], [4, 0]] {
            assert_eq!(
                Dimensions::try_from([width, height]),
                Err(DimensionError::UnsupportedDimensions { width, height })
            );
        }
    }

    #[test]
    fn block_positions_are_raster_ordered() {
        let d = Dimensions::new(8, 8).unwrap();
        assert_eq!(
            d.block_positions().collect_vec(),
            vec![(0, 0), (0, 1), (1, 0), (1, 1)]
        );
    }
}
