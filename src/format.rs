// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use strum::Display;

use crate::dimensions::Dimensions;

/// Texture formats this crate can decode
#[derive(Clone, Copy, Debug, Eq, PartialEq, Display)]
pub enum Format {
    BC7 { srgb: bool },
}

impl Format {
    /// Bytes in one compressed block
    pub fn block_size(&self) -> usize {
        match self {
            Format::BC7 { .. } => 16,
        }
    }

    /// Bytes needed to store a surface of the given dimensions
    pub fn size_for(&self, dimensions: Dimensions) -> usize {
        dimensions.block_count() * self.block_size()
    }

    /// [`Format::size_for`], or `None` if the size does not fit in memory
    pub fn checked_size_for(&self, dimensions: Dimensions) -> Option<usize> {
        dimensions
            .blocks_wide()
            .checked_mul(dimensions.blocks_high())?
            .checked_mul(self.block_size())
            .filter(|&size| size <= isize::MAX as usize)
    }
}
