// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use arrayvec::ArrayVec;

use crate::bitreader::BlockBitReader;
use crate::color::{Color, ColorImpl, Channel, Rotation};
use crate::error::BlockResult;
use crate::texture::Block;

pub mod decode;
pub mod endpoint;
pub mod mode;
pub mod partition;
pub mod weights;


pub use mode::{AlphaMode, Mode, ParityBits, MODES};
pub use partition::Partition;

/// Most endpoints a block can store: two for each of three subsets
pub const MAX_ENDPOINTS: usize = 6;

pub type Endpoints = ArrayVec<Color, MAX_ENDPOINTS>;

/// One index per pixel, in pixel order
pub type IndexArray = [u8; 16];

/// A compressed BC7 block as stored in a texture
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct Bc7Block(pub [u8; 16]);

impl Block for Bc7Block {
    type Bytes = [u8; 16];
    const SIZE: usize = 16;

    fn to_bytes(&self) -> Self::Bytes {
        self.0
    }

    fn from_bytes(bytes: &Self::Bytes) -> Self {
        Self(*bytes)
    }
}

impl Bc7Block {
    /// Build a block from its low and high 64-bit halves
    pub fn from_halves(low: u64, high: u64) -> Self {
        let mut bytes = [0u8; 16];
        bytes[..8].copy_from_slice(&low.to_le_bytes());
        bytes[8..].copy_from_slice(&high.to_le_bytes());
        Self(bytes)
    }

    pub fn decode(&self) -> BlockResult<DecodedBlock> {
        decode::decode_block(BlockBitReader::from_bytes(&self.0))
    }
}

/// Everything decoded from one block: the header fields, the endpoints before and after
/// unquantization, both index arrays, and the final texels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedBlock {
    pub mode: u8,
    pub partition: u8,
    pub rotation: Rotation,
    pub index_selector: bool,

    /// Subset of each pixel
    pub subsets: [u8; 16],
    /// Whether each pixel is the anchor of its subset
    pub anchors: [bool; 16],

    /// Endpoints as stored, before parity bits are applied.
    /// Alpha is 0 for modes without alpha.
    pub raw_endpoints: Endpoints,
    /// Endpoints expanded to 8 bits per channel, in storage order
    pub endpoints: Endpoints,

    /// Indices driving color interpolation, after the index selector is applied
    pub color_indices: IndexArray,
    pub color_index_bits: u8,
    /// Indices driving alpha interpolation. All zeros if the mode has no separate alpha.
    pub alpha_indices: IndexArray,
    pub alpha_index_bits: u8,

    /// Decoded texels in row-major order
    pub pixels: [Color; 16],
}

impl DecodedBlock {
    pub fn mode(&self) -> &'static Mode {
        Mode::for_id(self.mode)
    }

    pub fn subset_count(&self) -> usize {
        self.mode().subsets as usize
    }

    /// The two unquantized endpoints of a subset
    pub fn endpoint_pair(&self, subset: usize) -> [Color; 2] {
        [self.endpoints[subset * 2], self.endpoints[subset * 2 + 1]]
    }

    /// Endpoints with the block's rotation applied, in storage order
    pub fn rotated_endpoints(&self) -> Endpoints {
        self.endpoints
            .iter()
            .map(|e| self.rotation.apply(*e))
            .collect()
    }

    /// Every color a subset can interpolate to at the given index precision,
    /// blending the rotated endpoints
    pub fn palette(&self, subset: usize, bits: u8) -> ArrayVec<Color, 16> {
        let [e0, e1] = self.endpoint_pair(subset).map(|e| self.rotation.apply(e));
        (0..1u8 << bits)
            .map(|index| {
                let lerp = |c: Channel| {
                    weights::interpolate(e0.channel(c), e1.channel(c), bits, index)
                };
                image::Rgba([
                    lerp(Channel::R),
                    lerp(Channel::G),
                    lerp(Channel::B),
                    lerp(Channel::A),
                ])
            })
            .collect()
    }

    /// The texel at column `x` and row `y` of the block
    pub fn pixel(&self, x: usize, y: usize) -> Color {
        assert!(x < 4 && y < 4, "({x}, {y}) is outside the block");
        self.pixels[y * 4 + x]
    }
}
