// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use strum::Display;

use crate::bitreader::BlockBitReader;
use crate::error::{BlockError, BlockResult};

/// How parity bits are attached to the endpoints of a subset
#[derive(Copy, Clone, Debug, PartialEq, Eq, Display)]
pub enum ParityBits {
    /// No parity bits
    None,
    /// One parity bit per endpoint
    PerEndpoint,
    /// One parity bit shared by both endpoints of a subset
    PerSubset,
}

/// How a mode encodes alpha
#[derive(Copy, Clone, Debug, PartialEq, Eq, Display)]
pub enum AlphaMode {
    /// Alpha is not stored and decodes to 255
    None,
    /// Alpha is stored in the endpoints and uses the color indices
    Combined,
    /// Alpha is stored in the endpoints and has its own index array
    Separate,
}

/// Bit layout of one of the eight BC7 block modes
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Mode {
    pub id: u8,
    pub parity_bits: ParityBits,
    pub alpha_mode: AlphaMode,
    pub color_bits: u8,
    pub alpha_bits: u8,
    pub partition_bits: u8,
    pub subsets: u8,
    pub index_bits: u8,
    pub alpha_index_bits: u8,
    pub has_index_selector: bool,
}

impl Mode {
    #[allow(clippy::too_many_arguments)]
    const fn new(
        id: u8,
        parity_bits: ParityBits,
        alpha_mode: AlphaMode,
        endpoint_bits: [u8; 2],
        partition_bits: u8,
        subsets: u8,
        index_bits: [u8; 2],
        has_index_selector: bool,
    ) -> Self {
        let [color_bits, alpha_bits] = endpoint_bits;
        let [index_bits, alpha_index_bits] = index_bits;
        Self {
            id,
            parity_bits,
            alpha_mode,
            color_bits,
            alpha_bits,
            partition_bits,
            subsets,
            index_bits,
            alpha_index_bits,
            has_index_selector,
        }
    }

    /// Look up the descriptor for a mode id. Panics if `id` is not in `0..8`
    pub fn for_id(id: u8) -> &'static Mode {
        &MODES[id as usize]
    }

    /// Number of endpoints stored in the block, two per subset
    pub fn endpoint_count(&self) -> usize {
        self.subsets as usize * 2
    }
}

use AlphaMode as A;
use ParityBits as P;

/// The eight BC7 modes, indexed by mode id
#[rustfmt::skip]
pub static MODES: [Mode; 8] = [
    Mode::new(0, P::PerEndpoint, A::None,     [4, 0], 4, 3, [3, 0], false),
    Mode::new(1, P::PerSubset,   A::None,     [6, 0], 6, 2, [3, 0], false),
    Mode::new(2, P::None,        A::None,     [5, 0], 6, 3, [2, 0], false),
    Mode::new(3, P::PerEndpoint, A::None,     [7, 0], 6, 2, [2, 0], false),
    Mode::new(4, P::None,        A::Separate, [5, 6], 0, 1, [2, 3], true),
    Mode::new(5, P::None,        A::Separate, [7, 8], 0, 1, [2, 2], false),
    Mode::new(6, P::PerEndpoint, A::Combined, [7, 7], 0, 1, [4, 0], false),
    Mode::new(7, P::PerEndpoint, A::Combined, [5, 5], 6, 2, [2, 0], false),
];

/// Read the unary mode selector at the start of a block.
///
/// The mode id is the position of the first set bit among the first 8 bits.
pub fn read_mode(reader: &mut BlockBitReader) -> BlockResult<&'static Mode> {
    for id in 0..MODES.len() as u8 {
        if reader.read_bit()? {
            return Ok(Mode::for_id(id));
        }
    }
    Err(BlockError::InvalidMode)
}
