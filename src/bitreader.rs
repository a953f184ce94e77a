// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use bitvec::prelude::*;

use crate::error::BlockError;

/// Total number of bits in one BC7 block
pub const BLOCK_BITS: usize = 128;

/// Widest single field in the BC7 bitstream
pub const MAX_FIELD_BITS: usize = 8;

/// Reads variable-width fields out of a 128-bit block, least significant bit first.
///
/// The block is stored as two little-endian 64-bit halves. Every read advances a cursor, and
/// [`BlockBitReader::finish`] checks that the cursor ended exactly at the end of the block.
#[derive(Clone, Debug)]
pub struct BlockBitReader {
    bits: BitArray<[u64; 2], Lsb0>,
    consumed: usize,
}

impl BlockBitReader {
    /// Create a reader from the low and high halves of the block
    pub fn new(low: u64, high: u64) -> Self {
        Self {
            bits: BitArray::new([low, high]),
            consumed: 0,
        }
    }

    /// Create a reader from the 16 bytes of a block as they are stored on disk
    pub fn from_bytes(bytes: &[u8; 16]) -> Self {
        let mut low = [0u8; 8];
        let mut high = [0u8; 8];
        low.copy_from_slice(&bytes[..8]);
        high.copy_from_slice(&bytes[8..]);
        Self::new(u64::from_le_bytes(low), u64::from_le_bytes(high))
    }

    /// Number of bits read so far
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Consume the next `count` bits and return them as an integer.
    /// Reading zero bits returns 0 and leaves the cursor in place.
    pub fn read_bits(&mut self, count: usize) -> Result<u8, BlockError> {
        assert!(
            count <= MAX_FIELD_BITS,
            "Cannot read {count} bits into a single field"
        );

        if count == 0 {
            return Ok(0);
        }

        let end = self.consumed + count;
        if end > BLOCK_BITS {
            return Err(BlockError::BitOverrun {
                offset: self.consumed,
                requested: count,
            });
        }

        let value = self.bits[self.consumed..end].load_le::<u8>();
        self.consumed = end;
        Ok(value)
    }

    /// Read a single bit as a bool
    pub fn read_bit(&mut self) -> Result<bool, BlockError> {
        Ok(self.read_bits(1)? == 1)
    }

    /// Check that the whole block was consumed
    pub fn finish(self) -> Result<(), BlockError> {
        match self.consumed {
            BLOCK_BITS => Ok(()),
            consumed => Err(BlockError::ShortRead { consumed }),
        }
    }
}
