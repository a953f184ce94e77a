// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Partition geometry for multi-subset blocks.
//!
//! These tables are the canonical BC7 partition sets and are reproduced literally.

/// A partition of the 16 pixels of a block into 1 to 3 subsets
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Partition {
    subsets: u8,
    index: u8,
}

impl Partition {
    /// Panics if `subsets` is not 1, 2, or 3, or if `index` is outside the 64 partition sets.
    /// Single-subset blocks only have partition 0.
    pub fn new(subsets: u8, index: u8) -> Self {
        assert!(
            (1..=3).contains(&subsets),
            "Blocks have 1 to 3 subsets, not {subsets}"
        );
        assert!(
            (subsets == 1 && index == 0) || (subsets > 1 && index < 64),
            "Invalid partition index {index} for {subsets} subsets"
        );
        Self { subsets, index }
    }

    pub fn subsets(&self) -> u8 {
        self.subsets
    }

    pub fn index(&self) -> u8 {
        self.index
    }

    /// The subset that `pixel` belongs to
    pub fn subset_of(&self, pixel: usize) -> u8 {
        assert!(pixel < 16, "Pixel {pixel} is outside the block");
        let i = self.index as usize;
        match self.subsets {
            1 => 0,
            2 => ((PARTITIONS_2[i] >> pixel) & 0x1) as u8,
            3 => ((PARTITIONS_3[i] >> (pixel * 2)) & 0x3) as u8,
            _ => unreachable!(),
        }
    }

    /// Whether `pixel` is the anchor of its subset, and so stores its indices with one fewer bit.
    /// Pixel 0 always anchors subset 0.
    pub fn is_anchor(&self, pixel: usize) -> bool {
        let i = self.index as usize;
        pixel == 0
            || match self.subsets {
                2 => pixel == ANCHORS_2[i] as usize,
                3 => ANCHORS_3[i].contains(&(pixel as u8)),
                _ => false,
            }
    }

    /// Subset of every pixel, in pixel order
    pub fn subset_map(&self) -> [u8; 16] {
        std::array::from_fn(|pixel| self.subset_of(pixel))
    }

    /// Anchor flag of every pixel, in pixel order
    pub fn anchor_map(&self) -> [bool; 16] {
        std::array::from_fn(|pixel| self.is_anchor(pixel))
    }
}

/// Free-function form of [`Partition::subset_of`]
pub fn subset_of(subsets: u8, partition: u8, pixel: usize) -> u8 {
    Partition::new(subsets, partition).subset_of(pixel)
}

/// Free-function form of [`Partition::is_anchor`]
pub fn is_anchor(subsets: u8, partition: u8, pixel: usize) -> bool {
    Partition::new(subsets, partition).is_anchor(pixel)
}

/// Two-subset partitions. Bit `i` is the subset of pixel `i`.
#[rustfmt::skip]
pub static PARTITIONS_2: [u16; 64] = [
    0xCCCC, 0x8888, 0xEEEE, 0xECC8, 0xC880, 0xFEEC, 0xFEC8, 0xEC80,
    0xC800, 0xFFEC, 0xFE80, 0xE800, 0xFFE8, 0xFF00, 0xFFF0, 0xF000,
    0xF710, 0x008E, 0x7100, 0x08CE, 0x008C, 0x7310, 0x3100, 0x8CCE,
    0x088C, 0x3110, 0x6666, 0x366C, 0x17E8, 0x0FF0, 0x718E, 0x399C,
    0xAAAA, 0xF0F0, 0x5A5A, 0x33CC, 0x3C3C, 0x55AA, 0x9696, 0xA55A,
    0x73CE, 0x13C8, 0x324C, 0x3BDC, 0x6996, 0xC33C, 0x9966, 0x0660,
    0x0272, 0x04E4, 0x4E40, 0x2720, 0xC936, 0x936C, 0x39C6, 0x639C,
    0x9336, 0x9CC6, 0x817E, 0xE718, 0xCCF0, 0x0FCC, 0x7744, 0xEE22,
];

/// Three-subset partitions. Bits `2i..2i+2` are the subset of pixel `i`.
#[rustfmt::skip]
pub static PARTITIONS_3: [u32; 64] = [
    0xAA685050, 0x6A5A5040, 0x5A5A4200, 0x5450A0A8,
    0xA5A50000, 0xA0A05050, 0x5555A0A0, 0x5A5A5050,
    0xAA550000, 0xAA555500, 0xAAAA5500, 0x90909090,
    0x94949494, 0xA4A4A4A4, 0xA9A59450, 0x2A0A4250,
    0xA5945040, 0x0A425054, 0xA5A5A500, 0x55A0A0A0,
    0xA8A85454, 0x6A6A4040, 0xA4A45000, 0x1A1A0500,
    0x0050A4A4, 0xAAA59090, 0x14696914, 0x69691400,
    0xA08585A0, 0xAA821414, 0x50A4A450, 0x6A5A0200,
    0xA9A58000, 0x5090A0A8, 0xA8A09050, 0x24242424,
    0x00AA5500, 0x24924924, 0x24499224, 0x50A50A50,
    0x500AA550, 0xAAAA4444, 0x66660000, 0xA5A0A5A0,
    0x50A050A0, 0x69286928, 0x44AAAA44, 0x66666600,
    0xAA444444, 0x54A854A8, 0x95809580, 0x96969600,
    0xA85454A8, 0x80959580, 0xAA141414, 0x96960000,
    0xAAAA1414, 0xA05050A0, 0xA0A5A5A0, 0x96000000,
    0x40804080, 0xA9A8A9A8, 0xAAAAAA44, 0x2A4A5254,
];

/// Anchor pixel of subset 1 for each two-subset partition
#[rustfmt::skip]
pub static ANCHORS_2: [u8; 64] = [
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15,  2,  8,  2,  2,  8,  8, 15,  2,  8,  2,  2,  8,  8,  2,  2,
    15, 15,  6,  8,  2,  8, 15, 15,  2,  8,  2,  2,  2, 15, 15,  6,
     6,  2,  6,  8, 15, 15,  2,  2, 15, 15, 15, 15, 15,  2,  2, 15,
];

/// Anchor pixels of subsets 1 and 2 for each three-subset partition, in no particular order.
/// The published table leaves the first anchor of partitions 44 to 47 unmarked; those are 15.
#[rustfmt::skip]
pub static ANCHORS_3: [[u8; 2]; 64] = [
    [ 3, 15], [ 3,  8], [15,  8], [15,  3], [ 8, 15], [ 3, 15], [15,  3], [15,  8],
    [ 8, 15], [ 8, 15], [ 6, 15], [ 6, 15], [ 6, 15], [ 5, 15], [ 3, 15], [ 3,  8],
    [ 3, 15], [ 3,  8], [ 8, 15], [15,  3], [ 3, 15], [ 3,  8], [ 6, 15], [10,  8],
    [ 5,  3], [ 8, 15], [ 8,  6], [ 6, 10], [ 8, 15], [ 5, 15], [15, 10], [15,  8],
    [ 8, 15], [15,  3], [ 3, 15], [ 5, 10], [ 6, 10], [10,  8], [ 8,  9], [15, 10],
    [15,  6], [ 3, 15], [15,  8], [ 5, 15], [15,  3], [15,  6], [15,  6], [15,  8],
    [ 3, 15], [15,  3], [ 5, 15], [ 5, 15], [ 5, 15], [ 8, 15], [ 5, 15], [10, 15],
    [ 5, 15], [10, 15], [ 8, 15], [13, 15], [15,  3], [12, 15], [ 3, 15], [ 3,  8],
];
