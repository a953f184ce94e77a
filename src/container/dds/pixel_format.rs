// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt::{Debug, Display, Formatter};

use binrw::binrw;
use enumflags2::{bitflags, BitFlags};

#[bitflags]
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelFormatFlags {
    AlphaPixels = 0x1,
    Alpha = 0x2,
    FourCC = 0x4,
    RGB = 0x40,
    YUV = 0x200,
    Luminance = 0x20000,
}

#[binrw]
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct FourCC(pub [u8; 4]);

impl FourCC {
    pub const DX10: FourCC = FourCC(*b"DX10");
}

impl Display for FourCC {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

impl Debug for FourCC {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match std::str::from_utf8(&self.0) {
            Ok(as_str) => write!(f, "{as_str:?}"),
            Err(_) => write!(f, "{:#010X}", u32::from_le_bytes(self.0)),
        }
    }
}

/// The `DDS_PIXELFORMAT` structure embedded in the header
#[binrw]
#[derive(Debug, Copy, Clone)]
#[brw(little, magic = 32u32)] // Size constant
pub struct PixelFormat {
    #[br(map = |bits: u32| BitFlags::from_bits_truncate(bits))]
    #[bw(map = |flags: &BitFlags<PixelFormatFlags>| flags.bits())]
    pub flags: BitFlags<PixelFormatFlags>,
    pub four_cc: FourCC,
    pub bit_count: u32,
    pub color_bit_masks: [u32; 3],
    pub alpha_bit_mask: u32,
}

impl PixelFormat {
    /// A pixel format that defers to the DX10 extension header
    pub fn dx10() -> Self {
        Self {
            flags: PixelFormatFlags::FourCC.into(),
            four_cc: FourCC::DX10,
            bit_count: 0,
            color_bit_masks: [0; 3],
            alpha_bit_mask: 0,
        }
    }

    /// The FourCC code, if the format is identified by one
    pub fn four_cc(&self) -> Option<FourCC> {
        self.flags
            .contains(PixelFormatFlags::FourCC)
            .then_some(self.four_cc)
    }

    /// Whether a DX10 extension header follows the main header
    pub fn is_dx10(&self) -> bool {
        self.four_cc() == Some(FourCC::DX10)
    }
}
