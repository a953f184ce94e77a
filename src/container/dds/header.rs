// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use binrw::binrw;
use enumflags2::{bitflags, BitFlags};

use super::dx10_header::DX10Header;
use super::pixel_format::PixelFormat;

#[bitflags]
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DDSFlags {
    Caps = 0x1,
    Height = 0x2,
    Width = 0x4,
    Pitch = 0x8,
    PixelFormat = 0x1000,
    MipmapCount = 0x20000,
    LinearSize = 0x80000,
    Depth = 0x800000,
}

#[bitflags]
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Caps1 {
    Complex = 0x8,
    Mipmap = 0x400000,
    Texture = 0x1000,
}

#[bitflags]
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Caps2 {
    Cubemap = 0x200,
    CubemapPositiveX = 0x400,
    CubemapNegativeX = 0x800,
    CubemapPositiveY = 0x1000,
    CubemapNegativeY = 0x2000,
    CubemapPositiveZ = 0x4000,
    CubemapNegativeZ = 0x8000,
    Volume = 0x200000,
}

/// A DDS file header, optionally followed by the DX10 extension.
///
/// Unknown flag bits are dropped when reading.
#[binrw]
#[derive(Debug, Copy, Clone)]
#[brw(little, magic = b"DDS ")]
pub struct DDSHeader {
    #[brw(magic = 124u32)] // Size constant
    #[br(map = |bits: u32| BitFlags::from_bits_truncate(bits))]
    #[bw(map = |flags: &BitFlags<DDSFlags>| flags.bits())]
    pub flags: BitFlags<DDSFlags>,
    pub height: u32,
    pub width: u32,
    pub pitch_or_linear_size: u32,
    pub depth: u32,
    pub mipmap_count: u32,
    #[brw(pad_before = 44)]
    pub pixel_format: PixelFormat,
    #[br(map = |bits: u32| BitFlags::from_bits_truncate(bits))]
    #[bw(map = |caps: &BitFlags<Caps1>| caps.bits())]
    pub caps1: BitFlags<Caps1>,
    #[br(map = |bits: u32| BitFlags::from_bits_truncate(bits))]
    #[bw(map = |caps: &BitFlags<Caps2>| caps.bits())]
    pub caps2: BitFlags<Caps2>,
    pub caps3: u32,
    #[brw(pad_after = 4)]
    pub caps4: u32,
    #[br(if(pixel_format.is_dx10()))]
    pub dx10_header: Option<DX10Header>,
}
