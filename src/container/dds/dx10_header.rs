// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use binrw::binrw;

use crate::error::{TextureError, TextureResult};
use crate::format::Format;

/// The DXGI formats this crate knows by name. Everything else is kept as its raw value.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DXGIFormat {
    BC7Typeless,
    BC7UNorm,
    BC7UNormSRGB,
    Other(u32),
}

impl From<u32> for DXGIFormat {
    fn from(value: u32) -> Self {
        match value {
            97 => DXGIFormat::BC7Typeless,
            98 => DXGIFormat::BC7UNorm,
            99 => DXGIFormat::BC7UNormSRGB,
            other => DXGIFormat::Other(other),
        }
    }
}

impl From<DXGIFormat> for u32 {
    fn from(format: DXGIFormat) -> Self {
        match format {
            DXGIFormat::BC7Typeless => 97,
            DXGIFormat::BC7UNorm => 98,
            DXGIFormat::BC7UNormSRGB => 99,
            DXGIFormat::Other(other) => other,
        }
    }
}

impl TryFrom<DXGIFormat> for Format {
    type Error = TextureError;

    fn try_from(format: DXGIFormat) -> TextureResult<Self> {
        match format {
            DXGIFormat::BC7Typeless | DXGIFormat::BC7UNorm => Ok(Format::BC7 { srgb: false }),
            DXGIFormat::BC7UNormSRGB => Ok(Format::BC7 { srgb: true }),
            DXGIFormat::Other(other) => Err(TextureError::Format(format!(
                "DXGI format {other} is not BC7"
            ))),
        }
    }
}

#[binrw]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[brw(little, repr = u32)]
pub enum Dimensionality {
    Texture1D = 2,
    Texture2D = 3,
    Texture3D = 4,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u32)]
pub enum AlphaMode {
    Unknown = 0,
    Straight = 1,
    Premultiplied = 2,
    Opaque = 3,
    Custom = 4,
}

impl From<u32> for AlphaMode {
    /// Only the low 3 bits of `miscFlags2` hold the alpha mode
    fn from(flags: u32) -> Self {
        match flags & 0x7 {
            1 => AlphaMode::Straight,
            2 => AlphaMode::Premultiplied,
            3 => AlphaMode::Opaque,
            4 => AlphaMode::Custom,
            _ => AlphaMode::Unknown,
        }
    }
}

/// The `DDS_HEADER_DXT10` extension header
#[binrw]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[brw(little)]
pub struct DX10Header {
    #[br(map = |raw: u32| DXGIFormat::from(raw))]
    #[bw(map = |format: &DXGIFormat| u32::from(*format))]
    pub dxgi_format: DXGIFormat,
    pub dimensionality: Dimensionality,
    #[br(map = |flags: u32| flags & 0x4 != 0)]
    #[bw(map = |cube: &bool| if *cube { 0x4u32 } else { 0x0u32 })]
    pub cube: bool,
    pub array_size: u32,
    #[br(map = |flags: u32| AlphaMode::from(flags))]
    #[bw(map = |mode: &AlphaMode| *mode as u32)]
    pub alpha_mode: AlphaMode,
}
