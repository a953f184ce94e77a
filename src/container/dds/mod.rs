// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::io::{Read, Seek, Write};

use binrw::prelude::*;
use enumflags2::make_bitflags;

use crate::container::ContainerHeader;
use crate::dimensions::{Dimensioned, Dimensions};
use crate::error::{TextureError, TextureResult};
use crate::format::Format;
use crate::texture::Bc7Texture;

pub use dx10_header::{AlphaMode, DX10Header, DXGIFormat, Dimensionality};
pub use header::{Caps1, Caps2, DDSFlags, DDSHeader};
pub use pixel_format::{FourCC, PixelFormat, PixelFormatFlags};

mod dx10_header;
mod header;
mod pixel_format;

#[cfg(test)]
mod tests;

/// Read a DDS file and the top mip level of its first surface
pub fn read_texture(reader: &mut (impl Read + Seek)) -> TextureResult<Bc7Texture> {
    let header = DDSHeader::read_header(reader)?;
    log::debug!("{header:#?}");
    header.read_surface(reader)
}

impl DDSHeader {
    /// A header for a single 2D BC7 surface with no mipmaps
    pub fn bc7(dimensions: Dimensions, srgb: bool) -> Self {
        let dxgi_format = if srgb {
            DXGIFormat::BC7UNormSRGB
        } else {
            DXGIFormat::BC7UNorm
        };

        DDSHeader {
            flags: make_bitflags!(DDSFlags::{Caps | Height | Width | PixelFormat | LinearSize}),
            height: dimensions.height(),
            width: dimensions.width(),
            pitch_or_linear_size: Format::BC7 { srgb }.size_for(dimensions) as u32,
            depth: 0,
            mipmap_count: 0,
            pixel_format: PixelFormat::dx10(),
            caps1: Caps1::Texture.into(),
            caps2: Default::default(),
            caps3: 0,
            caps4: 0,
            dx10_header: Some(DX10Header {
                dxgi_format,
                dimensionality: Dimensionality::Texture2D,
                cube: false,
                array_size: 1,
                alpha_mode: AlphaMode::Unknown,
            }),
        }
    }

    fn is_volume(&self) -> bool {
        match self.dx10_header {
            Some(dx10) => dx10.dimensionality == Dimensionality::Texture3D,
            None => self.caps2.contains(Caps2::Volume),
        }
    }

    fn is_cubemap(&self) -> bool {
        match self.dx10_header {
            Some(dx10) => dx10.cube,
            None => self.caps2.contains(Caps2::Cubemap),
        }
    }
}

impl ContainerHeader for DDSHeader {
    fn read_header<R: Read + Seek>(reader: &mut R) -> TextureResult<Self> {
        Ok(DDSHeader::read(reader)?)
    }

    fn write_header<W: Write + Seek>(&self, writer: &mut W) -> TextureResult<()> {
        Ok(self.write(writer)?)
    }

    fn for_texture(texture: &Bc7Texture) -> Self {
        let Format::BC7 { srgb } = texture.format;
        DDSHeader::bc7(texture.dimensions(), srgb)
    }

    fn dimensions(&self) -> TextureResult<Dimensions> {
        if self.is_volume() {
            return Err(TextureError::Format(
                "Volume textures are not supported".to_string(),
            ));
        }
        Ok(Dimensions::new(self.width, self.height)?)
    }

    fn format(&self) -> TextureResult<Format> {
        match (self.dx10_header, self.pixel_format.four_cc()) {
            (Some(dx10), _) => dx10.dxgi_format.try_into(),
            (None, Some(four_cc)) => Err(TextureError::Format(format!(
                "Legacy FourCC format {four_cc} is not BC7"
            ))),
            (None, None) => Err(TextureError::Format(
                "Uncompressed DDS files are not supported".to_string(),
            )),
        }
    }

    fn mips(&self) -> Option<usize> {
        (self.flags.contains(DDSFlags::MipmapCount) && self.mipmap_count > 0)
            .then_some(self.mipmap_count as usize)
    }

    fn layers(&self) -> Option<usize> {
        let faces = if self.is_cubemap() { 6 } else { 1 };
        let array_size = self.dx10_header.map_or(1, |dx10| dx10.array_size.max(1)) as usize;
        (faces * array_size > 1).then_some(faces * array_size)
    }
}
