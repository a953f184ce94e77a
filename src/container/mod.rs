// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt::Debug;
use std::io::{Read, Seek, Write};

use crate::dimensions::Dimensions;
use crate::error::TextureResult;
use crate::format::Format;
use crate::texture::{Bc7Texture, Block};

pub mod dds;

/// A file header describing the compressed surfaces that follow it
pub trait ContainerHeader: Sized + Clone + Debug {
    fn read_header<R: Read + Seek>(reader: &mut R) -> TextureResult<Self>;
    fn write_header<W: Write + Seek>(&self, writer: &mut W) -> TextureResult<()>;

    /// A header describing a single surface of `texture`
    fn for_texture(texture: &Bc7Texture) -> Self;

    fn dimensions(&self) -> TextureResult<Dimensions>;
    fn format(&self) -> TextureResult<Format>;
    fn mips(&self) -> Option<usize>;
    fn layers(&self) -> Option<usize>;

    /// Read the first surface of the top mip level. `reader` must be positioned just after the header.
    fn read_surface<R: Read>(&self, reader: &mut R) -> TextureResult<Bc7Texture> {
        let format = self.format()?;
        let dimensions = self.dimensions()?;
        Bc7Texture::read(reader, dimensions, format)
    }

    /// Read a header and its first surface
    fn read_texture<R: Read + Seek>(reader: &mut R) -> TextureResult<Bc7Texture> {
        let header = Self::read_header(reader)?;
        header.read_surface(reader)
    }

    /// Write a header for `texture` followed by its blocks
    fn write_texture<W: Write + Seek>(writer: &mut W, texture: &Bc7Texture) -> TextureResult<()> {
        Self::for_texture(texture).write_header(writer)?;
        for block in texture.blocks() {
            writer.write_all(block.to_bytes().as_ref())?;
        }
        Ok(())
    }
}
