// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::io::{ErrorKind, Read};

use image::RgbaImage;
use itertools::Itertools;
use rayon::prelude::*;

use crate::bc7::{Bc7Block, DecodedBlock};
use crate::dimensions::{Dimensioned, Dimensions, BLOCK_SIZE};
use crate::error::{TextureError, TextureResult};
use crate::format::Format;

/// A fixed-size compressed block covering one 4x4 tile
pub trait Block: Sized {
    type Bytes: AsRef<[u8]>;
    const SIZE: usize;

    fn to_bytes(&self) -> Self::Bytes;
    fn from_bytes(bytes: &Self::Bytes) -> Self;
}

/// A BC7 surface: its dimensions and compressed blocks in raster order
#[derive(Clone, Debug)]
pub struct Bc7Texture {
    pub format: Format,
    dimensions: Dimensions,
    blocks: Vec<Bc7Block>,
}

impl Bc7Texture {
    /// Wrap already-loaded blocks. `blocks` must hold exactly one block per 4x4 tile.
    pub fn from_blocks(
        dimensions: Dimensions,
        format: Format,
        blocks: Vec<Bc7Block>,
    ) -> TextureResult<Self> {
        if blocks.len() != dimensions.block_count() {
            return Err(TextureError::Format(format!(
                "{}x{} texture needs {} blocks, got {}",
                dimensions.width(),
                dimensions.height(),
                dimensions.block_count(),
                blocks.len()
            )));
        }
        Ok(Self {
            format,
            dimensions,
            blocks,
        })
    }

    /// Read one block per 4x4 tile from `reader`, which must be positioned at the first block
    pub fn read<R: Read>(
        reader: &mut R,
        dimensions: Dimensions,
        format: Format,
    ) -> TextureResult<Self> {
        // grows with the data actually read, not the size the header claims
        let size = format.checked_size_for(dimensions).ok_or_else(|| {
            TextureError::Format(format!(
                "{}x{} texture is too large",
                dimensions.width(),
                dimensions.height()
            ))
        })?;
        let mut buffer = Vec::new();
        reader.by_ref().take(size as u64).read_to_end(&mut buffer)?;
        if buffer.len() != size {
            return Err(std::io::Error::new(
                ErrorKind::UnexpectedEof,
                format!("expected {size} bytes of blocks, found {}", buffer.len()),
            )
            .into());
        }

        let blocks = buffer
            .chunks_exact(Bc7Block::SIZE)
            .map(|chunk| {
                let mut bytes = [0u8; Bc7Block::SIZE];
                bytes.copy_from_slice(chunk);
                Bc7Block::from_bytes(&bytes)
            })
            .collect_vec();

        log::debug!(
            "Read {} blocks for a {}x{} {format:?} texture",
            blocks.len(),
            dimensions.width(),
            dimensions.height()
        );

        Self::from_blocks(dimensions, format, blocks)
    }

    pub fn blocks(&self) -> &[Bc7Block] {
        &self.blocks
    }

    /// The block at a row and column of the block grid
    pub fn block(&self, row: usize, column: usize) -> Option<&Bc7Block> {
        (column < self.dimensions.blocks_wide())
            .then(|| self.blocks.get(row * self.dimensions.blocks_wide() + column))
            .flatten()
    }

    /// Decode every block, one block row per rayon task.
    /// Fails with the first invalid block in raster order.
    pub fn decode(&self) -> TextureResult<DecodedTexture> {
        let width = self.dimensions.blocks_wide();
        let rows: Vec<TextureResult<Vec<DecodedBlock>>> = self
            .blocks
            .par_chunks(width)
            .enumerate()
            .map(|(row, blocks)| decode_row(row, blocks))
            .collect();

        let blocks = rows.into_iter().flatten_ok().collect::<TextureResult<_>>()?;
        Ok(DecodedTexture {
            dimensions: self.dimensions,
            blocks,
        })
    }

    /// Decode every block on the calling thread
    pub fn decode_serial(&self) -> TextureResult<DecodedTexture> {
        let width = self.dimensions.blocks_wide();
        let blocks = self
            .blocks
            .chunks(width)
            .enumerate()
            .map(|(row, blocks)| decode_row(row, blocks))
            .flatten_ok()
            .collect::<TextureResult<_>>()?;

        Ok(DecodedTexture {
            dimensions: self.dimensions,
            blocks,
        })
    }
}

impl Dimensioned for Bc7Texture {
    fn dimensions(&self) -> Dimensions {
        self.dimensions
    }
}

fn decode_row(row: usize, blocks: &[Bc7Block]) -> TextureResult<Vec<DecodedBlock>> {
    blocks
        .iter()
        .enumerate()
        .map(|(column, block)| {
            block
                .decode()
                .map_err(|source| TextureError::Block {
                    row,
                    column,
                    source,
                })
        })
        .collect()
}

/// The decoded form of every block in a texture, in raster order
#[derive(Clone, Debug)]
pub struct DecodedTexture {
    dimensions: Dimensions,
    blocks: Vec<DecodedBlock>,
}

impl DecodedTexture {
    pub fn blocks(&self) -> &[DecodedBlock] {
        &self.blocks
    }

    pub fn block(&self, row: usize, column: usize) -> Option<&DecodedBlock> {
        (column < self.dimensions.blocks_wide())
            .then(|| self.blocks.get(row * self.dimensions.blocks_wide() + column))
            .flatten()
    }

    /// Iterate over `(row, column, block)` in raster order
    pub fn iter_blocks(&self) -> impl Iterator<Item = (usize, usize, &DecodedBlock)> {
        self.dimensions
            .block_positions()
            .zip(self.blocks.iter())
            .map(|((row, column), block)| (row, column, block))
    }

    /// Assemble the decoded texels into an RGBA image
    pub fn to_image(&self) -> RgbaImage {
        let mut image = RgbaImage::new(self.dimensions.width(), self.dimensions.height());
        for (row, column, block) in self.iter_blocks() {
            let (x0, y0) = (column as u32 * BLOCK_SIZE, row as u32 * BLOCK_SIZE);
            for (i, pixel) in block.pixels.iter().enumerate() {
                let (x, y) = ((i % 4) as u32, (i / 4) as u32);
                image.put_pixel(x0 + x, y0 + y, *pixel);
            }
        }
        image
    }
}

impl Dimensioned for DecodedTexture {
    fn dimensions(&self) -> Dimensions {
        self.dimensions
    }
}
