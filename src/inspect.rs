// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Diagnostic rendering of decoded blocks.
//!
//! Each block is drawn into a [`CELL_WIDTH`]x[`CELL_HEIGHT`] cell on a red background:
//!
//! | Rows  | Contents                                                       |
//! |-------|----------------------------------------------------------------|
//! | 0-2   | per subset: both endpoints, a gap, then the interpolation ramp |
//! | 3     | mode, partition, rotation, index selector                      |
//! | 4-7   | color indices                                                  |
//! | 8-11  | alpha indices                                                  |
//! | 12-15 | reconstructed texels                                           |

use image::{Rgba, RgbaImage};

use crate::bc7::{AlphaMode, DecodedBlock};
use crate::color::{Channel, Color, ColorImpl, Rotation};
use crate::dimensions::Dimensioned;
use crate::error::{TextureError, TextureResult};
use crate::texture::DecodedTexture;

pub const CELL_WIDTH: u32 = 20;
pub const CELL_HEIGHT: u32 = 17;

const BACKGROUND: Color = Rgba([255, 0, 0, 255]);

const ENDPOINT_ROWS: u32 = 0;
const HEADER_ROW: u32 = 3;
const COLOR_INDEX_ROWS: u32 = 4;
const ALPHA_INDEX_ROWS: u32 = 8;
const PIXEL_ROWS: u32 = 12;
const RAMP_COLUMN: u32 = 3;

fn gray(value: u8) -> Color {
    Rgba([value, value, value, 255])
}

/// Map an index onto a visible brightness
fn index_level(index: u8) -> u8 {
    15 + 16 * index
}

/// Render the debug image for a whole texture
pub fn debug_image(texture: &DecodedTexture) -> TextureResult<RgbaImage> {
    let dimensions = texture.dimensions();
    let (Some(width), Some(height)) = (
        cell_span(dimensions.blocks_wide(), CELL_WIDTH),
        cell_span(dimensions.blocks_high(), CELL_HEIGHT),
    ) else {
        return Err(TextureError::Format(format!(
            "{}x{} texture is too large for a debug image",
            dimensions.width(),
            dimensions.height()
        )));
    };
    let mut image = RgbaImage::from_pixel(width, height, BACKGROUND);

    for (row, column, block) in texture.iter_blocks() {
        let mut cell = Cell {
            image: &mut image,
            x0: column as u32 * CELL_WIDTH,
            y0: row as u32 * CELL_HEIGHT,
        };
        draw_block(&mut cell, block);
    }

    Ok(image)
}

/// Pixels covered by `blocks` cells of `cell` pixels each, if that fits an image axis
fn cell_span(blocks: usize, cell: u32) -> Option<u32> {
    u32::try_from(blocks).ok()?.checked_mul(cell)
}

/// A view of one block's cell in the debug image
struct Cell<'a> {
    image: &'a mut RgbaImage,
    x0: u32,
    y0: u32,
}

impl Cell<'_> {
    fn put(&mut self, x: u32, y: u32, color: Color) {
        debug_assert!(x < CELL_WIDTH && y < CELL_HEIGHT);
        self.image.put_pixel(self.x0 + x, self.y0 + y, color);
    }

    /// Draw 16 values as a 4x4 tile starting at row `top`
    fn put_tile(&mut self, top: u32, colors: impl IntoIterator<Item = Color>) {
        for (i, color) in colors.into_iter().enumerate().take(16) {
            self.put(i as u32 % 4, top + i as u32 / 4, color);
        }
    }
}

fn draw_block(cell: &mut Cell, block: &DecodedBlock) {
    draw_endpoints(cell, block);

    let rotation_color = match block.rotation {
        Rotation::None => Rgba([0, 0, 0, 255]),
        Rotation::R => Rgba([255, 0, 0, 255]),
        Rotation::G => Rgba([0, 255, 0, 255]),
        Rotation::B => Rgba([0, 0, 255, 255]),
    };
    cell.put(0, HEADER_ROW, gray(block.mode * 16));
    cell.put(1, HEADER_ROW, gray(block.partition));
    cell.put(2, HEADER_ROW, rotation_color);
    cell.put(3, HEADER_ROW, gray(if block.index_selector { 255 } else { 0 }));

    let single_subset = block.subset_count() == 1;
    cell.put_tile(
        COLOR_INDEX_ROWS,
        (0..16).map(|i| {
            let level = index_level(block.color_indices[i]);
            if single_subset {
                gray(level)
            } else {
                let mut color = Rgba([0, 0, 0, 255]);
                color.0[block.subsets[i] as usize] = level;
                color
            }
        }),
    );

    cell.put_tile(
        ALPHA_INDEX_ROWS,
        block.alpha_indices.iter().map(|&i| gray(index_level(i))),
    );

    cell.put_tile(PIXEL_ROWS, block.pixels);
}

/// Endpoints and interpolation ramps, one row per subset
fn draw_endpoints(cell: &mut Cell, block: &DecodedBlock) {
    let rotated = block.rotated_endpoints();

    for subset in 0..block.subset_count() {
        let y = ENDPOINT_ROWS + subset as u32;
        cell.put(0, y, rotated[subset * 2]);
        cell.put(1, y, rotated[subset * 2 + 1]);

        if block.mode().alpha_mode != AlphaMode::Separate {
            for (x, color) in block.palette(subset, block.color_index_bits).into_iter().enumerate() {
                cell.put(RAMP_COLUMN + x as u32, y, color);
            }
            continue;
        }

        // the channel holding the stored alpha after rotation
        let alpha_channel = block.rotation.channel().unwrap_or(Channel::A);

        for (x, mut color) in block
            .palette(subset, block.color_index_bits)
            .into_iter()
            .enumerate()
        {
            if alpha_channel == Channel::A {
                *color.channel_mut(Channel::A) = u8::MAX;
            } else {
                *color.channel_mut(alpha_channel) = 0;
            }
            cell.put(RAMP_COLUMN + x as u32, y, color);
        }

        for (x, color) in block
            .palette(subset, block.alpha_index_bits)
            .into_iter()
            .enumerate()
        {
            let mut shown = Rgba([0, 0, 0, 255]);
            *shown.channel_mut(alpha_channel) = color.channel(alpha_channel);
            cell.put(RAMP_COLUMN + x as u32, y + 1, shown);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bc7::Bc7Block;
    use crate::dimensions::Dimensions;
    use crate::format::Format;
    use crate::texture::Bc7Texture;

    fn decode(blocks: Vec<Bc7Block>, width: u32, height: u32) -> DecodedTexture {
        let dimensions = Dimensions::new(width, height).unwrap();
        Bc7Texture::from_blocks(dimensions, Format::BC7 { srgb: false }, blocks)
            .unwrap()
            .decode()
            .unwrap()
    }

    #[test]
    fn cells_tile_the_image() {
        let image = debug_image(&decode(vec![Bc7Block::from_halves(0x40, 0); 6], 12, 8)).unwrap();
        assert_eq!(image.dimensions(), (3 * CELL_WIDTH, 2 * CELL_HEIGHT));
        // row 16 and the columns past the ramps stay background
        assert_eq!(*image.get_pixel(5, 16), BACKGROUND);
        assert_eq!(*image.get_pixel(19, 20), BACKGROUND);
    }

    #[test]
    fn oversized_grids_do_not_fit() {
        assert_eq!(cell_span(3, CELL_WIDTH), Some(60));
        assert_eq!(cell_span(0x3FFF_FFFF, CELL_WIDTH), None);
        assert_eq!(cell_span(usize::MAX, CELL_HEIGHT), None);
    }

    #[test]
    fn mode_6_cell() {
        // mode 6, all endpoints zero apart from parity, every index 0
        let block = Bc7Block::from_halves(0x40, 0);
        let decoded = block.decode().unwrap();
        let image = debug_image(&decode(vec![block], 4, 4)).unwrap();

        assert_eq!(*image.get_pixel(0, 3), gray(6 * 16), "mode level");
        assert_eq!(*image.get_pixel(1, 3), gray(0), "partition level");
        assert_eq!(*image.get_pixel(2, 3), gray(0), "no rotation is black");
        assert_eq!(*image.get_pixel(3, 3), gray(0), "index selector unset");

        // 4-bit ramp fills x=3..19 of row 0, the other subset rows are background
        assert_eq!(*image.get_pixel(3, 0), decoded.pixels[0]);
        assert_ne!(*image.get_pixel(18, 0), BACKGROUND);
        assert_eq!(*image.get_pixel(19, 0), BACKGROUND);
        assert_eq!(*image.get_pixel(0, 1), BACKGROUND);

        assert_eq!(*image.get_pixel(2, 5), gray(15), "index 0 is dim gray");
        assert_eq!(*image.get_pixel(3, 15), decoded.pixels[15]);
    }

    #[test]
    fn multi_subset_indices_are_tinted() {
        // mode 1, partition 0, every index at its maximum
        let block = Bc7Block::from_halves(0b10, 0xFFFF_FFFF_FFFF_0000);
        let decoded = block.decode().unwrap();
        let image = debug_image(&decode(vec![block], 4, 4)).unwrap();

        for i in 0..16u32 {
            let subset = decoded.subsets[i as usize] as usize;
            let level = index_level(decoded.color_indices[i as usize]);
            let color = image.get_pixel(i % 4, COLOR_INDEX_ROWS + i / 4);
            assert_eq!(color.0[subset], level, "pixel {i} should be tinted by subset {subset}");
            assert_eq!(color.0.iter().filter(|&&c| c != 0).count(), 2, "one channel plus alpha");
        }
    }

    #[test]
    fn separate_alpha_ramps() {
        // mode 5 with rotation G: alpha ramp shows only green
        let block = Bc7Block::from_halves(0b10_0000 | 0b10 << 6 | 0x7F << 8, u64::MAX);
        let decoded = block.decode().unwrap();
        assert_eq!(decoded.rotation, Rotation::G);
        let image = debug_image(&decode(vec![block], 4, 4)).unwrap();

        assert_eq!(*image.get_pixel(2, 3), Rgba([0, 255, 0, 255]));
        for x in 0..4 {
            let color = image.get_pixel(RAMP_COLUMN + x, 0);
            assert_eq!(color.0[1], 0, "rotated channel is zeroed in the color ramp");
            let alpha = image.get_pixel(RAMP_COLUMN + x, 1);
            assert_eq!(alpha.0[0], 0);
            assert_eq!(alpha.0[2], 0);
            assert_eq!(alpha.0[3], 255);
        }
        // 2-bit ramps only cover 4 columns
        assert_eq!(*image.get_pixel(RAMP_COLUMN + 4, 0), BACKGROUND);
    }
}
