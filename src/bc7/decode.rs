// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::iter::zip;
use std::mem::swap;

use arrayvec::ArrayVec;

use crate::bc7::endpoint::unquantize_color;
use crate::bc7::mode::{read_mode, AlphaMode, Mode, ParityBits};
use crate::bc7::partition::Partition;
use crate::bc7::weights::interpolate;
use crate::bc7::{DecodedBlock, Endpoints, IndexArray};
use crate::bitreader::BlockBitReader;
use crate::color::{Channel, Color, ColorImpl, Rotation};
use crate::error::BlockResult;

/// Decode one block, consuming all 128 bits of `reader`
pub fn decode_block(mut reader: BlockBitReader) -> BlockResult<DecodedBlock> {
    let mode = read_mode(&mut reader)?;

    let partition = reader.read_bits(mode.partition_bits as usize)?;

    let rotation = match mode.alpha_mode {
        AlphaMode::Separate => {
            Rotation::from_repr(reader.read_bits(2)?).expect("2-bit field is a valid rotation")
        }
        _ => Rotation::None,
    };

    let index_selector = if mode.has_index_selector {
        reader.read_bit()?
    } else {
        false
    };

    let raw_endpoints = read_raw_endpoints(&mut reader, mode)?;
    let endpoints = read_parity_and_unquantize(&mut reader, mode, &raw_endpoints)?;

    let partition = Partition::new(mode.subsets, partition);
    let subsets = partition.subset_map();
    let anchors = partition.anchor_map();

    let mut color_indices = read_indices(&mut reader, mode.index_bits, &anchors)?;
    let mut alpha_indices = read_indices(&mut reader, mode.alpha_index_bits, &anchors)?;
    let mut color_index_bits = mode.index_bits;
    let mut alpha_index_bits = mode.alpha_index_bits;

    if index_selector {
        swap(&mut color_indices, &mut alpha_indices);
        swap(&mut color_index_bits, &mut alpha_index_bits);
    }

    reader.finish()?;

    let pixels = std::array::from_fn(|pixel| {
        let subset = subsets[pixel] as usize;
        let (e0, e1) = (endpoints[subset * 2], endpoints[subset * 2 + 1]);
        let lerp = |channel: Channel, bits: u8, index: u8| {
            interpolate(e0.channel(channel), e1.channel(channel), bits, index)
        };

        let color_index = color_indices[pixel];
        let alpha = match mode.alpha_mode {
            AlphaMode::None => u8::MAX,
            AlphaMode::Combined => lerp(Channel::A, color_index_bits, color_index),
            AlphaMode::Separate => lerp(Channel::A, alpha_index_bits, alpha_indices[pixel]),
        };

        rotation.apply(image::Rgba([
            lerp(Channel::R, color_index_bits, color_index),
            lerp(Channel::G, color_index_bits, color_index),
            lerp(Channel::B, color_index_bits, color_index),
            alpha,
        ]))
    });

    log::trace!(
        "Decoded mode {} block, partition {}, rotation {rotation}",
        mode.id,
        partition.index()
    );

    Ok(DecodedBlock {
        mode: mode.id,
        partition: partition.index(),
        rotation,
        index_selector,
        subsets,
        anchors,
        raw_endpoints,
        endpoints,
        color_indices,
        color_index_bits,
        alpha_indices,
        alpha_index_bits,
        pixels,
    })
}

/// Read the quantized endpoints. Color is stored channel-major: every endpoint's red,
/// then every endpoint's green, then blue, then alpha if the mode has it.
fn read_raw_endpoints(reader: &mut BlockBitReader, mode: &Mode) -> BlockResult<Endpoints> {
    let mut raw: Endpoints = (0..mode.endpoint_count())
        .map(|_| image::Rgba([0; 4]))
        .collect();

    for channel in [Channel::R, Channel::G, Channel::B] {
        for endpoint in raw.iter_mut() {
            *endpoint.channel_mut(channel) = reader.read_bits(mode.color_bits as usize)?;
        }
    }

    if mode.alpha_mode != AlphaMode::None {
        for endpoint in raw.iter_mut() {
            *endpoint.channel_mut(Channel::A) = reader.read_bits(mode.alpha_bits as usize)?;
        }
    }

    Ok(raw)
}

/// Read parity bits subset by subset and expand each endpoint pair to 8 bits per channel
fn read_parity_and_unquantize(
    reader: &mut BlockBitReader,
    mode: &Mode,
    raw: &Endpoints,
) -> BlockResult<Endpoints> {
    let mut endpoints = ArrayVec::new();

    for pair in raw.chunks(2) {
        let parity = match mode.parity_bits {
            ParityBits::None => [None, None],
            ParityBits::PerEndpoint => {
                let p0 = reader.read_bit()?;
                let p1 = reader.read_bit()?;
                [Some(p0), Some(p1)]
            }
            ParityBits::PerSubset => {
                let p = reader.read_bit()?;
                [Some(p), Some(p)]
            }
        };

        for (endpoint, parity) in zip(pair, parity) {
            let mut color: Color =
                unquantize_color(*endpoint, mode.color_bits, mode.alpha_bits, parity);
            if mode.alpha_mode == AlphaMode::None {
                *color.channel_mut(Channel::A) = u8::MAX;
            }
            endpoints.push(color);
        }
    }

    Ok(endpoints)
}

/// Read 16 indices of `bits` each, anchors being one bit shorter.
/// A zero-width index array is not stored and reads as all zeros.
fn read_indices(
    reader: &mut BlockBitReader,
    bits: u8,
    anchors: &[bool; 16],
) -> BlockResult<IndexArray> {
    let mut indices = [0u8; 16];
    if bits == 0 {
        return Ok(indices);
    }

    for (index, anchor) in zip(indices.iter_mut(), anchors) {
        let width = bits - *anchor as u8;
        *index = reader.read_bits(width as usize)?;
    }
    Ok(indices)
}
