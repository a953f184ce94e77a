// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::io::{Cursor, Seek, SeekFrom};

use anyhow::Result;

use crate::bc7::Bc7Block;
use crate::container::ContainerHeader;
use crate::dimensions::{Dimensioned, Dimensions};
use crate::error::TextureError;
use crate::format::Format;
use crate::texture::Bc7Texture;

use super::*;

/// Serialize a header and read it back
fn round_trip(header: &DDSHeader) -> Result<(DDSHeader, Vec<u8>)> {
    let mut cursor = Cursor::new(Vec::new());
    header.write_header(&mut cursor)?;
    cursor.seek(SeekFrom::Start(0))?;
    let read = DDSHeader::read_header(&mut cursor)?;
    Ok((read, cursor.into_inner()))
}

#[test]
fn bc7_header_round_trip() -> Result<()> {
    let dimensions = Dimensions::new(64, 32)?;
    let (header, bytes) = round_trip(&DDSHeader::bc7(dimensions, true))?;

    assert_eq!(&bytes[..4], b"DDS ", "Missing magic");
    assert_eq!(bytes.len(), 4 + 124 + 20, "Header and DX10 extension are 148 bytes");
    assert_eq!(&bytes[84..88], b"DX10", "FourCC lives at offset 84");
    assert_eq!(u32::from_le_bytes(bytes[128..132].try_into()?), 99);

    assert_eq!(header.dimensions()?, dimensions);
    assert_eq!(header.format()?, Format::BC7 { srgb: true });
    assert_eq!(header.pitch_or_linear_size, 64 * 32);
    assert_eq!(header.mips(), None);
    assert_eq!(header.layers(), None);
    Ok(())
}

#[test]
fn typeless_bc7_is_linear() -> Result<()> {
    let mut header = DDSHeader::bc7(Dimensions::new(4, 4)?, true);
    header.dx10_header.as_mut().unwrap().dxgi_format = DXGIFormat::from(97);
    let (header, _) = round_trip(&header)?;
    assert_eq!(header.format()?, Format::BC7 { srgb: false });
    Ok(())
}

#[test]
fn other_dxgi_formats_are_rejected() -> Result<()> {
    let mut header = DDSHeader::bc7(Dimensions::new(4, 4)?, false);
    header.dx10_header.as_mut().unwrap().dxgi_format = DXGIFormat::from(71); // BC1
    let (header, _) = round_trip(&header)?;

    assert_eq!(
        header.dx10_header.map(|dx10| dx10.dxgi_format),
        Some(DXGIFormat::Other(71))
    );
    assert!(matches!(header.format(), Err(TextureError::Format(_))));
    Ok(())
}

#[test]
fn legacy_four_cc_is_rejected() -> Result<()> {
    let mut header = DDSHeader::bc7(Dimensions::new(4, 4)?, false);
    header.pixel_format.four_cc = FourCC(*b"DXT5");
    header.dx10_header = None;
    let (header, bytes) = round_trip(&header)?;

    assert_eq!(bytes.len(), 128, "No DX10 extension without the DX10 FourCC");
    assert!(header.dx10_header.is_none());
    match header.format() {
        Err(TextureError::Format(message)) => {
            assert!(message.contains("DXT5"), "message should name the FourCC: {message}")
        }
        other => panic!("unexpected result {other:?}"),
    }
    Ok(())
}

#[test]
fn bad_magic_is_a_header_error() {
    let mut cursor = Cursor::new(b"PNG!".repeat(40));
    assert!(matches!(
        DDSHeader::read_header(&mut cursor),
        Err(TextureError::Header(_))
    ));
}

#[test]
fn partial_block_dimensions_are_rejected() -> Result<()> {
    let mut header = DDSHeader::bc7(Dimensions::new(8, 8)?, false);
    header.width = 6;

    let mut cursor = Cursor::new(Vec::new());
    header.write_header(&mut cursor)?;
    cursor.get_mut().extend([0x40u8; 64]);
    cursor.seek(SeekFrom::Start(0))?;

    match read_texture(&mut cursor) {
        Err(TextureError::Dimensions(_)) => Ok(()),
        other => panic!("unexpected result {other:?}"),
    }
}

#[test]
fn huge_header_without_blocks_is_an_error() -> Result<()> {
    let mut header = DDSHeader::bc7(Dimensions::new(4, 4)?, false);
    header.width = 0xFFFF_FFFC;
    header.height = 0xFFFF_FFFC;

    let mut cursor = Cursor::new(Vec::new());
    header.write_header(&mut cursor)?;
    cursor.seek(SeekFrom::Start(0))?;

    match read_texture(&mut cursor) {
        Err(TextureError::Format(_)) | Err(TextureError::IO(_)) => Ok(()),
        other => panic!("unexpected result {other:?}"),
    }
}

#[test]
fn large_header_with_short_data_is_an_io_error() -> Result<()> {
    let mut header = DDSHeader::bc7(Dimensions::new(4, 4)?, false);
    header.width = 0x10_0000;
    header.height = 0x10_0000;

    let mut cursor = Cursor::new(Vec::new());
    header.write_header(&mut cursor)?;
    cursor.get_mut().extend([0x40u8; 64]);
    cursor.seek(SeekFrom::Start(0))?;

    match read_texture(&mut cursor) {
        Err(TextureError::IO(err)) => {
            assert_eq!(err.kind(), std::io::ErrorKind::UnexpectedEof);
            Ok(())
        }
        other => panic!("unexpected result {other:?}"),
    }
}

#[test]
fn alpha_mode_ignores_upper_flag_bits() -> Result<()> {
    let mut cursor = Cursor::new(Vec::new());
    DDSHeader::bc7(Dimensions::new(4, 4)?, false).write_header(&mut cursor)?;
    let mut bytes = cursor.into_inner();
    // miscFlags2 is the last field of the DX10 extension
    bytes[144..148].copy_from_slice(&0x8000_0003u32.to_le_bytes());

    let header = DDSHeader::read_header(&mut Cursor::new(bytes))?;
    assert_eq!(
        header.dx10_header.map(|dx10| dx10.alpha_mode),
        Some(AlphaMode::Opaque)
    );
    assert_eq!(header.format()?, Format::BC7 { srgb: false });
    Ok(())
}

#[test]
fn volume_textures_are_rejected() -> Result<()> {
    let mut header = DDSHeader::bc7(Dimensions::new(4, 4)?, false);
    header.dx10_header.as_mut().unwrap().dimensionality = Dimensionality::Texture3D;
    assert!(matches!(header.dimensions(), Err(TextureError::Format(_))));
    Ok(())
}

#[test]
fn layer_and_mip_counts() -> Result<()> {
    let mut header = DDSHeader::bc7(Dimensions::new(4, 4)?, false);
    header.flags |= DDSFlags::MipmapCount;
    header.mipmap_count = 3;
    if let Some(dx10) = header.dx10_header.as_mut() {
        dx10.cube = true;
        dx10.array_size = 2;
    }
    let (header, _) = round_trip(&header)?;

    assert_eq!(header.mips(), Some(3));
    assert_eq!(header.layers(), Some(12));
    Ok(())
}

#[test]
fn texture_round_trip() -> Result<()> {
    let dimensions = Dimensions::new(8, 4)?;
    let blocks = vec![Bc7Block([0x40; 16]), Bc7Block::from_halves(1, 2)];
    let texture = Bc7Texture::from_blocks(dimensions, Format::BC7 { srgb: false }, blocks)?;

    let mut cursor = Cursor::new(Vec::new());
    DDSHeader::write_texture(&mut cursor, &texture)?;
    cursor.seek(SeekFrom::Start(0))?;
    let read = DDSHeader::read_texture(&mut cursor)?;

    assert_eq!(read.dimensions(), dimensions);
    assert_eq!(read.format, texture.format);
    assert_eq!(read.blocks(), texture.blocks());
    Ok(())
}
