// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

use crate::dimensions::DimensionError;

/// A format violation inside a single BC7 block
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum BlockError {
    #[error("No mode bit is set in the first 8 bits of the block")]
    InvalidMode,

    #[error("Reading {requested} bits at offset {offset} overruns the 128-bit block")]
    BitOverrun { offset: usize, requested: usize },

    #[error("Block fields ended after {consumed} of 128 bits")]
    ShortRead { consumed: usize },
}

pub type BlockResult<T> = Result<T, BlockError>;

#[derive(Error, Debug)]
pub enum TextureError {
    #[error("Error in file header: {0}")]
    Header(#[from] binrw::Error),

    #[error("IO error in file contents: {0}")]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    Dimensions(#[from] DimensionError),

    #[error("Unsupported format: {0}")]
    Format(String),

    #[error("Invalid block at row {row}, column {column}: {source}")]
    Block {
        row: usize,
        column: usize,
        source: BlockError,
    },
}

pub type TextureResult<T> = Result<T, TextureError>;
