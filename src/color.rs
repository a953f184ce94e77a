// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use strum::{Display, FromRepr, VariantArray};

pub type Color = image::Rgba<u8>;

/// One channel of an RGBA color
#[derive(Copy, Clone, Debug, PartialEq, Eq, Display, VariantArray)]
#[repr(usize)]
pub enum Channel {
    R = 0,
    G = 1,
    B = 2,
    A = 3,
}

pub trait ColorImpl {
    fn channel(&self, channel: Channel) -> u8;
    fn channel_mut(&mut self, channel: Channel) -> &mut u8;

    /// Exchange the values of two channels
    fn swap_channels(&mut self, a: Channel, b: Channel);
}

impl ColorImpl for Color {
    fn channel(&self, channel: Channel) -> u8 {
        self.0[channel as usize]
    }

    fn channel_mut(&mut self, channel: Channel) -> &mut u8 {
        &mut self.0[channel as usize]
    }

    fn swap_channels(&mut self, a: Channel, b: Channel) {
        self.0.swap(a as usize, b as usize)
    }
}

/// Which color channel trades places with alpha in a block.
///
/// The discriminants match the 2-bit rotation field of the block.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Display, FromRepr, VariantArray)]
#[repr(u8)]
pub enum Rotation {
    #[default]
    None = 0,
    R = 1,
    G = 2,
    B = 3,
}

impl Rotation {
    /// The color channel swapped with alpha, if any
    pub fn channel(self) -> Option<Channel> {
        match self {
            Rotation::None => None,
            Rotation::R => Some(Channel::R),
            Rotation::G => Some(Channel::G),
            Rotation::B => Some(Channel::B),
        }
    }

    /// Apply the rotation to a color. The swap is its own inverse.
    pub fn apply(self, mut color: Color) -> Color {
        if let Some(channel) = self.channel() {
            color.swap_channels(channel, Channel::A);
        }
        color
    }
}
