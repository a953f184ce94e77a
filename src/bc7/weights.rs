// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

pub static WEIGHTS_2: [u16; 4] = [0, 21, 43, 64];
pub static WEIGHTS_3: [u16; 8] = [0, 9, 18, 27, 37, 46, 55, 64];
pub static WEIGHTS_4: [u16; 16] = [0, 4, 9, 13, 17, 21, 26, 30, 34, 38, 43, 47, 51, 55, 60, 64];

/// Interpolation weights out of 64 for an index precision of 2, 3, or 4 bits
pub fn weights(bits: u8) -> &'static [u16] {
    match bits {
        2 => &WEIGHTS_2,
        3 => &WEIGHTS_3,
        4 => &WEIGHTS_4,
        _ => panic!("No interpolation weights for {bits}-bit indices"),
    }
}

/// Blend two endpoint channels with the weight selected by `index`, rounding to nearest
pub fn interpolate(a: u8, b: u8, bits: u8, index: u8) -> u8 {
    let weight = weights(bits)[index as usize];
    let blended = (64 - weight) * a as u16 + weight * b as u16 + 32;
    (blended >> 6) as u8
}
