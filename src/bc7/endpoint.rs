// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::color::Color;

/// Expand a `bits`-wide value to 8 bits by replicating its high bits into the low bits
pub fn unquantize(value: u8, bits: u8) -> u8 {
    assert!(
        (1..=8).contains(&bits),
        "Cannot unquantize a {bits}-bit value"
    );
    let shifted = (value as u16) << (8 - bits);
    (shifted | (shifted >> bits)) as u8
}

/// Append a parity bit below `value` and expand the result to 8 bits
pub fn unquantize_with_parity(value: u8, bits: u8, parity: bool) -> u8 {
    unquantize((value << 1) | parity as u8, bits + 1)
}

/// Expand every channel of a quantized endpoint. Color and alpha may have different widths,
/// and `parity` is appended to all four channels when present.
pub fn unquantize_color(raw: Color, color_bits: u8, alpha_bits: u8, parity: Option<bool>) -> Color {
    let expand = |value: u8, bits: u8| match (bits, parity) {
        (0, _) => 0,
        (bits, None) => unquantize(value, bits),
        (bits, Some(p)) => unquantize_with_parity(value, bits, p),
    };

    let [r, g, b, a] = raw.0;
    image::Rgba([
        expand(r, color_bits),
        expand(g, color_bits),
        expand(b, color_bits),
        expand(a, alpha_bits),
    ])
}
