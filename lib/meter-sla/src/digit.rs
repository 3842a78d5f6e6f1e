/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

/// The zero of every decimal digit (Nd) run in the basic multilingual plane.
///
/// Each run holds the ten digits `0..=9` in order.
const DECIMAL_ZEROS: &[u32] = &[
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946,
    0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0,
    0xA9F0, 0xAA50, 0xABF0, 0xFF10,
];

/// Get the value of a decimal digit from any script.
///
/// Digits outside the basic multilingual plane are not accepted.
pub(crate) fn decimal_value(c: char) -> Option<u8> {
    let cp = u32::from(c);
    let i = DECIMAL_ZEROS.partition_point(|zero| *zero <= cp);
    let zero = DECIMAL_ZEROS[i.checked_sub(1)?];
    let v = cp - zero;
    if v < 10 { Some(v as u8) } else { None }
}

/// Rewrite text made only of decimal digits with ascii digits.
///
/// Returns `None` if any char is not a decimal digit. The empty string gives
/// an empty string.
pub(crate) fn to_ascii_digits(text: &str) -> Option<String> {
    let mut s = String::with_capacity(text.len());
    for c in text.chars() {
        s.push(char::from(b'0' + decimal_value(c)?));
    }
    Some(s)
}
