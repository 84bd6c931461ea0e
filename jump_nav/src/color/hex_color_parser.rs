// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! This module contains a parser that parses a hex color string into a [`RgbValue`]
//! struct. The hex color string has to be in the following format: `#RRGGBB`, eg:
//! `#1A8CFF` for the default preview label background.

use nom::{IResult, Parser,
          bytes::complete::{tag, take_while_m_n},
          combinator::map_res};

use crate::RgbValue;

/// Parse function that generates an [`RgbValue`] struct from a valid hex color string.
/// Any input after the 6 hex digits is returned as the remainder.
///
/// # Errors
///
/// Returns a nom parsing error if the input does not start with `#` followed by 6 hex
/// digits.
pub fn parse_hex_color(input: &str) -> IResult<&str, RgbValue> {
    let (input, _) = tag("#").parse(input)?;
    let (input, (red, green, blue)) =
        (parse_hex_seg, parse_hex_seg, parse_hex_seg).parse(input)?;
    Ok((input, RgbValue { red, green, blue }))
}

/// Matches exactly two hex digits and outputs the byte they encode.
fn parse_hex_seg(input: &str) -> IResult<&str, u8> {
    map_res(
        take_while_m_n(2, 2, |it: char| it.is_ascii_hexdigit()),
        |it: &str| u8::from_str_radix(it, 16),
    )
    .parse(input)
}
