// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! RGB (24-bit truecolor) color representation, used for the background fill of the
//! preview label.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::{CommonError, CommonErrorType, CommonResult, parse_hex_color};

/// Represents a color in RGB (24-bit truecolor) format.
///
/// Serializes to (and deserializes from) a `#RRGGBB` string, which is the format used by
/// [`crate::JumpConfigOptions`] JSON files.
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug)]
pub struct RgbValue {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl From<(u8, u8, u8)> for RgbValue {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::from_u8(red, green, blue) }
}

impl RgbValue {
    #[must_use]
    pub const fn from_u8(red: u8, green: u8, blue: u8) -> Self { Self { red, green, blue } }

    /// The whole input has to be consumed, so `#1a8cff` is valid while `#1a8cff00` is
    /// not.
    ///
    /// # Errors
    ///
    /// Returns an error if the input string is not a valid hex color format.
    ///
    /// See [`CommonResult`] for error details.
    pub fn try_from_hex_color(input: &str) -> CommonResult<RgbValue> {
        match parse_hex_color(input) {
            Ok(("", color)) => Ok(color),
            _ => CommonError::new_error_result(
                CommonErrorType::InvalidHexColorFormat,
                &format!("Invalid hex color format: {input}"),
            ),
        }
    }
}

impl Display for RgbValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl Serialize for RgbValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RgbValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let input = String::deserialize(deserializer)?;
        RgbValue::try_from_hex_color(&input).map_err(|_| {
            de::Error::invalid_value(de::Unexpected::Str(&input), &"a #RRGGBB hex color")
        })
    }
}
