// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{CommonError, CommonErrorType, CommonResult, DEFAULT_LABEL_COLOR,
            DEFAULT_LABEL_FONT_SIZE, DEFAULT_LABEL_PADDING, EdgeInsets, RgbValue};

/// Construction time options of a [`crate::JumpTextView`]. Every key is optional in
/// JSON, and missing keys take their default.
///
/// ```
/// use jump_nav::{JumpConfigOptions, RgbValue};
///
/// let options = JumpConfigOptions::try_from_json_str(r##"{ "labelColor": "#ff8000" }"##)
///     .unwrap();
/// assert_eq!(options.label_color, RgbValue::from_u8(255, 128, 0));
/// assert_eq!(options.label_font_size, 20.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct JumpConfigOptions {
    /// Background fill of the preview label.
    pub label_color: RgbValue,
    pub label_padding: EdgeInsets,
    pub label_font_size: f64,
}

mod jump_config_options_impl {
    use super::*;

    impl Default for JumpConfigOptions {
        fn default() -> Self {
            Self {
                label_color: DEFAULT_LABEL_COLOR,
                label_padding: DEFAULT_LABEL_PADDING,
                label_font_size: DEFAULT_LABEL_FONT_SIZE,
            }
        }
    }
}

impl JumpConfigOptions {
    #[must_use]
    pub fn with_label_color(mut self, label_color: RgbValue) -> Self {
        self.label_color = label_color;
        self
    }

    /// # Errors
    ///
    /// Returns a [`CommonErrorType::ConfigParsingError`] if the JSON is malformed, has
    /// an unknown key, or has a bad value (eg: a color that is not `#RRGGBB`, or a font
    /// size that is not positive).
    pub fn try_from_json_str(json: &str) -> CommonResult<Self> {
        let options: JumpConfigOptions = match serde_json::from_str(json) {
            Ok(it) => it,
            Err(err) => {
                return CommonError::new_error_result(
                    CommonErrorType::ConfigParsingError,
                    &format!("Invalid jump config: {err}"),
                );
            }
        };

        if !(options.label_font_size.is_finite() && options.label_font_size > 0.0) {
            return CommonError::new_error_result(
                CommonErrorType::ConfigParsingError,
                &format!("Invalid label font size: {}", options.label_font_size),
            );
        }

        Ok(options)
    }

    /// # Errors
    ///
    /// Returns a [`CommonErrorType::IOError`] if the file can't be read, or whatever
    /// [`JumpConfigOptions::try_from_json_str`] returns for its content.
    pub fn try_load_from_file(path: impl AsRef<Path>) -> CommonResult<Self> {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(it) => it,
            Err(err) => {
                return CommonError::new_error_result(
                    CommonErrorType::IOError,
                    &format!("Could not read jump config {}: {err}", path.display()),
                );
            }
        };
        Self::try_from_json_str(&json)
    }
}
