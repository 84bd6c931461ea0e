// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

use crate::{EdgeInsets, RgbValue};

/// Turn on verbose `tracing::debug!` output of every state transition.
pub const DEBUG_JUMP_NAV: bool = true;

/// A gesture has to begin in the rightmost 10% of the text view to activate jump mode.
/// The hot-zone is `[width * HOT_ZONE_START_FRACTION, width]`, inclusive on both ends.
pub const HOT_ZONE_START_FRACTION: f64 = 0.9;

/// The size-to-fit preview label is scaled by this factor in both dimensions.
pub const PREVIEW_SIZE_MULTIPLIER: f64 = 2.0;

/// Duration of both the slide in (on show) and the slide out (on hide) animation.
pub const PREVIEW_SLIDE_DURATION: Duration = Duration::from_millis(150);

/// `rgb(26, 140, 255)`.
pub const DEFAULT_LABEL_COLOR: RgbValue = RgbValue::from_u8(26, 140, 255);

pub const DEFAULT_LABEL_PADDING: EdgeInsets = EdgeInsets::new(10.0, 5.0, 10.0, 5.0);

pub const DEFAULT_LABEL_FONT_SIZE: f64 = 20.0;
