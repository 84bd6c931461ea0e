// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::Size;

/// Padding around the text of the preview label.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeInsets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl EdgeInsets {
    #[must_use]
    pub const fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Grow `content` by these insets on every side.
    #[must_use]
    pub fn inflate(&self, content: Size) -> Size {
        Size::new(
            content.width + self.left + self.right,
            content.height + self.top + self.bottom,
        )
    }
}
