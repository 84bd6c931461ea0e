// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Rect, Size, TextRange};

/// Geometry and text queries that [`crate::JumpController`] needs from the host text
/// view. The host owns layout and rendering, the controller only asks.
///
/// The view frame is in the coordinate space of the view's superview, which is the same
/// space that [`crate::GestureSample::location_in_superview`] uses. Range rectangles are
/// in the text view's content space, which is what
/// [`crate::JumpEffect::ScrollRectToVisible`] takes.
pub trait JumpHost {
    /// The text view's frame: its top left corner in the superview, its width and its
    /// height.
    fn view_frame(&self) -> Rect;

    /// The rectangle that `range` occupies in the laid out text, or `None` if the range
    /// is not laid out right now (or can't be converted). A `None` makes the controller
    /// skip the sample.
    fn rect_for_range(&self, range: TextRange) -> Option<Rect>;

    /// The text inside `range`, or `None` if the range is no longer valid for the
    /// host's text.
    fn text_in_range(&self, range: TextRange) -> Option<String>;

    /// The size that `text` takes up when rendered in the preview label's font, without
    /// any padding.
    fn measure_preview_text(&self, text: &str, font_size: f64) -> Size;
}
