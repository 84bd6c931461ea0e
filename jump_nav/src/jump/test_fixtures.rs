// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{AttributeName, AttributeRunSource, AttributedText, GesturePhase,
            GestureSample, HEADING_ATTRIBUTE, JumpHost, Point, RangeIndex, Rect, Size,
            TextRange, attribute_markdown_headings};

/// The text view sits 100 units below the top of its superview, and is 300 x 500.
pub const VIEW_FRAME: Rect = Rect::from_xywh(0.0, 100.0, 300.0, 500.0);

/// View x of samples that land in the hot-zone.
pub const HOT_ZONE_X: f64 = 290.0;

/// Every range is laid out as one 10 unit tall row per byte offset of its lower bound.
pub const ROW_HEIGHT: f64 = 10.0;

/// Five headings, so the five buckets are 100 units tall each.
pub const FIVE_HEADINGS_MD: &str = "# H0\nbody\n# H1\nbody\n# H2\nbody\n# H3\nbody\n# H4\nbody\n";

/// In memory host. Measured text is 10 units per char wide, and `font_size` tall.
#[derive(Debug)]
pub struct FakeJumpHost {
    pub text: AttributedText<u8>,
    pub view_frame: Rect,
    /// Ranges that `rect_for_range` can't convert.
    pub ranges_without_rect: Vec<TextRange>,
    /// Ranges that `text_in_range` can't read.
    pub ranges_without_text: Vec<TextRange>,
}

impl FakeJumpHost {
    pub fn new(text: AttributedText<u8>) -> Self {
        Self {
            text,
            view_frame: VIEW_FRAME,
            ranges_without_rect: vec![],
            ranges_without_text: vec![],
        }
    }

    pub fn with_five_headings() -> Self {
        Self::new(attribute_markdown_headings(FIVE_HEADINGS_MD).unwrap())
    }

    pub fn heading_index(&self) -> RangeIndex {
        RangeIndex::build_for_value(self, &AttributeName::from(HEADING_ATTRIBUTE), &1_u8)
    }
}

impl JumpHost for FakeJumpHost {
    fn view_frame(&self) -> Rect { self.view_frame }

    #[allow(clippy::cast_precision_loss)]
    fn rect_for_range(&self, range: TextRange) -> Option<Rect> {
        if self.ranges_without_rect.contains(&range) {
            return None;
        }
        Some(Rect::from_xywh(
            0.0,
            range.lower_bound() as f64 * ROW_HEIGHT,
            self.view_frame.width(),
            ROW_HEIGHT,
        ))
    }

    fn text_in_range(&self, range: TextRange) -> Option<String> {
        if self.ranges_without_text.contains(&range) {
            return None;
        }
        self.text.text_in_range(range).map(str::to_string)
    }

    #[allow(clippy::cast_precision_loss)]
    fn measure_preview_text(&self, text: &str, font_size: f64) -> Size {
        Size::new(text.chars().count() as f64 * 10.0, font_size)
    }
}

impl AttributeRunSource<u8> for FakeJumpHost {
    fn text_len(&self) -> usize { self.text.len() }

    fn for_each_attribute_run(
        &self,
        attribute_name: &AttributeName,
        visit: &mut dyn FnMut(TextRange, Option<&u8>),
    ) {
        self.text.for_each_attribute_run(attribute_name, visit);
    }
}

/// A sample at [`HOT_ZONE_X`], `relative_y` below the top of [`VIEW_FRAME`].
pub fn sample(phase: GesturePhase, relative_y: f64) -> GestureSample {
    sample_at(phase, HOT_ZONE_X, relative_y)
}

pub fn sample_at(phase: GesturePhase, view_x: f64, relative_y: f64) -> GestureSample {
    GestureSample::from_superview_location(
        phase,
        Point::new(VIEW_FRAME.min_x() + view_x, VIEW_FRAME.min_y() + relative_y),
        VIEW_FRAME,
    )
}
