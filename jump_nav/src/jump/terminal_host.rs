// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use unicode_width::UnicodeWidthStr;

use crate::{AttributeName, AttributeRunSource, AttributedText, DEBUG_JUMP_NAV,
            JumpEffect, JumpHost, Rect, Size, TextRange};

/// A [`JumpHost`] for a text view drawn in a terminal, one line of text per row, with
/// no soft wrapping. One unit is one cell. The view sits at `view_frame` on the screen
/// (the superview), and scrolls vertically.
#[derive(Debug, Clone)]
pub struct TerminalJumpHost {
    text: AttributedText<u8>,
    view_frame: Rect,
    /// Byte offset of the start of each line.
    line_starts: Vec<usize>,
    /// Index of the first line that is visible.
    scroll_offset_row: usize,
}

impl TerminalJumpHost {
    #[must_use]
    pub fn new(text: AttributedText<u8>, view_frame: Rect) -> Self {
        let line_starts = std::iter::once(0)
            .chain(text.text().match_indices('\n').map(|(offset, _)| offset + 1))
            .filter(|offset| *offset < text.len() || *offset == 0)
            .collect();
        Self {
            text,
            view_frame,
            line_starts,
            scroll_offset_row: 0,
        }
    }

    #[must_use]
    pub fn text(&self) -> &AttributedText<u8> { &self.text }

    #[must_use]
    pub fn line_count(&self) -> usize { self.line_starts.len() }

    #[must_use]
    pub fn scroll_offset_row(&self) -> usize { self.scroll_offset_row }

    /// Line that contains `offset`.
    fn row_of(&self, offset: usize) -> usize {
        self.line_starts
            .partition_point(|start| *start <= offset)
            .saturating_sub(1)
    }

    /// Apply the effects that change this host's own state. The preview is drawn by the
    /// caller, so only scrolling is handled here.
    pub fn apply_effect(&mut self, effect: &JumpEffect) {
        if let JumpEffect::ScrollRectToVisible(rect) = effect {
            self.scroll_rect_to_visible(*rect);
        }
    }

    /// Scroll the least amount needed so that the rows of `rect` are visible. If `rect`
    /// is taller than the view, its top row wins.
    #[allow(clippy::cast_possible_truncation)]
    #[allow(clippy::cast_sign_loss)]
    pub fn scroll_rect_to_visible(&mut self, rect: Rect) {
        let visible_rows = self.view_frame.height().max(0.0) as usize;
        let top = rect.min_y().max(0.0) as usize;
        let bottom = (rect.max_y().ceil().max(0.0) as usize).max(top.saturating_add(1));

        if top < self.scroll_offset_row {
            self.scroll_offset_row = top;
        } else if bottom > self.scroll_offset_row.saturating_add(visible_rows) {
            self.scroll_offset_row = bottom.saturating_sub(visible_rows).min(top);
        }

        DEBUG_JUMP_NAV.then(|| {
            tracing::debug!(
                message = "TerminalJumpHost -> scroll_rect_to_visible()",
                rect = ?rect,
                scroll_offset_row = self.scroll_offset_row,
            );
        });
    }
}

impl JumpHost for TerminalJumpHost {
    fn view_frame(&self) -> Rect { self.view_frame }

    #[allow(clippy::cast_precision_loss)]
    fn rect_for_range(&self, range: TextRange) -> Option<Rect> {
        let text = self.text.text_in_range(range)?;
        let first_row = self.row_of(range.lower_bound());
        let line_start = self.line_starts.get(first_row).copied()?;
        let column = self.text.text().get(line_start..range.lower_bound())?.width();
        let row_count = text.lines().count().max(1);
        let width = text.lines().map(UnicodeWidthStr::width).max().unwrap_or(0);
        Some(Rect::from_xywh(
            column as f64,
            first_row as f64,
            width as f64,
            row_count as f64,
        ))
    }

    fn text_in_range(&self, range: TextRange) -> Option<String> {
        self.text.text_in_range(range).map(str::to_string)
    }

    /// Display width in cells, on one row. Terminals have a single font size.
    #[allow(clippy::cast_precision_loss)]
    fn measure_preview_text(&self, text: &str, _font_size: f64) -> Size {
        Size::new(text.width() as f64, 1.0)
    }
}

impl AttributeRunSource<u8> for TerminalJumpHost {
    fn text_len(&self) -> usize { self.text.len() }

    fn for_each_attribute_run(
        &self,
        attribute_name: &AttributeName,
        visit: &mut dyn FnMut(TextRange, Option<&u8>),
    ) {
        self.text.for_each_attribute_run(attribute_name, visit);
    }
}
