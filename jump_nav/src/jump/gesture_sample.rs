// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::{HOT_ZONE_START_FRACTION, Point, Rect};

/// Lifecycle phase of a long press gesture, as reported by the platform's gesture
/// recognizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum GesturePhase {
    Began,
    Changed,
    Ended,
    Cancelled,
    Failed,
}

impl GesturePhase {
    /// `Ended`, `Cancelled` and `Failed` all end a drag the same way.
    #[must_use]
    pub fn is_exit(self) -> bool {
        matches!(
            self,
            GesturePhase::Ended | GesturePhase::Cancelled | GesturePhase::Failed
        )
    }
}

/// One position report from the gesture recognizer.
///
/// The same touch is given in two coordinate spaces:
/// - `location_in_view`: relative to the text view's own top left corner. Used for the
///   hot-zone test.
/// - `location_in_superview`: relative to the view's parent, which is the space that
///   [`crate::JumpHost::view_frame`] is expressed in. Used for the vertical fraction and
///   the preview position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSample {
    pub phase: GesturePhase,
    pub location_in_view: Point,
    pub location_in_superview: Point,
}

impl GestureSample {
    #[must_use]
    pub const fn new(
        phase: GesturePhase,
        location_in_view: Point,
        location_in_superview: Point,
    ) -> Self {
        Self {
            phase,
            location_in_view,
            location_in_superview,
        }
    }

    /// Build a sample from a location in superview coordinates, deriving the view
    /// coordinates from `view_frame`.
    #[must_use]
    pub fn from_superview_location(
        phase: GesturePhase,
        location_in_superview: Point,
        view_frame: Rect,
    ) -> Self {
        Self::new(
            phase,
            location_in_superview - view_frame.origin,
            location_in_superview,
        )
    }

    /// `true` if the sample is in the rightmost 10% of a view that is `view_width`
    /// wide. Both ends are inclusive.
    #[must_use]
    pub fn is_in_hot_zone(&self, view_width: f64) -> bool {
        let x = self.location_in_view.x;
        x >= view_width * HOT_ZONE_START_FRACTION && x <= view_width
    }

    /// Normalized vertical position inside the view, `0` at the top edge and `1` at the
    /// bottom edge. Not clamped: a sample above or below the view gives a fraction
    /// outside `[0, 1]`, and a view with no height gives a non finite value.
    #[must_use]
    pub fn vertical_fraction(&self, view_frame: Rect) -> f64 {
        let relative_y = self.location_in_superview.y - view_frame.min_y();
        relative_y / view_frame.height()
    }

    /// Convert a crossterm mouse event into a sample. The terminal screen is the
    /// superview and one cell is one unit, so `view_frame` is the text view's area in
    /// cells.
    ///
    /// Only the left button takes part in the gesture: press begins it, drag moves it
    /// and release ends it. Every other event returns `None`.
    #[must_use]
    pub fn try_from_mouse_event(mouse_event: MouseEvent, view_frame: Rect) -> Option<Self> {
        let phase = match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => GesturePhase::Began,
            MouseEventKind::Drag(MouseButton::Left) => GesturePhase::Changed,
            MouseEventKind::Up(MouseButton::Left) => GesturePhase::Ended,
            _ => return None,
        };
        let location_in_superview =
            Point::new(f64::from(mouse_event.column), f64::from(mouse_event.row));
        Some(Self::from_superview_location(
            phase,
            location_in_superview,
            view_frame,
        ))
    }
}
