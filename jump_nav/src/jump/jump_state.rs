// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{AnimationId, Point, PreviewAffordance, RangeIndex};

/// Everything the controller remembers between two events. It is owned by the caller,
/// passed into [`crate::JumpController::apply_event`] and handed back updated.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JumpState {
    pub phase: JumpPhase,
    /// The preview that the host has on screen, including one that is sliding out.
    pub preview: Option<PreviewAffordance>,
    /// The slide out animation whose completion removes [`JumpState::preview`].
    pub pending_hide: Option<AnimationId>,
    pub next_animation_id: AnimationId,
}

#[derive(Clone, Debug, Default, PartialEq, strum_macros::Display)]
pub enum JumpPhase {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// One drag, from a `Began` sample in the hot-zone to the `Ended`, `Cancelled` or
/// `Failed` sample that finishes it.
#[derive(Clone, Debug, PartialEq)]
pub struct DragSession {
    /// The index as it was when the drag began. Rebuilding the index during the drag
    /// doesn't affect this.
    pub snapshot: RangeIndex,
    /// Index into `snapshot` of the range that is previewed, if any.
    pub current_index: Option<usize>,
    /// Superview location of the most recent sample.
    pub last_screen_position: Point,
}

impl JumpState {
    #[must_use]
    pub fn is_dragging(&self) -> bool { matches!(self.phase, JumpPhase::Dragging(_)) }

    #[must_use]
    pub fn drag_session(&self) -> Option<&DragSession> {
        match &self.phase {
            JumpPhase::Dragging(it) => Some(it),
            JumpPhase::Idle => None,
        }
    }

    /// `true` if a preview is on screen and not on its way out.
    #[must_use]
    pub fn is_preview_visible(&self) -> bool {
        self.preview.is_some() && self.pending_hide.is_none()
    }
}
