// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter},
          time::Duration};

use crate::{GestureSample, InlineVec, Point, Rect, RgbValue};

/// Identifies one slide animation, so that its completion can be matched against the
/// animation the controller is waiting for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationId(pub u64);

impl AnimationId {
    /// Returns `self`, and moves `self` on to the following id.
    #[must_use]
    pub fn take_next(&mut self) -> AnimationId {
        let it = *self;
        self.0 = self.0.wrapping_add(1);
        it
    }
}

impl Display for AnimationId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { write!(f, "anim#{}", self.0) }
}

/// Move the preview's origin from `from` to `to` over `duration`. The host runs it, and
/// reports back with [`JumpEvent::AnimationCompleted`] when it is done.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideAnimation {
    pub id: AnimationId,
    pub from: Point,
    pub to: Point,
    pub duration: Duration,
}

/// What the floating preview label should show, and where. The frame is in the
/// superview's coordinate space.
#[derive(Clone, Debug, PartialEq)]
pub struct PreviewAffordance {
    pub text: String,
    pub frame: Rect,
    pub background: RgbValue,
}

/// Instructions for the host, in the order they have to be applied.
#[derive(Clone, Debug, PartialEq, strum_macros::Display)]
pub enum JumpEffect {
    /// Enable or disable the text view's own touch handling, so that it doesn't scroll
    /// while the user drags in the hot-zone.
    SetUserInteractionEnabled(bool),
    /// Add the preview to the superview (replacing one that is still on screen) at
    /// `slide_in.from`, then run `slide_in`.
    ShowPreview {
        preview: PreviewAffordance,
        slide_in: SlideAnimation,
    },
    /// Change the text and frame of the preview that is on screen.
    UpdatePreview(PreviewAffordance),
    /// Scroll the text view, without animation, so that this rectangle is visible.
    ScrollRectToVisible(Rect),
    /// Run `slide_out`. The preview stays in the superview until the matching
    /// [`JumpEffect::RemovePreview`].
    HidePreview { slide_out: SlideAnimation },
    /// Take the preview out of the superview.
    RemovePreview,
}

pub type JumpEffects = InlineVec<JumpEffect>;

/// Input to [`crate::JumpController::apply_event`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum JumpEvent {
    Gesture(GestureSample),
    AnimationCompleted(AnimationId),
}

impl From<GestureSample> for JumpEvent {
    fn from(sample: GestureSample) -> Self { JumpEvent::Gesture(sample) }
}
