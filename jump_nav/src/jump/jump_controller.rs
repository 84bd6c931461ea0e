// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The drag-to-jump state machine.
//!
//! ```text
//!            Began (in hot-zone)
//!   Idle ───────────────────────────▶ Dragging ──┐ Changed: re-resolve, and
//!    ▲                                   │  ▲    │ update the preview if the
//!    │   Ended | Cancelled | Failed      │  └────┘ target changed
//!    └───────────────────────────────────┘
//! ```
//!
//! The preview has a lifecycle of its own, because it outlives the drag by one slide
//! out animation. It is removed when the host reports that the slide out is complete,
//! not when the drag ends.

use crate::{DEBUG_JUMP_NAV, DragSession, GesturePhase, GestureSample, JumpConfigOptions,
            JumpEffect, JumpEffects, JumpEvent, JumpHost, JumpPhase, JumpState,
            PREVIEW_SIZE_MULTIPLIER, PREVIEW_SLIDE_DURATION, Point, PreviewAffordance,
            RangeIndex, Rect, SlideAnimation, Size};

/// Turns [`JumpEvent`]s into [`JumpEffect`]s. It holds no state of its own (only
/// configuration), see [`JumpController::apply_event`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct JumpController {
    pub config: JumpConfigOptions,
}

impl JumpController {
    #[must_use]
    pub fn new(config: JumpConfigOptions) -> Self { Self { config } }

    /// The transition function: `(state, event) -> (state, effects)`.
    ///
    /// `index` is only read when a drag begins, at which point a snapshot of it is
    /// stored in the [`DragSession`]. Every other sample of that drag resolves against
    /// the snapshot. `host` answers geometry and text queries, and is never asked to
    /// change anything; all changes are in the returned effects.
    ///
    /// Nothing here fails. A sample that can't be resolved, or whose target can't be
    /// converted to a rectangle or to text, produces no effects and leaves the preview
    /// as it was.
    pub fn apply_event<H: JumpHost + ?Sized>(
        &self,
        state: JumpState,
        event: JumpEvent,
        index: &RangeIndex,
        host: &H,
    ) -> (JumpState, JumpEffects) {
        let mut effects = JumpEffects::new();

        let new_state = match event {
            JumpEvent::Gesture(sample) => {
                self.on_gesture(state, sample, index, host, &mut effects)
            }
            JumpEvent::AnimationCompleted(id) => {
                if state.pending_hide == Some(id) {
                    effects.push(JumpEffect::RemovePreview);
                    JumpState {
                        preview: None,
                        pending_hide: None,
                        ..state
                    }
                } else {
                    state
                }
            }
        };

        DEBUG_JUMP_NAV.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "JumpController -> apply_event()",
                event = ?event,
                phase = %new_state.phase,
                effects = ?effects,
            );
        });

        (new_state, effects)
    }

    fn on_gesture<H: JumpHost + ?Sized>(
        &self,
        mut state: JumpState,
        sample: GestureSample,
        index: &RangeIndex,
        host: &H,
        effects: &mut JumpEffects,
    ) -> JumpState {
        match sample.phase {
            GesturePhase::Began => {
                // A begin outside the hot-zone is ignored, whether or not a drag is
                // already in progress.
                if !sample.is_in_hot_zone(host.view_frame().width()) {
                    return state;
                }
                effects.push(JumpEffect::SetUserInteractionEnabled(false));
                let mut session = DragSession {
                    snapshot: index.clone(),
                    current_index: None,
                    last_screen_position: sample.location_in_superview,
                };
                self.retarget(&mut state, &mut session, sample, host, effects);
                state.phase = JumpPhase::Dragging(session);
                state
            }

            GesturePhase::Changed => {
                let JumpPhase::Dragging(mut session) = std::mem::take(&mut state.phase)
                else {
                    return state;
                };
                session.last_screen_position = sample.location_in_superview;
                self.retarget(&mut state, &mut session, sample, host, effects);
                state.phase = JumpPhase::Dragging(session);
                state
            }

            // Ended, Cancelled and Failed.
            phase => {
                if !(phase.is_exit() && state.is_dragging()) {
                    return state;
                }
                state.phase = JumpPhase::Idle;
                effects.push(JumpEffect::SetUserInteractionEnabled(true));
                hide_preview(&mut state, host.view_frame(), effects);
                state
            }
        }
    }

    /// Resolve `sample` against the session's snapshot, and show (or update) the preview
    /// and scroll to the target if it differs from the current one.
    fn retarget<H: JumpHost + ?Sized>(
        &self,
        state: &mut JumpState,
        session: &mut DragSession,
        sample: GestureSample,
        host: &H,
        effects: &mut JumpEffects,
    ) {
        let view_frame = host.view_frame();
        let fraction = sample.vertical_fraction(view_frame);

        let Some((index, range)) = session.snapshot.resolve(fraction) else {
            return;
        };
        if session.current_index == Some(index) {
            return;
        }

        let Some((text, target_rect)) =
            host.text_in_range(range).zip(host.rect_for_range(range))
        else {
            DEBUG_JUMP_NAV.then(|| {
                tracing::debug!(
                    message = "JumpController -> skip sample, no geometry for target",
                    index = index,
                    range = ?range,
                );
            });
            return;
        };

        let size = self.preview_size(host, &text);
        let resting_origin =
            Point::new(view_frame.max_x() - size.width, sample.location_in_superview.y);
        let preview = PreviewAffordance {
            text,
            frame: Rect::new(resting_origin, size),
            background: self.config.label_color,
        };

        if state.is_preview_visible() {
            effects.push(JumpEffect::UpdatePreview(preview.clone()));
        } else {
            // Also cancels the removal of a preview that is still sliding out.
            state.pending_hide = None;
            let slide_in = SlideAnimation {
                id: state.next_animation_id.take_next(),
                from: offscreen_origin(view_frame, preview.frame),
                to: resting_origin,
                duration: PREVIEW_SLIDE_DURATION,
            };
            effects.push(JumpEffect::ShowPreview {
                preview: preview.clone(),
                slide_in,
            });
        }
        effects.push(JumpEffect::ScrollRectToVisible(target_rect));

        state.preview = Some(preview);
        session.current_index = Some(index);
    }

    /// Size to fit (text + padding), then scaled up.
    fn preview_size<H: JumpHost + ?Sized>(&self, host: &H, text: &str) -> Size {
        let text_size = host.measure_preview_text(text, self.config.label_font_size);
        self.config.label_padding.inflate(text_size) * PREVIEW_SIZE_MULTIPLIER
    }
}

/// Start sliding the visible preview out. Does nothing if there is no preview, or it
/// is already on its way out.
///
/// So a drag that never showed a preview (empty index, or no sample ever resolved to a
/// target) ends without a `HidePreview`, only with `SetUserInteractionEnabled(true)`.
/// Every preview that is shown still gets exactly one hide.
fn hide_preview(state: &mut JumpState, view_frame: Rect, effects: &mut JumpEffects) {
    if !state.is_preview_visible() {
        return;
    }
    let Some(preview) = &state.preview else {
        return;
    };
    let slide_out = SlideAnimation {
        id: state.next_animation_id.take_next(),
        from: preview.frame.origin,
        to: offscreen_origin(view_frame, preview.frame),
        duration: PREVIEW_SLIDE_DURATION,
    };
    state.pending_hide = Some(slide_out.id);
    effects.push(JumpEffect::HidePreview { slide_out });
}

/// Just past the view's trailing edge, at the same height as `frame`.
fn offscreen_origin(view_frame: Rect, frame: Rect) -> Point {
    Point::new(view_frame.max_x() + frame.width(), frame.min_y())
}
