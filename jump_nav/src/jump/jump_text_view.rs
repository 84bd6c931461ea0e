// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{AnimationId, AttributeName, AttributeRunSource, DEBUG_JUMP_NAV,
            GestureSample, JumpConfigOptions, JumpController, JumpEffects, JumpEvent,
            JumpHost, JumpState, RangeIndex};

/// Glue between a host text view and the [`JumpController`]. It owns the host, the
/// current [`RangeIndex`] and the [`JumpState`], and feeds events through
/// [`JumpController::apply_event`]. The host applies the returned effects.
///
/// ```
/// use jump_nav::{AttributeName, AttributeRunSource, GesturePhase, GestureSample,
///                JumpConfigOptions, JumpEffect, JumpHost, JumpTextView, Point, Rect,
///                Size, TextRange, attribute_markdown_headings, AttributedText};
///
/// struct Host(AttributedText<u8>);
///
/// impl JumpHost for Host {
///     fn view_frame(&self) -> Rect { Rect::from_xywh(0.0, 0.0, 100.0, 100.0) }
///     fn rect_for_range(&self, range: TextRange) -> Option<Rect> {
///         Some(Rect::from_xywh(0.0, range.lower_bound() as f64, 100.0, 1.0))
///     }
///     fn text_in_range(&self, range: TextRange) -> Option<String> {
///         self.0.text_in_range(range).map(str::to_string)
///     }
///     fn measure_preview_text(&self, text: &str, font_size: f64) -> Size {
///         Size::new(text.len() as f64 * font_size / 2.0, font_size)
///     }
/// }
///
/// impl AttributeRunSource<u8> for Host {
///     fn text_len(&self) -> usize { self.0.len() }
///     fn for_each_attribute_run(
///         &self,
///         name: &AttributeName,
///         visit: &mut dyn FnMut(TextRange, Option<&u8>),
///     ) {
///         self.0.for_each_attribute_run(name, visit);
///     }
/// }
///
/// let text = attribute_markdown_headings("# Alpha\ntext\n# Beta\ntext").unwrap();
/// let mut view = JumpTextView::new(Host(text), JumpConfigOptions::default());
/// view.set_label_array("heading", 1_u8);
/// assert_eq!(view.range_index().len(), 2);
///
/// let began = GestureSample::from_superview_location(
///     GesturePhase::Began,
///     Point::new(95.0, 75.0),
///     Rect::from_xywh(0.0, 0.0, 100.0, 100.0),
/// );
/// let effects = view.handle_gesture(began);
/// assert!(view.is_dragging());
/// assert!(matches!(
///     &effects[1],
///     JumpEffect::ShowPreview { preview, .. } if preview.text == "Beta"
/// ));
/// ```
#[derive(Debug)]
pub struct JumpTextView<H> {
    host: H,
    controller: JumpController,
    state: JumpState,
    range_index: RangeIndex,
}

impl<H: JumpHost> JumpTextView<H> {
    /// The range index starts out empty, call [`JumpTextView::set_label_array`] to fill
    /// it.
    pub fn new(host: H, config: JumpConfigOptions) -> Self {
        Self {
            host,
            controller: JumpController::new(config),
            state: JumpState::default(),
            range_index: RangeIndex::default(),
        }
    }

    pub fn host(&self) -> &H { &self.host }

    pub fn host_mut(&mut self) -> &mut H { &mut self.host }

    pub fn config(&self) -> &JumpConfigOptions { &self.controller.config }

    pub fn state(&self) -> &JumpState { &self.state }

    pub fn range_index(&self) -> &RangeIndex { &self.range_index }

    pub fn is_dragging(&self) -> bool { self.state.is_dragging() }

    /// Rebuild the jump targets: every maximal run of the host's text where
    /// `attribute_name` equals `attribute_value`.
    pub fn set_label_array<V: PartialEq>(
        &mut self,
        attribute_name: impl Into<AttributeName>,
        attribute_value: V,
    ) where
        H: AttributeRunSource<V>,
    {
        let attribute_name = attribute_name.into();
        let index =
            RangeIndex::build_for_value(&self.host, &attribute_name, &attribute_value);
        self.set_range_index(index);
    }

    /// Same as [`JumpTextView::set_label_array`], with an arbitrary predicate on the
    /// attribute's value.
    pub fn set_label_array_with<V>(
        &mut self,
        attribute_name: impl Into<AttributeName>,
        predicate: impl Fn(&V) -> bool,
    ) where
        H: AttributeRunSource<V>,
    {
        let attribute_name = attribute_name.into();
        let index = RangeIndex::build(&self.host, &attribute_name, predicate);
        self.set_range_index(index);
    }

    /// Swap in a new index. A drag that is in progress keeps using the snapshot it took
    /// when it began; the new index is used from the next drag on.
    pub fn set_range_index(&mut self, range_index: RangeIndex) {
        DEBUG_JUMP_NAV.then(|| {
            tracing::debug!(
                message = "JumpTextView -> set_range_index()",
                range_count = range_index.len(),
                is_dragging = self.state.is_dragging(),
            );
        });
        self.range_index = range_index;
    }

    pub fn handle_gesture(&mut self, sample: GestureSample) -> JumpEffects {
        self.handle_event(JumpEvent::Gesture(sample))
    }

    /// Call this when an animation started by a `ShowPreview` or `HidePreview` effect
    /// has finished.
    pub fn handle_animation_completed(&mut self, id: AnimationId) -> JumpEffects {
        self.handle_event(JumpEvent::AnimationCompleted(id))
    }

    pub fn handle_event(&mut self, event: JumpEvent) -> JumpEffects {
        let state = std::mem::take(&mut self.state);
        let (state, effects) =
            self.controller
                .apply_event(state, event, &self.range_index, &self.host);
        self.state = state;
        effects
    }
}
