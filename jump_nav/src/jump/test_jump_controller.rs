// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use test_case::test_case;

    use crate::{AnimationId, GesturePhase, JumpConfigOptions, JumpController, JumpEffect,
                JumpEffects, JumpEvent, JumpHost, JumpPhase, JumpState, Point,
                PreviewAffordance, RangeIndex, Rect, RgbValue, SlideAnimation, TextRange,
                assert_eq2,
                jump::test_fixtures::{FakeJumpHost, VIEW_FRAME, sample, sample_at}};

    /// Drives the pure transition function, keeping the state between calls.
    #[derive(Debug)]
    struct Harness {
        controller: JumpController,
        state: JumpState,
        index: RangeIndex,
        host: FakeJumpHost,
    }

    impl Harness {
        fn new() -> Self {
            let host = FakeJumpHost::with_five_headings();
            Self {
                controller: JumpController::default(),
                state: JumpState::default(),
                index: host.heading_index(),
                host,
            }
        }

        fn with_index(mut self, index: RangeIndex) -> Self {
            self.index = index;
            self
        }

        fn apply(&mut self, event: impl Into<JumpEvent>) -> JumpEffects {
            let state = std::mem::take(&mut self.state);
            let (state, effects) =
                self.controller
                    .apply_event(state, event.into(), &self.index, &self.host);
            self.state = state;
            effects
        }

        fn gesture(&mut self, phase: GesturePhase, relative_y: f64) -> JumpEffects {
            self.apply(sample(phase, relative_y))
        }

        fn complete(&mut self, id: AnimationId) -> JumpEffects {
            self.apply(JumpEvent::AnimationCompleted(id))
        }

        fn current_index(&self) -> Option<usize> {
            self.state.drag_session().and_then(|it| it.current_index)
        }

        fn target(&self, index: usize) -> TextRange { self.index.get(index).unwrap() }
    }

    fn count_shows(effects: &JumpEffects) -> usize {
        effects
            .iter()
            .filter(|it| matches!(it, JumpEffect::ShowPreview { .. }))
            .count()
    }

    fn slide_out_of(effects: &JumpEffects) -> SlideAnimation {
        let hides: Vec<SlideAnimation> = effects
            .iter()
            .filter_map(|it| match it {
                JumpEffect::HidePreview { slide_out } => Some(*slide_out),
                _ => None,
            })
            .collect();
        assert_eq2!(hides.len(), 1);
        hides[0]
    }

    #[test]
    fn test_five_headings_fixture() {
        let harness = Harness::new();
        assert_eq2!(harness.index.len(), 5);
        assert_eq2!(harness.host.text.text_in_range(harness.target(3)), Some("H3"));
    }

    #[test_case(0.0)]
    #[test_case(150.0)]
    #[test_case(269.9 ; "just left of the hot zone")]
    #[test_case(300.1 ; "past the trailing edge")]
    fn test_begin_outside_hot_zone_is_ignored(view_x: f64) {
        let mut harness = Harness::new();
        let effects = harness.apply(sample_at(GesturePhase::Began, view_x, 50.0));
        assert!(effects.is_empty());
        assert_eq2!(harness.state, JumpState::default());
    }

    #[test_case(270.0 ; "hot zone left edge")]
    #[test_case(300.0 ; "hot zone right edge")]
    fn test_begin_on_hot_zone_edges(view_x: f64) {
        let mut harness = Harness::new();
        let effects = harness.apply(sample_at(GesturePhase::Began, view_x, 50.0));
        assert!(harness.state.is_dragging());
        assert_eq2!(count_shows(&effects), 1);
    }

    #[test]
    fn test_begin_in_hot_zone_shows_preview_and_scrolls() {
        let mut harness = Harness::new();
        let effects = harness.gesture(GesturePhase::Began, 50.0);

        // "H0" is 20 x 20, plus padding is 30 x 40, doubled is 60 x 80. The top right
        // corner sits on the view's trailing edge, at the sample's superview y.
        let preview = PreviewAffordance {
            text: "H0".to_string(),
            frame: Rect::from_xywh(240.0, 150.0, 60.0, 80.0),
            background: RgbValue::from_u8(26, 140, 255),
        };
        let target_rect = harness.host.rect_for_range(harness.target(0)).unwrap();
        assert_eq2!(
            effects.to_vec(),
            vec![
                JumpEffect::SetUserInteractionEnabled(false),
                JumpEffect::ShowPreview {
                    preview: preview.clone(),
                    slide_in: SlideAnimation {
                        id: AnimationId(0),
                        from: Point::new(360.0, 150.0),
                        to: Point::new(240.0, 150.0),
                        duration: Duration::from_millis(150),
                    },
                },
                JumpEffect::ScrollRectToVisible(target_rect),
            ]
        );

        assert_eq2!(harness.current_index(), Some(0));
        assert_eq2!(harness.state.preview, Some(preview));
        let session = harness.state.drag_session().unwrap();
        assert_eq2!(session.last_screen_position, Point::new(290.0, 150.0));
    }

    /// RangeIndex of 5 ranges, view height 500.
    #[test]
    fn test_example_scenario() {
        let mut harness = Harness::new();

        // y = 50, fraction 0.1, floor(0.5) = 0.
        let effects = harness.gesture(GesturePhase::Began, 50.0);
        assert_eq2!(count_shows(&effects), 1);
        assert_eq2!(harness.current_index(), Some(0));

        // y = 260, fraction 0.52, floor(2.6) = 2.
        let effects = harness.gesture(GesturePhase::Changed, 260.0);
        let target_rect = harness.host.rect_for_range(harness.target(2)).unwrap();
        assert_eq2!(
            effects.to_vec(),
            vec![
                JumpEffect::UpdatePreview(PreviewAffordance {
                    text: "H2".to_string(),
                    frame: Rect::from_xywh(240.0, 360.0, 60.0, 80.0),
                    background: RgbValue::from_u8(26, 140, 255),
                }),
                JumpEffect::ScrollRectToVisible(target_rect),
            ]
        );
        assert_eq2!(harness.current_index(), Some(2));

        // y = 270, fraction 0.54, floor(2.7) = 2. Same target, nothing to do.
        let state_before = harness.state.clone();
        let effects = harness.gesture(GesturePhase::Changed, 270.0);
        assert!(effects.is_empty());
        assert_eq2!(harness.current_index(), Some(2));
        assert_eq2!(harness.state.preview, state_before.preview);
    }

    #[test]
    fn test_repeated_updates_in_same_bucket_are_silent() {
        let mut harness = Harness::new();
        harness.gesture(GesturePhase::Began, 10.0);

        let mut update_count = 0;
        for relative_y in [110.0, 120.0, 150.0, 199.0, 105.0, 180.0] {
            let effects = harness.gesture(GesturePhase::Changed, relative_y);
            update_count += effects
                .iter()
                .filter(|it| matches!(it, JumpEffect::UpdatePreview(_)))
                .count();
        }
        // Only the first sample moved from bucket 0 to bucket 1.
        assert_eq2!(update_count, 1);
        assert_eq2!(harness.current_index(), Some(1));
    }

    #[test_case(GesturePhase::Ended)]
    #[test_case(GesturePhase::Cancelled)]
    #[test_case(GesturePhase::Failed)]
    fn test_exit_restores_interaction_and_hides_once(exit_phase: GesturePhase) {
        let mut harness = Harness::new();
        harness.gesture(GesturePhase::Began, 50.0);
        harness.gesture(GesturePhase::Changed, 260.0);

        let effects = harness.gesture(exit_phase, 260.0);
        assert_eq2!(effects[0], JumpEffect::SetUserInteractionEnabled(true));
        assert_eq2!(effects.len(), 2);
        let slide_out = slide_out_of(&effects);
        assert_eq2!(
            slide_out,
            SlideAnimation {
                id: AnimationId(1),
                from: Point::new(240.0, 360.0),
                to: Point::new(360.0, 360.0),
                duration: Duration::from_millis(150),
            }
        );
        assert_eq2!(harness.state.phase, JumpPhase::Idle);

        // The preview is still on screen while it slides out.
        assert!(harness.state.preview.is_some());
        assert_eq2!(harness.state.pending_hide, Some(slide_out.id));

        let effects = harness.complete(slide_out.id);
        assert_eq2!(effects.to_vec(), vec![JumpEffect::RemovePreview]);
        assert_eq2!(harness.state.preview, None);
        assert_eq2!(harness.state.pending_hide, None);
    }

    #[test_case(GesturePhase::Changed)]
    #[test_case(GesturePhase::Ended)]
    #[test_case(GesturePhase::Cancelled)]
    #[test_case(GesturePhase::Failed)]
    fn test_non_begin_samples_while_idle_are_ignored(phase: GesturePhase) {
        let mut harness = Harness::new();
        let effects = harness.gesture(phase, 50.0);
        assert!(effects.is_empty());
        assert_eq2!(harness.state, JumpState::default());
    }

    #[test]
    fn test_unrelated_animation_completion_is_ignored() {
        let mut harness = Harness::new();
        let effects = harness.gesture(GesturePhase::Began, 50.0);
        let JumpEffect::ShowPreview { slide_in, .. } = &effects[1] else {
            panic!("expected ShowPreview, got {effects:?}");
        };

        let state_before = harness.state.clone();
        assert!(harness.complete(slide_in.id).is_empty());
        assert!(harness.complete(AnimationId(99)).is_empty());
        assert_eq2!(harness.state, state_before);
    }

    #[test]
    fn test_empty_index_still_transitions() {
        let mut harness = Harness::new().with_index(RangeIndex::default());

        let effects = harness.gesture(GesturePhase::Began, 50.0);
        assert_eq2!(
            effects.to_vec(),
            vec![JumpEffect::SetUserInteractionEnabled(false)]
        );
        assert!(harness.state.is_dragging());
        assert_eq2!(harness.current_index(), None);

        assert!(harness.gesture(GesturePhase::Changed, 300.0).is_empty());

        let effects = harness.gesture(GesturePhase::Ended, 300.0);
        assert_eq2!(
            effects.to_vec(),
            vec![JumpEffect::SetUserInteractionEnabled(true)]
        );
        assert_eq2!(harness.state.phase, JumpPhase::Idle);
        assert_eq2!(harness.state.preview, None);
    }

    #[test]
    fn test_begin_without_target_shows_on_first_resolution() {
        let mut harness = Harness::new();

        // y = 500 is the bottom edge, fraction 1.0 resolves to nothing.
        let effects = harness.gesture(GesturePhase::Began, 500.0);
        assert_eq2!(count_shows(&effects), 0);
        assert!(harness.state.is_dragging());

        let effects = harness.gesture(GesturePhase::Changed, 450.0);
        assert_eq2!(count_shows(&effects), 1);
        assert_eq2!(harness.current_index(), Some(4));

        let effects = harness.gesture(GesturePhase::Changed, 50.0);
        assert_eq2!(count_shows(&effects), 0);
        assert!(matches!(effects[0], JumpEffect::UpdatePreview(_)));
    }

    #[test_case(GesturePhase::Ended ; "ended")]
    #[test_case(GesturePhase::Cancelled ; "cancelled")]
    #[test_case(GesturePhase::Failed ; "failed")]
    fn test_exit_without_preview_only_restores_interaction(exit_phase: GesturePhase) {
        let mut harness = Harness::new();

        // Every sample is at the bottom edge, so no target is ever shown.
        harness.gesture(GesturePhase::Began, 500.0);
        assert!(harness.gesture(GesturePhase::Changed, 500.0).is_empty());

        let effects = harness.gesture(exit_phase, 500.0);
        assert_eq2!(
            effects.to_vec(),
            vec![JumpEffect::SetUserInteractionEnabled(true)]
        );
        assert_eq2!(harness.state.phase, JumpPhase::Idle);
        assert_eq2!(harness.state.pending_hide, None);
        assert_eq2!(harness.state.next_animation_id, AnimationId(0));
    }

    #[test_case(-10.0 ; "above the view")]
    #[test_case(500.0 ; "bottom edge")]
    #[test_case(650.0 ; "below the view")]
    fn test_out_of_range_update_keeps_last_display(relative_y: f64) {
        let mut harness = Harness::new();
        harness.gesture(GesturePhase::Began, 260.0);
        let state_before = harness.state.clone();

        let effects = harness.gesture(GesturePhase::Changed, relative_y);
        assert!(effects.is_empty());
        assert_eq2!(harness.current_index(), Some(2));
        assert_eq2!(harness.state.preview, state_before.preview);
    }

    #[test]
    fn test_geometry_failure_skips_sample_and_retries() {
        let mut harness = Harness::new();
        harness.gesture(GesturePhase::Began, 50.0);

        let target = harness.target(2);
        harness.host.ranges_without_rect.push(target);
        assert!(harness.gesture(GesturePhase::Changed, 260.0).is_empty());
        assert_eq2!(harness.current_index(), Some(0));

        harness.host.ranges_without_rect.clear();
        harness.host.ranges_without_text.push(target);
        assert!(harness.gesture(GesturePhase::Changed, 270.0).is_empty());
        assert_eq2!(harness.current_index(), Some(0));

        // Same bucket again, and now the geometry is available.
        harness.host.ranges_without_text.clear();
        let effects = harness.gesture(GesturePhase::Changed, 280.0);
        assert!(matches!(&effects[0], JumpEffect::UpdatePreview(it) if it.text == "H2"));
        assert_eq2!(harness.current_index(), Some(2));
    }

    #[test]
    fn test_geometry_failure_on_begin_shows_nothing() {
        let mut harness = Harness::new();
        let target = harness.target(0);
        harness.host.ranges_without_rect.push(target);

        let effects = harness.gesture(GesturePhase::Began, 50.0);
        assert_eq2!(
            effects.to_vec(),
            vec![JumpEffect::SetUserInteractionEnabled(false)]
        );
        assert_eq2!(harness.current_index(), None);
    }

    #[test]
    fn test_drag_uses_snapshot_taken_on_begin() {
        let mut harness = Harness::new();
        harness.gesture(GesturePhase::Began, 50.0);
        let original_target = harness.target(2);

        // Swap in a single range index mid drag.
        harness.index = RangeIndex::from_ranges(vec![TextRange::new_unchecked(5, 9)]);
        let effects = harness.gesture(GesturePhase::Changed, 260.0);
        assert!(matches!(&effects[0], JumpEffect::UpdatePreview(it) if it.text == "H2"));
        let session = harness.state.drag_session().unwrap();
        assert_eq2!(session.snapshot.get(2), Some(original_target));

        // The next drag sees the new index.
        harness.gesture(GesturePhase::Ended, 260.0);
        harness.gesture(GesturePhase::Began, 260.0);
        let session = harness.state.drag_session().unwrap();
        assert_eq2!(session.snapshot.len(), 1);
    }

    #[test]
    fn test_new_drag_during_slide_out_cancels_removal() {
        let mut harness = Harness::new();
        harness.gesture(GesturePhase::Began, 50.0);
        let effects = harness.gesture(GesturePhase::Ended, 50.0);
        let slide_out = slide_out_of(&effects);

        let effects = harness.gesture(GesturePhase::Began, 360.0);
        let JumpEffect::ShowPreview { preview, slide_in } = &effects[1] else {
            panic!("expected ShowPreview, got {effects:?}");
        };
        assert_eq2!(preview.text, "H3".to_string());
        assert!(slide_in.id > slide_out.id);
        assert_eq2!(harness.state.pending_hide, None);

        // The late completion of the old slide out must not remove the new preview.
        assert!(harness.complete(slide_out.id).is_empty());
        assert!(harness.state.preview.is_some());
    }

    #[test]
    fn test_new_drag_without_target_during_slide_out_keeps_removal() {
        let mut harness = Harness::new();
        harness.gesture(GesturePhase::Began, 50.0);
        let slide_out = slide_out_of(&harness.gesture(GesturePhase::Ended, 50.0));

        // Nothing resolves at the bottom edge, so the old preview keeps sliding out.
        let effects = harness.gesture(GesturePhase::Began, 500.0);
        assert_eq2!(count_shows(&effects), 0);
        assert_eq2!(
            harness.complete(slide_out.id).to_vec(),
            vec![JumpEffect::RemovePreview]
        );
        assert!(harness.state.is_dragging());

        // Nothing is visible, so ending this drag has nothing to hide.
        let effects = harness.gesture(GesturePhase::Ended, 500.0);
        assert_eq2!(
            effects.to_vec(),
            vec![JumpEffect::SetUserInteractionEnabled(true)]
        );
    }

    #[test]
    fn test_begin_while_dragging() {
        let mut harness = Harness::new();
        harness.gesture(GesturePhase::Began, 50.0);

        // Outside the hot-zone: ignored.
        let state_before = harness.state.clone();
        let effects = harness.apply(sample_at(GesturePhase::Began, 10.0, 260.0));
        assert!(effects.is_empty());
        assert_eq2!(harness.state, state_before);

        // Inside: a new session, and the visible preview is updated in place.
        let effects = harness.gesture(GesturePhase::Began, 260.0);
        assert_eq2!(count_shows(&effects), 0);
        assert!(matches!(&effects[1], JumpEffect::UpdatePreview(it) if it.text == "H2"));
        assert_eq2!(harness.current_index(), Some(2));
    }

    #[test]
    fn test_config_flows_into_preview() {
        let mut harness = Harness::new();
        harness.controller = JumpController::new(JumpConfigOptions {
            label_color: RgbValue::from_u8(1, 2, 3),
            label_padding: crate::EdgeInsets::default(),
            label_font_size: 30.0,
        });
        let effects = harness.gesture(GesturePhase::Began, 50.0);
        let JumpEffect::ShowPreview { preview, .. } = &effects[1] else {
            panic!("expected ShowPreview, got {effects:?}");
        };
        assert_eq2!(preview.background, RgbValue::from_u8(1, 2, 3));
        // "H0" measures 20 x 30, doubled.
        assert_eq2!(preview.frame, Rect::from_xywh(260.0, 150.0, 40.0, 60.0));
    }

    #[test]
    fn test_zero_height_view_never_resolves() {
        let mut harness = Harness::new();
        harness.host.view_frame = Rect::new(VIEW_FRAME.origin, crate::Size::new(300.0, 0.0));
        let effects = harness.gesture(GesturePhase::Began, 0.0);
        assert_eq2!(
            effects.to_vec(),
            vec![JumpEffect::SetUserInteractionEnabled(false)]
        );
    }
}
