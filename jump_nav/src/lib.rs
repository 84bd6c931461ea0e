// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words superview

//! # `jump_nav`
//!
//! Drag-to-jump navigation for long scrollable text. Press in the rightmost 10% of a
//! text view (the **hot-zone**) and drag up and down: the vertical position of the
//! finger (or mouse) picks one of a precomputed list of **jump targets**, a floating
//! **preview** label shows the target's text, and the view scrolls to it. Let go and the
//! preview slides back out.
//!
//! Jump targets are any text ranges that carry some attribute value, eg: every heading
//! in a markdown document, or every run of bold text.
//!
//! # Architecture
//!
//! ```text
//!  host text view                          jump_nav
//! ┌──────────────────────┐   samples     ┌────────────────────────────────────┐
//! │ gesture recognizer   │──────────────▶│ JumpController::apply_event()      │
//! │ animation runner     │──completions─▶│   (state, event) -> (state, fx)    │
//! │                      │               │          │ resolve(fraction)       │
//! │ AttributeRunSource   │──attr runs───▶│ RangeIndex (immutable snapshot)    │
//! │ JumpHost (geometry)  │◀──queries─────│                                    │
//! │                      │◀──JumpEffect──│                                    │
//! └──────────────────────┘               └────────────────────────────────────┘
//! ```
//!
//! 1. [`RangeIndex`] holds the ordered jump targets. It is built from the host's
//!    attribute runs with [`RangeIndex::build`] (or [`JumpTextView::set_label_array`]),
//!    and never changes after that. Rebuilding swaps in a new one.
//! 2. [`JumpController`] is a pure transition function. It takes the current
//!    [`JumpState`] and a [`JumpEvent`], and returns the next state plus a list of
//!    [`JumpEffect`]s for the host to apply (show, update, hide or remove the preview,
//!    scroll, toggle the view's own touch handling).
//! 3. [`JumpTextView`] ties these together for hosts that just want to forward events.
//!
//! The index maps a vertical fraction `f` in `[0, 1)` onto `floor(f * len)`, so every
//! target gets an equal share of the view's height no matter how much text it is.
//!
//! # Terminal hosts
//!
//! [`GestureSample::try_from_mouse_event`] turns `crossterm` mouse events into gesture
//! samples, with terminal cells as the unit. The `jump_replay` binary uses it to replay
//! a scripted drag over a markdown file and print the effects.
//!
//! # Logging
//!
//! Transitions are logged with `tracing::debug!` when [`DEBUG_JUMP_NAV`] is on. Use
//! [`log::try_initialize_logging_global`] to install a subscriber that writes to the
//! display, to a file, or to both.

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap().
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod color;
pub mod common;
pub mod geometry;
pub mod global_constants;
pub mod jump;
pub mod log;
pub mod text;

// Re-export.
pub use color::*;
pub use common::*;
pub use geometry::*;
pub use global_constants::*;
pub use jump::*;
pub use text::*;
