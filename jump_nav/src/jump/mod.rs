// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod gesture_sample;
pub mod jump_config;
pub mod jump_controller;
pub mod jump_effect;
pub mod jump_host;
pub mod jump_state;
pub mod jump_text_view;
pub mod terminal_host;

// Re-export.
pub use gesture_sample::*;
pub use jump_config::*;
pub use jump_controller::*;
pub use jump_effect::*;
pub use jump_host::*;
pub use jump_state::*;
pub use jump_text_view::*;
pub use terminal_host::*;

// Tests.
#[cfg(test)]
pub mod test_fixtures;
#[cfg(test)]
mod test_jump_controller;
