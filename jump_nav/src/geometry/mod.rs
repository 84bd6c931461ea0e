// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod edge_insets;
pub mod point_size_rect;

// Re-export.
pub use edge_insets::*;
pub use point_size_rect::*;
