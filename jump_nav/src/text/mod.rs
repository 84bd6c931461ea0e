// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod attributed_text;
pub mod markdown_headings;
pub mod range_index;
pub mod text_range;

// Re-export.
pub use attributed_text::*;
pub use markdown_headings::*;
pub use range_index::*;
pub use text_range::*;
