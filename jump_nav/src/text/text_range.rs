// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Range;

/// An immutable span of text offsets, `[lower_bound, upper_bound)`. Offsets are byte
/// offsets into the host's text.
///
/// The invariant `lower_bound <= upper_bound` is checked by [`TextRange::try_new`].
/// Jump targets are created once, while a [`crate::RangeIndex`] is built, and never
/// mutated after that.
///
/// ```
/// use jump_nav::TextRange;
///
/// let range = TextRange::try_new(4, 9).unwrap();
/// assert_eq!(range.len(), 5);
/// assert!(TextRange::try_new(9, 4).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextRange {
    lower_bound: usize,
    upper_bound: usize,
}

impl TextRange {
    /// # Errors
    ///
    /// Returns [`TextRangeError::InvalidRange`] if `lower_bound > upper_bound`.
    pub fn try_new(lower_bound: usize, upper_bound: usize) -> Result<Self, TextRangeError> {
        if lower_bound > upper_bound {
            return Err(TextRangeError::InvalidRange {
                lower_bound,
                upper_bound,
            });
        }
        Ok(Self {
            lower_bound,
            upper_bound,
        })
    }

    /// Same as [`TextRange::try_new`], and also checks that the range fits inside a text
    /// that is `text_len` long.
    ///
    /// # Errors
    ///
    /// Returns [`TextRangeError::InvalidRange`] or [`TextRangeError::OutOfBounds`].
    pub fn try_new_within(
        lower_bound: usize,
        upper_bound: usize,
        text_len: usize,
    ) -> Result<Self, TextRangeError> {
        let it = Self::try_new(lower_bound, upper_bound)?;
        if upper_bound > text_len {
            return Err(TextRangeError::OutOfBounds {
                lower_bound,
                upper_bound,
                text_len,
            });
        }
        Ok(it)
    }

    /// Creates a `TextRange` without validation. Only for callers that already maintain
    /// `lower_bound <= upper_bound`.
    #[must_use]
    pub const fn new_unchecked(lower_bound: usize, upper_bound: usize) -> Self {
        Self {
            lower_bound,
            upper_bound,
        }
    }

    #[must_use]
    pub const fn lower_bound(self) -> usize { self.lower_bound }

    /// Exclusive.
    #[must_use]
    pub const fn upper_bound(self) -> usize { self.upper_bound }

    #[must_use]
    pub const fn len(self) -> usize { self.upper_bound - self.lower_bound }

    #[must_use]
    pub const fn is_empty(self) -> bool { self.lower_bound == self.upper_bound }

    #[must_use]
    pub fn as_range(self) -> Range<usize> { self.lower_bound..self.upper_bound }

    /// `true` if `other` starts exactly where `self` ends.
    #[must_use]
    pub const fn is_followed_by(self, other: TextRange) -> bool {
        self.upper_bound == other.lower_bound
    }

    /// The smallest range covering both `self` and `other`.
    #[must_use]
    pub fn union(self, other: TextRange) -> Self {
        Self {
            lower_bound: self.lower_bound.min(other.lower_bound),
            upper_bound: self.upper_bound.max(other.upper_bound),
        }
    }
}

impl From<TextRange> for Range<usize> {
    fn from(value: TextRange) -> Self { value.as_range() }
}

impl TryFrom<Range<usize>> for TextRange {
    type Error = TextRangeError;

    fn try_from(value: Range<usize>) -> Result<Self, Self::Error> {
        Self::try_new(value.start, value.end)
    }
}

/// Errors from constructing a [`TextRange`], or from applying one to a text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum TextRangeError {
    #[error("Invalid text range {lower_bound}..{upper_bound}: lower bound > upper bound")]
    #[diagnostic(
        code(jump_nav::text_range::invalid_range),
        help("Swap the bounds, a text range can't run backwards")
    )]
    InvalidRange {
        lower_bound: usize,
        upper_bound: usize,
    },

    #[error("Text range {lower_bound}..{upper_bound} out of bounds for text of len {text_len}")]
    #[diagnostic(code(jump_nav::text_range::out_of_bounds))]
    OutOfBounds {
        lower_bound: usize,
        upper_bound: usize,
        text_len: usize,
    },

    #[error("Text offset {offset} is not on a UTF-8 char boundary")]
    #[diagnostic(
        code(jump_nav::text_range::not_on_char_boundary),
        help("Offsets are byte offsets, use `str::char_indices` to find valid ones")
    )]
    NotOnCharBoundary { offset: usize },
}
