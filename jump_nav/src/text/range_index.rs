// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::Arc;

use crate::{AttributeName, AttributeRunSource, DEBUG_JUMP_NAV, TextRange};

/// The ordered list of jump targets: every maximal run of text where some attribute
/// predicate holds, in document order.
///
/// A `RangeIndex` is immutable. Rebuilding produces a brand new index which replaces the
/// old one atomically. Cloning is cheap (the ranges live behind an [`Arc`]) and a clone
/// is a snapshot: [`crate::JumpController`] holds on to the snapshot it was given when a
/// drag began, so rebuilding while a drag is in progress never changes what that drag
/// sees.
///
/// # Bucket mapping
///
/// [`RangeIndex::resolve`] splits `[0, 1)` into `len()` equal buckets, one per range,
/// regardless of how much screen height each range actually takes up. A short heading
/// at the top of a long chapter gets the same share of the drag track as one in a dense
/// list. This matches the behavior existing users rely on, even though weighting the
/// buckets by visual extent might feel better.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RangeIndex {
    ranges: Arc<[TextRange]>,
}

impl Default for RangeIndex {
    fn default() -> Self { Self::from_ranges(vec![]) }
}

impl RangeIndex {
    /// Build an index from ranges the caller already has, in document order.
    #[must_use]
    pub fn from_ranges(ranges: Vec<TextRange>) -> Self {
        Self {
            ranges: ranges.into(),
        }
    }

    /// Visit the maximal runs of `attribute_name` in `source` and keep those whose value
    /// satisfies `predicate`. Runs without a value never match. Neighboring matching
    /// runs (eg: two different values that both satisfy the predicate) are merged, so
    /// each range in the index is maximal too.
    ///
    /// No match at all is a valid result, and gives an empty index.
    pub fn build<V, S>(
        source: &S,
        attribute_name: &AttributeName,
        predicate: impl Fn(&V) -> bool,
    ) -> Self
    where
        S: AttributeRunSource<V> + ?Sized,
    {
        let mut ranges: Vec<TextRange> = vec![];

        source.for_each_attribute_run(attribute_name, &mut |range, maybe_value| {
            let is_match = maybe_value.is_some_and(&predicate);
            if !is_match || range.is_empty() {
                return;
            }
            if let Some(last) = ranges.last_mut()
                && last.is_followed_by(range)
            {
                *last = last.union(range);
                return;
            }
            ranges.push(range);
        });

        DEBUG_JUMP_NAV.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "RangeIndex -> build()",
                attribute_name = %attribute_name,
                text_len = source.text_len(),
                range_count = ranges.len(),
            );
        });

        Self::from_ranges(ranges)
    }

    /// Convenience for [`RangeIndex::build`] that matches values equal to
    /// `attribute_value`.
    ///
    /// ```
    /// use jump_nav::{AttributedText, RangeIndex, TextRange};
    ///
    /// let mut text = AttributedText::new("# One\nbody\n# Two\nbody");
    /// text.set_attribute("heading", TextRange::try_new(0, 5).unwrap(), 1_u8).unwrap();
    /// text.set_attribute("heading", TextRange::try_new(11, 16).unwrap(), 1_u8).unwrap();
    ///
    /// let index = RangeIndex::build_for_value(&text, &"heading".into(), &1_u8);
    /// assert_eq!(index.len(), 2);
    /// assert_eq!(index.resolve(0.75), Some((1, TextRange::try_new(11, 16).unwrap())));
    /// ```
    pub fn build_for_value<V, S>(
        source: &S,
        attribute_name: &AttributeName,
        attribute_value: &V,
    ) -> Self
    where
        V: PartialEq,
        S: AttributeRunSource<V> + ?Sized,
    {
        Self::build(source, attribute_name, |it: &V| it == attribute_value)
    }

    /// Map a normalized vertical position (0 = top, 1 = bottom) to an index:
    /// `floor(fraction * len())`. Returns `None` when that falls outside `[0, len())`,
    /// which includes `fraction == 1.0`, any fraction outside `[0, 1]`, `NaN`, and every
    /// fraction when the index is empty.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    #[allow(clippy::cast_possible_truncation)]
    #[allow(clippy::cast_sign_loss)]
    pub fn index_for_fraction(&self, fraction: f64) -> Option<usize> {
        let count = self.ranges.len() as f64;
        let bucket = (fraction * count).floor();
        if bucket.is_nan() || bucket < 0.0 || bucket >= count {
            return None;
        }
        Some(bucket as usize)
    }

    /// Same as [`RangeIndex::index_for_fraction`], and also returns the range.
    #[must_use]
    pub fn resolve(&self, fraction: f64) -> Option<(usize, TextRange)> {
        let index = self.index_for_fraction(fraction)?;
        self.get(index).map(|range| (index, range))
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<TextRange> { self.ranges.get(index).copied() }

    #[must_use]
    pub fn len(&self) -> usize { self.ranges.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.ranges.is_empty() }

    #[must_use]
    pub fn as_slice(&self) -> &[TextRange] { &self.ranges }

    #[must_use]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = TextRange> {
        self.ranges.iter().copied()
    }

}
