// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{collections::BTreeMap,
          fmt::{Display, Formatter}};

use crate::{TextRange, TextRangeError};

/// Name of an attribute, eg: `"font"` or `"heading"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AttributeName(String);

impl AttributeName {
    #[must_use]
    pub fn as_str(&self) -> &str { &self.0 }
}

impl From<&str> for AttributeName {
    fn from(value: &str) -> Self { Self(value.to_string()) }
}

impl From<String> for AttributeName {
    fn from(value: String) -> Self { Self(value) }
}

impl Display for AttributeName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { f.write_str(&self.0) }
}

/// The capability a host text widget has to provide so that a [`crate::RangeIndex`] can
/// be built from its content.
///
/// Implementations have to visit the **maximal** runs of `attribute_name` in document
/// order. A run is maximal when the attribute has the same value over the whole run and
/// a different value (or no value) just outside of it. Runs where the attribute is not
/// set at all are visited with `None`.
pub trait AttributeRunSource<V> {
    fn text_len(&self) -> usize;

    fn for_each_attribute_run(
        &self,
        attribute_name: &AttributeName,
        visit: &mut dyn FnMut(TextRange, Option<&V>),
    );
}

/// In memory attributed string. Each attribute name holds a sorted list of disjoint
/// spans, and setting an attribute over a range overwrites whatever value that
/// attribute had there before.
///
/// ```
/// use jump_nav::{AttributedText, TextRange};
///
/// let mut text = AttributedText::new("Intro\nBody\nOutro");
/// text.set_attribute("bold", TextRange::try_new(0, 5).unwrap(), true).unwrap();
/// text.set_attribute("bold", TextRange::try_new(11, 16).unwrap(), true).unwrap();
///
/// let runs = text.enumerate_attribute(&"bold".into());
/// assert_eq!(runs.len(), 3);
/// assert_eq!(text.text_in_range(runs[2].0), Some("Outro"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct AttributedText<V> {
    text: String,
    attributes: BTreeMap<AttributeName, Vec<(TextRange, V)>>,
}

impl<V: Clone + PartialEq> AttributedText<V> {
    /// Create an `AttributedText` with no attributes applied.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            attributes: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn text(&self) -> &str { &self.text }

    /// Length of the text in bytes.
    #[must_use]
    pub fn len(&self) -> usize { self.text.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.text.is_empty() }

    /// `None` if the range doesn't fit in the text or doesn't land on char boundaries.
    #[must_use]
    pub fn text_in_range(&self, range: TextRange) -> Option<&str> {
        self.text.get(range.as_range())
    }

    /// Set `attribute_name` to `value` over `range`. Whatever was there before, for this
    /// attribute name, is overwritten. Setting an empty range does nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the range doesn't fit in the text, or if either bound is not
    /// on a UTF-8 char boundary.
    pub fn set_attribute(
        &mut self,
        attribute_name: impl Into<AttributeName>,
        range: TextRange,
        value: V,
    ) -> Result<(), TextRangeError> {
        self.validate(range)?;
        if range.is_empty() {
            return Ok(());
        }
        let spans = self.attributes.entry(attribute_name.into()).or_default();
        carve_out(spans, range);
        let insert_at = spans.partition_point(|(it, _)| it.lower_bound() < range.lower_bound());
        spans.insert(insert_at, (range, value));
        Ok(())
    }

    /// Clear `attribute_name` over `range`.
    ///
    /// # Errors
    ///
    /// Same as [`AttributedText::set_attribute`].
    pub fn remove_attribute(
        &mut self,
        attribute_name: &AttributeName,
        range: TextRange,
    ) -> Result<(), TextRangeError> {
        self.validate(range)?;
        if let Some(spans) = self.attributes.get_mut(attribute_name) {
            carve_out(spans, range);
        }
        Ok(())
    }

    /// Returns the maximal runs of `attribute_name`, covering the whole text in document
    /// order. Neighboring spans with equal values are coalesced into one run.
    #[must_use]
    pub fn enumerate_attribute(
        &self,
        attribute_name: &AttributeName,
    ) -> Vec<(TextRange, Option<&V>)> {
        let mut runs: Vec<(TextRange, Option<&V>)> = vec![];

        let mut cursor = 0;
        let spans = self
            .attributes
            .get(attribute_name)
            .map(Vec::as_slice)
            .unwrap_or_default();
        for (range, value) in spans {
            if range.lower_bound() > cursor {
                push_run(
                    &mut runs,
                    TextRange::new_unchecked(cursor, range.lower_bound()),
                    None,
                );
            }
            push_run(&mut runs, *range, Some(value));
            cursor = range.upper_bound();
        }
        if cursor < self.len() {
            push_run(&mut runs, TextRange::new_unchecked(cursor, self.len()), None);
        }

        runs
    }

    fn validate(&self, range: TextRange) -> Result<(), TextRangeError> {
        TextRange::try_new_within(range.lower_bound(), range.upper_bound(), self.len())?;
        for offset in [range.lower_bound(), range.upper_bound()] {
            if !self.text.is_char_boundary(offset) {
                return Err(TextRangeError::NotOnCharBoundary { offset });
            }
        }
        Ok(())
    }
}

impl<V: Clone + PartialEq> AttributeRunSource<V> for AttributedText<V> {
    fn text_len(&self) -> usize { self.len() }

    fn for_each_attribute_run(
        &self,
        attribute_name: &AttributeName,
        visit: &mut dyn FnMut(TextRange, Option<&V>),
    ) {
        for (range, value) in self.enumerate_attribute(attribute_name) {
            visit(range, value);
        }
    }
}

/// Append a run, merging it into the previous one when both touch and carry the same
/// value.
fn push_run<'a, V: PartialEq>(
    runs: &mut Vec<(TextRange, Option<&'a V>)>,
    range: TextRange,
    value: Option<&'a V>,
) {
    if let Some((last_range, last_value)) = runs.last_mut()
        && *last_value == value
        && last_range.is_followed_by(range)
    {
        *last_range = last_range.union(range);
        return;
    }
    runs.push((range, value));
}

/// Remove `hole` from every span in `spans`, splitting spans that straddle it. The
/// spans stay sorted and disjoint.
fn carve_out<V: Clone>(spans: &mut Vec<(TextRange, V)>, hole: TextRange) {
    let mut acc = Vec::with_capacity(spans.len() + 1);
    for (range, value) in spans.drain(..) {
        let overlaps = range.lower_bound() < hole.upper_bound()
            && hole.lower_bound() < range.upper_bound();
        if !overlaps {
            acc.push((range, value));
            continue;
        }
        if range.lower_bound() < hole.lower_bound() {
            acc.push((
                TextRange::new_unchecked(range.lower_bound(), hole.lower_bound()),
                value.clone(),
            ));
        }
        if hole.upper_bound() < range.upper_bound() {
            acc.push((
                TextRange::new_unchecked(hole.upper_bound(), range.upper_bound()),
                value,
            ));
        }
    }
    *spans = acc;
}
