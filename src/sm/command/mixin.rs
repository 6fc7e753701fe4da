//! Mixin types for structures.
//!
//! - `SourceRange` attaches the byte span in the chart text to a value.
//! - `SourceRangeExt` provides a shorthand to wrap any value into a `SourceRange`.

use std::ops::Range;

/// A value together with the byte span of the chart text it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceRange<T> {
    /// Wrapped content value
    content: T,
    /// Start index in the source string (0-based, inclusive)
    start: usize,
    /// End index in the source string (0-based, exclusive)
    end: usize,
}

impl<T> SourceRange<T> {
    /// Instances a new `SourceRange`.
    pub const fn new(content: T, start: usize, end: usize) -> Self {
        Self {
            content,
            start,
            end,
        }
    }

    /// Returns the wrapped content.
    pub const fn content(&self) -> &T {
        &self.content
    }

    /// Leans the content out of the wrapper.
    pub fn into_content(self) -> T {
        self.content
    }

    /// Returns the start index of the source span.
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Returns the end index of the source span.
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Returns the source span as a range, to slice the source text or feed a report.
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Returns the length of the source span.
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the source span's length is 0.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: std::fmt::Display> std::fmt::Display for SourceRange<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at indices [{}, {})",
            self.content, self.start, self.end
        )
    }
}

/// Extension methods to wrap a value into [`SourceRange`].
pub trait SourceRangeExt: Sized {
    /// Wraps the value with the span `range`.
    fn into_source_range(self, range: Range<usize>) -> SourceRange<Self> {
        SourceRange::new(self, range.start, range.end)
    }
}

impl<T> SourceRangeExt for T {}
