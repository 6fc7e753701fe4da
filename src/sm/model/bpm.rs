//! This module introduces struct [`TempoSegment`], a single `beat=bpm` entry of the `#BPMS:` tempo
//! map.

use itertools::Itertools;

use crate::sm::{
    command::{FieldName, mixin::SourceRange},
    lex::{Directive, ExtractError},
};

/// A `beat=bpm` pair, both sides trimmed of surrounding whitespace and left unparsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TempoSegment<'a> {
    /// The beat where the tempo starts.
    pub beat: &'a str,
    /// The tempo in beats per minute.
    pub bpm: &'a str,
}

impl<'a> TempoSegment<'a> {
    /// Reads a tempo map consisting of exactly one segment.
    ///
    /// The value is split into entries on `,`, and blank entries are ignored, so a trailing comma
    /// is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Malformed`] if the map is empty, has more than one segment, or the
    /// segment is not a `beat=bpm` pair.
    pub fn from_single_segment(
        directive: &SourceRange<Directive<'a>>,
    ) -> Result<Self, ExtractError> {
        let value = directive.content().value;
        let malformed = |message: &str| ExtractError::Malformed {
            name: FieldName::Bpms,
            message: message.to_owned(),
            range: directive.range(),
        };
        const MULTI_SEGMENT: &str = "multi-segment tempo maps are not supported yet";

        let entry = value
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .at_most_one()
            .map_err(|_| malformed(MULTI_SEGMENT))?
            .ok_or_else(|| malformed("empty tempo map"))?;
        let (beat, bpm) = entry
            .split_once('=')
            .ok_or_else(|| malformed("expected `beat=bpm`"))?;
        let (beat, bpm) = (beat.trim(), bpm.trim());
        // Segments separated only by line breaks leave another `=` or a blank inside the pair.
        let has_blank = [beat, bpm]
            .iter()
            .any(|side| side.contains(char::is_whitespace));
        if has_blank || bpm.contains('=') {
            return Err(malformed(MULTI_SEGMENT));
        }
        Ok(Self { beat, bpm })
    }
}
