//! Directive scanner of chart text.
//!
//! Raw [String] == [find_directive] ==> [Directive] (in [SourceRange]) == [extract] ==> `&str`
//!
//! A directive is written as `#NAME:VALUE;`. The value is everything between the `:` and the
//! first following `;`, returned byte-for-byte: surrounding whitespace and newlines are kept. When
//! a name appears more than once, the first occurrence in the text wins.

mod cursor;

use std::ops::Range;

use thiserror::Error;
use tracing::trace;

use crate::sm::command::{
    FieldName,
    mixin::{SourceRange, SourceRangeExt},
};

use self::cursor::Cursor;

/// An error occurred when extracting a field from chart text.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum ExtractError {
    /// No terminated `#NAME:...;` directive exists in the text.
    #[error("directive `#{name}:` not found")]
    NotFound {
        /// The name searched for.
        name: FieldName,
    },
    /// The directive exists, but its value does not have the structure the field requires.
    #[error("directive `#{name}:` is malformed: {message}")]
    Malformed {
        /// The name of the directive.
        name: FieldName,
        /// What is wrong with the value.
        message: String,
        /// The byte range of the value in the text.
        range: Range<usize>,
    },
}

impl ExtractError {
    /// The name of the directive the error is about.
    #[must_use]
    pub const fn name(&self) -> FieldName {
        match self {
            Self::NotFound { name } | Self::Malformed { name, .. } => *name,
        }
    }
}

/// A directive found in chart text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Directive<'a> {
    /// The name of the directive.
    pub name: FieldName,
    /// The captured value between `:` and `;`.
    pub value: &'a str,
}

/// Finds the first `#name:...;` directive in `source`.
///
/// The span of the returned [`SourceRange`] covers the value only, not the `#name:` opener nor the
/// terminating `;`. Returns `None` if the opener is missing, or no `;` follows the first opener.
#[must_use]
pub fn find_directive(source: &str, name: FieldName) -> Option<SourceRange<Directive<'_>>> {
    let mut cursor = Cursor::new(source);
    // Any later opener is followed by a suffix of the first one's tail, so is unterminated too.
    let found = cursor
        .next_opener(name.as_str())
        .and_then(|_| cursor.next_until(';'))
        .map(|range| {
            Directive {
                name,
                value: &source[range.clone()],
            }
            .into_source_range(range)
        });
    trace!(
        %name,
        found = found.is_some(),
        span = ?found.as_ref().map(SourceRange::range),
        "directive lookup"
    );
    found
}

/// Extracts the value of the first `#name:...;` directive in `source`.
///
/// An empty value (`#TITLE:;`) is a successful match of `""`.
///
/// # Errors
///
/// Returns [`ExtractError::NotFound`] if no terminated directive of `name` exists.
///
/// # Example
///
/// ```
/// use sm_rs::{FieldName, extract};
///
/// let source = "#TITLE:PARANOiA;\n#ARTIST:180;\n";
/// assert_eq!(extract(source, FieldName::Artist), Ok("180"));
/// assert!(extract(source, FieldName::Genre).is_err());
/// ```
pub fn extract(source: &str, name: FieldName) -> Result<&str, ExtractError> {
    find_directive(source, name)
        .map(|directive| directive.into_content().value)
        .ok_or(ExtractError::NotFound { name })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{Directive, ExtractError, extract, find_directive};
    use crate::sm::command::{FieldName, mixin::SourceRange};

    const SRC: &str = r"#TITLE:Max 300;
#SUBTITLE:(Super-Max-Me Mix);
#ARTIST:Omega;
#GENRE:;
#CREDIT:  spaced  ;
#OFFSET:-0.013;
#STOPS:
;
";

    #[test]
    fn simple() {
        assert_eq!(extract(SRC, FieldName::Title), Ok("Max 300"));
        assert_eq!(extract(SRC, FieldName::Subtitle), Ok("(Super-Max-Me Mix)"));
        assert_eq!(extract(SRC, FieldName::Artist), Ok("Omega"));
        assert_eq!(extract(SRC, FieldName::Offset), Ok("-0.013"));
    }

    #[test]
    fn empty_value_is_found() {
        assert_eq!(extract(SRC, FieldName::Genre), Ok(""));
    }

    #[test]
    fn value_is_not_trimmed() {
        assert_eq!(extract(SRC, FieldName::Credit), Ok("  spaced  "));
        assert_eq!(extract(SRC, FieldName::Stops), Ok("\n"));
    }

    #[test]
    fn not_found() {
        assert_eq!(
            extract(SRC, FieldName::Bpms),
            Err(ExtractError::NotFound {
                name: FieldName::Bpms
            })
        );
        assert_eq!(
            extract("", FieldName::Title),
            Err(ExtractError::NotFound {
                name: FieldName::Title
            })
        );
    }

    #[test]
    fn unterminated_is_not_found() {
        assert_eq!(
            extract("#TITLE:no end\n#TITLE:again", FieldName::Title),
            Err(ExtractError::NotFound {
                name: FieldName::Title
            })
        );
    }

    #[test]
    fn name_is_case_sensitive() {
        assert!(extract("#title:lower;", FieldName::Title).is_err());
    }

    #[test]
    fn first_occurrence_wins() {
        let source = "#TITLE:first;\n#TITLE:second;\n";
        assert_eq!(extract(source, FieldName::Title), Ok("first"));
        assert_eq!(
            extract(source, FieldName::Title),
            extract(source, FieldName::Title)
        );
    }

    #[test]
    fn value_stops_at_first_terminator() {
        assert_eq!(extract("#TITLE:a;b;", FieldName::Title), Ok("a"));
    }

    #[test]
    fn value_spans_lines() {
        let source = "#BPMS:0.000=120.000,\n8.000=140.000;";
        assert_eq!(
            extract(source, FieldName::Bpms),
            Ok("0.000=120.000,\n8.000=140.000")
        );
    }

    #[test]
    fn embedded_anywhere() {
        let source = "garbage before #MUSIC:song.ogg; garbage after";
        assert_eq!(extract(source, FieldName::Music), Ok("song.ogg"));
    }

    #[test]
    fn span_of_value() {
        let found = find_directive("#ARTIST:Omega;", FieldName::Artist);
        assert_eq!(
            found,
            Some(SourceRange::new(
                Directive {
                    name: FieldName::Artist,
                    value: "Omega",
                },
                8,
                13
            ))
        );
        assert_eq!(found.map(|found| found.len()), Some("Omega".len()));
        assert!(
            find_directive("#GENRE:;", FieldName::Genre).is_some_and(|found| found.is_empty())
        );
    }
}
