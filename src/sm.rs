//! The extractor module of StepMania (.sm/.ssc) chart files.
//!
//! This module consists of two phases: reading the chart text and scanning it for directives.
//!
//! `source` module provides the asynchronous file-read capability as [`source::ChartSource`]. The
//! default implementation reads from the file system with tokio.
//!
//! `lex` module provides the directive scanner. It finds the first `#NAME:` and returns the text up
//! to the next `;`, so a value containing `;` cannot be represented. The chart format has no escape
//! mechanism for it.
//!
//! `model` module provides [`model::ChartText`], the text of one chart with an accessor per field.
//!
//! In detail, our policies are:
//!
//! - Support only UTF-8 (as required `String` to input).
//! - Do not support editing chart source text.
//! - Do not interpret values numerically. `OFFSET` or `SAMPLESTART` are returned as written.
//! - Do not support multi-segment tempo maps in [`model::ChartText::bpm`] yet.

use std::path::{Path, PathBuf};

pub mod command;
#[cfg(feature = "diagnostics")]
pub mod diagnostics;
pub mod lex;
pub mod model;
pub mod prelude;
pub mod simfile;
pub mod source;

use thiserror::Error;

use self::lex::ExtractError;

/// The file formats recognized by the extension of a chart path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChartFormat {
    /// The `.sm` format of StepMania 3.9 and later.
    Sm,
    /// The `.ssc` format introduced by StepMania 5.
    Ssc,
}

impl ChartFormat {
    /// All the recognized formats.
    pub const ALL: [Self; 2] = [Self::Sm, Self::Ssc];

    /// The path suffix of the format, including the leading dot.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Sm => ".sm",
            Self::Ssc => ".ssc",
        }
    }

    /// Detects the format from the suffix of `path`.
    ///
    /// The suffix is compared case-sensitively on the raw path, so `song.SM` is not recognized.
    /// Neither the file contents nor its existence are checked.
    ///
    /// ```
    /// use std::path::Path;
    /// use sm_rs::ChartFormat;
    ///
    /// assert_eq!(ChartFormat::from_path(Path::new("song.ssc")), Some(ChartFormat::Ssc));
    /// assert_eq!(ChartFormat::from_path(Path::new("song.txt")), None);
    /// ```
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let bytes = path.as_os_str().as_encoded_bytes();
        Self::ALL
            .into_iter()
            .find(|format| bytes.ends_with(format.suffix().as_bytes()))
    }
}

/// An error occurred when reading a field out of a chart file.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SimfileError {
    /// The path does not end with a recognized chart extension. No read was attempted.
    #[error("`{}` is not a StepMania file", .path.display())]
    UnsupportedFormat {
        /// The rejected path.
        path: PathBuf,
    },
    /// The chart source failed to read the file.
    #[error(transparent)]
    Storage(#[from] std::io::Error),
    /// The file was read, but the field could not be extracted.
    #[error(transparent)]
    Extract(#[from] ExtractError),
}

impl SimfileError {
    /// Returns the extraction failure, if this error is one.
    #[must_use]
    pub const fn as_extract(&self) -> Option<&ExtractError> {
        match self {
            Self::Extract(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::ChartFormat;

    #[test]
    fn format_from_suffix() {
        assert_eq!(
            ChartFormat::from_path(Path::new("song.sm")),
            Some(ChartFormat::Sm)
        );
        assert_eq!(
            ChartFormat::from_path(Path::new("Songs/Pack/song.ssc")),
            Some(ChartFormat::Ssc)
        );
        assert_eq!(ChartFormat::from_path(Path::new(".sm")), Some(ChartFormat::Sm));
    }

    #[test]
    fn format_rejects_other_suffixes() {
        for path in ["song.txt", "song.SM", "song.Ssc", "song.sm.bak", "song", "song.ssm"] {
            assert_eq!(ChartFormat::from_path(Path::new(path)), None, "{path}");
        }
    }
}
