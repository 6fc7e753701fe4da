//! Fancy diagnostics support using `ariadne`.
//!
//! [`ExtractError`] carries the byte span of the offending value when it has one, so it can be
//! rendered as an `ariadne::Report` pointing into the chart text. Ariadne handles the row/column
//! calculation from the byte offsets.
//!
//! # Usage Example
//!
//! ```rust
//! use sm_rs::sm::{diagnostics::emit_extract_errors, model::ChartText};
//!
//! let source = "#TITLE:Test;\n#BPMS:0.000=120.000,\n8.000=140.000;\n";
//! let chart = ChartText::new(source);
//! let errors: Vec<_> = chart.bpm().err().into_iter().collect();
//!
//! emit_extract_errors("test.sm", source, &errors);
//! ```

use std::ops::Range;

use ariadne::{Color, Label, Report, ReportKind, Source};

use crate::sm::lex::ExtractError;

/// Simple source container that holds the filename and source text.
///
/// ```rust
/// use sm_rs::sm::diagnostics::SimpleSource;
///
/// let source = SimpleSource::new("test.sm", "#TITLE:Test;\n");
/// assert_eq!(source.name(), "test.sm");
/// assert_eq!(source.text(), "#TITLE:Test;\n");
/// ```
pub struct SimpleSource<'a> {
    /// Name of the source file.
    name: &'a str,
    /// Source text content.
    text: &'a str,
}

impl<'a> SimpleSource<'a> {
    /// Create a new source container instance.
    #[must_use]
    pub const fn new(name: &'a str, text: &'a str) -> Self {
        Self { name, text }
    }

    /// Get source text content.
    #[must_use]
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// Get source file name.
    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.name
    }
}

/// Trait for converting positioned errors to `ariadne::Report`.
pub trait ToAriadne {
    /// Convert error to ariadne Report.
    ///
    /// # Parameters
    /// * `src` - Source file container (used for filename, ariadne handles row/column calculation)
    fn to_report<'a>(&self, src: &SimpleSource<'a>) -> Report<'a, (String, Range<usize>)>;
}

/// Builds a report with a single label over `range`.
#[must_use]
pub fn build_report<'a>(
    src: &SimpleSource<'a>,
    kind: ReportKind<'a>,
    range: Range<usize>,
    title: &str,
    label_message: impl ToString,
    color: Color,
) -> Report<'a, (String, Range<usize>)> {
    let filename = src.name().to_string();
    Report::build(kind, (filename.clone(), range.clone()))
        .with_message(title)
        .with_label(
            Label::new((filename, range))
                .with_message(label_message.to_string())
                .with_color(color),
        )
        .finish()
}

impl ToAriadne for ExtractError {
    fn to_report<'a>(&self, src: &SimpleSource<'a>) -> Report<'a, (String, Range<usize>)> {
        match self {
            // Nothing to point at, so the label covers the head of the file.
            Self::NotFound { name } => build_report(
                src,
                ReportKind::Error,
                0..0,
                &self.to_string(),
                format!("no terminated `#{name}:` directive in this file"),
                Color::Yellow,
            ),
            Self::Malformed { message, range, .. } => build_report(
                src,
                ReportKind::Error,
                range.clone(),
                &self.to_string(),
                message,
                Color::Red,
            ),
        }
    }
}

/// Collects reports of `errors` without printing them.
#[must_use]
pub fn collect_extract_reports<'a>(
    name: &'a str,
    source: &'a str,
    errors: impl IntoIterator<Item = &'a ExtractError>,
) -> Vec<Report<'a, (String, Range<usize>)>> {
    let simple = SimpleSource::new(name, source);
    errors.into_iter().map(|e| e.to_report(&simple)).collect()
}

/// Prints reports of `errors` to stderr.
///
/// # Parameters
/// * `name` - Name of the source file, used for display in diagnostic information
/// * `source` - Complete chart source text
/// * `errors` - List of errors to display
pub fn emit_extract_errors<'a>(
    name: &'a str,
    source: &'a str,
    errors: impl IntoIterator<Item = &'a ExtractError>,
) {
    let ariadne_source = Source::from(source);
    for report in collect_extract_reports(name, source, errors) {
        let _ = report.eprint((name.to_string(), ariadne_source.clone()));
    }
}
