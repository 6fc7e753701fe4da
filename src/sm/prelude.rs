//! Prelude module for the chart extractor.
//!
//! You can use `use sm_rs::sm::prelude::*;` to import all the public types at once.

#[cfg(feature = "diagnostics")]
pub use super::diagnostics::{
    SimpleSource, ToAriadne, build_report, collect_extract_reports, emit_extract_errors,
};
#[cfg(feature = "tokio")]
pub use super::source::TokioFs;
pub use super::{
    ChartFormat, SimfileError,
    command::{
        FieldName, SampleSelector, UnknownFieldName, UnknownSampleSelector,
        mixin::{SourceRange, SourceRangeExt},
    },
    lex::{Directive, ExtractError, extract, find_directive},
    model::{ChartText, bpm::TempoSegment},
    simfile::Simfile,
    source::ChartSource,
};
