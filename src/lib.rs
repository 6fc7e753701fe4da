//! The StepMania chart header extractor.
//!
//! StepMania charts (`.sm` and `.ssc`) store their metadata as a flat sequence of `#KEY:value;`
//! directives. This crate locates those directives and hands back their values, without
//! validating or interpreting the rest of the file.
//!
//! - [`sm::lex`] scans chart text for a directive and returns its captured value.
//! - [`sm::model::ChartText`] holds the text of one chart and provides an accessor per field.
//! - [`sm::simfile::Simfile`] reads a chart through a [`sm::source::ChartSource`] and extracts a
//!   field per call.
//!
//! # Example
//!
//! ```
//! use sm_rs::sm::{command::SampleSelector, model::ChartText};
//!
//! let chart = ChartText::new("#TITLE:Butterfly;\n#SAMPLESTART:12.500;\n#BPMS:0.000=135.000;\n");
//! assert_eq!(chart.title(), Ok("Butterfly"));
//! assert_eq!(chart.sample_preview(SampleSelector::Start), Ok("12.500"));
//! assert_eq!(chart.bpm(), Ok("135.000"));
//! ```
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod sm;

pub use sm::{
    ChartFormat, SimfileError,
    command::{FieldName, SampleSelector},
    lex::{ExtractError, extract},
    model::ChartText,
    simfile::Simfile,
};
