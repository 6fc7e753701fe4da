//! This module introduces struct [`ChartText`], which holds the text of one chart file and
//! extracts its header fields.

pub mod bpm;

use crate::sm::{
    command::{FieldName, SampleSelector, mixin::SourceRange},
    lex::{self, Directive, ExtractError},
};

use self::bpm::TempoSegment;

/// The whole text of one chart file.
///
/// Accessors scan the text on every call and return borrowed values. Numeric fields such as
/// `OFFSET` are returned as written, so parsing them is up to the caller.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct ChartText {
    source: String,
}

impl ChartText {
    /// Wraps the text of a chart file.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Returns the whole text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Leans the text out of the wrapper.
    #[must_use]
    pub fn into_string(self) -> String {
        self.source
    }

    /// Finds the first directive of `name`, together with the span of its value.
    #[must_use]
    pub fn directive(&self, name: FieldName) -> Option<SourceRange<Directive<'_>>> {
        lex::find_directive(&self.source, name)
    }

    /// Extracts the raw value of any known directive.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::NotFound`] if the directive is missing.
    pub fn raw(&self, name: FieldName) -> Result<&str, ExtractError> {
        lex::extract(&self.source, name)
    }

    /// `#TITLE:`
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::NotFound`] if the directive is missing.
    pub fn title(&self) -> Result<&str, ExtractError> {
        self.raw(FieldName::Title)
    }

    /// `#SUBTITLE:`
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::NotFound`] if the directive is missing.
    pub fn subtitle(&self) -> Result<&str, ExtractError> {
        self.raw(FieldName::Subtitle)
    }

    /// `#ARTIST:`
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::NotFound`] if the directive is missing.
    pub fn artist(&self) -> Result<&str, ExtractError> {
        self.raw(FieldName::Artist)
    }

    /// `#GENRE:`
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::NotFound`] if the directive is missing.
    pub fn genre(&self) -> Result<&str, ExtractError> {
        self.raw(FieldName::Genre)
    }

    /// `#CREDIT:`
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::NotFound`] if the directive is missing.
    pub fn credit(&self) -> Result<&str, ExtractError> {
        self.raw(FieldName::Credit)
    }

    /// `#OFFSET:`, unparsed.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::NotFound`] if the directive is missing.
    pub fn offset(&self) -> Result<&str, ExtractError> {
        self.raw(FieldName::Offset)
    }

    /// `#SAMPLESTART:` or `#SAMPLELENGTH:` as chosen by `selector`, unparsed.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::NotFound`] if the selected directive is missing.
    pub fn sample_preview(&self, selector: SampleSelector) -> Result<&str, ExtractError> {
        self.raw(selector.field())
    }

    /// The only segment of `#BPMS:`.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::NotFound`] if the directive is missing, or
    /// [`ExtractError::Malformed`] if it is not a single `beat=bpm` pair.
    pub fn tempo_segment(&self) -> Result<TempoSegment<'_>, ExtractError> {
        let directive = self
            .directive(FieldName::Bpms)
            .ok_or(ExtractError::NotFound {
                name: FieldName::Bpms,
            })?;
        TempoSegment::from_single_segment(&directive)
    }

    /// The tempo of `#BPMS:`, the right-hand side of its only `beat=bpm` pair.
    ///
    /// Multi-segment tempo maps are rejected rather than truncated to their first segment.
    ///
    /// # Errors
    ///
    /// Same as [`ChartText::tempo_segment`].
    pub fn bpm(&self) -> Result<&str, ExtractError> {
        self.tempo_segment().map(|segment| segment.bpm)
    }
}

impl From<String> for ChartText {
    fn from(source: String) -> Self {
        Self { source }
    }
}

impl From<&str> for ChartText {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

impl AsRef<str> for ChartText {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::ChartText;
    use crate::sm::{
        command::{FieldName, SampleSelector},
        lex::ExtractError,
    };

    const SRC: &str = r"#TITLE:Sakura Sunrise;
#SUBTITLE:;
#ARTIST:Ryu*;
#GENRE:Trance;
#CREDIT:DDR;
#BANNER:bn.png;
#OFFSET:0.052;
#SAMPLESTART:12.500;
#SAMPLELENGTH:10.000;
#SELECTABLE:YES;
#BPMS:0.000=120.000;
#STOPS:;
";

    #[test]
    fn accessors() {
        let chart = ChartText::new(SRC);
        assert_eq!(chart.title(), Ok("Sakura Sunrise"));
        assert_eq!(chart.subtitle(), Ok(""));
        assert_eq!(chart.artist(), Ok("Ryu*"));
        assert_eq!(chart.genre(), Ok("Trance"));
        assert_eq!(chart.credit(), Ok("DDR"));
        assert_eq!(chart.offset(), Ok("0.052"));
        assert_eq!(chart.bpm(), Ok("120.000"));
        assert_eq!(chart.raw(FieldName::Banner), Ok("bn.png"));
    }

    #[test]
    fn sample_preview() {
        let chart = ChartText::new(SRC);
        assert_eq!(chart.sample_preview(SampleSelector::Start), Ok("12.500"));
        assert_eq!(chart.sample_preview(SampleSelector::Length), Ok("10.000"));
        assert_eq!(
            chart.sample_preview(SampleSelector::default()),
            chart.sample_preview(SampleSelector::Start)
        );
    }

    #[test]
    fn missing_bpms() {
        assert_eq!(
            ChartText::new("#TITLE:x;").bpm(),
            Err(ExtractError::NotFound {
                name: FieldName::Bpms
            })
        );
    }

    #[test]
    fn multi_segment_bpms() {
        for source in [
            "#BPMS:0.000=120.000,\n8.000=140.000;",
            "#BPMS:0.000=120.000\n8.000;",
        ] {
            assert!(matches!(
                ChartText::new(source).bpm(),
                Err(ExtractError::Malformed {
                    name: FieldName::Bpms,
                    ..
                })
            ));
        }
    }
}
