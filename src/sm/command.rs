//! Definitions of the directive names and selectors used in chart files.

pub mod mixin;

use thiserror::Error;

/// A directive name of the chart header, as it is written between `#` and `:`.
///
/// Names are case-sensitive on disk: [`FieldName::Title`] matches `#TITLE:` but not `#title:`.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum FieldName {
    /// `#TITLE:` The title of the song.
    Title,
    /// `#SUBTITLE:` The subtitle of the song.
    Subtitle,
    /// `#ARTIST:` The artist of the song.
    Artist,
    /// `#GENRE:` The genre of the song.
    Genre,
    /// `#CREDIT:` Who made the chart.
    Credit,
    /// `#OFFSET:` Seconds from the start of the music to beat 0.
    Offset,
    /// `#SAMPLESTART:` Seconds where the preview sample starts.
    SampleStart,
    /// `#SAMPLELENGTH:` Seconds the preview sample lasts.
    SampleLength,
    /// `#BPMS:` The tempo map, as `beat=bpm` pairs.
    Bpms,
    /// `#TITLETRANSLIT:` The transliterated title.
    TitleTranslit,
    /// `#SUBTITLETRANSLIT:` The transliterated subtitle.
    SubtitleTranslit,
    /// `#ARTISTTRANSLIT:` The transliterated artist.
    ArtistTranslit,
    /// `#BANNER:` The banner image path.
    Banner,
    /// `#BACKGROUND:` The background image path.
    Background,
    /// `#CDTITLE:` The CD title image path.
    CdTitle,
    /// `#MUSIC:` The music file path.
    Music,
    /// `#SELECTABLE:` Whether the song can be selected.
    Selectable,
    /// `#DISPLAYBPM:` The BPM shown on the song select screen.
    DisplayBpm,
    /// `#STOPS:` The stops, as `beat=seconds` pairs.
    Stops,
}

impl FieldName {
    /// The fields every accessor of [`crate::sm::model::ChartText`] covers.
    pub const GUARANTEED: [Self; 9] = [
        Self::Title,
        Self::Subtitle,
        Self::Artist,
        Self::Genre,
        Self::Credit,
        Self::Offset,
        Self::SampleStart,
        Self::SampleLength,
        Self::Bpms,
    ];

    /// All the known fields.
    pub const ALL: [Self; 19] = [
        Self::Title,
        Self::Subtitle,
        Self::Artist,
        Self::Genre,
        Self::Credit,
        Self::Offset,
        Self::SampleStart,
        Self::SampleLength,
        Self::Bpms,
        Self::TitleTranslit,
        Self::SubtitleTranslit,
        Self::ArtistTranslit,
        Self::Banner,
        Self::Background,
        Self::CdTitle,
        Self::Music,
        Self::Selectable,
        Self::DisplayBpm,
        Self::Stops,
    ];

    /// The token written in the chart file.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "TITLE",
            Self::Subtitle => "SUBTITLE",
            Self::Artist => "ARTIST",
            Self::Genre => "GENRE",
            Self::Credit => "CREDIT",
            Self::Offset => "OFFSET",
            Self::SampleStart => "SAMPLESTART",
            Self::SampleLength => "SAMPLELENGTH",
            Self::Bpms => "BPMS",
            Self::TitleTranslit => "TITLETRANSLIT",
            Self::SubtitleTranslit => "SUBTITLETRANSLIT",
            Self::ArtistTranslit => "ARTISTTRANSLIT",
            Self::Banner => "BANNER",
            Self::Background => "BACKGROUND",
            Self::CdTitle => "CDTITLE",
            Self::Music => "MUSIC",
            Self::Selectable => "SELECTABLE",
            Self::DisplayBpm => "DISPLAYBPM",
            Self::Stops => "STOPS",
        }
    }

    /// Whether the field is one of [`FieldName::GUARANTEED`].
    #[must_use]
    pub const fn is_guaranteed(self) -> bool {
        matches!(
            self,
            Self::Title
                | Self::Subtitle
                | Self::Artist
                | Self::Genre
                | Self::Credit
                | Self::Offset
                | Self::SampleStart
                | Self::SampleLength
                | Self::Bpms
        )
    }
}

impl std::fmt::Display for FieldName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The string was not a known [`FieldName`] token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("unknown field name `{0}`")]
pub struct UnknownFieldName(pub String);

impl std::str::FromStr for FieldName {
    type Err = UnknownFieldName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| UnknownFieldName(s.to_owned()))
    }
}

/// Which one of the sample preview directives to read.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SampleSelector {
    /// `#SAMPLESTART:`
    #[default]
    Start,
    /// `#SAMPLELENGTH:`
    Length,
}

impl SampleSelector {
    /// The directive this selector reads.
    #[must_use]
    pub const fn field(self) -> FieldName {
        match self {
            Self::Start => FieldName::SampleStart,
            Self::Length => FieldName::SampleLength,
        }
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Length => "length",
        }
    }
}

impl std::fmt::Display for SampleSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The string was neither `start` nor `length`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("unknown sample selector `{0}`, expected `start` or `length`")]
pub struct UnknownSampleSelector(pub String);

impl std::str::FromStr for SampleSelector {
    type Err = UnknownSampleSelector;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Self::Start),
            "length" => Ok(Self::Length),
            _ => Err(UnknownSampleSelector(s.to_owned())),
        }
    }
}
