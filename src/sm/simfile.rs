//! This module introduces struct [`Simfile`], which reads one chart file per field request.

use std::path::{Path, PathBuf};

use tracing::debug;

#[cfg(feature = "tokio")]
use crate::sm::source::TokioFs;
use crate::sm::{
    ChartFormat, SimfileError,
    command::SampleSelector,
    lex::ExtractError,
    model::ChartText,
    source::ChartSource,
};

/// A chart file on storage, read through `S` every time a field is requested.
///
/// Each accessor performs one read, so concurrent requests never share state. Read the file once
/// with [`Simfile::read`] and use the accessors of [`ChartText`] to extract many fields from one
/// read.
#[derive(Debug, Clone)]
pub struct Simfile<S> {
    path: PathBuf,
    source: S,
}

#[cfg(feature = "tokio")]
#[cfg_attr(docsrs, doc(cfg(feature = "tokio")))]
impl Simfile<TokioFs> {
    /// A chart file read from the file system.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_source(path, TokioFs)
    }
}

impl<S: ChartSource> Simfile<S> {
    /// A chart file read through `source`.
    pub fn with_source(path: impl Into<PathBuf>, source: S) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }

    /// The path of the chart file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Checks the extension of the path and reads the whole chart text.
    ///
    /// # Errors
    ///
    /// Returns [`SimfileError::UnsupportedFormat`] without reading if the path ends with neither
    /// `.sm` nor `.ssc`, or [`SimfileError::Storage`] if the source fails to read.
    pub async fn read(&self) -> Result<ChartText, SimfileError> {
        let Some(format) = ChartFormat::from_path(&self.path) else {
            debug!(path = %self.path.display(), "not a chart extension, skipped reading");
            return Err(SimfileError::UnsupportedFormat {
                path: self.path.clone(),
            });
        };
        let text = self.source.read_to_string(&self.path).await?;
        debug!(
            path = %self.path.display(),
            ?format,
            bytes = text.len(),
            "chart read"
        );
        Ok(ChartText::from(text))
    }

    async fn field(
        &self,
        get: impl for<'t> FnOnce(&'t ChartText) -> Result<&'t str, ExtractError>,
    ) -> Result<String, SimfileError> {
        let chart = self.read().await?;
        Ok(get(&chart)?.to_owned())
    }

    /// `#TITLE:`
    ///
    /// # Errors
    ///
    /// Same as [`Simfile::read`], or [`SimfileError::Extract`] if the directive is missing.
    pub async fn title(&self) -> Result<String, SimfileError> {
        self.field(ChartText::title).await
    }

    /// `#SUBTITLE:`
    ///
    /// # Errors
    ///
    /// Same as [`Simfile::read`], or [`SimfileError::Extract`] if the directive is missing.
    pub async fn subtitle(&self) -> Result<String, SimfileError> {
        self.field(ChartText::subtitle).await
    }

    /// `#ARTIST:`
    ///
    /// # Errors
    ///
    /// Same as [`Simfile::read`], or [`SimfileError::Extract`] if the directive is missing.
    pub async fn artist(&self) -> Result<String, SimfileError> {
        self.field(ChartText::artist).await
    }

    /// `#GENRE:`
    ///
    /// # Errors
    ///
    /// Same as [`Simfile::read`], or [`SimfileError::Extract`] if the directive is missing.
    pub async fn genre(&self) -> Result<String, SimfileError> {
        self.field(ChartText::genre).await
    }

    /// `#CREDIT:`
    ///
    /// # Errors
    ///
    /// Same as [`Simfile::read`], or [`SimfileError::Extract`] if the directive is missing.
    pub async fn credit(&self) -> Result<String, SimfileError> {
        self.field(ChartText::credit).await
    }

    /// `#OFFSET:`, unparsed.
    ///
    /// # Errors
    ///
    /// Same as [`Simfile::read`], or [`SimfileError::Extract`] if the directive is missing.
    pub async fn offset(&self) -> Result<String, SimfileError> {
        self.field(ChartText::offset).await
    }

    /// `#SAMPLESTART:` or `#SAMPLELENGTH:` as chosen by `selector`, unparsed.
    ///
    /// # Errors
    ///
    /// Same as [`Simfile::read`], or [`SimfileError::Extract`] if the directive is missing.
    pub async fn sample_preview(&self, selector: SampleSelector) -> Result<String, SimfileError> {
        self.field(|chart| chart.sample_preview(selector)).await
    }

    /// The tempo of the only `beat=bpm` pair of `#BPMS:`.
    ///
    /// # Errors
    ///
    /// Same as [`Simfile::read`], or [`SimfileError::Extract`] if the directive is missing or has
    /// multiple segments.
    pub async fn bpm(&self) -> Result<String, SimfileError> {
        self.field(ChartText::bpm).await
    }
}
