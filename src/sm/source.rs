//! The file-read capability the chart text comes from.
//!
//! [`ChartSource`] is the seam between storage and extraction. Errors it returns are passed on to
//! the caller of [`crate::sm::simfile::Simfile`] unchanged, keeping their [`std::io::ErrorKind`].

use std::{future::Future, io, path::Path};

/// Reads the whole text of a chart file without blocking the calling thread.
pub trait ChartSource {
    /// Reads the file at `path` into a string.
    ///
    /// # Errors
    ///
    /// Returns the storage error as is, such as [`io::ErrorKind::NotFound`] or
    /// [`io::ErrorKind::PermissionDenied`], or [`io::ErrorKind::InvalidData`] if the file is not
    /// valid UTF-8.
    fn read_to_string(&self, path: &Path) -> impl Future<Output = io::Result<String>> + Send;
}

impl<S: ChartSource + ?Sized> ChartSource for &S {
    fn read_to_string(&self, path: &Path) -> impl Future<Output = io::Result<String>> + Send {
        (**self).read_to_string(path)
    }
}

/// Reads charts from the file system with [`tokio::fs`].
///
/// The file handle is opened and closed within each read.
#[cfg(feature = "tokio")]
#[cfg_attr(docsrs, doc(cfg(feature = "tokio")))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokioFs;

#[cfg(feature = "tokio")]
impl ChartSource for TokioFs {
    fn read_to_string(&self, path: &Path) -> impl Future<Output = io::Result<String>> + Send {
        tokio::fs::read_to_string(path.to_owned())
    }
}
