//! Primary error enum for catalogue loading and locale registration.

use camino::Utf8PathBuf;
use figment::Error as FigmentError;
use thiserror::Error;

/// Errors that can occur while configuring or loading translations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LocaleError {
    /// The translations directory could not be listed.
    #[error("failed to read translations directory '{path}': {source}")]
    Directory {
        /// Directory that was being listed.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A translation file could not be opened or decoded.
    #[error("translation file error in '{path}': {source}")]
    File {
        /// File that triggered the failure.
        path: Utf8PathBuf,
        /// Underlying error reported by the reader.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A registered translation source failed to yield its rows.
    #[error("translation source failed: {source}")]
    Source {
        /// Error returned by the source.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A locale selector was registered twice.
    #[error("a locale selector is already registered")]
    SelectorAlreadyRegistered,

    /// A translation source was registered twice.
    #[error("a translation source is already registered")]
    SourceAlreadyRegistered,

    /// Settings could not be gathered from their providers.
    #[error("failed to load locale settings: {0}")]
    Settings(#[from] Box<FigmentError>),
}
