//! Constructors and conversions for `LocaleError`.

use std::error::Error;
use std::sync::Arc;

use camino::Utf8Path;
use figment::Error as FigmentError;

use super::LocaleError;

impl LocaleError {
    /// Construct a [`LocaleError::File`] for a translation file.
    ///
    /// # Examples
    ///
    /// ```
    /// use camino::Utf8Path;
    /// use csv_locale::LocaleError;
    ///
    /// let err = LocaleError::file(
    ///     Utf8Path::new("translations/tr_TR.csv"),
    ///     std::io::Error::other("boom"),
    /// );
    /// assert!(err.to_string().contains("tr_TR.csv"));
    /// ```
    #[must_use]
    pub fn file(path: &Utf8Path, err: impl Into<Box<dyn Error + Send + Sync>>) -> Self {
        Self::File {
            path: path.to_path_buf(),
            source: err.into(),
        }
    }

    /// Construct a [`LocaleError::Directory`] for a translations directory.
    #[must_use]
    pub fn directory(path: &Utf8Path, source: std::io::Error) -> Self {
        Self::Directory {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Construct a [`LocaleError::Source`] from a translation source failure.
    #[must_use]
    pub fn source_failed(err: impl Into<Box<dyn Error + Send + Sync>>) -> Self {
        Self::Source { source: err.into() }
    }

    /// Construct a [`LocaleError::Settings`] from a [`figment::Error`].
    ///
    /// # Examples
    ///
    /// ```
    /// use csv_locale::LocaleError;
    /// let err = LocaleError::settings(figment::Error::from("boom"));
    /// assert!(matches!(err, LocaleError::Settings(_)));
    /// ```
    #[must_use]
    pub fn settings(source: FigmentError) -> Self {
        Self::Settings(Box::new(source))
    }

    /// Wrap `self` in an [`Arc`], the shape returned by [`crate::LocaleResult`].
    #[must_use]
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl From<FigmentError> for LocaleError {
    fn from(e: FigmentError) -> Self {
        Self::settings(e)
    }
}
