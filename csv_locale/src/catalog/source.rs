//! Builds a catalogue from rows supplied by an application callback.
//!
//! Applications that keep translations in a database register a
//! [`TranslationSource`] instead of pointing the loader at a directory. Locale
//! codes and source strings from such rows are folded to ASCII so keys match
//! the plain strings used at call sites.

use std::error::Error;

use unicode_normalization::UnicodeNormalization;

use super::{PluralCategory, TranslationCatalog};

/// Error type returned by translation sources.
pub type SourceError = Box<dyn Error + Send + Sync>;

/// A single translation supplied by a [`TranslationSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRow {
    /// Locale the translation belongs to, such as `"tr_TR"`.
    pub locale: String,
    /// Source string used as the lookup key.
    pub message: String,
    /// Translated text.
    pub translation: String,
    /// Plural category the translation applies to.
    pub category: PluralCategory,
}

impl SourceRow {
    /// Creates a row filed under [`PluralCategory::Unknown`].
    #[must_use]
    pub fn new(
        locale: impl Into<String>,
        message: impl Into<String>,
        translation: impl Into<String>,
    ) -> Self {
        Self {
            locale: locale.into(),
            message: message.into(),
            translation: translation.into(),
            category: PluralCategory::Unknown,
        }
    }

    /// Files the row under `category`.
    #[must_use]
    pub fn with_category(mut self, category: PluralCategory) -> Self {
        self.category = category;
        self
    }
}

/// Converts `(locale, message, translation, plural_flag)` tuples.
///
/// ```
/// use csv_locale::{PluralCategory, SourceRow};
///
/// let row = SourceRow::from(("tr_TR", "items", "öğeler", true));
/// assert_eq!(row.category, PluralCategory::Plural);
/// ```
impl<L, M, T> From<(L, M, T, bool)> for SourceRow
where
    L: Into<String>,
    M: Into<String>,
    T: Into<String>,
{
    fn from((locale, message, translation, plural): (L, M, T, bool)) -> Self {
        Self::new(locale, message, translation).with_category(plural.into())
    }
}

/// Supplies translation rows in place of a directory of CSV files.
///
/// Any `Fn() -> Result<Vec<SourceRow>, SourceError>` closure that is
/// `Send + Sync` implements this trait.
pub trait TranslationSource: Send + Sync {
    /// Returns every translation row to load.
    ///
    /// # Errors
    ///
    /// Implementations return an error when the backing store cannot be read;
    /// the loader surfaces it as [`crate::LocaleError::Source`].
    fn rows(&self) -> Result<Vec<SourceRow>, SourceError>;
}

impl<F> TranslationSource for F
where
    F: Fn() -> Result<Vec<SourceRow>, SourceError> + Send + Sync,
{
    fn rows(&self) -> Result<Vec<SourceRow>, SourceError> {
        self()
    }
}

/// Applies NFKD decomposition and drops every non-ASCII character.
///
/// # Examples
///
/// ```
/// use csv_locale::ascii_fold;
///
/// assert_eq!(ascii_fold("Café"), "Cafe");
/// assert_eq!(ascii_fold("日本"), "");
/// ```
#[must_use]
pub fn ascii_fold(text: &str) -> String {
    text.nfkd().filter(char::is_ascii).collect()
}

/// Builds a catalogue from source rows.
///
/// Locale codes and messages are trimmed and folded with [`ascii_fold`];
/// translations are only trimmed. Rows whose locale folds to nothing are
/// logged and skipped.
#[must_use]
pub fn load_rows(rows: impl IntoIterator<Item = SourceRow>) -> TranslationCatalog {
    let mut catalog = TranslationCatalog::new();
    for row in rows {
        let locale = ascii_fold(row.locale.trim());
        if locale.is_empty() {
            tracing::warn!(
                locale = %row.locale,
                message = %row.message,
                "skipping translation row without an ASCII locale code"
            );
            continue;
        }
        let message = ascii_fold(row.message.trim());
        catalog.insert(&locale, row.category, message, row.translation.trim());
    }
    tracing::info!(locales = catalog.len(), "loaded translations from source");
    catalog
}
