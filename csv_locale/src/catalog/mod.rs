//! In-memory translation catalogue and its loaders.
//!
//! A [`TranslationCatalog`] maps locale codes to a [`PluralTable`], which in
//! turn maps a [`PluralCategory`] to the source-string → translation pairs for
//! that category. Catalogues are built in one go by [`load_directory`] or
//! [`load_rows`] and are never edited in place afterwards; the owning
//! [`crate::Locale`] swaps in a fresh catalogue on reload.

mod directory;
mod plural;
mod source;

pub use directory::{is_locale_code, load_directory};
pub use plural::{PluralCategory, UnknownPluralIndicator};
pub use source::{SourceError, SourceRow, TranslationSource, ascii_fold, load_rows};

use std::collections::{BTreeMap, HashMap};

/// Source string → translated string pairs for one plural category.
pub type MessageMap = HashMap<String, String>;

static EMPTY_TABLE: PluralTable = PluralTable::new();

/// Translations for a single locale, grouped by plural category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluralTable {
    categories: BTreeMap<PluralCategory, MessageMap>,
}

impl PluralTable {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            categories: BTreeMap::new(),
        }
    }

    /// Returns the messages filed under `category`, if any row used it.
    #[must_use]
    pub fn category(&self, category: PluralCategory) -> Option<&MessageMap> {
        self.categories.get(&category)
    }

    /// Looks up `source` within `category`.
    #[must_use]
    pub fn lookup(&self, category: PluralCategory, source: &str) -> Option<&str> {
        self.category(category)
            .and_then(|messages| messages.get(source))
            .map(String::as_str)
    }

    /// Records a translation, returning the one it replaced.
    pub fn insert(
        &mut self,
        category: PluralCategory,
        source: impl Into<String>,
        translation: impl Into<String>,
    ) -> Option<String> {
        self.categories
            .entry(category)
            .or_default()
            .insert(source.into(), translation.into())
    }

    /// Total number of translations across every category.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.values().map(HashMap::len).sum()
    }

    /// Returns `true` when the table holds no translations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Every loaded translation, keyed by locale code.
///
/// Locale codes iterate in lexicographic order, which makes language-prefix
/// fallback during negotiation deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationCatalog {
    locales: BTreeMap<String, PluralTable>,
}

impl TranslationCatalog {
    /// Creates an empty catalogue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            locales: BTreeMap::new(),
        }
    }

    /// Returns the table for `locale`, if it was loaded.
    #[must_use]
    pub fn locale(&self, locale: &str) -> Option<&PluralTable> {
        self.locales.get(locale)
    }

    /// Returns the stored locale key alongside its table.
    ///
    /// The key borrows from the catalogue, outliving the `locale` argument.
    #[must_use]
    pub fn locale_entry(&self, locale: &str) -> Option<(&str, &PluralTable)> {
        self.locales
            .get_key_value(locale)
            .map(|(code, table)| (code.as_str(), table))
    }

    /// Returns the table for `locale`, or an empty table when it is unsupported.
    ///
    /// Lookups against the empty table pass every message through unchanged.
    #[must_use]
    pub fn table_or_empty(&self, locale: &str) -> &PluralTable {
        self.locale(locale).unwrap_or(&EMPTY_TABLE)
    }

    /// Returns the table for `locale`, registering the locale when absent.
    pub fn table_mut(&mut self, locale: &str) -> &mut PluralTable {
        self.locales.entry(locale.to_owned()).or_default()
    }

    /// Records a translation for `locale`, returning the one it replaced.
    pub fn insert(
        &mut self,
        locale: &str,
        category: PluralCategory,
        source: impl Into<String>,
        translation: impl Into<String>,
    ) -> Option<String> {
        self.table_mut(locale).insert(category, source, translation)
    }

    /// Iterates over the supported locale codes in lexicographic order.
    pub fn supported_locales(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    /// Returns `true` when `locale` is an exact key of the catalogue.
    #[must_use]
    pub fn supports(&self, locale: &str) -> bool {
        self.locales.contains_key(locale)
    }

    /// Number of supported locales.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locales.len()
    }

    /// Returns `true` when no locale has been loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}
