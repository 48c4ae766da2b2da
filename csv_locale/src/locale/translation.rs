//! Per-request view of the catalogue.

use std::sync::Arc;

use crate::catalog::{PluralCategory, PluralTable, TranslationCatalog};
use crate::interpolate::{InterpolationArgs, interpolate};
use crate::templates::{GettextCallables, TemplateEngine};

/// A message awaiting translation.
///
/// Plural messages always carry their count, so asking for a plural form
/// without one cannot be expressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A message without count-dependent forms.
    Singular(String),
    /// A message with singular and plural source forms.
    Plural {
        /// Source string used when `count == 1`.
        singular: String,
        /// Source string used for every other count.
        plural: String,
        /// Number of items the message describes.
        count: u64,
    },
}

impl Message {
    /// Creates a singular message.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self::Singular(text.into())
    }

    /// Creates a counted message.
    #[must_use]
    pub fn plural(singular: impl Into<String>, plural: impl Into<String>, count: u64) -> Self {
        Self::Plural {
            singular: singular.into(),
            plural: plural.into(),
            count,
        }
    }

    /// Returns the source string that applies, which is also the text shown
    /// when no translation exists.
    ///
    /// ```
    /// use csv_locale::Message;
    ///
    /// assert_eq!(Message::plural("1 item", "%(num)s items", 1).source_text(), "1 item");
    /// assert_eq!(Message::plural("1 item", "%(num)s items", 4).source_text(), "%(num)s items");
    /// ```
    #[must_use]
    pub fn source_text(&self) -> &str {
        match self {
            Self::Singular(text) => text,
            Self::Plural {
                singular,
                plural,
                count,
            } => match PluralCategory::for_count(*count) {
                PluralCategory::Singular => singular,
                _ => plural,
            },
        }
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Self::Singular(text)
    }
}

/// Translations for the locale resolved for one request.
///
/// Holds its own snapshot of the catalogue, so a concurrent
/// [`crate::Locale::refresh`] does not affect lookups through this value.
#[derive(Debug, Clone)]
pub struct Translation {
    locale: String,
    catalog: Arc<TranslationCatalog>,
}

impl Translation {
    /// Binds `locale` to a catalogue snapshot.
    #[must_use]
    pub fn new(locale: impl Into<String>, catalog: Arc<TranslationCatalog>) -> Self {
        Self {
            locale: locale.into(),
            catalog,
        }
    }

    /// Locale code lookups are made against.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Table for the locale; empty when the locale is unsupported.
    #[must_use]
    pub fn table(&self) -> &PluralTable {
        self.catalog.table_or_empty(&self.locale)
    }

    /// Translates a singular message.
    ///
    /// Looks in the singular table, or in the unknown table when the locale
    /// has no singular table at all. Returns `message` unchanged when no
    /// translation exists.
    #[must_use]
    pub fn gettext(&self, message: &str) -> String {
        let table = self.table();
        let category = if table.category(PluralCategory::Singular).is_some() {
            PluralCategory::Singular
        } else {
            PluralCategory::Unknown
        };
        table.lookup(category, message).unwrap_or(message).to_owned()
    }

    /// Translates a counted message.
    ///
    /// A count of one looks up `singular` in the singular table; any other
    /// count looks up `plural` in the plural table. Returns the chosen source
    /// string unchanged when no translation exists.
    #[must_use]
    pub fn ngettext(&self, singular: &str, plural: &str, count: u64) -> String {
        let category = PluralCategory::for_count(count);
        let key = if category == PluralCategory::Singular {
            singular
        } else {
            plural
        };
        self.table().lookup(category, key).unwrap_or(key).to_owned()
    }

    /// Translates `message`, dispatching on its form.
    #[must_use]
    pub fn translate(&self, message: &Message) -> String {
        match message {
            Message::Singular(text) => self.gettext(text),
            Message::Plural {
                singular,
                plural,
                count,
            } => self.ngettext(singular, plural, *count),
        }
    }

    /// Translates `message`, then fills its `%(name)s` placeholders.
    #[must_use]
    pub fn gettext_with(&self, message: &str, args: &InterpolationArgs<'_>) -> String {
        interpolate(&self.gettext(message), args).into_owned()
    }

    /// Translates a counted message, then fills its placeholders.
    ///
    /// `num` is bound to `count` unless `args` already defines it.
    #[must_use]
    pub fn ngettext_with(
        &self,
        singular: &str,
        plural: &str,
        count: u64,
        args: &InterpolationArgs<'_>,
    ) -> String {
        let mut variables = args.clone();
        variables
            .entry("num")
            .or_insert_with(|| count.to_string());
        interpolate(&self.ngettext(singular, plural, count), &variables).into_owned()
    }

    /// Builds template callables bound to this translation.
    #[must_use]
    pub fn callables(&self) -> GettextCallables {
        let singular = self.clone();
        let counted = self.clone();
        GettextCallables {
            gettext: Arc::new(move |message: &str, args: &InterpolationArgs<'_>| {
                singular.gettext_with(message, args)
            }),
            ngettext: Arc::new(
                move |one: &str, many: &str, count: u64, args: &InterpolationArgs<'_>| {
                    counted.ngettext_with(one, many, count, args)
                },
            ),
        }
    }

    /// Installs this translation's callables into `engine`.
    pub fn install_into(&self, engine: &mut dyn TemplateEngine) {
        let GettextCallables { gettext, ngettext } = self.callables();
        engine.install_gettext_callables(gettext, ngettext);
    }
}
