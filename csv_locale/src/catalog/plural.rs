//! Plural categories recognised by translation tables.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Selects which variant of a translated string applies.
///
/// Translation files name the category in their optional third column.
/// Rows without one are filed under [`PluralCategory::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PluralCategory {
    /// The form used when exactly one item is involved.
    Singular,
    /// The form used for any count other than one.
    Plural,
    /// Strings whose translation does not vary with a count.
    Unknown,
}

impl PluralCategory {
    /// Every category, in table order.
    pub const ALL: [Self; 3] = [Self::Singular, Self::Plural, Self::Unknown];

    /// Returns the indicator used for this category in translation files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Singular => "singular",
            Self::Plural => "plural",
            Self::Unknown => "unknown",
        }
    }

    /// Picks the category a counted message resolves to.
    ///
    /// # Examples
    ///
    /// ```
    /// use csv_locale::PluralCategory;
    ///
    /// assert_eq!(PluralCategory::for_count(1), PluralCategory::Singular);
    /// assert_eq!(PluralCategory::for_count(0), PluralCategory::Plural);
    /// assert_eq!(PluralCategory::for_count(5), PluralCategory::Plural);
    /// ```
    #[must_use]
    pub const fn for_count(count: u64) -> Self {
        if count == 1 {
            Self::Singular
        } else {
            Self::Plural
        }
    }
}

impl fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a plural indicator names no known category.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognised plural indicator {indicator:?}")]
pub struct UnknownPluralIndicator {
    /// Indicator text as it appeared in the source.
    pub indicator: String,
}

impl FromStr for PluralCategory {
    type Err = UnknownPluralIndicator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "singular" => Ok(Self::Singular),
            "plural" => Ok(Self::Plural),
            "unknown" => Ok(Self::Unknown),
            other => Err(UnknownPluralIndicator {
                indicator: other.to_owned(),
            }),
        }
    }
}

/// Boolean plural flags, as supplied by row sources, map `true` to
/// [`PluralCategory::Plural`] and `false` to [`PluralCategory::Unknown`].
impl From<bool> for PluralCategory {
    fn from(plural: bool) -> Self {
        if plural { Self::Plural } else { Self::Unknown }
    }
}
