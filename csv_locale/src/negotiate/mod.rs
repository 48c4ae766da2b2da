//! Locale negotiation: header parsing and closest-match selection.

mod accept;

pub use accept::{LocalePreference, parse_accept_language};

use crate::catalog::TranslationCatalog;

/// Normalises a requested locale code to the catalogue's underscore form.
///
/// ```
/// use csv_locale::normalize_locale_code;
///
/// assert_eq!(normalize_locale_code("es-GT"), "es_GT");
/// ```
#[must_use]
pub fn normalize_locale_code(code: &str) -> String {
    code.trim().replace('-', "_")
}

fn primary_language(code: &str) -> &str {
    code.split('_').next().unwrap_or(code)
}

/// Returns the supported locale that best matches one of `candidates`.
///
/// Candidates are tried in order; empty ones are skipped. Each is normalised
/// with [`normalize_locale_code`]. An exact catalogue key wins; otherwise the
/// first supported locale (in lexicographic order) sharing the candidate's
/// primary language, compared case-insensitively, is chosen. Returns `None`
/// when no candidate matches.
///
/// # Examples
///
/// ```
/// use csv_locale::{TranslationCatalog, closest_supported};
///
/// let mut catalog = TranslationCatalog::new();
/// catalog.table_mut("es_PE");
/// catalog.table_mut("tr_TR");
///
/// assert_eq!(closest_supported(&catalog, ["tr-TR"]), Some("tr_TR"));
/// assert_eq!(closest_supported(&catalog, ["es-GT"]), Some("es_PE"));
/// assert_eq!(closest_supported(&catalog, ["de", ""]), None);
/// ```
pub fn closest_supported<'c, I, S>(catalog: &'c TranslationCatalog, candidates: I) -> Option<&'c str>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    candidates.into_iter().find_map(|candidate| {
        let raw = candidate.as_ref();
        if raw.trim().is_empty() {
            return None;
        }
        let code = normalize_locale_code(raw);
        if let Some((supported, _)) = catalog.locale_entry(&code) {
            return Some(supported);
        }
        let language = primary_language(&code);
        catalog
            .supported_locales()
            .find(|supported| primary_language(supported).eq_ignore_ascii_case(language))
    })
}
