//! `Accept-Language` header parsing.

/// A locale requested by the client together with its quality weight.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalePreference {
    /// Locale code exactly as the client sent it, such as `"es-GT"`.
    pub code: String,
    /// Quality weight; `1.0` when the entry carried no `q` parameter.
    pub weight: f32,
}

/// Parses an `Accept-Language` header into preferences, best first.
///
/// Entries take the form `code[;q=weight]`. Entries without a weight count as
/// `1.0`; a weight that does not parse as a finite number counts as `0.0`.
/// Empty entries are dropped. The result is sorted by descending weight and
/// keeps header order between equal weights.
///
/// # Examples
///
/// ```
/// use csv_locale::parse_accept_language;
///
/// let codes: Vec<_> = parse_accept_language("fr;q=0.5, tr-TR, en;q=0.8")
///     .into_iter()
///     .map(|preference| preference.code)
///     .collect();
/// assert_eq!(codes, ["tr-TR", "en", "fr"]);
/// ```
#[must_use]
pub fn parse_accept_language(header: &str) -> Vec<LocalePreference> {
    let mut preferences: Vec<LocalePreference> =
        header.split(',').filter_map(parse_entry).collect();
    preferences.sort_by(|left, right| right.weight.total_cmp(&left.weight));
    preferences
}

fn parse_entry(entry: &str) -> Option<LocalePreference> {
    let mut parts = entry.split(';');
    let code = parts.next()?.trim();
    if code.is_empty() {
        return None;
    }
    let weight = parts
        .map(str::trim)
        .find_map(|param| param.strip_prefix("q="))
        .map_or(1.0, parse_weight);
    Some(LocalePreference {
        code: code.to_owned(),
        weight,
    })
}

fn parse_weight(raw: &str) -> f32 {
    raw.trim()
        .parse::<f32>()
        .ok()
        .filter(|weight| weight.is_finite())
        .unwrap_or(0.0)
}
