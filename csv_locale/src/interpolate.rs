//! Named-placeholder formatting for translated text.
//!
//! Translations may embed `%(name)s` placeholders, which template callables
//! fill in after lookup. `%%` renders a literal percent sign.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Named values substituted into `%(name)s` placeholders.
pub type InterpolationArgs<'a> = BTreeMap<&'a str, String>;

#[expect(
    clippy::expect_used,
    reason = "the pattern is a literal exercised by the unit tests"
)]
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%(?:\((\w+)\)s|%)").expect("placeholder pattern is valid"));

/// Substitutes `%(name)s` placeholders in `text` with values from `args`.
///
/// Placeholders without a matching argument are left as they are and logged.
///
/// # Examples
///
/// ```
/// use csv_locale::{InterpolationArgs, interpolate};
///
/// let args = InterpolationArgs::from([("name", String::from("Erkan"))]);
/// assert_eq!(interpolate("Merhaba %(name)s, %%100", &args), "Merhaba Erkan, %100");
/// ```
#[must_use]
pub fn interpolate<'t>(text: &'t str, args: &InterpolationArgs<'_>) -> Cow<'t, str> {
    PLACEHOLDER.replace_all(text, |caps: &Captures<'_>| {
        let Some(name) = caps.get(1) else {
            return String::from("%");
        };
        if let Some(value) = args.get(name.as_str()) {
            return value.clone();
        }
        tracing::warn!(
            placeholder = name.as_str(),
            text,
            "no value supplied for translation placeholder"
        );
        caps.get(0)
            .map_or_else(String::new, |whole| whole.as_str().to_owned())
    })
}

#[cfg(test)]
mod tests {
    //! Tests for placeholder substitution.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::plain("Hello", "Hello")]
    #[case::named("%(name)s liked this", "Erkan liked this")]
    #[case::repeated("%(name)s, %(name)s!", "Erkan, Erkan!")]
    #[case::percent("100%% sure", "100% sure")]
    #[case::missing("%(who)s liked this", "%(who)s liked this")]
    #[case::count("%(num)s items", "3 items")]
    fn substitutes_placeholders(#[case] text: &str, #[case] expected: &str) {
        let args = InterpolationArgs::from([
            ("name", String::from("Erkan")),
            ("num", String::from("3")),
        ]);
        assert_eq!(interpolate(text, &args), expected);
    }

    #[rstest]
    fn untouched_text_is_borrowed() {
        let rendered = interpolate("Hello", &InterpolationArgs::new());
        assert!(matches!(rendered, Cow::Borrowed("Hello")));
    }
}
