//! Resolving request locales through a host framework's request type.

use std::collections::HashMap;

use anyhow::{Result, anyhow, ensure};
use csv_locale::{Locale, LocaleSettings, Message, RequestContext};
use rstest::{fixture, rstest};
use test_helpers::TranslationDir;

const SAVED_LOCALE: &str = "X-Saved-Locale";

/// Stand-in for a web framework request.
struct FrameworkRequest {
    headers: HashMap<String, String>,
}

impl FrameworkRequest {
    fn new(accept_language: &str) -> Self {
        Self {
            headers: HashMap::from([(
                String::from("accept-language"),
                accept_language.to_owned(),
            )]),
        }
    }

    /// Mimics a framework adapter exposing the signed-in user's saved locale.
    fn signed_in_as(mut self, locale: &str) -> Self {
        self.headers
            .insert(String::from(SAVED_LOCALE), locale.to_owned());
        self
    }
}

impl RequestContext for FrameworkRequest {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[fixture]
fn samples() -> TranslationDir {
    TranslationDir::with_samples().expect("sample translations are writable")
}

fn locale_for(dir: &TranslationDir) -> Result<Locale> {
    let mut locale = Locale::new(
        LocaleSettings::default()
            .with_locale_path(dir.path())
            .with_default_locale("tr_TR"),
    );
    locale
        .set_locale_selector(|request: &dyn RequestContext| {
            request.header(SAVED_LOCALE).map(str::to_owned)
        })
        .map_err(|e| anyhow!(e.to_string()))?;
    Ok(locale)
}

#[rstest]
#[case::browser_preference(FrameworkRequest::new("fr-CA, tr;q=0.4"), "fr_FR", "Bonjour")]
#[case::quality_order(FrameworkRequest::new("tr;q=0.4, pt;q=0.8"), "pt", "Olá")]
#[case::saved_preference_wins(
    FrameworkRequest::new("fr").signed_in_as("es-PE"),
    "es_PE",
    "Hola"
)]
#[case::nothing_matches(FrameworkRequest::new("ja, ko;q=0.5"), "tr_TR", "Merhaba")]
fn negotiates_and_translates(
    samples: TranslationDir,
    #[case] request: FrameworkRequest,
    #[case] expected_locale: &str,
    #[case] expected_text: &str,
) -> Result<()> {
    let locale = locale_for(&samples)?;
    let translation = locale
        .translation(&request)
        .map_err(|e| anyhow!(e.to_string()))?;
    ensure!(
        translation.locale() == expected_locale,
        "resolved {}",
        translation.locale()
    );
    ensure!(translation.translate(&Message::new("Hello")) == expected_text);
    Ok(())
}

#[rstest]
fn closest_prefers_earlier_candidates(samples: TranslationDir) -> Result<()> {
    let locale = locale_for(&samples)?;
    let pick = locale
        .closest(["de", "es-MX", "fr"])
        .map_err(|e| anyhow!(e.to_string()))?;
    ensure!(pick == "es_AR", "picked {pick}");
    Ok(())
}
