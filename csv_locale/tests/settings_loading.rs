//! Building a controller from layered settings.

use anyhow::{Result, anyhow, ensure};
use csv_locale::{Locale, LocaleSettings, Message, RequestHeaders, SETTINGS_FILE};
use rstest::rstest;
use test_helpers::figment::with_app_root;
use test_helpers::translations::{FR_FR, TR_TR};

#[rstest]
fn default_layout_reads_root_translations() -> Result<()> {
    with_app_root(|j, root| {
        j.create_dir("translations")?;
        j.create_file("translations/tr_TR.csv", TR_TR)?;
        j.create_file("translations/fr_FR.csv", FR_FR)?;
        j.create_file(SETTINGS_FILE, "default_locale = \"tr_TR\"\n")?;

        let settings = LocaleSettings::load(root).map_err(|e| anyhow!(e.to_string()))?;
        let locale = Locale::new(settings);
        let text = locale
            .translate(&RequestHeaders::accepting("de"), &Message::new("Hello"))
            .map_err(|e| anyhow!(e.to_string()))?;
        ensure!(text == "Merhaba", "got {text}");
        Ok(())
    })
}

#[rstest]
fn environment_selects_default_and_directory() -> Result<()> {
    with_app_root(|j, root| {
        j.create_dir("i18n")?;
        j.create_file("i18n/fr_FR.csv", FR_FR)?;
        j.set_env("DEFAULT_LOCALE", "fr");
        j.set_env("LOCALE_PATH", root.join("i18n").as_str());
        j.set_env("CONFIGURE_TEMPLATES", "false");

        let settings = LocaleSettings::load(root).map_err(|e| anyhow!(e.to_string()))?;
        ensure!(!settings.configure_templates);
        let locale = Locale::new(settings);
        let resolved = locale
            .resolve_locale(&RequestHeaders::new())
            .map_err(|e| anyhow!(e.to_string()))?;
        ensure!(resolved == "fr_FR", "got {resolved}");
        Ok(())
    })
}
