//! Settings consumed by the [`crate::Locale`] controller.
//!
//! Settings are layered with Figment: built-in defaults, then an optional
//! `locale.toml` in the application root, then the environment variables
//! `DEFAULT_LOCALE`, `LOCALE_PATH`, and `CONFIGURE_TEMPLATES`. Later layers
//! override earlier ones.

use camino::{Utf8Path, Utf8PathBuf};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::{LocaleResult, LocaleResultExt};

/// File name of the optional settings file inside the application root.
pub const SETTINGS_FILE: &str = "locale.toml";

/// Locale used when no request preference matches.
pub const DEFAULT_LOCALE: &str = "en_US";

/// Directory name, relative to the application root, holding translations.
pub const TRANSLATIONS_DIR: &str = "translations";

const ENV_KEYS: [&str; 3] = ["default_locale", "locale_path", "configure_templates"];

/// Configuration for locale resolution and catalogue loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleSettings {
    /// Locale code used when nothing else matches, such as `"tr_TR"`.
    pub default_locale: String,
    /// Directory containing one CSV file per locale.
    pub locale_path: Utf8PathBuf,
    /// Whether [`crate::Locale::configure_templates`] installs translators.
    pub configure_templates: bool,
}

impl Default for LocaleSettings {
    fn default() -> Self {
        Self {
            default_locale: DEFAULT_LOCALE.to_owned(),
            locale_path: Utf8PathBuf::from(TRANSLATIONS_DIR),
            configure_templates: true,
        }
    }
}

impl LocaleSettings {
    /// Default settings for an application rooted at `root`.
    ///
    /// ```
    /// use camino::Utf8Path;
    /// use csv_locale::LocaleSettings;
    ///
    /// let settings = LocaleSettings::for_root(Utf8Path::new("/srv/app"));
    /// assert_eq!(settings.locale_path, "/srv/app/translations");
    /// assert_eq!(settings.default_locale, "en_US");
    /// ```
    #[must_use]
    pub fn for_root(root: &Utf8Path) -> Self {
        Self {
            locale_path: root.join(TRANSLATIONS_DIR),
            ..Self::default()
        }
    }

    /// Replaces the default locale.
    #[must_use]
    pub fn with_default_locale(mut self, locale: impl Into<String>) -> Self {
        self.default_locale = locale.into();
        self
    }

    /// Replaces the translations directory.
    #[must_use]
    pub fn with_locale_path(mut self, path: impl Into<Utf8PathBuf>) -> Self {
        self.locale_path = path.into();
        self
    }

    /// Enables or disables template integration.
    #[must_use]
    pub const fn with_configure_templates(mut self, enabled: bool) -> Self {
        self.configure_templates = enabled;
        self
    }

    /// Builds the provider stack used by [`LocaleSettings::load`].
    ///
    /// Exposed so applications can merge further providers before extracting.
    /// Paths extracted from it are not yet resolved against `root`.
    #[must_use]
    pub fn figment(root: &Utf8Path) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(root.join(SETTINGS_FILE).as_std_path()))
            .merge(Env::raw().only(&ENV_KEYS))
    }

    /// Loads settings for an application rooted at `root`.
    ///
    /// A relative `locale_path`, whether defaulted, read from `locale.toml`,
    /// or taken from `LOCALE_PATH`, is resolved against `root` rather than the
    /// process working directory.
    ///
    /// # Errors
    ///
    /// Returns [`crate::LocaleError::Settings`] when a provider yields values
    /// that do not deserialize into [`LocaleSettings`].
    pub fn load(root: &Utf8Path) -> LocaleResult<Self> {
        let mut settings: Self = Self::figment(root).extract().into_locale()?;
        if settings.locale_path.is_relative() {
            settings.locale_path = root.join(&settings.locale_path);
        }
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    //! Tests for layered settings.

    use super::*;
    use anyhow::{Result, anyhow, ensure};
    use rstest::rstest;
    use test_helpers::figment::with_app_root as with_jail;

    #[rstest]
    fn defaults_apply_without_file_or_env() -> Result<()> {
        with_jail(|_, root| {
            let settings = LocaleSettings::load(root).map_err(|e| anyhow!(e.to_string()))?;
            ensure!(settings == LocaleSettings::for_root(root), "got {settings:?}");
            Ok(())
        })
    }

    #[rstest]
    fn file_overrides_defaults() -> Result<()> {
        with_jail(|j, root| {
            j.create_file(SETTINGS_FILE, "default_locale = \"tr_TR\"\nconfigure_templates = false\n")?;
            let settings = LocaleSettings::load(root).map_err(|e| anyhow!(e.to_string()))?;
            ensure!(settings.default_locale == "tr_TR", "got {settings:?}");
            ensure!(!settings.configure_templates, "got {settings:?}");
            ensure!(settings.locale_path == root.join(TRANSLATIONS_DIR), "got {settings:?}");
            Ok(())
        })
    }

    #[rstest]
    fn environment_overrides_file() -> Result<()> {
        with_jail(|j, root| {
            j.create_file(SETTINGS_FILE, "default_locale = \"tr_TR\"\n")?;
            j.set_env("DEFAULT_LOCALE", "fr_FR");
            j.set_env("LOCALE_PATH", "/opt/i18n");
            let settings = LocaleSettings::load(root).map_err(|e| anyhow!(e.to_string()))?;
            ensure!(settings.default_locale == "fr_FR", "got {settings:?}");
            ensure!(settings.locale_path == "/opt/i18n", "got {settings:?}");
            Ok(())
        })
    }

    #[rstest]
    #[case::from_file(Some("locale_path = \"lang\"\n"), None, "lang")]
    #[case::from_env(None, Some("i18n/csv"), "i18n/csv")]
    fn relative_paths_resolve_against_root(
        #[case] file: Option<&str>,
        #[case] env: Option<&str>,
        #[case] expected: &str,
    ) -> Result<()> {
        with_jail(|j, root| {
            if let Some(contents) = file {
                j.create_file(SETTINGS_FILE, contents)?;
            }
            if let Some(path) = env {
                j.set_env("LOCALE_PATH", path);
            }
            let settings = LocaleSettings::load(root).map_err(|e| anyhow!(e.to_string()))?;
            ensure!(settings.locale_path == root.join(expected), "got {settings:?}");
            Ok(())
        })
    }

    #[rstest]
    fn invalid_values_surface_settings_errors() -> Result<()> {
        with_jail(|j, root| {
            j.create_file(SETTINGS_FILE, "configure_templates = \"sometimes\"\n")?;
            let err = LocaleSettings::load(root).expect_err("string is not a bool");
            ensure!(
                matches!(*err, crate::LocaleError::Settings(_)),
                "unexpected error {err:?}"
            );
            Ok(())
        })
    }
}
