//! The [`Locale`] controller: owns the catalogue and resolves requests.
//!
//! Applications build one controller at start-up, register an optional
//! locale selector and translation source, and then share it (usually as
//! `Arc<Locale>`) with request handlers. The catalogue is loaded lazily on
//! first use and dropped again by [`Locale::refresh`].

mod lazy;
mod translation;

pub use lazy::{LazyString, Resolver};
pub use translation::{Message, Translation};

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::catalog::{TranslationCatalog, TranslationSource, load_directory, load_rows};
use crate::negotiate::{closest_supported, parse_accept_language};
use crate::request::RequestContext;
use crate::settings::LocaleSettings;
use crate::templates::TemplateEngine;
use crate::{LocaleError, LocaleResult};

/// Callback that proposes a locale for a request, such as a user's saved
/// preference.
pub type LocaleSelector = Arc<dyn Fn(&dyn RequestContext) -> Option<String> + Send + Sync>;

/// Central controller for locale resolution and translation lookups.
pub struct Locale {
    settings: LocaleSettings,
    selector: Option<LocaleSelector>,
    source: Option<Arc<dyn TranslationSource>>,
    catalog: RwLock<Option<Arc<TranslationCatalog>>>,
}

impl Locale {
    /// Creates a controller with no catalogue loaded yet.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use csv_locale::{Locale, LocaleSettings, Message, RequestHeaders};
    ///
    /// # fn run() -> csv_locale::LocaleResult<()> {
    /// let locale = Locale::new(LocaleSettings::default().with_default_locale("tr_TR"));
    /// let request = RequestHeaders::accepting("fr-FR, tr;q=0.5");
    /// let greeting = locale.translate(&request, &Message::new("Hello"))?;
    /// # let _ = greeting;
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn new(settings: LocaleSettings) -> Self {
        Self {
            settings,
            selector: None,
            source: None,
            catalog: RwLock::new(None),
        }
    }

    /// Settings the controller was built with.
    #[must_use]
    pub const fn settings(&self) -> &LocaleSettings {
        &self.settings
    }

    /// Registers the locale selector.
    ///
    /// The selector runs before the `Accept-Language` header is consulted. A
    /// non-empty answer is matched against the supported locales and decides
    /// the request's locale on its own.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError::SelectorAlreadyRegistered`] when a selector is
    /// already registered.
    pub fn set_locale_selector<F>(&mut self, selector: F) -> LocaleResult<()>
    where
        F: Fn(&dyn RequestContext) -> Option<String> + Send + Sync + 'static,
    {
        if self.selector.is_some() {
            return Err(LocaleError::SelectorAlreadyRegistered.shared());
        }
        self.selector = Some(Arc::new(selector));
        Ok(())
    }

    /// Registers a translation source, replacing directory loading.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError::SourceAlreadyRegistered`] when a source is
    /// already registered.
    pub fn set_translation_source<S>(&mut self, source: S) -> LocaleResult<()>
    where
        S: TranslationSource + 'static,
    {
        if self.source.is_some() {
            return Err(LocaleError::SourceAlreadyRegistered.shared());
        }
        self.source = Some(Arc::new(source));
        Ok(())
    }

    /// Loads the catalogue now and makes it current, replacing any previous one.
    ///
    /// Reads from the registered translation source when there is one and from
    /// [`LocaleSettings::locale_path`] otherwise.
    ///
    /// # Errors
    ///
    /// Propagates directory, file, and source failures. The previous catalogue
    /// stays current when loading fails.
    pub fn load_translations(&self) -> LocaleResult<Arc<TranslationCatalog>> {
        let catalog = Arc::new(match &self.source {
            Some(source) => {
                load_rows(source.rows().map_err(|e| LocaleError::source_failed(e).shared())?)
            }
            None => load_directory(&self.settings.locale_path)?,
        });
        *self.catalog.write() = Some(Arc::clone(&catalog));
        Ok(catalog)
    }

    /// Returns the current catalogue, loading it first when necessary.
    ///
    /// # Errors
    ///
    /// Propagates failures from [`Locale::load_translations`].
    pub fn catalog(&self) -> LocaleResult<Arc<TranslationCatalog>> {
        let current = self.catalog.read().clone();
        match current {
            Some(catalog) => Ok(catalog),
            None => self.load_translations(),
        }
    }

    /// Returns `true` when a catalogue is loaded.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.catalog.read().is_some()
    }

    /// Drops the catalogue so the next lookup reloads it.
    ///
    /// Translations already handed out keep the snapshot they were built on.
    pub fn refresh(&self) {
        *self.catalog.write() = None;
        tracing::debug!("translation catalogue dropped; next lookup reloads it");
    }

    /// Resolves the closest supported locale for `candidates`.
    ///
    /// Falls back to the closest match for the default locale, then to the
    /// default locale code itself.
    ///
    /// # Errors
    ///
    /// Propagates catalogue loading failures.
    pub fn closest<I, S>(&self, candidates: I) -> LocaleResult<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let catalog = self.catalog()?;
        Ok(self.closest_in(&catalog, candidates))
    }

    /// Resolves the request's locale from its `Accept-Language` header alone.
    ///
    /// # Errors
    ///
    /// Propagates catalogue loading failures.
    pub fn browser_locale(&self, request: &dyn RequestContext) -> LocaleResult<String> {
        let catalog = self.catalog()?;
        Ok(self.browser_locale_in(&catalog, request))
    }

    /// Resolves the locale for `request`.
    ///
    /// Consults the selector first, then the `Accept-Language` header, then
    /// the default locale.
    ///
    /// # Errors
    ///
    /// Propagates catalogue loading failures.
    pub fn resolve_locale(&self, request: &dyn RequestContext) -> LocaleResult<String> {
        let catalog = self.catalog()?;
        Ok(self.resolve_in(&catalog, request))
    }

    /// Resolves the request's locale and binds it to the current catalogue.
    ///
    /// # Errors
    ///
    /// Propagates catalogue loading failures.
    pub fn translation(&self, request: &dyn RequestContext) -> LocaleResult<Translation> {
        let catalog = self.catalog()?;
        let locale = self.resolve_in(&catalog, request);
        Ok(Translation::new(locale, catalog))
    }

    /// Translates `message` for `request`.
    ///
    /// Missing translations are not errors; the source text is returned.
    ///
    /// # Errors
    ///
    /// Propagates catalogue loading failures.
    pub fn translate(&self, request: &dyn RequestContext, message: &Message) -> LocaleResult<String> {
        Ok(self.translation(request)?.translate(message))
    }

    /// Defers translating `message` until the returned value is formatted.
    ///
    /// The lazy string keeps the controller and the request alive and
    /// resolves against whatever catalogue and selector state is current at
    /// formatting time. Loading failures at that point are logged and the
    /// source text is rendered instead.
    #[must_use]
    pub fn lazy(
        self: &Arc<Self>,
        request: Arc<dyn RequestContext + Send + Sync>,
        message: impl Into<Message>,
    ) -> LazyString {
        let locale = Arc::clone(self);
        LazyString::new(message, move |pending: &Message| {
            locale
                .translate(&*request, pending)
                .unwrap_or_else(|err| {
                    tracing::warn!(
                        error = %err,
                        message = pending.source_text(),
                        "deferred translation failed; rendering source text"
                    );
                    pending.source_text().to_owned()
                })
        })
    }

    /// Installs the request's translators into `engine`.
    ///
    /// Does nothing when [`LocaleSettings::configure_templates`] is off.
    /// Returns whether callables were installed.
    ///
    /// # Errors
    ///
    /// Propagates catalogue loading failures.
    pub fn configure_templates(
        &self,
        request: &dyn RequestContext,
        engine: &mut dyn TemplateEngine,
    ) -> LocaleResult<bool> {
        if !self.settings.configure_templates {
            return Ok(false);
        }
        self.translation(request)?.install_into(engine);
        Ok(true)
    }

    fn closest_in<I, S>(&self, catalog: &TranslationCatalog, candidates: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let default = self.settings.default_locale.as_str();
        closest_supported(catalog, candidates)
            .or_else(|| closest_supported(catalog, [default]))
            .unwrap_or(default)
            .to_owned()
    }

    fn browser_locale_in(&self, catalog: &TranslationCatalog, request: &dyn RequestContext) -> String {
        let preferences = request
            .accept_language()
            .map(parse_accept_language)
            .unwrap_or_default();
        self.closest_in(catalog, preferences.iter().map(|preference| &preference.code))
    }

    fn resolve_in(&self, catalog: &TranslationCatalog, request: &dyn RequestContext) -> String {
        if let Some(selector) = &self.selector
            && let Some(code) = selector(request).filter(|code| !code.trim().is_empty())
        {
            return self.closest_in(catalog, [code]);
        }
        self.browser_locale_in(catalog, request)
    }
}

impl fmt::Debug for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Locale")
            .field("settings", &self.settings)
            .field("selector", &self.selector.as_ref().map(|_| "<selector>"))
            .field("source", &self.source.as_ref().map(|_| "<source>"))
            .field("loaded", &self.is_loaded())
            .finish()
    }
}
