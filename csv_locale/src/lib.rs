//! Per-request locale negotiation backed by CSV translation catalogues.
//!
//! A translations directory holds one CSV file per locale (`tr_TR.csv`,
//! `es.csv`, ...). The [`Locale`] controller loads those files into a
//! [`TranslationCatalog`] on first use, picks a locale for each request from a
//! registered selector or the `Accept-Language` header, and translates
//! singular and counted [`Message`]s against it. [`Locale::refresh`] drops the
//! catalogue so edits on disk are picked up by the next lookup.
//!
//! Applications that keep translations elsewhere register a
//! [`TranslationSource`] instead of a directory. Template engines receive
//! `gettext`/`ngettext` callables through the [`TemplateEngine`] hook.
//!
//! ```rust,no_run
//! use camino::Utf8Path;
//! use csv_locale::{Locale, LocaleSettings, Message, RequestHeaders};
//!
//! # fn main() -> csv_locale::LocaleResult<()> {
//! let settings = LocaleSettings::load(Utf8Path::new("/srv/app"))?;
//! let locale = Locale::new(settings);
//! let request = RequestHeaders::accepting("tr-TR,en;q=0.5");
//! let text = locale.translate(&request, &Message::plural("1 item", "%(num)s items", 3))?;
//! # let _ = text;
//! # Ok(())
//! # }
//! ```

mod catalog;
mod error;
mod interpolate;
mod locale;
mod negotiate;
mod request;
mod result_ext;
mod settings;
mod templates;

pub use catalog::{
    MessageMap, PluralCategory, PluralTable, SourceError, SourceRow, TranslationCatalog,
    TranslationSource, UnknownPluralIndicator, ascii_fold, is_locale_code, load_directory,
    load_rows,
};
pub use error::{LocaleError, LocaleResult};
pub use interpolate::{InterpolationArgs, interpolate};
pub use locale::{LazyString, Locale, LocaleSelector, Message, Resolver, Translation};
pub use negotiate::{
    LocalePreference, closest_supported, normalize_locale_code, parse_accept_language,
};
pub use request::{ACCEPT_LANGUAGE, RequestContext, RequestHeaders};
pub use result_ext::LocaleResultExt;
pub use settings::{DEFAULT_LOCALE, LocaleSettings, SETTINGS_FILE, TRANSLATIONS_DIR};
pub use templates::{GettextCallables, GettextFn, NgettextFn, TemplateEngine};
