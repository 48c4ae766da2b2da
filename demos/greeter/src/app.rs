//! Wires settings, the locale controller, and the page together.

use std::io::Write;
use std::sync::Arc;

use csv_locale::{Locale, LocaleSettings, RequestContext};

use crate::cli::{GreeterCli, USER_LOCALE_HEADER};
use crate::error::Result;
use crate::page::PageTemplate;

/// Renders the page for the request described by `cli` into `out`.
///
/// # Errors
///
/// Returns an error when settings or translations cannot be loaded, or when
/// writing to `out` fails.
pub fn run(cli: &GreeterCli, out: &mut impl Write) -> Result<()> {
    let settings = LocaleSettings::load(&cli.root)?;
    let mut locale = Locale::new(settings);
    locale.set_locale_selector(|request: &dyn RequestContext| {
        request.header(USER_LOCALE_HEADER).map(str::to_owned)
    })?;
    let locale = Arc::new(locale);

    let request: Arc<dyn RequestContext + Send + Sync> = Arc::new(cli.request());
    let resolved = locale.resolve_locale(&*request)?;
    tracing::info!(locale = %resolved, "serving greeting");

    let headline = locale.lazy(Arc::clone(&request), "Welcome");
    let mut page = PageTemplate::default();
    if !locale.configure_templates(&*request, &mut page)? {
        tracing::debug!("template translators disabled; rendering source text");
    }

    writeln!(out, "[{resolved}] {headline}")?;
    for line in page.render(&cli.name, cli.messages) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
