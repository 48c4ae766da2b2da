//! Command-line surface for the greeter demo.

use camino::Utf8PathBuf;
use clap::Parser;
use csv_locale::RequestHeaders;

/// Header carrying the visitor's saved locale, read by the locale selector.
pub const USER_LOCALE_HEADER: &str = "X-User-Locale";

/// Options describing the request the demo serves.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "greeter",
    about = "Renders a greeting in the language negotiated for a request",
    version
)]
pub struct GreeterCli {
    /// Application root holding `locale.toml` and `translations/`.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: Utf8PathBuf,
    /// Value of the request's `Accept-Language` header.
    #[arg(long, short = 'l', value_name = "HEADER", default_value = "")]
    pub accept_language: String,
    /// Locale saved in the visitor's profile; wins over the header.
    #[arg(long, value_name = "LOCALE")]
    pub user_locale: Option<String>,
    /// Visitor name used in the greeting.
    #[arg(long, default_value = "friend")]
    pub name: String,
    /// Number of unread messages to report.
    #[arg(long, default_value_t = 0)]
    pub messages: u64,
}

impl GreeterCli {
    /// Builds the request headers described by the options.
    #[must_use]
    pub fn request(&self) -> RequestHeaders {
        let request = RequestHeaders::accepting(self.accept_language.as_str());
        match &self.user_locale {
            Some(locale) => request.with(USER_LOCALE_HEADER, locale.as_str()),
            None => request,
        }
    }
}
