//! A tiny template engine that renders the greeting page.

use csv_locale::{GettextCallables, GettextFn, InterpolationArgs, NgettextFn, TemplateEngine, interpolate};

/// Renders the page body with whichever translators were installed.
///
/// Without installed callables the English source text is rendered, with
/// placeholders still filled in.
#[derive(Debug, Default)]
pub struct PageTemplate {
    callables: Option<GettextCallables>,
}

impl TemplateEngine for PageTemplate {
    fn install_gettext_callables(&mut self, gettext: GettextFn, ngettext: NgettextFn) {
        self.callables = Some(GettextCallables { gettext, ngettext });
    }
}

impl PageTemplate {
    /// Returns `true` once translators have been installed.
    #[must_use]
    pub const fn is_localised(&self) -> bool {
        self.callables.is_some()
    }

    /// Renders the greeting and unread-message lines.
    #[must_use]
    pub fn render(&self, name: &str, messages: u64) -> Vec<String> {
        let greeting_args = InterpolationArgs::from([("name", name.to_owned())]);
        vec![
            self.gettext("Hello, %(name)s!", &greeting_args),
            self.ngettext(
                "You have one new message",
                "You have %(num)s new messages",
                messages,
            ),
        ]
    }

    fn gettext(&self, message: &str, args: &InterpolationArgs<'_>) -> String {
        match &self.callables {
            Some(callables) => (callables.gettext)(message, args),
            None => interpolate(message, args).into_owned(),
        }
    }

    fn ngettext(&self, singular: &str, plural: &str, count: u64) -> String {
        let args = InterpolationArgs::new();
        match &self.callables {
            Some(callables) => (callables.ngettext)(singular, plural, count, &args),
            None => {
                let text = if count == 1 { singular } else { plural };
                let args = InterpolationArgs::from([("num", count.to_string())]);
                interpolate(text, &args).into_owned()
            }
        }
    }
}
