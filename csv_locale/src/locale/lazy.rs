//! Deferred translations resolved when formatted.

use std::fmt;
use std::sync::Arc;

use super::Message;

/// Resolver invoked each time a [`LazyString`] is formatted.
pub type Resolver = Arc<dyn Fn(&Message) -> String + Send + Sync>;

/// A message whose translation is looked up only when it is displayed.
///
/// Every call to [`LazyString::resolve`] (and every `Display` use) runs the
/// resolver again, so a locale change or catalogue refresh between creating
/// the value and rendering it is honoured.
///
/// # Examples
///
/// ```
/// use csv_locale::{LazyString, Message};
///
/// let lazy = LazyString::new("Hello", |message: &Message| message.source_text().to_uppercase());
/// assert_eq!(lazy.to_string(), "HELLO");
/// ```
#[derive(Clone)]
pub struct LazyString {
    message: Message,
    resolver: Resolver,
}

impl LazyString {
    /// Wraps `message` with the resolver that will translate it.
    #[must_use]
    pub fn new<F>(message: impl Into<Message>, resolver: F) -> Self
    where
        F: Fn(&Message) -> String + Send + Sync + 'static,
    {
        Self {
            message: message.into(),
            resolver: Arc::new(resolver),
        }
    }

    /// The untranslated message.
    #[must_use]
    pub const fn message(&self) -> &Message {
        &self.message
    }

    /// Translates the message now.
    #[must_use]
    pub fn resolve(&self) -> String {
        (self.resolver)(&self.message)
    }
}

impl fmt::Display for LazyString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.resolve())
    }
}

impl fmt::Debug for LazyString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyString")
            .field("message", &self.message)
            .field("resolver", &"<resolver>")
            .finish()
    }
}
