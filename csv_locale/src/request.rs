//! Request-side seam between the host framework and locale resolution.

use std::collections::HashMap;

use uncased::{Uncased, UncasedStr};

/// Name of the header carrying the client's language preferences.
pub const ACCEPT_LANGUAGE: &str = "Accept-Language";

/// Read access to the request currently being handled.
///
/// Host frameworks implement this for their request type so selectors and
/// the resolver can inspect headers without depending on the framework.
pub trait RequestContext {
    /// Returns the value of header `name`, matched case-insensitively.
    fn header(&self, name: &str) -> Option<&str>;

    /// Returns the `Accept-Language` header, if present.
    fn accept_language(&self) -> Option<&str> {
        self.header(ACCEPT_LANGUAGE)
    }
}

/// Case-insensitive header map usable as a [`RequestContext`].
///
/// # Examples
///
/// ```
/// use csv_locale::{RequestContext, RequestHeaders};
///
/// let request = RequestHeaders::new().with("accept-language", "tr-TR,en;q=0.5");
/// assert_eq!(request.accept_language(), Some("tr-TR,en;q=0.5"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestHeaders {
    headers: HashMap<Uncased<'static>, String>,
}

impl RequestHeaders {
    /// Creates an empty header map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a header map holding only an `Accept-Language` header.
    #[must_use]
    pub fn accepting(languages: impl Into<String>) -> Self {
        Self::new().with(ACCEPT_LANGUAGE, languages)
    }

    /// Adds or replaces a header, returning the updated map.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Adds or replaces a header, returning the previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.headers.insert(Uncased::from(name.into()), value.into())
    }
}

impl RequestContext for RequestHeaders {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(UncasedStr::new(name)).map(String::as_str)
    }
}

impl<N, V> FromIterator<(N, V)> for RequestHeaders
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        let mut headers = Self::new();
        for (name, value) in iter {
            headers.insert(name, value);
        }
        headers
    }
}
