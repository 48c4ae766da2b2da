//! Extensions for mapping errors to `LocaleResult` concisely.
//!
//! These helpers reduce repetitive `.map_err(|e| Arc::new(LocaleError::…(e)))`
//! patterns when converting external error types into the crate's
//! `LocaleResult<T>` alias (`Result<T, Arc<LocaleError>>`).
//!
//! # Examples
//!
//! ```
//! use csv_locale::{LocaleResult, LocaleResultExt};
//!
//! fn extract() -> LocaleResult<u8> {
//!     // figment::Error implements Into<LocaleError>
//!     Err::<u8, _>(figment::Error::from("boom")).into_locale()
//! }
//!
//! assert!(extract().is_err());
//! ```

use crate::{LocaleError, LocaleResult};
use std::sync::Arc;

/// Generic extension for mapping any `Result<T, E>` with `E: Into<LocaleError>`
/// into a `LocaleResult<T>`.
pub trait LocaleResultExt<T, E> {
    /// Convert `Result<T, E>` into `LocaleResult<T>` using `Into<LocaleError>`.
    ///
    /// # Errors
    ///
    /// Propagates the original error after conversion into `Arc<LocaleError>`.
    fn into_locale(self) -> LocaleResult<T>;
}

impl<T, E> LocaleResultExt<T, E> for Result<T, E>
where
    E: Into<LocaleError>,
{
    fn into_locale(self) -> LocaleResult<T> {
        self.map_err(|e| Arc::new(e.into()))
    }
}
