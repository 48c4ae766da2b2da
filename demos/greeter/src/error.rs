//! Error types for the greeter demo.

use std::sync::Arc;

use csv_locale::LocaleError;
use thiserror::Error;

/// Errors raised while rendering the greeting page.
#[derive(Debug, Error)]
pub enum GreeterError {
    /// Settings or translations could not be loaded.
    #[error("locale setup failed: {0}")]
    Locale(#[from] Arc<LocaleError>),
    /// The page could not be written out.
    #[error("failed to write the page: {0}")]
    Output(#[from] std::io::Error),
}

/// Result alias for the demo.
pub type Result<T> = std::result::Result<T, GreeterError>;
