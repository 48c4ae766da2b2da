//! Error types produced while loading catalogues and resolving locales.

mod constructors;
mod types;

pub use types::LocaleError;

use std::sync::Arc;

/// Result alias used by every fallible operation in the crate.
///
/// Errors are shared behind an [`Arc`] so a single load failure can be handed
/// to several callers (for example every lazy string resolved during a
/// request) without cloning the underlying source error.
pub type LocaleResult<T> = Result<T, Arc<LocaleError>>;

#[cfg(test)]
mod tests;
