//! Shared helpers for working with `figment::Jail` in tests.
//!
//! The jail isolates the working directory and environment variables, so
//! settings tests can write `locale.toml` and set `DEFAULT_LOCALE` without
//! leaking into other tests.

use anyhow::{Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};

/// Executes `f` inside a [`figment::Jail`], passing the jail directory as a
/// UTF-8 application root.
///
/// Errors returned by the closure are converted so callers can use `?` with
/// `anyhow` inside the closure and outside it.
///
/// # Errors
///
/// Returns an error if the jail directory is not valid UTF-8 or the closure
/// fails.
pub fn with_app_root<F, T>(f: F) -> Result<T>
where
    F: FnOnce(&mut figment::Jail, &Utf8Path) -> Result<T>,
{
    let mut output = None;
    figment::Jail::try_with(|j| {
        let root = Utf8PathBuf::from_path_buf(j.directory().to_path_buf())
            .map_err(|path| figment_error(format!("jail root is not UTF-8: {}", path.display())))?;
        output = Some(f(j, &root).map_err(figment_error)?);
        Ok(())
    })
    .map_err(|err| anyhow!(err.to_string()))?;
    output.ok_or_else(|| anyhow!("jail closure did not return a value"))
}

/// Converts any error implementing [`ToString`] into a [`figment::Error`].
#[expect(
    clippy::needless_pass_by_value,
    reason = "callers often own the error and passing by value avoids extra clones"
)]
pub fn figment_error<E: ToString>(err: E) -> figment::Error {
    figment::Error::from(err.to_string())
}
