//! Temporary translation directories populated with CSV files.
//!
//! # Examples
//!
//! ```
//! use csv_locale_test_helpers::translations::{TranslationDir, TR_TR};
//!
//! let dir = TranslationDir::new()?.with_file("tr_TR.csv", TR_TR)?;
//! assert!(dir.path().join("tr_TR.csv").is_file());
//! # Ok::<(), anyhow::Error>(())
//! ```

use std::fs;

use anyhow::{Context, Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Turkish sample holding only untagged rows.
pub const TR_TR: &str = "\
Hello,Merhaba
\"Hello, %(name)s\",\"Merhaba, %(name)s\"
";

/// French sample with singular and plural rows.
pub const FR_FR: &str = "\
1 item,1 article,singular
%(num)s items,%(num)s articles,plural
Hello,Bonjour,singular
";

/// Peruvian Spanish sample.
pub const ES_PE: &str = "Hello,Hola\n";

/// Argentinian Spanish sample.
pub const ES_AR: &str = "Hello,Che hola\n";

/// Portuguese sample without a region.
pub const PT: &str = "Hello,Olá\n";

/// A translations directory removed when dropped.
#[derive(Debug)]
pub struct TranslationDir {
    _dir: TempDir,
    path: Utf8PathBuf,
}

impl TranslationDir {
    /// Creates an empty directory.
    ///
    /// # Errors
    ///
    /// Returns an error when the directory cannot be created or its path is
    /// not valid UTF-8.
    pub fn new() -> Result<Self> {
        let dir = TempDir::new().context("create translations dir")?;
        let path = Utf8PathBuf::from_path_buf(dir.path().to_path_buf())
            .map_err(|path| anyhow!("temp dir is not UTF-8: {}", path.display()))?;
        Ok(Self { _dir: dir, path })
    }

    /// Creates a directory holding the bundled samples as `tr_TR.csv`,
    /// `fr_FR.csv`, `es_PE.csv`, `es_AR.csv`, and `pt.csv`.
    ///
    /// # Errors
    ///
    /// Returns an error when any file cannot be written.
    pub fn with_samples() -> Result<Self> {
        Self::new()?
            .with_file("tr_TR.csv", TR_TR)?
            .with_file("fr_FR.csv", FR_FR)?
            .with_file("es_PE.csv", ES_PE)?
            .with_file("es_AR.csv", ES_AR)?
            .with_file("pt.csv", PT)
    }

    /// Directory path.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Writes `contents` to `name`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be written.
    pub fn write(&self, name: &str, contents: impl AsRef<[u8]>) -> Result<Utf8PathBuf> {
        let target = self.path.join(name);
        fs::write(&target, contents).with_context(|| format!("write {target}"))?;
        Ok(target)
    }

    /// Writes a file and returns the directory, for chaining.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be written.
    pub fn with_file(self, name: &str, contents: impl AsRef<[u8]>) -> Result<Self> {
        self.write(name, contents)?;
        Ok(self)
    }

    /// Removes `name` from the directory.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be removed.
    pub fn remove(&self, name: &str) -> Result<()> {
        let target = self.path.join(name);
        fs::remove_file(&target).with_context(|| format!("remove {target}"))
    }
}
