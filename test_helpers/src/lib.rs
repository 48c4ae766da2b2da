//! Test helpers shared across crates.
//!
//! Provides throwaway translation directories and a `figment::Jail` wrapper
//! rooted at a UTF-8 application directory.

pub mod figment;
pub mod translations;

pub use translations::TranslationDir;
