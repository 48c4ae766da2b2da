//! Greeter demo: renders a short page in the visitor's language.
//!
//! The binary pretends to serve one request. Its `Accept-Language` header and
//! an optional saved user locale come from the command line; translations
//! come from the `translations/` directory under `--root`.

pub mod app;
pub mod cli;
pub mod error;
pub mod page;
