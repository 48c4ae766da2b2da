//! Template engine integration.
//!
//! Template engines receive two callables: `gettext` for singular messages and
//! `ngettext` for counted ones. Both translate first and then fill
//! `%(name)s` placeholders from the arguments passed by the template;
//! `ngettext` also binds `num` to the count.

use std::fmt;
use std::sync::Arc;

use crate::interpolate::InterpolationArgs;

/// Singular translator installed into template engines.
pub type GettextFn = Arc<dyn Fn(&str, &InterpolationArgs<'_>) -> String + Send + Sync>;

/// Counted translator installed into template engines.
pub type NgettextFn = Arc<dyn Fn(&str, &str, u64, &InterpolationArgs<'_>) -> String + Send + Sync>;

/// Pair of translators bound to one request's locale.
#[derive(Clone)]
pub struct GettextCallables {
    /// Translates singular messages.
    pub gettext: GettextFn,
    /// Translates counted messages.
    pub ngettext: NgettextFn,
}

impl fmt::Debug for GettextCallables {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GettextCallables")
            .field("gettext", &"<translator>")
            .field("ngettext", &"<translator>")
            .finish()
    }
}

/// Hook implemented by template engines that accept translation callables.
pub trait TemplateEngine {
    /// Replaces the engine's translation callables.
    fn install_gettext_callables(&mut self, gettext: GettextFn, ngettext: NgettextFn);
}
