//! Config field path used in diagnostics.

use owo_colors::OwoColorize;
use std::borrow::Cow;
use std::fmt;

/// Dotted path of a config field (e.g. `sites.website.sitemap.server_url`).
///
/// Static paths cost nothing; per-site paths are built with [`FieldPath::site`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(Cow<'static, str>);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    /// Path of a field inside `[sites.<name>]`.
    pub fn site(name: &str, field: &str) -> Self {
        Self(Cow::Owned(format!("sites.{name}.{field}")))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
