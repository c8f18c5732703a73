//! Site and request context passed explicitly through resolution.

use crate::core::{Authority, Scheme};

use super::Language;

/// A configured site as seen by the resolution engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteContext {
    pub name: String,
    /// Fallback host when no server URL is configured. May be empty.
    pub hostname: String,
    /// Tree path of the site's start item.
    pub root_path: String,
    pub language: Language,
}

/// Authority of the request being answered, the last fallback for URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub authority: Authority,
}

impl RequestContext {
    pub fn new(scheme: Scheme, host: impl Into<String>) -> Self {
        Self {
            authority: Authority::new(scheme, host),
        }
    }

    /// Parse `host` or `scheme://host`, defaulting to `http`.
    pub fn from_host(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let (scheme, host) = Scheme::strip_prefix(raw).unwrap_or((Scheme::Http, raw));
        let host = host.trim_end_matches('/');
        (!host.is_empty()).then(|| Self::new(scheme, host))
    }

    #[inline]
    pub fn scheme(&self) -> Scheme {
        self.authority.scheme
    }

    /// Full URL of `path` on the requested host.
    #[inline]
    pub fn full_url(&self, path: &str) -> String {
        self.authority.join(path)
    }
}
