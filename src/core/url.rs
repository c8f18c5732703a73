//! Scheme and authority value types.
//!
//! A configured server URL is parsed once into a [`ServerUrl`] instead of
//! being prefix-stripped at every call site. The authority (scheme + host)
//! that ends up in front of a resolved path is an [`Authority`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// URL scheme of a published location.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    #[default]
    Http,
    Https,
}

impl Scheme {
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }

    /// `"http://"` or `"https://"`.
    #[inline]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Http => "http://",
            Self::Https => "https://",
        }
    }

    /// Split a recognised scheme prefix off `s`.
    pub fn strip_prefix(s: &str) -> Option<(Self, &str)> {
        if let Some(rest) = s.strip_prefix(Self::Https.prefix()) {
            Some((Self::Https, rest))
        } else {
            s.strip_prefix(Self::Http.prefix())
                .map(|rest| (Self::Http, rest))
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scheme + host pair placed in front of a site-relative path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Authority {
    pub scheme: Scheme,
    pub host: String,
}

impl Authority {
    pub fn new(scheme: Scheme, host: impl Into<String>) -> Self {
        Self {
            scheme,
            host: host.into(),
        }
    }

    /// Authority from a site hostname property (always `http`).
    ///
    /// Returns `None` for a blank hostname.
    pub fn from_hostname(hostname: &str) -> Option<Self> {
        let host = hostname.trim().trim_end_matches('/');
        (!host.is_empty()).then(|| Self::new(Scheme::Http, host))
    }

    /// Append a resolved path.
    ///
    /// An empty path yields the bare `scheme://host` (site root). A path
    /// without a leading slash is joined with one.
    pub fn join(&self, path: &str) -> String {
        let mut url = String::with_capacity(
            self.scheme.prefix().len() + self.host.len() + path.len() + 1,
        );
        url.push_str(self.scheme.prefix());
        url.push_str(&self.host);
        if !path.is_empty() {
            if !path.starts_with('/') {
                url.push('/');
            }
            url.push_str(path);
        }
        url
    }
}

impl fmt::Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.scheme.prefix(), self.host)
    }
}

/// A configured server URL: `""`, `"http://host"`, `"https://host"` or `"host"`.
///
/// The scheme defaults to `http` when no prefix is present. The host may be
/// empty, in which case there is no configured authority but the scheme is
/// still remembered for scheme correction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerUrl {
    pub scheme: Scheme,
    pub host: String,
}

impl ServerUrl {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let (scheme, rest) = Scheme::strip_prefix(trimmed).unwrap_or((Scheme::Http, trimmed));
        Self {
            scheme,
            host: rest.trim_end_matches('/').to_string(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.host.is_empty()
    }

    /// The configured authority, if a host is present.
    pub fn authority(&self) -> Option<Authority> {
        (!self.host.is_empty()).then(|| Authority::new(self.scheme, self.host.clone()))
    }
}
