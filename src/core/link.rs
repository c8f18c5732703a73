//! Classification of link-resolver output.

use super::url::Scheme;

/// Syntactic shape of a path returned by a [`LinkResolver`](crate::content::LinkResolver).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedLink<'a> {
    /// Site-relative path (`/products/item1`, `""`, `en/about`).
    Path(&'a str),
    /// Already absolute `http(s)` URL.
    Http {
        scheme: Scheme,
        host: &'a str,
        path: &'a str,
    },
    /// Scheme-relative URL (`//host/path`).
    SchemeRelative { host: &'a str, path: &'a str },
    /// URL with an embedded non-http authority (`sitecore://host/path`).
    /// The authority is bogus and must not be published.
    Foreign {
        scheme: &'a str,
        host: &'a str,
        path: &'a str,
    },
}

impl<'a> ResolvedLink<'a> {
    /// Parse resolver output into its shape.
    pub fn parse(link: &'a str) -> Self {
        if let Some((scheme, rest)) = Scheme::strip_prefix(link) {
            let (host, path) = split_authority(rest);
            return Self::Http { scheme, host, path };
        }
        if let Some((scheme, rest)) = link.split_once("://")
            && is_foreign_scheme(scheme)
        {
            let (host, path) = split_authority(rest);
            return Self::Foreign { scheme, host, path };
        }
        if let Some(rest) = link.strip_prefix("//") {
            let (host, path) = split_authority(rest);
            return Self::SchemeRelative { host, path };
        }
        Self::Path(link)
    }

    /// The path part, with any authority removed.
    #[inline]
    pub const fn path(&self) -> &'a str {
        match *self {
            Self::Path(path)
            | Self::Http { path, .. }
            | Self::SchemeRelative { path, .. }
            | Self::Foreign { path, .. } => path,
        }
    }

    /// Whether the link embeds a non-http authority marker.
    #[inline]
    pub const fn is_foreign(&self) -> bool {
        matches!(self, Self::Foreign { .. })
    }
}

/// `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`, other than http(s).
///
/// A `://` inside a path or query (`/go?u=http://x`) has no valid scheme
/// in front of it.
fn is_foreign_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    let well_formed = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    well_formed && !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https")
}

/// Split `host/path...` into `("host", "/path...")`.
fn split_authority(rest: &str) -> (&str, &str) {
    match rest.find('/') {
        Some(idx) => rest.split_at(idx),
        None => (rest, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_path() {
        assert_eq!(
            ResolvedLink::parse("/products/item1"),
            ResolvedLink::Path("/products/item1")
        );
        assert_eq!(ResolvedLink::parse(""), ResolvedLink::Path(""));
        assert_eq!(ResolvedLink::parse("en/about"), ResolvedLink::Path("en/about"));
    }

    #[test]
    fn test_parse_http() {
        assert_eq!(
            ResolvedLink::parse("https://cdn.site.com/a/b"),
            ResolvedLink::Http {
                scheme: Scheme::Https,
                host: "cdn.site.com",
                path: "/a/b"
            }
        );
        assert_eq!(
            ResolvedLink::parse("http://site.com").path(),
            ""
        );
    }

    #[test]
    fn test_parse_foreign() {
        let link = ResolvedLink::parse("sitecore://internal/products/item1");
        assert!(link.is_foreign());
        assert_eq!(
            link,
            ResolvedLink::Foreign {
                scheme: "sitecore",
                host: "internal",
                path: "/products/item1"
            }
        );
    }

    #[test]
    fn test_parse_foreign_with_http_in_path() {
        // only the scheme decides, not a substring further along
        let link = ResolvedLink::parse("cms://host/http-guide");
        assert!(link.is_foreign());
        assert_eq!(link.path(), "/http-guide");
    }

    #[test]
    fn test_parse_foreign_without_path() {
        assert_eq!(ResolvedLink::parse("cms://host").path(), "");
    }

    #[test]
    fn test_parse_url_in_query_is_path() {
        assert_eq!(
            ResolvedLink::parse("/redirect?u=http://x.com"),
            ResolvedLink::Path("/redirect?u=http://x.com")
        );
        assert_eq!(
            ResolvedLink::parse("go?to=cms://host/a"),
            ResolvedLink::Path("go?to=cms://host/a")
        );
        assert!(!ResolvedLink::parse("/a#b://c").is_foreign());
    }

    #[test]
    fn test_parse_scheme_with_symbols() {
        let link = ResolvedLink::parse("svn+ssh://repo/trunk");
        assert!(link.is_foreign());
        assert_eq!(link.path(), "/trunk");
    }

    #[test]
    fn test_parse_scheme_relative() {
        assert_eq!(
            ResolvedLink::parse("//www.site.com/en/about"),
            ResolvedLink::SchemeRelative {
                host: "www.site.com",
                path: "/en/about"
            }
        );
    }
}
