//! Canonical URL building.
//!
//! The authority in front of a resolved path comes from, in order:
//! 1. the site's configured `sitemap.server_url`
//! 2. the site's `hostname` (always `http`)
//! 3. the request being answered
//!
//! Resolver output is classified with [`ResolvedLink`] first, so an
//! authority embedded by the resolver is never published as is.

use std::borrow::Cow;

use crate::config::{RenderingConfig, SiteSettingsProvider, SitemapSettings};
use crate::content::{
    ContentItem, Language, LinkResolver, RequestContext, SiteContext, UrlOptions,
};
use crate::core::{Authority, ResolvedLink, ServerUrl};
use crate::debug;

use super::FeedError;

/// Composes absolute URLs from link resolver output and site settings.
#[derive(Clone, Copy)]
pub struct CanonicalUrlBuilder<'a> {
    links: &'a dyn LinkResolver,
    settings: &'a dyn SiteSettingsProvider,
    rendering: RenderingConfig,
    request: Option<&'a RequestContext>,
}

impl<'a> CanonicalUrlBuilder<'a> {
    pub fn new(
        links: &'a dyn LinkResolver,
        settings: &'a dyn SiteSettingsProvider,
        rendering: RenderingConfig,
    ) -> Self {
        Self {
            links,
            settings,
            rendering,
            request: None,
        }
    }

    /// Use `request` as the last-resort authority.
    pub fn with_request(mut self, request: Option<&'a RequestContext>) -> Self {
        self.request = request;
        self
    }

    /// Sitemap settings of `site`.
    #[inline]
    pub fn settings(&self, site: &SiteContext) -> Cow<'a, SitemapSettings> {
        self.settings.sitemap_settings(&site.name)
    }

    /// Configured authority of `site`: server URL, then hostname.
    pub fn authority(&self, site: &SiteContext) -> Option<Authority> {
        self.settings(site)
            .server()
            .authority()
            .or_else(|| Authority::from_hostname(&site.hostname))
    }

    /// Absolute canonical URL of `item`, unescaped.
    ///
    /// With `language`, the language is embedded in the resolved path.
    pub fn build_url(
        &self,
        item: &ContentItem,
        site: &SiteContext,
        language: Option<&Language>,
    ) -> Result<String, FeedError> {
        let mut options = UrlOptions::for_site(&site.name, self.rendering.site_resolving);
        if let Some(language) = language {
            options = options.with_language(language);
        }

        let resolved = self.links.resolve(item, &options)?;
        if ResolvedLink::parse(&resolved).is_foreign() {
            debug!("url"; "dropping foreign authority of {}", resolved);
        }
        let server = self.settings(site).server();
        let url = compose(&resolved, &server, self.authority(site), self.request).ok_or_else(
            || FeedError::NoAuthority {
                path: item.path.clone(),
            },
        )?;

        debug!("url"; "{} -> {}", item.path, url);
        Ok(url)
    }

    /// Absolute URL of the site root, without a trailing slash.
    pub fn site_root(&self, site: &SiteContext) -> Result<String, FeedError> {
        self.authority(site)
            .map(|authority| authority.join(""))
            .or_else(|| self.request.map(|request| request.full_url("")))
            .ok_or_else(|| FeedError::NoAuthority {
                path: site.root_path.clone(),
            })
    }
}

/// Put `resolved` behind an authority.
///
/// A configured authority replaces a foreign one and forces its scheme.
/// Links carrying an http(s) or scheme-relative host keep that host, so
/// items owned by another site point at that site, not this one.
///
/// Returns `None` when nothing supplies scheme and host.
fn compose(
    resolved: &str,
    server: &ServerUrl,
    configured: Option<Authority>,
    request: Option<&RequestContext>,
) -> Option<String> {
    let link = ResolvedLink::parse(resolved);

    if let Some(authority) = configured {
        let url = match link {
            // cross-site links keep their host
            ResolvedLink::Http { host, path, .. } | ResolvedLink::SchemeRelative { host, path }
                if !host.is_empty() =>
            {
                Authority::new(authority.scheme, host).join(path)
            }
            // a foreign authority is dropped, only its path survives
            _ => authority.join(link.path()),
        };
        return Some(url);
    }

    let scheme = request.map_or(server.scheme, RequestContext::scheme);
    match link {
        ResolvedLink::Foreign { host, path, .. } | ResolvedLink::SchemeRelative { host, path } => {
            Some(Authority::new(scheme, host).join(path))
        }
        ResolvedLink::Http { .. } => Some(resolved.to_string()),
        ResolvedLink::Path(path) => request.map(|request| request.full_url(path)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ResolveError;
    use crate::core::Scheme;
    use crate::test_support::{FixedLinks, Settings, item, site};

    fn build(
        resolved: &str,
        server_url: &str,
        hostname: &str,
        request: Option<&RequestContext>,
    ) -> Result<String, FeedError> {
        let links = FixedLinks::single(resolved);
        let settings = Settings::with_server_url(server_url);
        let builder = CanonicalUrlBuilder::new(&links, &settings, RenderingConfig::default())
            .with_request(request);
        builder.build_url(&item("/content/home/x", &["en"]), &site(hostname), None)
    }

    #[test]
    fn test_hostname_fallback() {
        assert_eq!(
            build("/products/item1", "", "www.site.com", None).unwrap(),
            "http://www.site.com/products/item1"
        );
    }

    #[test]
    fn test_server_url_wins_over_hostname() {
        assert_eq!(
            build("/a/b/item", "https://shop.example.com", "www.site.com", None).unwrap(),
            "https://shop.example.com/a/b/item"
        );
        assert_eq!(
            build("/a", "shop.example.com", "", None).unwrap(),
            "http://shop.example.com/a"
        );
    }

    #[test]
    fn test_https_server_never_yields_http() {
        let request = RequestContext::new(Scheme::Http, "localhost");
        for resolved in [
            "",
            "/",
            "/a/b",
            "relative/path",
            "//other.example.com/x",
            "http://other.example.com/x",
            "sitecore://internal/x",
        ] {
            let url = build(resolved, "https://example.com", "", Some(&request)).unwrap();
            assert!(url.starts_with("https://"), "{resolved} -> {url}");
        }
    }

    #[test]
    fn test_empty_path_is_site_root() {
        assert_eq!(
            build("", "https://example.com", "", None).unwrap(),
            "https://example.com"
        );
        assert_eq!(build("/", "", "www.site.com", None).unwrap(), "http://www.site.com/");
    }

    #[test]
    fn test_foreign_authority_dropped() {
        assert_eq!(
            build("sitecore://internal/products/item1", "https://example.com", "", None)
                .unwrap(),
            "https://example.com/products/item1"
        );
        assert_eq!(
            build("cms://internal", "https://example.com", "", None).unwrap(),
            "https://example.com"
        );
    }

    #[test]
    fn test_cross_site_link_keeps_host() {
        assert_eq!(
            build("//shop.example.com/cart", "https://www.site.com", "", None).unwrap(),
            "https://shop.example.com/cart"
        );
    }

    #[test]
    fn test_url_in_query_keeps_path() {
        assert_eq!(
            build("/redirect?u=http://x.com", "https://example.com", "", None).unwrap(),
            "https://example.com/redirect?u=http://x.com"
        );
        assert_ne!(
            build("/redirect?u=http://x.com", "https://example.com", "", None).unwrap(),
            build("/redirect?u=http://y.com", "https://example.com", "", None).unwrap()
        );
    }

    #[test]
    fn test_request_fallback() {
        let request = RequestContext::new(Scheme::Https, "preview.site.com");
        assert_eq!(
            build("/about", "", "", Some(&request)).unwrap(),
            "https://preview.site.com/about"
        );
        assert_eq!(
            build("//shop.example.com/cart", "", "", Some(&request)).unwrap(),
            "https://shop.example.com/cart"
        );
    }

    #[test]
    fn test_scheme_corrected_without_authority() {
        assert_eq!(
            build("sitecore://internal/a", "", "", None).unwrap(),
            "http://internal/a"
        );
        assert_eq!(
            build("https://cdn.site.com/a", "", "", None).unwrap(),
            "https://cdn.site.com/a"
        );
    }

    #[test]
    fn test_no_authority() {
        let err = build("/about", "", "", None).unwrap_err();
        assert!(matches!(err, FeedError::NoAuthority { .. }));
    }

    #[test]
    fn test_idempotent() {
        let links = FixedLinks::single("/products/item1");
        let settings = Settings::with_server_url("https://example.com");
        let builder = CanonicalUrlBuilder::new(&links, &settings, RenderingConfig::default());
        let it = item("/content/home/products/item1", &["en"]);
        let s = site("");
        assert_eq!(
            builder.build_url(&it, &s, None).unwrap(),
            builder.build_url(&it, &s, None).unwrap()
        );
    }

    #[test]
    fn test_resolver_options() {
        struct Echo;
        impl LinkResolver for Echo {
            fn resolve(
                &self,
                _item: &ContentItem,
                options: &UrlOptions<'_>,
            ) -> Result<String, ResolveError> {
                assert!(!options.include_server_url);
                assert!(!options.site_resolving);
                assert_eq!(options.site, "website");
                Ok(match options.language {
                    Some(lang) if options.embed_language => format!("/{}", lang.tag()),
                    _ => "/".into(),
                })
            }
        }

        let settings = Settings::with_server_url("https://example.com");
        let builder = CanonicalUrlBuilder::new(
            &Echo,
            &settings,
            RenderingConfig {
                site_resolving: false,
            },
        );
        let it = item("/content/home", &["en"]);
        let fr = Language::new("fr");
        assert_eq!(
            builder.build_url(&it, &site(""), Some(&fr)).unwrap(),
            "https://example.com/fr"
        );
        assert_eq!(
            builder.build_url(&it, &site(""), None).unwrap(),
            "https://example.com/"
        );
    }

    #[test]
    fn test_resolver_error_propagates() {
        struct Failing;
        impl LinkResolver for Failing {
            fn resolve(
                &self,
                item: &ContentItem,
                _options: &UrlOptions<'_>,
            ) -> Result<String, ResolveError> {
                Err(ResolveError::new(item, "broken link"))
            }
        }

        let settings = Settings::with_server_url("https://example.com");
        let builder = CanonicalUrlBuilder::new(&Failing, &settings, RenderingConfig::default());
        let it = item("/content/home", &["en"]);
        assert!(matches!(
            builder.build_url(&it, &site(""), None),
            Err(FeedError::Resolve(_))
        ));
    }

    #[test]
    fn test_site_root() {
        let links = FixedLinks::single("/");
        let settings = Settings::with_server_url("");
        let builder = CanonicalUrlBuilder::new(&links, &settings, RenderingConfig::default());
        assert_eq!(builder.site_root(&site("www.site.com")).unwrap(), "http://www.site.com");
        assert!(builder.site_root(&site("")).is_err());

        let request = RequestContext::new(Scheme::Https, "localhost:5277");
        let builder = builder.with_request(Some(&request));
        assert_eq!(builder.site_root(&site("")).unwrap(), "https://localhost:5277");
    }
}
