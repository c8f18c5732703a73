//! Link resolution: content item to site-relative path.
//!
//! [`LinkResolver`] is the seam the URL builder talks to. Output is one of
//! - a site-relative path (`/products/item1`, or `/` for the site root)
//! - a scheme-relative URL (`//other.host/path`) for items owned by another site
//! - an absolute URL when the server URL is explicitly requested
//!
//! The builder classifies whatever comes back, so other implementations may
//! return any of these shapes.

use thiserror::Error;

use super::{ContentItem, Language, SiteContext, path_contains};

/// Options for one resolution call.
#[derive(Debug, Clone, Copy)]
pub struct UrlOptions<'a> {
    /// Resolve items of other sites against their owning site.
    pub site_resolving: bool,
    /// Name of the site the link is rendered for.
    pub site: &'a str,
    /// Emit `http://host` in front of the path.
    pub include_server_url: bool,
    /// Prefix the path with the language.
    pub embed_language: bool,
    pub language: Option<&'a Language>,
}

impl<'a> UrlOptions<'a> {
    /// Options for a plain site-relative link.
    pub fn for_site(site: &'a str, site_resolving: bool) -> Self {
        Self {
            site_resolving,
            site,
            include_server_url: false,
            embed_language: false,
            language: None,
        }
    }

    /// Embed `language` in the path.
    pub fn with_language(mut self, language: &'a Language) -> Self {
        self.embed_language = true;
        self.language = Some(language);
        self
    }
}

/// A link could not be resolved.
#[derive(Debug, Error)]
#[error("cannot resolve link for `{path}`: {reason}")]
pub struct ResolveError {
    pub path: String,
    pub reason: String,
}

impl ResolveError {
    pub fn new(item: &ContentItem, reason: impl Into<String>) -> Self {
        Self {
            path: item.path.clone(),
            reason: reason.into(),
        }
    }
}

/// Turns a content item into a link path.
pub trait LinkResolver {
    fn resolve(&self, item: &ContentItem, options: &UrlOptions<'_>) -> Result<String, ResolveError>;
}

/// Resolver over the configured sites' tree roots.
#[derive(Debug, Clone)]
pub struct TreeLinkResolver {
    sites: Vec<SiteContext>,
}

impl TreeLinkResolver {
    pub fn new(sites: Vec<SiteContext>) -> Self {
        Self { sites }
    }

    fn site(&self, name: &str) -> Option<&SiteContext> {
        self.sites.iter().find(|site| site.name == name)
    }

    /// Site with the deepest root containing `item`.
    fn owning_site(&self, item: &ContentItem) -> Option<&SiteContext> {
        self.sites
            .iter()
            .filter(|site| item.is_under(&site.root_path))
            .max_by_key(|site| site.root_path.len())
    }
}

impl LinkResolver for TreeLinkResolver {
    fn resolve(&self, item: &ContentItem, options: &UrlOptions<'_>) -> Result<String, ResolveError> {
        let site = self
            .site(options.site)
            .ok_or_else(|| ResolveError::new(item, format!("unknown site `{}`", options.site)))?;

        let language = options.embed_language.then_some(options.language).flatten();

        if item.is_under(&site.root_path) {
            let path = with_language(relative_path(&site.root_path, &item.path), language);
            if options.include_server_url && !site.hostname.is_empty() {
                return Ok(format!("http://{}{}", site.hostname, path));
            }
            return Ok(path);
        }

        if options.site_resolving
            && let Some(owner) = self.owning_site(item)
        {
            let path = with_language(relative_path(&owner.root_path, &item.path), language);
            if owner.hostname.is_empty() {
                return Ok(path);
            }
            return Ok(format!("//{}{}", owner.hostname, path));
        }

        Ok(with_language(slugify(&item.path), language))
    }
}

/// Path of `path` below `root`, `/` for the root itself.
fn relative_path(root: &str, path: &str) -> String {
    debug_assert!(path_contains(root, path));
    let rest = path
        .strip_prefix(root.trim_end_matches('/'))
        .unwrap_or(path);
    if rest.is_empty() {
        "/".to_string()
    } else {
        slugify(rest)
    }
}

fn with_language(path: String, language: Option<&Language>) -> String {
    match language {
        None => path,
        Some(lang) if path == "/" => format!("/{}", lang.tag().to_ascii_lowercase()),
        Some(lang) => format!("/{}{}", lang.tag().to_ascii_lowercase(), path),
    }
}

/// Item names may contain spaces; links use dashes.
fn slugify(path: &str) -> String {
    path.replace(' ', "-")
}
