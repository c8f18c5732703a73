//! `[sites.<name>]` section configuration.
//!
//! A site definition names the tree node the site starts at, the hostname
//! used when no server URL is configured, and the shared (bucket) locations
//! whose items are published under a different parent.
//!
//! # Example
//!
//! ```toml
//! [sites.website]
//! root = "/content/home"
//! hostname = "www.site.com"
//! language = "en"
//!
//! [[sites.website.shared]]
//! parent = "/content/home/landing"
//! content_root = "/content/data/products"
//! ```

use super::SitemapSettings;
use crate::config::{ConfigDiagnostics, FieldPath};
use crate::content::{Language, SiteContext};
use serde::{Deserialize, Serialize};

/// A shared location: items stored under `content_root` are published under
/// `parent`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedDefinition {
    /// Tree path of the public parent item.
    pub parent: String,
    /// Tree path of the bucket that physically stores the items.
    pub content_root: String,
}

/// One site definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Tree path of the site's start item.
    pub root: String,

    /// Host name, used when `sitemap.server_url` is empty.
    pub hostname: String,

    /// Default content language.
    pub language: String,

    /// Sitemap settings.
    pub sitemap: SitemapSettings,

    /// Shared (bucket) locations.
    pub shared: Vec<SharedDefinition>,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            root: "/".into(),
            hostname: String::new(),
            language: "en".into(),
            sitemap: SitemapSettings::default(),
            shared: Vec::new(),
        }
    }
}

impl SiteSection {
    /// Site context handed to the resolution engine.
    pub fn context(&self, name: &str) -> SiteContext {
        SiteContext {
            name: name.to_string(),
            hostname: self.hostname.trim().to_string(),
            root_path: normalize_tree_path(&self.root),
            language: Language::new(&self.language),
        }
    }

    /// Validate this site definition.
    pub fn validate(&self, name: &str, diag: &mut ConfigDiagnostics) {
        if !self.root.starts_with('/') {
            diag.error_with_hint(
                FieldPath::site(name, "root"),
                format!("root `{}` must be an absolute tree path", self.root),
                "e.g.: \"/content/home\"",
            );
        }

        if self.hostname.contains("://") || self.hostname.contains('/') {
            diag.error_with_hint(
                FieldPath::site(name, "hostname"),
                format!("hostname `{}` must be a bare host", self.hostname),
                "put scheme and host in sitemap.server_url instead",
            );
        }

        if self.language.trim().is_empty() {
            diag.error(FieldPath::site(name, "language"), "language must not be empty");
        }

        for (i, shared) in self.shared.iter().enumerate() {
            let field = FieldPath::site(name, &format!("shared[{i}]"));
            if !shared.parent.starts_with('/') || !shared.content_root.starts_with('/') {
                diag.error_with_hint(
                    field.clone(),
                    "shared paths must be absolute tree paths",
                    "e.g.: parent = \"/content/home/landing\"",
                );
            }
            if normalize_tree_path(&shared.parent) == normalize_tree_path(&shared.content_root) {
                diag.error(field, "parent and content_root must differ");
            }
        }

        if self.sitemap.server_url.trim().is_empty() && self.hostname.trim().is_empty() {
            diag.warn(
                FieldPath::site(name, "sitemap.server_url"),
                "neither server_url nor hostname is set; URLs fall back to the request host",
            );
        }

        self.sitemap.validate(name, diag);
    }
}

/// Trim a trailing slash (except for `/` itself).
pub fn normalize_tree_path(path: &str) -> String {
    let trimmed = path.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}
