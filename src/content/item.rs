//! Content items and their languages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A content language tag (`en`, `fr-FR`, `pt_BR`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Language {
    tag: String,
}

impl Language {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.trim().to_string(),
        }
    }

    #[inline]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Two-letter ISO code: the primary subtag, lower-cased.
    pub fn two_letter_code(&self) -> String {
        self.tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase()
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.tag)
    }
}

/// SEO fields read verbatim into sitemap entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoFields {
    /// `0.0` to `1.0`, kept as written.
    pub priority: String,
    /// Free-form token such as `daily`.
    pub change_frequency: String,
    pub title: String,
    /// Leave the item out of generated feeds.
    pub exclude: bool,
}

/// A node of the content tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: Uuid,

    /// Absolute tree path (`/content/home/products/item1`).
    pub path: String,

    /// Last update, stored in UTC.
    pub updated: DateTime<Utc>,

    /// Languages the item exists in, in their natural order.
    pub languages: Vec<Language>,

    #[serde(flatten)]
    pub seo: SeoFields,
}

impl ContentItem {
    /// Last path segment.
    pub fn name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or_default()
    }

    /// Tree path of the parent node, `None` for the tree root.
    pub fn parent_path(&self) -> Option<&str> {
        let idx = self.path.rfind('/')?;
        if self.path.len() <= 1 {
            return None;
        }
        Some(if idx == 0 { "/" } else { &self.path[..idx] })
    }

    /// Whether this item is `root` or lies below it.
    #[inline]
    pub fn is_under(&self, root: &str) -> bool {
        path_contains(root, &self.path)
    }
}

/// Whether tree path `path` equals `root` or is a descendant of it.
///
/// `/a/b` contains `/a/b/c` but not `/a/bc`.
pub fn path_contains(root: &str, path: &str) -> bool {
    let root = root.trim_end_matches('/');
    if root.is_empty() {
        return path.starts_with('/');
    }
    match path.strip_prefix(root) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}
