//! Fixtures shared by unit tests.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use rustc_hash::FxHashMap;
use uuid::Uuid;

use crate::config::{SharedDefinition, SiteSettingsProvider, SitemapSettings};
use crate::content::{
    ContentItem, ContentLocator, ContentTree, Language, LinkResolver, ResolveError, SeoFields,
    SiteContext, UrlOptions,
};

/// Content file used across tests.
///
/// ```text
/// /content/data/orphans/lost         bucket without a root item
/// /content/data/products             bucket root
/// /content/data/products/a/b/item
/// /content/home                      site root of `website`
/// /content/home/landing              shared parent
/// /content/home/hidden               excluded
/// /content/shop/cart                 site `shop`
/// ```
pub const FIXTURE_CONTENT: &str = r#"
[[items]]
id = "00000000-0000-4000-8000-000000000001"
path = "/content/home"
updated = "2024-03-01T10:30:00Z"
languages = ["en"]
priority = "1.0"
change_frequency = "daily"
title = "Home"

[[items]]
id = "00000000-0000-4000-8000-000000000002"
path = "/content/home/about"
updated = "2024-03-01T10:30:00Z"
languages = ["en"]
priority = "0.5"
change_frequency = "monthly"
title = "About"

[[items]]
id = "00000000-0000-4000-8000-000000000003"
path = "/content/home/products/item1"
updated = "2024-03-01T10:30:00Z"
languages = ["en", "fr"]
priority = "0.8"
change_frequency = "Daily"
title = "Item & more"

[[items]]
id = "00000000-0000-4000-8000-000000000004"
path = "/content/home/landing"
updated = "2024-03-01T10:30:00Z"
languages = ["en"]

[[items]]
id = "00000000-0000-4000-8000-000000000005"
path = "/content/home/hidden"
updated = "2024-03-01T10:30:00Z"
languages = ["en"]
exclude = true

[[items]]
id = "00000000-0000-4000-8000-000000000010"
path = "/content/data/products"
updated = "2024-03-01T10:30:00Z"
languages = ["en"]

[[items]]
id = "00000000-0000-4000-8000-000000000011"
path = "/content/data/products/a"
updated = "2024-03-01T10:30:00Z"
languages = ["en"]

[[items]]
id = "00000000-0000-4000-8000-000000000012"
path = "/content/data/products/a/b"
updated = "2024-03-01T10:30:00Z"
languages = ["en"]

[[items]]
id = "00000000-0000-4000-8000-000000000013"
path = "/content/data/products/a/b/item"
updated = "2024-03-01T10:30:00Z"
languages = ["en", "fr", "de"]
priority = "0.6"
change_frequency = "weekly"
title = "Bucketed item"

[[items]]
id = "00000000-0000-4000-8000-000000000020"
path = "/content/data/orphans/lost"
updated = "2024-03-01T10:30:00Z"
languages = ["en"]

[[items]]
id = "00000000-0000-4000-8000-000000000030"
path = "/content/shop/cart"
updated = "2024-03-01T10:30:00Z"
languages = ["en"]
"#;

pub fn fixture_tree() -> ContentTree {
    ContentTree::from_toml(FIXTURE_CONTENT).unwrap()
}

pub fn shared_definitions() -> Vec<SharedDefinition> {
    vec![
        SharedDefinition {
            parent: "/content/home/landing".into(),
            content_root: "/content/data/products".into(),
        },
        SharedDefinition {
            parent: "/content/home/landing".into(),
            content_root: "/content/data/orphans".into(),
        },
    ]
}

pub fn fixture_sites() -> Vec<SiteContext> {
    vec![
        site("www.site.com"),
        SiteContext {
            name: "shop".into(),
            hostname: "shop.example.com".into(),
            root_path: "/content/shop".into(),
            language: Language::new("en"),
        },
    ]
}

/// The `website` site rooted at `/content/home`.
pub fn site(hostname: &str) -> SiteContext {
    SiteContext {
        name: "website".into(),
        hostname: hostname.into(),
        root_path: "/content/home".into(),
        language: Language::new("en"),
    }
}

pub fn item(path: &str, languages: &[&str]) -> ContentItem {
    ContentItem {
        id: Uuid::new_v4(),
        path: path.into(),
        updated: DateTime::<Utc>::UNIX_EPOCH,
        languages: languages.iter().map(|tag| Language::new(tag)).collect(),
        seo: SeoFields::default(),
    }
}

/// Resolver answering from a fixed table.
pub struct FixedLinks {
    links: FxHashMap<String, String>,
    fallback: Option<String>,
}

impl FixedLinks {
    pub fn new<const N: usize>(links: [(&str, &str); N]) -> Self {
        Self {
            links: links
                .into_iter()
                .map(|(path, link)| (path.to_string(), link.to_string()))
                .collect(),
            fallback: None,
        }
    }

    /// Every item resolves to `link`.
    pub fn single(link: &str) -> Self {
        Self {
            links: FxHashMap::default(),
            fallback: Some(link.to_string()),
        }
    }
}

impl LinkResolver for FixedLinks {
    fn resolve(&self, item: &ContentItem, _options: &UrlOptions<'_>) -> Result<String, ResolveError> {
        self.links
            .get(&item.path)
            .or(self.fallback.as_ref())
            .cloned()
            .ok_or_else(|| ResolveError::new(item, "no fixture link"))
    }
}

/// Same sitemap settings for every site.
pub struct Settings(SitemapSettings);

impl Settings {
    pub fn with_server_url(server_url: &str) -> Self {
        Self(SitemapSettings {
            server_url: server_url.into(),
            ..Default::default()
        })
    }

    pub fn cleanup(mut self, cleanup: bool) -> Self {
        self.0.cleanup_bucket_path = cleanup;
        self
    }

    pub fn offset(mut self, offset: &str) -> Self {
        self.0.offset = Some(offset.into());
        self
    }
}

impl SiteSettingsProvider for Settings {
    fn sitemap_settings(&self, _site: &str) -> Cow<'_, SitemapSettings> {
        Cow::Borrowed(&self.0)
    }
}

/// Locator that finds nothing.
pub struct NoLocations;

impl ContentLocator for NoLocations {
    fn content_ancestor(&self, _item: &ContentItem) -> Option<&ContentItem> {
        None
    }

    fn shared_parent(&self, _item: &ContentItem) -> Option<&ContentItem> {
        None
    }
}
