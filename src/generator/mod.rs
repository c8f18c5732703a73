//! Feed outputs for one configured site.
//!
//! - **Entries**: sitemap entries as JSON for the XML serializer
//! - **Robots**: plain-text robots body advertising the sitemap files
//!
//! Both are built from the loaded [`FeedConfig`] and [`ContentTree`] on
//! demand; nothing is cached between requests.

pub mod entries;
pub mod robots;

use anyhow::{Context, Result};
use uuid::Uuid;

use crate::config::FeedConfig;
use crate::content::{ContentTree, RequestContext, SharedLocations, TreeLinkResolver};
use crate::sitemap::{CanonicalUrlBuilder, Feed, SitemapEntry};

/// Which entries to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntriesMode {
    /// Every published item of the site.
    All,
    /// Bucket items below their discovered shared parents.
    AutoShared,
    /// A single item.
    Item(Uuid),
}

/// Builds feed outputs over a loaded config and content tree.
pub struct FeedGenerator<'a> {
    config: &'a FeedConfig,
    tree: &'a ContentTree,
    links: TreeLinkResolver,
}

impl<'a> FeedGenerator<'a> {
    pub fn new(config: &'a FeedConfig, tree: &'a ContentTree) -> Self {
        Self {
            config,
            tree,
            links: TreeLinkResolver::new(config.site_contexts()),
        }
    }

    /// Sitemap entries of `site`.
    pub fn entries(
        &self,
        site: &str,
        request: Option<&RequestContext>,
        mode: EntriesMode,
    ) -> Result<Vec<SitemapEntry>> {
        let section = self.config.require_site(site)?;
        let context = section.context(site);
        let urls = self.url_builder(request);
        let locations = SharedLocations::new(self.tree, &section.shared);
        let feed = Feed::new(self.tree, &context, &urls, &locations);

        let entries = match mode {
            EntriesMode::All => feed.entries()?,
            EntriesMode::AutoShared => feed.auto_shared_entries()?,
            EntriesMode::Item(id) => feed.entry(&id)?.into_iter().collect(),
        };
        Ok(entries)
    }

    /// Robots body of `site`.
    pub fn robots(&self, site: &str, request: Option<&RequestContext>) -> Result<String> {
        let section = self.config.require_site(site)?;
        let context = section.context(site);
        let urls = self.url_builder(request);
        robots::robots_body(&context, &section.sitemap, &urls)
            .with_context(|| format!("Failed to build robots body for site `{site}`"))
    }

    fn url_builder<'r>(&'r self, request: Option<&'r RequestContext>) -> CanonicalUrlBuilder<'r> {
        CanonicalUrlBuilder::new(&self.links, self.config, self.config.rendering)
            .with_request(request)
    }
}
