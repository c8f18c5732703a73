//! Feed assembly over a content tree.
//!
//! - items below the site root produce plain entries
//! - items stored in a bucket produce entries below the bucket's parent
//! - excluded items, bucket folders and suppressed entries are skipped

use uuid::Uuid;

use crate::content::{ContentItem, ContentLocator, ContentTree, SharedLocations, SiteContext};
use crate::debug;

use super::{CanonicalUrlBuilder, EntryFactory, FeedError, SitemapEntry};

/// Sitemap feed of one site.
pub struct Feed<'a> {
    tree: &'a ContentTree,
    site: &'a SiteContext,
    locations: &'a SharedLocations<'a>,
    factory: EntryFactory<'a>,
}

impl<'a> Feed<'a> {
    pub fn new(
        tree: &'a ContentTree,
        site: &'a SiteContext,
        urls: &'a CanonicalUrlBuilder<'a>,
        locations: &'a SharedLocations<'a>,
    ) -> Self {
        Self {
            tree,
            site,
            locations,
            factory: EntryFactory::new(urls, locations),
        }
    }

    /// All entries of the site, in tree path order.
    pub fn entries(&self) -> Result<Vec<SitemapEntry>, FeedError> {
        let mut entries = Vec::new();
        for item in self.tree.iter() {
            if let Some(entry) = self.entry_for(item)? {
                entries.push(entry);
            }
        }
        debug!("feed"; "{} entries for site {}", entries.len(), self.site.name);
        Ok(entries)
    }

    /// Entries of bucket items below their discovered shared parents.
    pub fn auto_shared_entries(&self) -> Result<Vec<SitemapEntry>, FeedError> {
        let mut entries = Vec::new();
        for item in self.tree.iter().filter(|it| self.locations.is_shared(it)) {
            if item.seo.exclude {
                continue;
            }
            if let Some(entry) = self.factory.build_auto_shared_entry(item, self.site)? {
                entries.push(entry);
            }
        }
        Ok(entries)
    }

    /// Entry of the item with `id`, `Ok(None)` when it is not published.
    pub fn entry(&self, id: &Uuid) -> Result<Option<SitemapEntry>, FeedError> {
        let item = self.tree.get(id).ok_or(FeedError::ItemNotFound(*id))?;
        self.entry_for(item)
    }

    fn entry_for(&self, item: &ContentItem) -> Result<Option<SitemapEntry>, FeedError> {
        if item.seo.exclude || self.locations.is_bucket_root(item) {
            return Ok(None);
        }

        if self.locations.is_shared(item) {
            let Some(parent) = self.locations.shared_parent(item) else {
                debug!("feed"; "{} has no shared parent in the tree", item.path);
                return Ok(None);
            };
            if !parent.is_under(&self.site.root_path) {
                return Ok(None);
            }
            let entry = self.factory.build_entry(item, self.site, Some(parent))?;
            if entry.is_none() {
                debug!("feed"; "{} suppressed", item.path);
            }
            return Ok(entry);
        }

        if !item.is_under(&self.site.root_path) {
            return Ok(None);
        }
        self.factory.build_entry(item, self.site, None)
    }
}
