//! Public URLs of items stored in shared (bucket) locations.
//!
//! Two strategies, picked by `sitemap.cleanup_bucket_path`:
//!
//! ```text
//! stored:    https://host/content/data/products/a/b/item
//! parent:    https://host/landing
//! cleanup:   https://host/landing/item        (leaf segment only)
//! no-clean:  https://host/landing/a/b/item    (content root prefix stripped)
//! ```
//!
//! Auto-parent resolution always uses the leaf segment.

use crate::content::{ContentItem, ContentLocator, SiteContext};
use crate::debug;

use super::{CanonicalUrlBuilder, FeedError};

pub struct SharedPathResolver<'a> {
    urls: &'a CanonicalUrlBuilder<'a>,
    locator: &'a dyn ContentLocator,
}

impl<'a> SharedPathResolver<'a> {
    pub fn new(urls: &'a CanonicalUrlBuilder<'a>, locator: &'a dyn ContentLocator) -> Self {
        Self { urls, locator }
    }

    /// URL of `item` published below `parent`.
    ///
    /// `Ok(None)` when the item has no content-root ancestor (or the
    /// ancestor's URL is not a prefix of the item's) and flattening is off.
    /// `Ok(Some(""))` when nothing remains after stripping the prefix.
    pub fn shared_url(
        &self,
        item: &ContentItem,
        site: &SiteContext,
        parent: &ContentItem,
    ) -> Result<Option<String>, FeedError> {
        let item_url = self.urls.build_url(item, site, None)?;
        let parent_url = self.parent_url(parent, site)?;

        if self.urls.settings(site).cleanup_bucket_path {
            return Ok(Some(format!("{parent_url}{}", last_segment(&item_url))));
        }

        let Some(ancestor) = self.locator.content_ancestor(item) else {
            debug!("shared"; "{} has no content root ancestor, skipped", item.path);
            return Ok(None);
        };
        let ancestor_url = self.urls.build_url(ancestor, site, None)?;
        if ancestor_url.trim().is_empty() {
            return Ok(Some(String::new()));
        }

        let Some(remainder) = item_url.strip_prefix(&ancestor_url) else {
            debug!("shared"; "{} is not below {}, skipped", item_url, ancestor_url);
            return Ok(None);
        };
        if remainder.trim().is_empty() {
            return Ok(Some(String::new()));
        }

        Ok(Some(format!("{parent_url}{}", remainder.trim_matches('/'))))
    }

    /// URL of `item` below its discovered shared-location parent.
    ///
    /// Always flattens to the leaf segment, whatever the site's cleanup
    /// setting. `Ok(None)` when the item has no shared parent.
    pub fn auto_shared_url(
        &self,
        item: &ContentItem,
        site: &SiteContext,
    ) -> Result<Option<String>, FeedError> {
        let Some(parent) = self.locator.shared_parent(item) else {
            return Ok(None);
        };

        let item_url = self.urls.build_url(item, site, None)?;
        let parent_url = self.parent_url(parent, site)?;
        Ok(Some(format!("{parent_url}{}", last_segment(&item_url))))
    }

    fn parent_url(&self, parent: &ContentItem, site: &SiteContext) -> Result<String, FeedError> {
        let mut url = self.urls.build_url(parent, site, None)?;
        if !url.ends_with('/') {
            url.push('/');
        }
        Ok(url)
    }
}

/// Everything after the last `/`.
pub fn last_segment(url: &str) -> &str {
    url.rsplit_once('/').map_or(url, |(_, leaf)| leaf)
}
