//! Sitemap entry construction.

use serde::Serialize;
use uuid::Uuid;

use crate::content::{ContentItem, ContentLocator, SiteContext};
use crate::utils::{date, html};

use super::{
    CanonicalUrlBuilder, FeedError, LocalizedAlternate, SharedPathResolver, localized_alternates,
};

/// One feed record, ready for an XML serializer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SitemapEntry {
    /// Canonical absolute URL, HTML-escaped.
    pub location: String,
    /// `YYYY-MM-DDTHH:MM:SS+HH:MM`, HTML-escaped.
    pub last_modified: String,
    pub change_frequency: String,
    pub priority: String,
    pub id: Uuid,
    pub title: String,
    pub alternates: Vec<LocalizedAlternate>,
}

/// Builds [`SitemapEntry`] values for one request.
pub struct EntryFactory<'a> {
    urls: &'a CanonicalUrlBuilder<'a>,
    shared: SharedPathResolver<'a>,
}

impl<'a> EntryFactory<'a> {
    pub fn new(urls: &'a CanonicalUrlBuilder<'a>, locator: &'a dyn ContentLocator) -> Self {
        Self {
            urls,
            shared: SharedPathResolver::new(urls, locator),
        }
    }

    /// Entry for `item`, published below `parent` when given.
    ///
    /// Returns `Ok(None)` when the shared location cannot be determined or
    /// is blank; such an entry is left out of the feed.
    pub fn build_entry(
        &self,
        item: &ContentItem,
        site: &SiteContext,
        parent: Option<&ContentItem>,
    ) -> Result<Option<SitemapEntry>, FeedError> {
        let location = match parent {
            None => Some(self.urls.build_url(item, site, None)?),
            Some(parent) => self.shared.shared_url(item, site, parent)?,
        };
        self.assemble(item, site, location, parent.is_some())
    }

    /// Entry for a bucket item below its discovered shared parent.
    pub fn build_auto_shared_entry(
        &self,
        item: &ContentItem,
        site: &SiteContext,
    ) -> Result<Option<SitemapEntry>, FeedError> {
        let location = self.shared.auto_shared_url(item, site)?;
        self.assemble(item, site, location, true)
    }

    fn assemble(
        &self,
        item: &ContentItem,
        site: &SiteContext,
        location: Option<String>,
        shared: bool,
    ) -> Result<Option<SitemapEntry>, FeedError> {
        let Some(location) = location.filter(|location| !location.trim().is_empty()) else {
            return Ok(None);
        };

        let alternates =
            localized_alternates(self.urls, item, site, shared.then_some(location.as_str()))?;
        let offset = self.urls.settings(site).fixed_offset();

        Ok(Some(SitemapEntry {
            location: html::escape_owned(&location),
            last_modified: html::escape_owned(&date::format_last_modified(&item.updated, offset)),
            change_frequency: item.seo.change_frequency.to_lowercase(),
            priority: item.seo.priority.clone(),
            id: item.id,
            title: item.seo.title.clone(),
            alternates,
        }))
    }
}
