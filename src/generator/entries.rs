//! JSON rendering of sitemap entries.
//!
//! The XML envelope is produced downstream; this is the hand-off format.
//!
//! ```json
//! {
//!   "site": "website",
//!   "count": 1,
//!   "entries": [
//!     {
//!       "location": "https://www.site.com/about",
//!       "last_modified": "2024-03-01T12:30:00+02:00",
//!       "change_frequency": "monthly",
//!       "priority": "0.5",
//!       "id": "00000000-0000-4000-8000-000000000002",
//!       "title": "About",
//!       "alternates": [{ "href": "https://www.site.com/en/about", "language_tag": "en" }]
//!     }
//!   ]
//! }
//! ```

use anyhow::{Context, Result};
use serde::Serialize;

use crate::sitemap::SitemapEntry;

#[derive(Debug, Serialize)]
struct EntriesDocument<'a> {
    site: &'a str,
    count: usize,
    entries: &'a [SitemapEntry],
}

/// Render the entries of `site` as a JSON document.
pub fn render_entries(site: &str, entries: &[SitemapEntry], pretty: bool) -> Result<String> {
    let document = EntriesDocument {
        site,
        count: entries.len(),
        entries,
    };
    let json = if pretty {
        serde_json::to_string_pretty(&document)
    } else {
        serde_json::to_string(&document)
    };
    json.context("Failed to serialize sitemap entries")
}
