//! Robots body generation.
//!
//! ```text
//! User-agent: *
//! Disallow: /admin
//! Sitemap: https://www.site.com/sitemap.xml
//! ```

use crate::config::SitemapSettings;
use crate::content::SiteContext;
use crate::sitemap::{CanonicalUrlBuilder, FeedError};

/// Configured rule lines followed by one `Sitemap:` line per sitemap file.
pub fn robots_body(
    site: &SiteContext,
    settings: &SitemapSettings,
    urls: &CanonicalUrlBuilder<'_>,
) -> Result<String, FeedError> {
    let base = urls.site_root(site)?;

    let mut body = String::with_capacity(256);
    for line in &settings.robots {
        body.push_str(line.trim_end());
        body.push('\n');
    }
    for name in &settings.file_names {
        body.push_str("Sitemap: ");
        body.push_str(&base);
        body.push('/');
        body.push_str(name.trim_start_matches('/'));
        body.push('\n');
    }
    Ok(body)
}
