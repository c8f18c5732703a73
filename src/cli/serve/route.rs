//! Request path routing.

use crate::config::SitemapSettings;

/// Robots file name detected in request paths.
pub const ROBOTS_FILE: &str = "robots.txt";

/// What a request path asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Robots,
    Entries,
    NotFound,
}

/// Route a request URL (path plus optional query) for a site.
///
/// Any path containing the robots file name is a robots request. A path
/// naming one of the site's sitemap files returns its entries.
pub fn route(url: &str, settings: &SitemapSettings) -> Route {
    let path = url.split(['?', '#']).next().unwrap_or_default();

    if path.contains(ROBOTS_FILE) {
        return Route::Robots;
    }

    let file = path.trim_start_matches('/');
    if !file.is_empty()
        && settings
            .file_names
            .iter()
            .any(|name| name.trim_start_matches('/') == file)
    {
        return Route::Entries;
    }

    Route::NotFound
}
