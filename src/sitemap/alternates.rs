//! Localized alternates (`hreflang` links) of an entry.

use serde::Serialize;

use crate::content::{ContentItem, SiteContext};
use crate::utils::html;

use super::{CanonicalUrlBuilder, FeedError};

/// One language variant of an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalizedAlternate {
    /// Absolute URL, HTML-escaped.
    pub href: String,
    /// Two-letter ISO language code.
    pub language_tag: String,
}

/// One alternate per language of `item`, in the item's language order.
///
/// With `shared_location` (the entry's own location when it is published
/// below a shared parent) every alternate points at that single URL.
pub fn localized_alternates(
    urls: &CanonicalUrlBuilder<'_>,
    item: &ContentItem,
    site: &SiteContext,
    shared_location: Option<&str>,
) -> Result<Vec<LocalizedAlternate>, FeedError> {
    item.languages
        .iter()
        .map(|language| {
            let href = match shared_location {
                Some(location) => location.to_string(),
                None => urls.build_url(item, site, Some(language))?,
            };
            Ok(LocalizedAlternate {
                href: html::escape_owned(&href),
                language_tag: language.two_letter_code(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderingConfig;
    use crate::content::TreeLinkResolver;
    use crate::test_support::{Settings, fixture_sites, item, site};

    #[test]
    fn test_one_per_language() {
        let links = TreeLinkResolver::new(fixture_sites());
        let settings = Settings::with_server_url("https://www.site.com");
        let urls = CanonicalUrlBuilder::new(&links, &settings, RenderingConfig::default());
        let it = item("/content/home/products/item1", &["en", "fr-FR"]);

        let alternates = localized_alternates(&urls, &it, &site(""), None).unwrap();
        assert_eq!(
            alternates,
            [
                LocalizedAlternate {
                    href: "https://www.site.com/en/products/item1".into(),
                    language_tag: "en".into(),
                },
                LocalizedAlternate {
                    href: "https://www.site.com/fr-fr/products/item1".into(),
                    language_tag: "fr".into(),
                },
            ]
        );
    }

    #[test]
    fn test_shared_location_collapses() {
        let links = TreeLinkResolver::new(fixture_sites());
        let settings = Settings::with_server_url("https://www.site.com");
        let urls = CanonicalUrlBuilder::new(&links, &settings, RenderingConfig::default());
        let it = item("/content/data/products/a/b/item", &["en", "fr", "de"]);

        let alternates = localized_alternates(
            &urls,
            &it,
            &site(""),
            Some("https://www.site.com/landing/item?a&b"),
        )
        .unwrap();
        assert_eq!(alternates.len(), 3);
        assert!(
            alternates
                .iter()
                .all(|alt| alt.href == "https://www.site.com/landing/item?a&amp;b")
        );
        let tags: Vec<_> = alternates.iter().map(|alt| alt.language_tag.as_str()).collect();
        assert_eq!(tags, ["en", "fr", "de"]);
    }
}
