//! Canonical URL resolution and sitemap entry construction.
//!
//! ```text
//! Feed ──► EntryFactory ──► CanonicalUrlBuilder ──► LinkResolver
//!               │                  ▲                  SiteSettingsProvider
//!               ├──► SharedPathResolver ──► ContentLocator
//!               └──► localized_alternates
//! ```
//!
//! Everything here is a pure function of its explicit inputs: the site,
//! the settings provider, and an optional request context.

mod alternates;
mod canonical;
mod entry;
mod error;
mod feed;
mod shared;

pub use alternates::{LocalizedAlternate, localized_alternates};
pub use canonical::CanonicalUrlBuilder;
pub use entry::{EntryFactory, SitemapEntry};
pub use error::FeedError;
pub use feed::Feed;
pub use shared::SharedPathResolver;
