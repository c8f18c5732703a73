//! Content tree and the collaborators the sitemap core resolves through.
//!
//! - [`ContentTree`]: items loaded from the content file
//! - [`LinkResolver`]: item → site-relative path ([`TreeLinkResolver`])
//! - [`ContentLocator`]: bucket traversals ([`SharedLocations`])

mod error;
mod item;
mod locate;
mod resolver;
mod site;
mod tree;

pub use error::ContentError;
pub use item::{ContentItem, Language, SeoFields, path_contains};
pub use locate::{ContentLocator, SharedLocations};
pub use resolver::{LinkResolver, ResolveError, TreeLinkResolver, UrlOptions};
pub use site::{RequestContext, SiteContext};
pub use tree::ContentTree;
