use thiserror::Error;
use uuid::Uuid;

use crate::content::ResolveError;

/// Errors raised while building feed entries.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("content item {0} not found")]
    ItemNotFound(Uuid),

    /// No server URL, hostname or request to take scheme and host from.
    #[error("no host known for `{path}`: set sitemap.server_url or the site hostname")]
    NoAuthority { path: String },
}
