//! Core types - pure abstractions shared across the codebase.

mod link;
mod url;

pub use link::ResolvedLink;
pub use self::url::{Authority, Scheme, ServerUrl};
