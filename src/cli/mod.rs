//! Command-line interface module.

mod args;
pub mod check;
pub mod entries;
pub mod robots;
pub mod serve;

pub use args::{Cli, Commands};

use anyhow::{Context, Result};

use crate::config::FeedConfig;
use crate::content::ContentTree;
use crate::{debug, log};

/// Load the content file named by the config.
pub fn load_content(config: &FeedConfig) -> Result<ContentTree> {
    let tree = ContentTree::load(&config.content)
        .with_context(|| format!("Failed to load content from {}", config.content.display()))?;
    if tree.is_empty() {
        log!("warning"; "content file {} has no items", config.content.display());
    }
    debug!("content"; "{} items from {}", tree.len(), config.content.display());
    Ok(tree)
}
