//! Shared (bucket) location lookups.
//!
//! Items physically stored below a shared definition's `content_root` are
//! published below its `parent`:
//!
//! ```text
//! /content/data/products/          ← content_root (bucket)
//! /content/data/products/a/b/item  ← stored here
//! /content/home/landing            ← parent, item is published below it
//! ```

use super::{ContentItem, ContentTree, path_contains};
use crate::config::{SharedDefinition, normalize_tree_path};

/// Tree traversals used by shared-path resolution.
pub trait ContentLocator {
    /// Nearest ancestor of `item` that is a designated content root.
    fn content_ancestor(&self, item: &ContentItem) -> Option<&ContentItem>;

    /// Public parent of the bucket that stores `item`.
    fn shared_parent(&self, item: &ContentItem) -> Option<&ContentItem>;
}

/// [`ContentLocator`] over a site's `[[shared]]` definitions.
#[derive(Debug, Clone, Copy)]
pub struct SharedLocations<'a> {
    tree: &'a ContentTree,
    definitions: &'a [SharedDefinition],
}

impl<'a> SharedLocations<'a> {
    pub fn new(tree: &'a ContentTree, definitions: &'a [SharedDefinition]) -> Self {
        Self { tree, definitions }
    }

    /// The deepest bucket strictly containing `item`.
    pub fn bucket_of(&self, item: &ContentItem) -> Option<&'a SharedDefinition> {
        self.definitions
            .iter()
            .filter(|def| {
                let root = normalize_tree_path(&def.content_root);
                item.path != root && path_contains(&root, &item.path)
            })
            .max_by_key(|def| def.content_root.trim_end_matches('/').len())
    }

    /// Whether `item` is stored in a bucket.
    #[inline]
    pub fn is_shared(&self, item: &ContentItem) -> bool {
        self.bucket_of(item).is_some()
    }

    /// Whether `item` is a bucket folder itself.
    pub fn is_bucket_root(&self, item: &ContentItem) -> bool {
        self.definitions
            .iter()
            .any(|def| normalize_tree_path(&def.content_root) == item.path)
    }
}

impl ContentLocator for SharedLocations<'_> {
    fn content_ancestor(&self, item: &ContentItem) -> Option<&ContentItem> {
        self.tree
            .ancestors(item)
            .find(|ancestor| self.is_bucket_root(ancestor))
    }

    fn shared_parent(&self, item: &ContentItem) -> Option<&ContentItem> {
        let def = self.bucket_of(item)?;
        self.tree.by_path(&def.parent)
    }
}
