//! In-memory content tree.
//!
//! Items are loaded from a TOML file of `[[items]]` tables and kept sorted
//! by tree path, so iteration order is stable and parents come before their
//! children.
//!
//! ```toml
//! [[items]]
//! id = "6f1c3a52-0000-4000-8000-000000000001"
//! path = "/content/home"
//! updated = "2024-03-01T10:00:00Z"
//! languages = ["en", "fr"]
//! priority = "1.0"
//! change_frequency = "daily"
//! title = "Home"
//! ```

use std::fs;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::Deserialize;
use uuid::Uuid;

use super::{ContentError, ContentItem, path_contains};
use crate::config::normalize_tree_path;

#[derive(Deserialize)]
struct ContentFile {
    #[serde(default)]
    items: Vec<ContentItem>,
}

/// Content items indexed by id and path.
#[derive(Debug, Default)]
pub struct ContentTree {
    /// Items sorted by path.
    items: Vec<ContentItem>,
    by_id: FxHashMap<Uuid, usize>,
    by_path: FxHashMap<String, usize>,
}

impl ContentTree {
    /// Build a tree, validating ids, paths and languages.
    pub fn new(mut items: Vec<ContentItem>) -> Result<Self, ContentError> {
        for item in &mut items {
            if !item.path.starts_with('/') {
                return Err(ContentError::InvalidPath(item.path.clone()));
            }
            item.path = normalize_tree_path(&item.path);
            if item.languages.is_empty() {
                return Err(ContentError::NoLanguages(item.path.clone()));
            }
        }
        items.sort_by(|a, b| a.path.cmp(&b.path));

        let mut by_id = FxHashMap::default();
        let mut by_path = FxHashMap::default();
        for (idx, item) in items.iter().enumerate() {
            if by_id.insert(item.id, idx).is_some() {
                return Err(ContentError::DuplicateId(item.id));
            }
            if by_path.insert(item.path.clone(), idx).is_some() {
                return Err(ContentError::DuplicatePath(item.path.clone()));
            }
        }

        Ok(Self {
            items,
            by_id,
            by_path,
        })
    }

    /// Parse a content file body.
    pub fn from_toml(content: &str) -> Result<Self, ContentError> {
        let file: ContentFile = toml::from_str(content)?;
        Self::new(file.items)
    }

    /// Load a content file from disk.
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let content =
            fs::read_to_string(path).map_err(|err| ContentError::Io(path.to_path_buf(), err))?;
        Self::from_toml(&content)
    }

    #[inline]
    pub fn get(&self, id: &Uuid) -> Option<&ContentItem> {
        self.by_id.get(id).map(|&idx| &self.items[idx])
    }

    #[inline]
    pub fn by_path(&self, path: &str) -> Option<&ContentItem> {
        self.by_path
            .get(&normalize_tree_path(path))
            .map(|&idx| &self.items[idx])
    }

    pub fn parent_of(&self, item: &ContentItem) -> Option<&ContentItem> {
        item.parent_path().and_then(|path| self.by_path(path))
    }

    /// Ancestors present in the tree, nearest first.
    pub fn ancestors<'a>(
        &'a self,
        item: &ContentItem,
    ) -> impl Iterator<Item = &'a ContentItem> + use<'a> {
        std::iter::successors(self.parent_of(item), move |it| self.parent_of(it))
    }

    /// Items strictly below `path`, in path order.
    pub fn descendants<'a>(&'a self, path: &str) -> impl Iterator<Item = &'a ContentItem> + use<'a> {
        let root = normalize_tree_path(path);
        self.items
            .iter()
            .filter(move |it| it.path != root && path_contains(&root, &it.path))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ContentItem> {
        self.items.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
