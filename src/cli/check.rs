//! `check` command: validate config and content.
//!
//! Config diagnostics are already reported while loading; this adds the
//! content file and the shared definitions that point into it.

use anyhow::{Result, bail};
use owo_colors::OwoColorize;

use crate::config::{ConfigDiagnostics, FeedConfig, FieldPath};
use crate::content::{ContentTree, SharedLocations};
use crate::log;
use crate::utils::plural_count;

/// Execute the check command.
pub fn run_check(config: &FeedConfig) -> Result<()> {
    let tree = super::load_content(config)?;
    let diag = check_content(config, &tree);
    diag.print_warnings();

    if diag.has_errors() {
        eprintln!("{}", diag);
        bail!("check failed with {}", plural_count(diag.len(), "error"));
    }

    for (name, section) in &config.sites {
        let locations = SharedLocations::new(&tree, &section.shared);
        let published = tree
            .iter()
            .filter(|item| item.is_under(&section.root) && !item.seo.exclude)
            .count();
        let shared = tree.iter().filter(|item| locations.is_shared(item)).count();
        log!(
            "check";
            "{}: {}, {} in shared locations",
            name.bold(),
            plural_count(published, "item"),
            shared
        );
    }
    log!("check"; "ok");
    Ok(())
}

/// Cross-check site definitions against the content tree.
fn check_content(config: &FeedConfig, tree: &ContentTree) -> ConfigDiagnostics {
    let mut diag = ConfigDiagnostics::new();

    for (name, section) in &config.sites {
        if tree.by_path(&section.root).is_none() {
            diag.error(
                FieldPath::site(name, "root"),
                format!("root item `{}` not found in content", section.root),
            );
        }

        for (i, shared) in section.shared.iter().enumerate() {
            let field = FieldPath::site(name, &format!("shared[{i}]"));
            if tree.by_path(&shared.parent).is_none() {
                diag.error(
                    field.clone(),
                    format!("parent `{}` not found in content", shared.parent),
                );
            }
            if tree.by_path(&shared.content_root).is_none() {
                diag.warn(
                    field.clone(),
                    format!(
                        "content_root `{}` not found; entries need cleanup_bucket_path",
                        shared.content_root
                    ),
                );
            }
            if tree.descendants(&shared.content_root).next().is_none() {
                diag.warn(
                    field,
                    format!("content_root `{}` stores no items", shared.content_root),
                );
            }
        }
    }

    diag
}
