//! Configuration section definitions.
//!
//! Each module corresponds to a section in `sitefeed.toml`:
//!
//! | Module      | TOML Section               | Purpose                        |
//! |-------------|----------------------------|--------------------------------|
//! | `rendering` | `[rendering]`              | Global link rendering          |
//! | `serve`     | `[serve]`                  | Feed server                    |
//! | `site`      | `[sites.<name>]`           | Site definition, shared paths  |
//! | `sitemap`   | `[sites.<name>.sitemap]`   | Server URL, bucket cleanup     |

mod rendering;
mod serve;
mod site;
mod sitemap;

pub use rendering::RenderingConfig;
pub use serve::ServeConfig;
pub use site::{SharedDefinition, SiteSection, normalize_tree_path};
pub use sitemap::SitemapSettings;
