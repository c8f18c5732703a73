//! `[rendering]` section configuration.

use serde::{Deserialize, Serialize};

/// Global link rendering settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Resolve links to items of other sites against the owning site.
    pub site_resolving: bool,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            site_resolving: true,
        }
    }
}
