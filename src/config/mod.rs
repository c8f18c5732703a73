//! Feed configuration management for `sitefeed.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── rendering  # [rendering]
//! │   ├── serve      # [serve]
//! │   ├── site       # [sites.<name>], [[sites.<name>.shared]]
//! │   └── sitemap    # [sites.<name>.sitemap]
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! └── mod.rs         # FeedConfig (this file)
//! ```
//!
//! # Example
//!
//! ```toml
//! content = "content.toml"
//!
//! [rendering]
//! site_resolving = true
//!
//! [sites.website]
//! root = "/content/home"
//! hostname = "www.site.com"
//!
//! [sites.website.sitemap]
//! server_url = "https://www.site.com"
//! cleanup_bucket_path = true
//! ```

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{
    RenderingConfig, ServeConfig, SharedDefinition, SiteSection, SitemapSettings,
    normalize_tree_path,
};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{Cli, Commands},
    content::SiteContext,
    debug_do, log,
};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    borrow::Cow,
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

/// Sitemap settings of sites that have no `[sites.<name>.sitemap]` table.
static DEFAULT_SITEMAP: LazyLock<SitemapSettings> = LazyLock::new(SitemapSettings::default);

// ============================================================================
// provider seam
// ============================================================================

/// Read-only source of per-site sitemap settings.
pub trait SiteSettingsProvider {
    /// Settings of `site`; unknown sites get the defaults.
    fn sitemap_settings(&self, site: &str) -> Cow<'_, SitemapSettings>;
}

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing sitefeed.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Directory containing the config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Content tree file (relative to the config file).
    pub content: PathBuf,

    /// Global link rendering settings.
    pub rendering: RenderingConfig,

    /// Feed server settings.
    pub serve: ServeConfig,

    /// Site definitions by name.
    pub sites: BTreeMap<String, SiteSection>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            content: PathBuf::from("content.toml"),
            rendering: RenderingConfig::default(),
            serve: ServeConfig::default(),
            sites: BTreeMap::new(),
        }
    }
}

impl SiteSettingsProvider for FeedConfig {
    fn sitemap_settings(&self, site: &str) -> Cow<'_, SitemapSettings> {
        match self.sites.get(site) {
            Some(section) => Cow::Borrowed(&section.sitemap),
            None => Cow::Borrowed(&*DEFAULT_SITEMAP),
        }
    }
}

impl FeedConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd to find the config file; the directory
    /// holding it becomes the root for relative paths.
    pub fn load(cli: &Cli) -> Result<Self> {
        let Some(config_path) = find_config_file(&cli.config) else {
            bail!(ConfigError::Validation(format!(
                "config file '{}' not found",
                cli.config.display()
            )));
        };

        let mut config = Self::from_path(&config_path)?;
        config.config_path = config_path;
        config.finalize(cli);
        config.validate()?;

        debug_do! {
            for site in config.site_contexts() {
                log!("config"; "site {} at {} (host: {:?})", site.name, site.root_path, site.hostname);
            }
        }
        Ok(config)
    }

    /// Finalize configuration after loading.
    fn finalize(&mut self, cli: &Cli) {
        self.root = self
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        if let Some(content) = &cli.content {
            self.content = content.clone();
        }
        self.content = self.root.join(&self.content);

        self.apply_command_options(&cli.command);
    }

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, command: &Commands) {
        match command {
            Commands::Entries { args, .. } | Commands::Robots { args } => {
                if let Some(section) = self.sites.get_mut(&args.site) {
                    Self::update_option(&mut section.sitemap.server_url, args.server_url.as_ref());
                    if args.offset.is_some() {
                        section.sitemap.offset = args.offset.clone();
                    }
                }
            }
            Commands::Serve { interface, port } => {
                Self::update_option(&mut self.serve.interface, interface.as_ref());
                Self::update_option(&mut self.serve.port, port.as_ref());
            }
            Commands::Check => {}
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    // ========================================================================
    // site lookups
    // ========================================================================

    /// Site definition by name.
    pub fn site(&self, name: &str) -> Option<&SiteSection> {
        self.sites.get(name)
    }

    /// Site definition by name, failing with the list of known sites.
    pub fn require_site(&self, name: &str) -> Result<&SiteSection> {
        self.site(name).with_context(|| {
            let known: Vec<&str> = self.sites.keys().map(String::as_str).collect();
            format!("unknown site `{name}` (configured: {})", known.join(", "))
        })
    }

    /// Site context of a configured site.
    pub fn site_context(&self, name: &str) -> Option<SiteContext> {
        self.site(name).map(|section| section.context(name))
    }

    /// Contexts of all configured sites, ordered by name.
    pub fn site_contexts(&self) -> Vec<SiteContext> {
        self.sites
            .iter()
            .map(|(name, section)| section.context(name))
            .collect()
    }

    /// Site answering a request for `host`.
    ///
    /// Matches the configured hostname or server URL host (port ignored),
    /// then falls back to `serve.default_site`, then to the first site.
    pub fn site_for_host(&self, host: Option<&str>) -> Option<SiteContext> {
        if let Some(host) = host {
            let host = host.split(':').next().unwrap_or(host);
            let matched = self.sites.iter().find(|(_, section)| {
                section.hostname.eq_ignore_ascii_case(host)
                    || section.sitemap.server().host.eq_ignore_ascii_case(host)
            });
            if let Some((name, section)) = matched {
                return Some(section.context(name));
            }
        }

        self.serve
            .default_site
            .as_deref()
            .and_then(|name| self.site_context(name))
            .or_else(|| self.site_contexts().into_iter().next())
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let diag = self.diagnostics();
        diag.print_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Run all checks without printing.
    pub fn diagnostics(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        if self.sites.is_empty() {
            diag.error_with_hint(
                FieldPath::new("sites"),
                "no sites configured",
                "add a [sites.<name>] table",
            );
        }

        for (name, section) in &self.sites {
            section.validate(name, &mut diag);
        }

        if let Some(default_site) = &self.serve.default_site
            && !self.sites.contains_key(default_site)
        {
            diag.error(
                FieldPath::new("serve.default_site"),
                format!("default site `{default_site}` is not configured"),
            );
        }

        diag
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with a minimal `[sites.website]` table prepended.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> FeedConfig {
    let config = format!("[sites.website]\nroot = \"/content/home\"\n{extra}");
    let (parsed, ignored) = FeedConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
