//! `[sites.<name>.sitemap]` configuration.
//!
//! # Example
//!
//! ```toml
//! [sites.website.sitemap]
//! server_url = "https://www.site.com"   # "", "http://host", "https://host" or "host"
//! cleanup_bucket_path = true            # flatten bucket items to their leaf segment
//! file_names = ["sitemap.xml"]          # advertised in robots.txt
//! robots = ["User-agent: *", "Disallow: /admin"]
//! offset = "+02:00"                     # last-modified timezone (default: local)
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::core::{Scheme, ServerUrl};
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

/// Per-site sitemap settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapSettings {
    /// Absolute server URL used in front of every resolved path.
    pub server_url: String,

    /// Flatten shared items to `parent/leaf` instead of stripping the
    /// content-root prefix.
    pub cleanup_bucket_path: bool,

    /// Sitemap file names advertised in the robots body.
    pub file_names: Vec<String>,

    /// Robots directive lines, emitted before the `Sitemap:` lines.
    pub robots: Vec<String>,

    /// Fixed UTC offset for last-modified timestamps.
    pub offset: Option<String>,
}

impl Default for SitemapSettings {
    fn default() -> Self {
        Self {
            server_url: String::new(),
            cleanup_bucket_path: false,
            file_names: vec!["sitemap.xml".into()],
            robots: vec!["User-agent: *".into()],
            offset: None,
        }
    }
}

impl SitemapSettings {
    /// Parsed form of `server_url`.
    #[inline]
    pub fn server(&self) -> ServerUrl {
        ServerUrl::parse(&self.server_url)
    }

    /// Parsed `offset`, ignoring invalid values (rejected by validation).
    pub fn fixed_offset(&self) -> Option<FixedOffset> {
        self.offset
            .as_deref()
            .and_then(|s| crate::utils::date::parse_offset(s).ok())
    }

    /// Validate sitemap settings of site `site`.
    ///
    /// # Checks
    /// - `server_url` with a scheme must be a valid http(s) URL with a host
    /// - `server_url` must not carry a path, query or fragment
    /// - `file_names` entries must be non-empty `.xml` names
    /// - `offset` must parse as `+HH:MM`
    pub fn validate(&self, site: &str, diag: &mut ConfigDiagnostics) {
        self.validate_server_url(site, diag);

        let field = FieldPath::site(site, "sitemap.file_names");
        for name in &self.file_names {
            if name.trim().is_empty() {
                diag.error(field.clone(), "sitemap file name must not be empty");
            } else if !name.ends_with(".xml") {
                diag.error_with_hint(
                    field.clone(),
                    format!("sitemap file name `{name}` must end in .xml"),
                    "e.g.: \"sitemap.xml\"",
                );
            }
        }

        if let Some(offset) = &self.offset
            && let Err(e) = crate::utils::date::parse_offset(offset)
        {
            diag.error_with_hint(
                FieldPath::site(site, "sitemap.offset"),
                e.to_string(),
                "use format like \"+02:00\" or \"Z\"",
            );
        }
    }

    fn validate_server_url(&self, site: &str, diag: &mut ConfigDiagnostics) {
        let raw = self.server_url.trim();
        if raw.is_empty() {
            return;
        }

        let field = FieldPath::site(site, "sitemap.server_url");
        let with_scheme = if Scheme::strip_prefix(raw).is_some() {
            raw.to_string()
        } else if raw.contains("://") {
            diag.error_with_hint(
                field,
                "scheme not supported, must be http or https",
                "use format like https://example.com",
            );
            return;
        } else {
            format!("http://{raw}")
        };

        match url::Url::parse(&with_scheme) {
            Ok(parsed) => {
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        field.clone(),
                        "server URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
                if parsed.path().trim_matches('/') != ""
                    || parsed.query().is_some()
                    || parsed.fragment().is_some()
                {
                    diag.error_with_hint(
                        field,
                        "server URL must not contain a path, query or fragment",
                        "resolved item paths are appended to the host",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    field,
                    format!("invalid URL: {e}"),
                    "use format like https://example.com",
                );
            }
        }
    }
}
