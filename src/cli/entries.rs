//! `entries` command: sitemap entries of one site as JSON.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::cli::args::SiteArgs;
use crate::config::FeedConfig;
use crate::content::{ContentTree, RequestContext};
use crate::generator::{EntriesMode, FeedGenerator, entries::render_entries};
use crate::log;
use crate::utils::plural_count;

/// Options of one `entries` run.
pub struct EntriesOptions<'a> {
    pub args: &'a SiteArgs,
    pub pretty: bool,
    pub mode: EntriesMode,
    pub output: Option<&'a PathBuf>,
}

/// Execute the entries command.
pub fn run_entries(options: &EntriesOptions<'_>, config: &FeedConfig) -> Result<()> {
    let tree = super::load_content(config)?;
    let json = render_site_entries(options, config, &tree)?;

    if let Some(path) = options.output {
        let mut file = fs::File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        writeln!(file, "{json}")?;
        log!("entries"; "wrote output to {}", path.display());
    } else {
        println!("{json}");
    }
    Ok(())
}

fn render_site_entries(
    options: &EntriesOptions<'_>,
    config: &FeedConfig,
    tree: &ContentTree,
) -> Result<String> {
    let request = options
        .args
        .request_host
        .as_deref()
        .and_then(RequestContext::from_host);

    let generator = FeedGenerator::new(config, tree);
    let entries = generator.entries(&options.args.site, request.as_ref(), options.mode)?;
    log!("entries"; "{} for site {}", plural_count(entries.len(), "entry"), options.args.site);

    render_entries(&options.args.site, &entries, options.pretty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::test_support::fixture_tree;

    fn site_args(request_host: Option<&str>) -> SiteArgs {
        SiteArgs {
            site: "website".into(),
            server_url: None,
            offset: None,
            request_host: request_host.map(Into::into),
        }
    }

    #[test]
    fn test_render_with_request_host() {
        let config = test_parse_config("");
        let tree = fixture_tree();
        let args = site_args(Some("https://preview.site.com"));
        let options = EntriesOptions {
            args: &args,
            pretty: false,
            mode: EntriesMode::All,
            output: None,
        };

        let json = render_site_entries(&options, &config, &tree).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["site"], "website");
        assert_eq!(value["entries"][0]["location"], "https://preview.site.com/");
    }

    #[test]
    fn test_render_without_any_host_fails() {
        let config = test_parse_config("");
        let tree = fixture_tree();
        let args = site_args(None);
        let options = EntriesOptions {
            args: &args,
            pretty: false,
            mode: EntriesMode::All,
            output: None,
        };
        assert!(render_site_entries(&options, &config, &tree).is_err());
    }
}
