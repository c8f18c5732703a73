//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;
use uuid::Uuid;

/// Sitemap entry and robots feed generator
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Content file path (relative to the config file)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub content: Option<PathBuf>,

    /// Config file path (default: sitefeed.toml)
    #[arg(short = 'C', long, default_value = "sitefeed.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the sitemap entries of a site as JSON
    #[command(visible_alias = "e")]
    Entries {
        #[command(flatten)]
        args: SiteArgs,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,

        /// List bucket items below their discovered shared parents
        #[arg(short, long, conflicts_with = "item")]
        auto_shared: bool,

        /// Only the entry of this item id
        #[arg(short, long)]
        item: Option<Uuid>,

        /// Write output to file instead of stdout
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// Print the robots body of a site
    #[command(visible_alias = "r")]
    Robots {
        #[command(flatten)]
        args: SiteArgs,
    },

    /// Serve robots and sitemap entries over HTTP
    #[command(visible_alias = "s")]
    Serve {
        /// Network interface to bind (e.g., 127.0.0.1, 0.0.0.0)
        #[arg(short, long)]
        interface: Option<std::net::IpAddr>,

        /// Port number to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Validate config and content without generating anything
    Check,
}

/// Arguments shared by commands that render one site.
#[derive(clap::Args, Debug, Clone)]
pub struct SiteArgs {
    /// Site name as configured under [sites.<name>]
    pub site: String,

    /// Override the site's sitemap server URL.
    ///
    /// Example: preview a production feed locally:
    ///   sitefeed entries website --server-url "https://www.site.com"
    #[arg(short = 'U', long = "server-url", value_hint = clap::ValueHint::Url)]
    pub server_url: Option<String>,

    /// Override the last-modified offset (e.g. +02:00, Z)
    #[arg(long)]
    pub offset: Option<String>,

    /// Host used when the site has no server URL or hostname
    #[arg(short = 'H', long)]
    pub request_host: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("sitefeed").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_entries_args() {
        let cli = parse(&[
            "-C",
            "feeds.toml",
            "entries",
            "website",
            "--pretty",
            "-U",
            "https://www.site.com",
            "-v",
        ]);
        assert_eq!(cli.config, PathBuf::from("feeds.toml"));
        assert!(cli.verbose);
        let Commands::Entries { args, pretty, auto_shared, item, .. } = cli.command else {
            panic!("expected entries");
        };
        assert_eq!(args.site, "website");
        assert_eq!(args.server_url.as_deref(), Some("https://www.site.com"));
        assert!(pretty);
        assert!(!auto_shared);
        assert!(item.is_none());
    }

    #[test]
    fn test_entries_item() {
        let cli = parse(&[
            "entries",
            "website",
            "--item",
            "00000000-0000-4000-8000-000000000002",
        ]);
        let Commands::Entries { item, .. } = cli.command else {
            panic!("expected entries");
        };
        assert_eq!(item, Some(Uuid::from_u128(0x0000_0000_0000_4000_8000_0000_0000_0002)));
    }

    #[test]
    fn test_auto_shared_conflicts_with_item() {
        let result = Cli::try_parse_from([
            "sitefeed",
            "entries",
            "website",
            "--auto-shared",
            "--item",
            "00000000-0000-4000-8000-000000000002",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_serve_args() {
        let cli = parse(&["serve", "--port", "8080"]);
        let Commands::Serve { interface, port } = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(port, Some(8080));
        assert!(interface.is_none());
    }

    #[test]
    fn test_robots_request_host() {
        let cli = parse(&["robots", "website", "-H", "localhost:5277"]);
        let Commands::Robots { args } = cli.command else {
            panic!("expected robots");
        };
        assert_eq!(args.request_host.as_deref(), Some("localhost:5277"));
    }
}
