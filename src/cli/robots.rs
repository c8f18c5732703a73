//! `robots` command: robots body of one site on stdout.

use anyhow::Result;

use crate::cli::args::SiteArgs;
use crate::config::FeedConfig;
use crate::content::{ContentTree, RequestContext};
use crate::generator::FeedGenerator;

/// Execute the robots command.
///
/// The robots body does not depend on content, so no content file is read.
pub fn run_robots(args: &SiteArgs, config: &FeedConfig) -> Result<()> {
    let tree = ContentTree::default();
    let request = args
        .request_host
        .as_deref()
        .and_then(RequestContext::from_host);

    let body = FeedGenerator::new(config, &tree).robots(&args.site, request.as_ref())?;
    print!("{body}");
    Ok(())
}
