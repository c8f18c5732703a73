//! Feed server.
//!
//! Answers robots and sitemap-entry requests for the configured sites.
//! The site is picked by `Host` header; bodies are built per request from
//! the loaded config and content tree. A failure while building a body is
//! logged and answered with an empty body, never dropped.

mod lifecycle;
mod response;
mod route;

use crate::{
    config::{FeedConfig, SiteSettingsProvider},
    content::{ContentTree, RequestContext},
    debug,
    generator::{EntriesMode, FeedGenerator, entries::render_entries},
    log,
};
use anyhow::Result;
use route::Route;
use std::sync::Arc;
use tiny_http::Request;

/// Bind and run the request loop until Ctrl+C.
pub fn serve(config: &FeedConfig, tree: &ContentTree) -> Result<()> {
    let (server, addr) = lifecycle::bind_with_retry(config.serve.interface, config.serve.port)?;
    let server = Arc::new(server);
    lifecycle::register_shutdown(Arc::clone(&server))?;

    log!("serve"; "http://{}", addr);
    let generator = FeedGenerator::new(config, tree);

    for request in server.incoming_requests() {
        if let Err(e) = handle_request(request, config, &generator) {
            log!("serve"; "request error: {e}");
        }
    }
    Ok(())
}

/// Handle a single HTTP request
fn handle_request(request: Request, config: &FeedConfig, generator: &FeedGenerator) -> Result<()> {
    let host = response::header_value(&request, "Host");
    let Some(site) = config.site_for_host(host.as_deref()) else {
        return response::respond_not_found(request);
    };
    let context = host.as_deref().and_then(RequestContext::from_host);

    let settings = config.sitemap_settings(&site.name);
    let route = route::route(request.url(), &settings);
    debug!("serve"; "{} {} -> {:?} ({})", request.method(), request.url(), route, site.name);

    match route {
        Route::Robots => match generator.robots(&site.name, context.as_ref()) {
            Ok(body) => response::respond_robots(request, body),
            Err(e) => {
                log!("error"; "robots for site {}: {:#}", site.name, e);
                response::respond_failed(request, 200)
            }
        },
        Route::Entries => {
            let json = generator
                .entries(&site.name, context.as_ref(), EntriesMode::All)
                .and_then(|entries| render_entries(&site.name, &entries, false));
            match json {
                Ok(json) => response::respond_entries(request, json),
                Err(e) => {
                    log!("error"; "entries for site {}: {:#}", site.name, e);
                    response::respond_failed(request, 500)
                }
            }
        }
        Route::NotFound => response::respond_not_found(request),
    }
}
