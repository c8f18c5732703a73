//! HTTP response handlers.

use crate::utils::mime::types::{JSON, PLAIN};
use anyhow::{Result, anyhow};
use tiny_http::{Header, Request, Response, StatusCode};

/// Respond with a plain-text robots body.
pub fn respond_robots(request: Request, body: String) -> Result<()> {
    send_body(request, 200, PLAIN, body.into_bytes())
}

/// Respond with a JSON entries document.
pub fn respond_entries(request: Request, json: String) -> Result<()> {
    send_body(request, 200, JSON, json.into_bytes())
}

/// Respond with an empty plain-text body after a failed build.
pub fn respond_failed(request: Request, status: u16) -> Result<()> {
    send_body(request, status, PLAIN, Vec::new())
}

/// Respond with 404.
pub fn respond_not_found(request: Request) -> Result<()> {
    send_body(request, 404, PLAIN, b"404 Not Found".to_vec())
}

fn send_body(
    request: Request,
    status: u16,
    content_type: &'static str,
    body: Vec<u8>,
) -> Result<()> {
    let response = Response::from_data(body)
        .with_status_code(StatusCode(status))
        .with_header(make_header("Content-Type", content_type)?)
        .with_header(make_header("Cache-Control", "no-cache")?);
    request.respond(response)?;
    Ok(())
}

fn make_header(key: &'static str, value: &'static str) -> Result<Header> {
    Header::from_bytes(key, value).map_err(|()| anyhow!("invalid header {key}: {value}"))
}

/// Value of header `name`, if present.
pub fn header_value(request: &Request, name: &str) -> Option<String> {
    request
        .headers()
        .iter()
        .find(|h| h.field.as_str().as_str().eq_ignore_ascii_case(name))
        .map(|h| h.value.to_string())
}
