//! Last-modified timestamp formatting.
//!
//! Sitemap consumers expect `YYYY-MM-DDTHH:MM:SS+HH:MM`, i.e. the item's
//! update time shifted into the publishing timezone with the offset spelled
//! out. The timezone is the host's local zone unless a fixed offset is
//! configured for the site.

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset, Local, Offset, TimeZone, Utc};

/// `yyyy-MM-ddTHH:mm:sszzz`
const LAST_MODIFIED_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Format an update timestamp in the given timezone.
pub fn format_in<Tz>(updated: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    updated
        .with_timezone(tz)
        .format(LAST_MODIFIED_FORMAT)
        .to_string()
}

/// Format an update timestamp, using `offset` when given, else local time.
pub fn format_last_modified(updated: &DateTime<Utc>, offset: Option<FixedOffset>) -> String {
    match offset {
        Some(offset) => format_in(updated, &offset),
        None => format_in(updated, &Local),
    }
}

/// Parse a `+HH:MM` / `-HH:MM` / `Z` offset string.
pub fn parse_offset(s: &str) -> Result<FixedOffset> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("z") {
        return Ok(Utc.fix());
    }
    s.parse::<FixedOffset>()
        .with_context(|| format!("offset `{s}` must look like +HH:MM"))
}
