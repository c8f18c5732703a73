//! MIME types of served bodies.

/// Common MIME type constants.
pub mod types {
    pub const PLAIN: &str = "text/plain; charset=utf-8";
    pub const JSON: &str = "application/json";
}
