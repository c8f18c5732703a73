//! Shared helpers.

pub mod date;
pub mod html;
pub mod mime;
mod plural;

pub use plural::plural_count;
