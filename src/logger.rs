//! Terminal logging.
//!
//! Every line is `[module] message` on stderr; stdout carries only feed
//! output so it can be piped.
//!
//! ```ignore
//! log!("entries"; "{} for site {}", plural_count(n, "entry"), site);
//! debug!("url"; "{} -> {}", item.path, url);
//! ```

use crossterm::{
    QueueableCommand,
    terminal::{Clear, ClearType},
};
use owo_colors::{OwoColorize, Style};
use std::{
    io::{IsTerminal, Write, stderr},
    sync::atomic::{AtomicBool, Ordering},
};

static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Enable or disable `debug!` output.
pub fn set_verbose(enabled: bool) {
    VERBOSE.store(enabled, Ordering::Relaxed);
}

#[inline]
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// `log!("module"; "format {}", args)`
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {
        $crate::logger::log($module, &format!($($arg)*))
    };
}

/// Like `log!`, printed only with `--verbose`.
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*));
        }
    };
}

/// Run a block only with `--verbose`.
#[macro_export]
macro_rules! debug_do {
    ($($body:tt)*) => {
        if $crate::logger::is_verbose() {
            $($body)*
        }
    };
}

/// Write one prefixed line to stderr.
pub fn log(module: &str, message: &str) {
    let prefix = format!("[{module}]");
    let mut err = stderr().lock();
    if err.is_terminal() {
        // wipe leftovers of an interrupted line
        let _ = err.queue(Clear(ClearType::UntilNewLine));
    }
    let _ = writeln!(err, "{} {message}", prefix.style(prefix_style(module)));
    let _ = err.flush();
}

fn prefix_style(module: &str) -> Style {
    let style = Style::new().bold();
    match module.to_ascii_lowercase().as_str() {
        "serve" => style.bright_blue(),
        "entries" | "robots" | "feed" | "check" => style.bright_green(),
        "error" => style.bright_red(),
        "warning" => style.yellow(),
        _ => style.bright_cyan(),
    }
}
