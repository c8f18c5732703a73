//! Configuration errors and collected diagnostics.

use super::FieldPath;
use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to load `sitefeed.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config `{}`", .0.display())]
    Io(PathBuf, #[source] std::io::Error),

    #[error("config is not valid TOML")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Validation(String),

    // no #[from]: the report is already the whole message
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Severity {
    Error,
    Warning,
}

/// One finding about a config field.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    severity: Severity,
    pub field: FieldPath,
    pub message: String,
    pub hint: Option<String>,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.severity {
            Severity::Error => write!(f, "{} {}", "error".red().bold(), self.field)?,
            Severity::Warning => write!(f, "{} {}", "warning".yellow().bold(), self.field)?,
        }
        write!(f, ": {}", self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, "\n    {} {hint}", "hint:".dimmed())?;
        }
        Ok(())
    }
}

/// Findings of a validation pass.
///
/// Errors fail the load; warnings are printed and otherwise ignored.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    items: Vec<Diagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, severity: Severity, field: FieldPath, message: String, hint: Option<String>) {
        self.items.push(Diagnostic {
            severity,
            field,
            message,
            hint,
        });
    }

    pub fn error(&mut self, field: FieldPath, message: impl Into<String>) {
        self.push(Severity::Error, field, message.into(), None);
    }

    pub fn error_with_hint(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.push(Severity::Error, field, message.into(), Some(hint.into()));
    }

    pub fn warn(&mut self, field: FieldPath, message: impl Into<String>) {
        self.push(Severity::Warning, field, message.into(), None);
    }

    fn of(&self, severity: Severity) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter().filter(move |d| d.severity == severity)
    }

    /// Print warnings to stderr.
    pub fn print_warnings(&self) {
        for warning in self.of(Severity::Warning) {
            eprintln!("{warning}");
        }
    }

    pub fn has_errors(&self) -> bool {
        self.of(Severity::Error).next().is_some()
    }

    /// Number of errors.
    pub fn len(&self) -> usize {
        self.of(Severity::Error).count()
    }

    /// No errors (warnings do not count).
    pub fn is_empty(&self) -> bool {
        !self.has_errors()
    }

    pub fn warning_count(&self) -> usize {
        self.of(Severity::Warning).count()
    }

    /// `Err(self)` when any error was recorded.
    pub fn into_result(self) -> Result<(), Self> {
        if self.has_errors() { Err(self) } else { Ok(()) }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.len();
        writeln!(f, "{}", "invalid configuration".red().bold())?;
        for error in self.of(Severity::Error) {
            write!(f, "\n{error}")?;
        }
        if count > 1 {
            write!(f, "\n\n{count} errors")?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Io(
            PathBuf::from("sitefeed.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        assert_eq!(err.to_string(), "cannot read config `sitefeed.toml`");

        let err = ConfigError::Validation("config file 'x.toml' not found".to_string());
        assert_eq!(err.to_string(), "config file 'x.toml' not found");
    }

    #[test]
    fn test_warnings_do_not_fail() {
        let mut diag = ConfigDiagnostics::new();
        diag.warn(FieldPath::new("serve.default_site"), "unknown site");
        assert!(diag.is_empty());
        assert_eq!(diag.warning_count(), 1);
        assert!(diag.into_result().is_ok());
    }

    #[test]
    fn test_errors_reported() {
        let mut diag = ConfigDiagnostics::new();
        diag.error_with_hint(
            FieldPath::site("website", "root"),
            "must start with `/`",
            "use an absolute tree path",
        );
        diag.error(FieldPath::site("shop", "language"), "language must not be empty");
        diag.warn(FieldPath::new("serve.default_site"), "unknown site");
        assert_eq!(diag.len(), 2);

        let report = diag.into_result().unwrap_err().to_string();
        assert!(report.contains("sites.website.root"));
        assert!(report.contains(": must start with `/`"));
        assert!(report.contains("use an absolute tree path"));
        assert!(report.contains("2 errors"));
        assert!(!report.contains("unknown site"));
    }
}
