use std::path::PathBuf;

use thiserror::Error;
use uuid::Uuid;

/// Errors raised while loading a content tree.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file {}: {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid content file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("duplicate item id {0}")]
    DuplicateId(Uuid),

    #[error("duplicate item path `{0}`")]
    DuplicatePath(String),

    #[error("item path `{0}` must be absolute")]
    InvalidPath(String),

    #[error("item `{0}` has no languages")]
    NoLanguages(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    #[test]
    fn test_io_error_names_file_and_cause() {
        let err = ContentError::Io(
            PathBuf::from("content.toml"),
            std::io::Error::new(ErrorKind::NotFound, "no such file"),
        );
        assert_eq!(
            err.to_string(),
            "failed to read content file content.toml: no such file"
        );
    }

    #[test]
    fn test_toml_error_converts() {
        let parsed: Result<toml::Value, _> = toml::from_str("[items");
        let err: ContentError = parsed.unwrap_err().into();
        assert!(matches!(err, ContentError::Toml(_)));
    }
}
