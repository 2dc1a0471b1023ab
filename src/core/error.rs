use thiserror::Error;

/// Core error types for choreboard
#[derive(Debug, Error)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A field's custom pattern is not a valid regular expression
    #[error("Invalid pattern for field {field}: {message}")]
    InvalidPattern { field: String, message: String },

    /// Two field descriptors share the same name
    #[error("Duplicate field name: {0}")]
    DuplicateField(String),

    /// A timing combinator was created outside a Tokio runtime
    #[error("No Tokio runtime available to schedule deferred calls")]
    NoRuntime,

    /// Internal logic error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Short hint shown by the CLI under the error line, when one applies.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Serialization(_) => Some("Check that the input file contains valid JSON"),
            Self::InvalidPattern { .. } => {
                Some("Patterns use Rust regex syntax; escape backslashes in JSON strings")
            }
            Self::DuplicateField(_) => Some("Every field in a schema needs a unique name"),
            Self::NoRuntime => Some("Create debounced callbacks from inside a Tokio runtime"),
            Self::Io(_) | Self::Internal(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pattern_message() {
        let err = Error::InvalidPattern {
            field: "title".to_string(),
            message: "unclosed group".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid pattern for field title: unclosed group"
        );
        assert!(err.suggestion().is_some_and(|s| s.contains("regex")));
    }

    #[test]
    fn test_json_error_converts() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::Serialization(_)));
        assert!(err.to_string().starts_with("JSON error"));
    }

    #[test]
    fn test_io_has_no_suggestion() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(err.suggestion().is_none());
    }
}
