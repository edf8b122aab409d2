//! Error types for qpaper library.

use std::io;
use thiserror::Error;

/// Result type alias for qpaper operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while rendering a question paper.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading sources or writing the output file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A write was attempted after the document was finalized.
    #[error("Document is closed: no further writes are accepted")]
    DocumentClosed,

    /// The question list is empty and the policy rejects empty papers.
    #[error("Question paper has no questions")]
    EmptyDocument,

    /// Error assembling or serializing the PDF structure.
    #[error("PDF error: {0}")]
    Pdf(String),

    /// A drawing surface was driven out of order.
    #[error("Rendering error: {0}")]
    Render(String),

    /// Malformed JSON in a question file.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The question source is readable but its content is not usable.
    #[error("Invalid question source: {0}")]
    InvalidSource(String),

    /// Render options are inconsistent.
    #[error("Invalid render options: {0}")]
    InvalidOptions(String),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            _ => Error::Pdf(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::DocumentClosed;
        assert_eq!(
            err.to_string(),
            "Document is closed: no further writes are accepted"
        );

        let err = Error::InvalidSource("missing questions".into());
        assert_eq!(err.to_string(), "Invalid question source: missing questions");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "read-only");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
