//! # Export Error Types
//!
//! The failure taxonomy of the export layer. Each variant maps to a
//! distinct user-facing situation:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Unavailable       → "try again shortly" (capability not ready yet)    │
//! │  TemplateNotFound  → template file missing from the expected location  │
//! │  TemplateMismatch  → placeholders don't match the quote field names    │
//! │  Io                → generic file-read/network failure                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Export layer errors.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The external capability (templating, file saving) never became
    /// ready within the readiness gate's timeout.
    ///
    /// ## When This Occurs
    /// - The host application has not finished loading the templating
    ///   collaborator
    /// - Surfaced to the user as a retry-later message
    #[error("Export capability '{capability}' is not available yet, try again in a moment")]
    Unavailable { capability: String },

    /// The named template resource does not exist.
    #[error("Template '{template}' not found. Place the .docx templates in the application's template folder")]
    TemplateNotFound { template: String },

    /// The template's placeholders do not match the context fields.
    ///
    /// Distinct from a generic I/O failure so the user is pointed at the
    /// real fix: the placeholder names inside the document.
    #[error("Template '{template}' rejected the quote data: {detail}. Check that the document's placeholders match the quote field names")]
    TemplateMismatch { template: String, detail: String },

    /// File-read/write or network failure.
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results with ExportError.
pub type ExportResult<T> = Result<T, ExportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_guide_the_user() {
        let err = ExportError::Unavailable {
            capability: "docx templating".to_string(),
        };
        assert!(err.to_string().contains("try again"));

        let err = ExportError::TemplateMismatch {
            template: "ELIV_Comum.docx".to_string(),
            detail: "unknown placeholder 'preco_listaa'".to_string(),
        };
        assert!(err.to_string().contains("placeholders"));
        assert!(err.to_string().contains("ELIV_Comum.docx"));
    }

    #[test]
    fn test_io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: ExportError = io.into();
        assert!(matches!(err, ExportError::Io(_)));
    }
}
