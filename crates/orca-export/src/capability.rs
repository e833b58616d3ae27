//! # Capability Traits
//!
//! Injected capability interfaces for the host application's export
//! machinery. The pricing core never depends on these; the exporter
//! orchestrates over them so the host can plug in whatever templating and
//! file-saving facilities it has (and tests can plug in fakes).
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │   QuoteExporter ──uses──► DocumentTemplater   (render named template)   │
//! │                 ──uses──► FileSaver           (persist the artifact)    │
//! │   UI layer      ──uses──► ClipboardWriter     (copy the sales script)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;

use crate::error::ExportResult;

/// The flat field-name → display-string mapping handed to the templating
/// collaborator. Built by orca-core's `document_context` functions.
pub type TemplateContext = BTreeMap<String, String>;

// =============================================================================
// Traits
// =============================================================================

/// Renders a named document template with a context of display strings.
///
/// Implementations wrap whatever templating facility the host provides.
/// `is_ready` is the probe the readiness gate polls: capabilities loaded
/// lazily by the host may not be usable immediately.
pub trait DocumentTemplater {
    /// Returns true once the templating facility can be called.
    fn is_ready(&self) -> bool;

    /// Renders `template` with `context`, returning the document bytes.
    ///
    /// ## Errors
    /// - `TemplateNotFound` when the named resource does not exist
    /// - `TemplateMismatch` when a placeholder has no matching field
    fn render(&self, template: &str, context: &TemplateContext) -> ExportResult<Vec<u8>>;
}

/// Persists a produced artifact under a file name.
pub trait FileSaver {
    /// Saves `bytes` as `filename`.
    fn save(&self, filename: &str, bytes: &[u8]) -> ExportResult<()>;
}

/// Writes text to the host clipboard (used for the sales script).
pub trait ClipboardWriter {
    /// Places `text` on the clipboard.
    fn write_text(&self, text: &str) -> ExportResult<()>;
}
