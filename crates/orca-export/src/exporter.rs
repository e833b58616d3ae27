//! # Quote Exporter
//!
//! Orchestrates the production of export artifacts: the plain-text sales
//! script and the populated document templates. Sits between the pure
//! engines (which it calls for formatting and template contexts) and the
//! injected host capabilities (which do the actual rendering and saving).
//!
//! ## Export Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Document Export Flow                              │
//! │                                                                         │
//! │  computed quote (from orca-core, already on screen)                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  document_context() ──► wait_until_ready(templater) ──► render()        │
//! │                                    │                       │            │
//! │                              timeout│                       ▼            │
//! │                                    ▼                    save() with     │
//! │                              Unavailable                YYYYMMDD_HHMM   │
//! │                              ("try again")              file name       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Local};
use tracing::info;

use orca_core::pacote::{
    common_document_context, university_document_context, PackageParams, PackageQuoteInput,
    PackageQuoteResult, UniversityParams,
};
use orca_core::revisao::{
    document_context, format_quote, QuoteInput, QuoteResult, ScriptParams,
};
use orca_core::format;

use crate::capability::{ClipboardWriter, DocumentTemplater, FileSaver, TemplateContext};
use crate::error::ExportResult;
use crate::filename;
use crate::readiness::{wait_until_ready, ReadinessSettings};

// =============================================================================
// Template Resources
// =============================================================================

/// Template resource for the common publication document.
pub const TEMPLATE_COMUM: &str = "ELIV_Comum.docx";

/// Template resource for the university publication document.
pub const TEMPLATE_UNIVERSIDADE: &str = "ELIV_Universidade.docx";

/// Template resource for the proofreading quote document.
pub const TEMPLATE_REVISAO: &str = "Orcamento_Revisao.docx";

const STEM_COMUM: &str = "Orcamento_Comum_ELIV";
const STEM_UNIVERSIDADE: &str = "Orcamento_Universidade_ELIV";
const STEM_REVISAO: &str = "Orcamento_Revisao";

// =============================================================================
// Exporter
// =============================================================================

/// Produces export artifacts over injected host capabilities.
pub struct QuoteExporter<T, S> {
    templater: T,
    saver: S,
    readiness: ReadinessSettings,
}

impl<T, S> QuoteExporter<T, S>
where
    T: DocumentTemplater,
    S: FileSaver,
{
    /// Creates an exporter with default readiness settings.
    pub fn new(templater: T, saver: S) -> Self {
        QuoteExporter {
            templater,
            saver,
            readiness: ReadinessSettings::default(),
        }
    }

    /// Overrides the readiness gate settings (hosts with slow capability
    /// loads raise the timeout).
    pub fn with_readiness(mut self, readiness: ReadinessSettings) -> Self {
        self.readiness = readiness;
        self
    }

    // =========================================================================
    // Artifact Operations
    // =========================================================================

    /// Saves the sales script as a UTF-8 text artifact.
    ///
    /// Returns the artifact file name.
    pub fn export_script(&self, script: &str, now: DateTime<Local>) -> ExportResult<String> {
        let name = filename::timestamped(STEM_REVISAO, "txt", now);
        self.saver.save(&name, script.as_bytes())?;
        info!(file = %name, bytes = script.len(), "sales script exported");
        Ok(name)
    }

    /// Renders a named template with a context and saves the result.
    ///
    /// Waits for the templating capability behind the readiness gate first;
    /// a capability that never loads surfaces as `Unavailable` rather than
    /// a hung click.
    pub async fn export_document(
        &self,
        template: &str,
        stem: &str,
        context: &TemplateContext,
        now: DateTime<Local>,
    ) -> ExportResult<String> {
        wait_until_ready("docx templating", || self.templater.is_ready(), &self.readiness)
            .await?;

        let bytes = self.templater.render(template, context)?;
        let name = filename::timestamped(stem, "docx", now);
        self.saver.save(&name, &bytes)?;
        info!(template, file = %name, fields = context.len(), "document exported");
        Ok(name)
    }

    // =========================================================================
    // Quote-Specific Wrappers
    // =========================================================================

    /// Exports the proofreading quote document.
    ///
    /// The quote is computed by the caller (it is already on screen); this
    /// only assembles the template context and runs the export flow.
    pub async fn export_revisao(
        &self,
        params: &ScriptParams,
        input: &QuoteInput,
        result: &QuoteResult,
        now: DateTime<Local>,
    ) -> ExportResult<String> {
        let formatted = format_quote(input, result);
        let context = document_context(params, input, result, &formatted);
        self.export_document(TEMPLATE_REVISAO, STEM_REVISAO, &context, now)
            .await
    }

    /// Exports the common publication package document.
    pub async fn export_package_comum(
        &self,
        params: &PackageParams,
        input: &PackageQuoteInput,
        result: &PackageQuoteResult,
        now: DateTime<Local>,
    ) -> ExportResult<String> {
        let context =
            common_document_context(params, input, result, &format::date(now.date_naive()));
        self.export_document(TEMPLATE_COMUM, STEM_COMUM, &context, now)
            .await
    }

    /// Exports the university publication package document.
    ///
    /// Succeeds even when the print run is unset — the print-run fields
    /// render their zero values (the engine computed them as zero).
    pub async fn export_package_universidade(
        &self,
        params: &PackageParams,
        uni: &UniversityParams,
        input: &PackageQuoteInput,
        result: &PackageQuoteResult,
        now: DateTime<Local>,
    ) -> ExportResult<String> {
        let context = university_document_context(
            params,
            uni,
            input,
            result,
            &format::date(now.date_naive()),
        );
        self.export_document(TEMPLATE_UNIVERSIDADE, STEM_UNIVERSIDADE, &context, now)
            .await
    }
}

// =============================================================================
// Clipboard
// =============================================================================

/// Copies the sales script to the host clipboard.
///
/// Thin by design: the script text is already assembled by the engine and
/// the clipboard is an injected capability, so all that belongs here is
/// the logging.
pub fn copy_script<C: ClipboardWriter>(clipboard: &C, script: &str) -> ExportResult<()> {
    clipboard.write_text(script)?;
    info!(bytes = script.len(), "sales script copied to clipboard");
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
