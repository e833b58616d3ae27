//! # orca-export: Export Collaborator Contract for Orça
//!
//! Everything the pricing core must not do lives here: waiting for an
//! optional external templating capability with a bounded timeout,
//! rendering named document templates, and producing timestamped file
//! artifacts.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Presentation layer                                                     │
//! │       │ "Gerar DOCX" / "Copiar" / "Salvar"                              │
//! │       ▼                                                                 │
//! │  orca-export (THIS CRATE)                                               │
//! │  ├── readiness   - bounded-timeout gate on capability probes            │
//! │  ├── capability  - DocumentTemplater / FileSaver / ClipboardWriter      │
//! │  ├── exporter    - QuoteExporter orchestration                          │
//! │  └── filename    - YYYYMMDD_HHMM artifact names                         │
//! │       │ contexts & formatting                                           │
//! │       ▼                                                                 │
//! │  orca-core (pure engines; never blocked on any of this)                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The capability implementations themselves (actual docx rendering,
//! actual file dialogs, the clipboard) are injected by the host
//! application; this crate defines the seams and the orchestration.

pub mod capability;
pub mod error;
pub mod exporter;
pub mod filename;
pub mod readiness;

pub use capability::{ClipboardWriter, DocumentTemplater, FileSaver, TemplateContext};
pub use error::{ExportError, ExportResult};
pub use exporter::{
    copy_script, QuoteExporter, TEMPLATE_COMUM, TEMPLATE_REVISAO, TEMPLATE_UNIVERSIDADE,
};
pub use readiness::{wait_until_ready, ReadinessSettings};
