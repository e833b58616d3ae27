//! # orca-core: Pure Pricing Logic for Orça
//!
//! This crate is the **heart** of Orça. It contains the two quote engines
//! and the locale formatting layer as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Orça Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Presentation Layer (web UI)                    │   │
//! │  │    quote form ──► metrics cards ──► script panel ──► print     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ recompute on every input change        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                ★ orca-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  revisao  │  │  pacote   │  │  format   │  │ validation│  │   │
//! │  │   │ per-word  │  │ tiers +   │  │ pt-BR     │  │   rules   │  │   │
//! │  │   │  quotes   │  │ print-run │  │ display   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO NETWORK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ template contexts                      │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               orca-export (collaborator contract)               │   │
//! │  │        readiness gate, docx rendering, file artifacts           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`revisao`] - Proofreading quote engine (per-word pricing)
//! - [`pacote`] - Publication package quote engine (tiers + print-run)
//! - [`catalog`] - The fixed package catalog
//! - [`money`] - `Brl` and `Percent` value types
//! - [`format`] - pt-BR locale formatting
//! - [`error`] - Domain error types
//! - [`validation`] - Form-input validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input (and captured date) = same output
//! 2. **No I/O**: files, clipboard, network and template rendering are
//!    FORBIDDEN here — they belong to the export collaborator
//! 3. **Format Once**: numbers become display strings only in [`format`],
//!    so screen, script and documents can never disagree
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use orca_core::catalog::PackageTier;
//! use orca_core::money::Percent;
//! use orca_core::pacote::{compute_package_quote, PackageQuoteInput, PaymentMethod};
//!
//! let input = PackageQuoteInput {
//!     tier: PackageTier::Especial,
//!     payment_method: PaymentMethod::CashPix,
//!     discount_percentage: Percent::from_value(15.0),
//!     print_run: None,
//! };
//!
//! let result = compute_package_quote(&input);
//! // Paying in full: the monthly installment is absent, not zero
//! assert!(result.monthly_installment.is_none());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod format;
pub mod money;
pub mod pacote;
pub mod revisao;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use orca_core::Brl` instead of
// `use orca_core::money::Brl`

pub use catalog::{PackageInfo, PackageTier};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{Brl, Percent};
pub use pacote::{PackageQuoteInput, PackageQuoteResult, PaymentMethod, PrintRunInput};
pub use revisao::{FormattedQuote, QuoteInput, QuoteResult};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum number of installments offered for proofreading quotes.
///
/// ## Business Reason
/// Interest-free splitting beyond a year is not offered; the form clamps
/// to this bound and [`validation::validate_installment_count`] enforces it.
pub const MAX_INSTALLMENTS: u32 = 12;

/// Smallest page count the publication packages service.
pub const MIN_PAGES: u32 = 20;

/// Largest page count the publication packages service.
pub const MAX_PAGES: u32 = 2000;

/// Placeholder rendered in the sales script for empty optional text fields.
pub const EMPTY_FIELD_PLACEHOLDER: &str = "-";

/// Placeholder rendered for values that are absent (e.g. the monthly
/// installment of a paid-in-full quote). Distinct from zero.
pub const ABSENT_VALUE_PLACEHOLDER: &str = "—";
