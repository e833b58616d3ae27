//! # Error Types
//!
//! Domain-specific error types for orca-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  orca-core errors (this file)                                           │
//! │  ├── CoreError        - Engine contract violations                      │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  orca-export errors (separate crate)                                    │
//! │  └── ExportError      - Collaborator/artifact failures                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → presentation layer                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (tier name, requested count, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Pricing engine errors.
///
/// The engines assume pre-validated input (the presentation layer clamps
/// numeric ranges), so this surface is deliberately narrow: only the
/// conditions that would otherwise produce nonsense numbers are guarded.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Installment count of zero (or otherwise unusable) reached the engine.
    ///
    /// ## When This Occurs
    /// - The caller failed to clamp the installment field to >= 1
    /// - Dividing by it would produce infinity/NaN, so we fail instead
    #[error("Invalid installment count: {requested} (must be at least 1)")]
    InvalidInstallmentCount { requested: u32 },

    /// A package tier name that is not part of the fixed catalog.
    ///
    /// ## When This Occurs
    /// - Free text reached `PackageTier::from_name` instead of a closed
    ///   selection set. Inside the engine the tier is an enum, so this can
    ///   only happen at the string boundary.
    #[error("Unknown package tier: '{0}' (expected Básico, Especial or Premium)")]
    InvalidTier(String),

    /// A payment method label that is not one of the two supported methods.
    #[error("Unknown payment method: '{0}' (expected '6x sem juros' or 'à vista (PIX)')")]
    InvalidPaymentMethod(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when form input doesn't meet requirements.
/// Used by the presentation layer for early validation before the
/// engines run.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Monetary or percentage value is NaN/infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
