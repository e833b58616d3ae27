//! # Validation Module
//!
//! Form-input validation utilities. The engines themselves assume
//! pre-validated input (range clamping is the caller's responsibility);
//! these helpers are what the presentation layer calls before invoking
//! the engines.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Form widgets (min/max/step attributes)                        │
//! │  └── Immediate user feedback                                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (range + finiteness checks)                       │
//! │  └── Runs before every engine call                                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Engine guards (installment count, closed tier enum)           │
//! │  └── Last line against nonsense numbers                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::{MAX_INSTALLMENTS, MAX_PAGES, MIN_PAGES};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates an installment count.
///
/// ## Rules
/// - Must be at least 1 (a quote is always payable)
/// - Must not exceed MAX_INSTALLMENTS (12)
pub fn validate_installment_count(count: u32) -> ValidationResult<()> {
    if count == 0 {
        return Err(ValidationError::MustBePositive {
            field: "parcelas".to_string(),
        });
    }

    if count > MAX_INSTALLMENTS {
        return Err(ValidationError::OutOfRange {
            field: "parcelas".to_string(),
            min: 1,
            max: i64::from(MAX_INSTALLMENTS),
        });
    }

    Ok(())
}

/// Validates a percentage field (discounts).
///
/// ## Rules
/// - Must be finite
/// - Must be between 0 and 100
pub fn validate_percentage(field: &str, pct: f64) -> ValidationResult<()> {
    if !pct.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
        });
    }

    if !(0.0..=100.0).contains(&pct) {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: 100,
        });
    }

    Ok(())
}

/// Validates a monetary field (price per word, cover price, e-book price).
///
/// ## Rules
/// - Must be finite
/// - Must be non-negative (zero is allowed: free items exist)
pub fn validate_price(field: &str, reais: f64) -> ValidationResult<()> {
    if !reais.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
        });
    }

    if reais < 0.0 {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a delivery lead time.
///
/// ## Rules
/// - Must be at least 1 day
pub fn validate_delivery_days(days: u32) -> ValidationResult<()> {
    if days == 0 {
        return Err(ValidationError::MustBePositive {
            field: "prazo".to_string(),
        });
    }

    Ok(())
}

/// Validates a page count for the publication line.
///
/// ## Rules
/// - Must be within the catalog's serviceable range (20–2000)
pub fn validate_page_count(pages: u64) -> ValidationResult<()> {
    if !(u64::from(MIN_PAGES)..=u64::from(MAX_PAGES)).contains(&pages) {
        return Err(ValidationError::OutOfRange {
            field: "paginas".to_string(),
            min: i64::from(MIN_PAGES),
            max: i64::from(MAX_PAGES),
        });
    }

    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a client/consultant name field.
///
/// ## Rules
/// - May be empty (the script renders a "-" placeholder)
/// - Must be at most 200 characters
pub fn validate_name(field: &str, name: &str) -> ValidationResult<()> {
    if name.trim().len() > 200 {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: 200,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
