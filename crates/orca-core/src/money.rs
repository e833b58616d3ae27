//! # Money Module
//!
//! Provides the `Brl` type for monetary values in Brazilian Reais, and the
//! `Percent` type for discount percentages.
//!
//! ## Why Floating-Point Money Here?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  QUOTES, NOT LEDGERS                                                    │
//! │                                                                         │
//! │  This system produces price QUOTES: ephemeral figures recomputed on    │
//! │  every keystroke, displayed rounded to 2 decimals, never posted to a   │
//! │  ledger. Per-word prices (R$ 0,03/word) and 6-way installment splits   │
//! │  (R$ 1.647,81 / 6 = R$ 274,635) are sub-cent by nature.                │
//! │                                                                         │
//! │  Policy: arithmetic stays in f64, rounding happens ONCE at format      │
//! │  time (2 decimals, half away from zero). Sum invariants hold within    │
//! │  a documented tolerance of 1e-6. No remainder distribution across      │
//! │  installments is performed.                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use orca_core::money::{Brl, Percent};
//!
//! let base = Brl::from_reais(1938.60);
//! let total = base.apply_discount(Percent::from_value(15.0));
//! assert!((total.reais() - 1647.81).abs() < 1e-6);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub};
use ts_rs::TS;

// =============================================================================
// Brl Type
// =============================================================================

/// A monetary value in Brazilian Reais (BRL).
///
/// ## Design Decisions
/// - **f64**: mirrors the reference arithmetic; see the module docs for the
///   rounding policy and tolerance
/// - **Single field tuple struct**: zero-cost abstraction over f64
/// - **Derives**: full serde support for IPC with the presentation layer
///
/// ## Where Brl Flows
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  QuoteInput.price_per_word ──► base_price ──► final_price              │
/// │                                                    │                    │
/// │  PackageCatalog.list_price ──► total_with_discount ┤                    │
/// │                                                    ▼                    │
/// │                     format::brl() ──► "R$ 1.647,81" in UI/script/docx  │
/// │                                                                         │
/// │  EVERY monetary value in the system flows through this type            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Brl(f64);

impl Brl {
    /// Creates a value from reais.
    ///
    /// ## Example
    /// ```rust
    /// use orca_core::money::Brl;
    ///
    /// let price = Brl::from_reais(1938.60);
    /// assert_eq!(price.reais(), 1938.60);
    /// ```
    #[inline]
    pub const fn from_reais(reais: f64) -> Self {
        Brl(reais)
    }

    /// Returns the raw value in reais.
    #[inline]
    pub const fn reais(&self) -> f64 {
        self.0
    }

    /// Returns zero reais.
    #[inline]
    pub const fn zero() -> Self {
        Brl(0.0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    /// Returns the amount a percentage discount takes off this value.
    ///
    /// ## Example
    /// ```rust
    /// use orca_core::money::{Brl, Percent};
    ///
    /// let base = Brl::from_reais(900.0);
    /// let off = base.discount_amount(Percent::from_value(20.0));
    /// assert!((off.reais() - 180.0).abs() < 1e-6);
    /// ```
    #[inline]
    pub fn discount_amount(&self, pct: Percent) -> Brl {
        Brl(self.0 * pct.rate())
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// For `pct` in [0, 100] the result is always in `[0, self]`, so a
    /// discounted price can never go negative.
    #[inline]
    pub fn apply_discount(&self, pct: Percent) -> Brl {
        Brl(self.0 * (1.0 - pct.rate()))
    }

    /// Splits this amount into `n` equal installments.
    ///
    /// Callers must guarantee `n >= 1`; the engines guard for this before
    /// calling (see `CoreError::InvalidInstallmentCount`).
    #[inline]
    pub fn split(&self, n: u32) -> Brl {
        Brl(self.0 / n as f64)
    }

    /// Multiplies by a unit quantity (print-run copies, etc).
    ///
    /// ## Example
    /// ```rust
    /// use orca_core::money::Brl;
    ///
    /// let unit = Brl::from_reais(52.50);
    /// assert!((unit.times(100).reais() - 5250.0).abs() < 1e-6);
    /// ```
    #[inline]
    pub fn times(&self, qty: u64) -> Brl {
        Brl(self.0 * qty as f64)
    }
}

// =============================================================================
// Percent Type
// =============================================================================

/// A percentage in the human 0–100 scale.
///
/// ## Why a Newtype?
/// Keeps "20 (%)" and "0.20 (rate)" from ever being confused: inputs carry
/// `Percent`, the multiply site asks for `.rate()` explicitly.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Percent(f64);

impl Percent {
    /// Creates a percentage from its 0–100 value.
    #[inline]
    pub const fn from_value(value: f64) -> Self {
        Percent(value)
    }

    /// Returns the 0–100 value (for display).
    #[inline]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Returns the multiplicative rate (20% → 0.2).
    #[inline]
    pub fn rate(&self) -> f64 {
        self.0 / 100.0
    }

    /// Zero percent.
    #[inline]
    pub const fn zero() -> Self {
        Percent(0.0)
    }

    /// Checks if the percentage is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a plain format.
///
/// ## Note
/// This is for debugging and logs. Use [`crate::format::brl`] for
/// locale-correct pt-BR display ("R$ 1.938,60").
impl fmt::Display for Brl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R$ {:.2}", self.0)
    }
}

/// Addition of two Brl values.
impl Add for Brl {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Brl(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Brl {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Brl values.
impl Sub for Brl {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Brl(self.0 - other.0)
    }
}

/// Multiplication by a raw factor (word counts enter this way).
impl Mul<f64> for Brl {
    type Output = Self;

    #[inline]
    fn mul(self, factor: f64) -> Self {
        Brl(self.0 * factor)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
