//! # Package Catalog
//!
//! The fixed catalog of publication-service packages. This is reference
//! data, not user input: three named tiers with fixed list prices and a
//! fixed 6-installment structure, immutable at runtime.
//!
//! ## Catalog
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Tier       List price (PIX)    Monthly (6x)    Installments            │
//! │  ────────   ────────────────    ────────────    ────────────            │
//! │  Básico     R$ 1.884,60         R$ 349,00       6                       │
//! │  Especial   R$ 1.938,60         R$ 359,00       6                       │
//! │  Premium    R$ 2.694,60         R$ 499,00       6                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Inside the engine a tier is a closed enum, so an unknown tier is
//! unrepresentable; `PackageTier::from_name` is the only place free text
//! can enter, and it fails fast with `CoreError::InvalidTier`.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::CoreError;
use crate::money::Brl;

// =============================================================================
// Package Tier
// =============================================================================

/// One of the fixed publication-service packages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PackageTier {
    /// Entry-level package.
    #[serde(rename = "Básico")]
    Basico,

    /// Mid-tier package (the most quoted one).
    #[serde(rename = "Especial")]
    Especial,

    /// Full-service package.
    Premium,
}

impl PackageTier {
    /// All tiers, in catalog order (for selection UIs).
    pub const ALL: [PackageTier; 3] = [
        PackageTier::Basico,
        PackageTier::Especial,
        PackageTier::Premium,
    ];

    /// The catalog name of this tier, as it appears in documents.
    pub const fn as_str(&self) -> &'static str {
        match self {
            PackageTier::Basico => "Básico",
            PackageTier::Especial => "Especial",
            PackageTier::Premium => "Premium",
        }
    }

    /// Resolves a catalog name to a tier.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidTier` for any name outside the fixed
    /// catalog — this is a caller bug, never silently defaulted.
    ///
    /// ## Example
    /// ```rust
    /// use orca_core::catalog::PackageTier;
    ///
    /// assert_eq!(PackageTier::from_name("Especial").unwrap(), PackageTier::Especial);
    /// assert!(PackageTier::from_name("Gold").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        match name {
            "Básico" => Ok(PackageTier::Basico),
            "Especial" => Ok(PackageTier::Especial),
            "Premium" => Ok(PackageTier::Premium),
            other => Err(CoreError::InvalidTier(other.to_string())),
        }
    }

    /// Returns the fixed pricing for this tier.
    pub const fn info(&self) -> PackageInfo {
        match self {
            PackageTier::Basico => PackageInfo {
                list_price_pix: Brl::from_reais(1884.60),
                monthly_6x: Brl::from_reais(349.00),
                installments: 6,
            },
            PackageTier::Especial => PackageInfo {
                list_price_pix: Brl::from_reais(1938.60),
                monthly_6x: Brl::from_reais(359.00),
                installments: 6,
            },
            PackageTier::Premium => PackageInfo {
                list_price_pix: Brl::from_reais(2694.60),
                monthly_6x: Brl::from_reais(499.00),
                installments: 6,
            },
        }
    }
}

impl fmt::Display for PackageTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Package Info
// =============================================================================

/// The fixed pricing structure of a catalog tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PackageInfo {
    /// Full list price when paying up front via PIX.
    pub list_price_pix: Brl,

    /// Advertised monthly value for the 6x plan (pre-discount, informational).
    pub monthly_6x: Brl,

    /// Number of installments in the installment plan.
    pub installments: u32,
}

// =============================================================================
// Unit Tests
// =============================================================================
