//! # Locale Formatting
//!
//! Brazilian-Portuguese display formatting for currency, counts, percentages
//! and dates. This is the single place raw numbers become display strings:
//! the on-screen metrics, the shareable sales script and the document
//! template contexts all call through here, so the three consumers can never
//! disagree on how a value renders.
//!
//! ## Conventions (pt-BR)
//! - Currency: "R$ 1.938,60" — thousands '.', decimal ',', 2 places
//! - Counts:   "30.000" — thousands-grouped integers
//! - Percent:  "20.0%" / "15%" — dot decimal, matching the reference output
//! - Dates:    "25/01/2024" — day/month/year
//!
//! Rounding happens here and only here: values are carried as f64 by the
//! engines and rounded to 2 decimals (half away from zero) at format time.

use chrono::NaiveDate;

use crate::money::{Brl, Percent};
use crate::ABSENT_VALUE_PLACEHOLDER;

// =============================================================================
// Currency
// =============================================================================

/// Formats a monetary value as pt-BR currency: "R$ 1.938,60".
///
/// ## Example
/// ```rust
/// use orca_core::format;
/// use orca_core::money::Brl;
///
/// assert_eq!(format::brl(Brl::from_reais(1938.60)), "R$ 1.938,60");
/// assert_eq!(format::brl(Brl::from_reais(0.0)), "R$ 0,00");
/// assert_eq!(format::brl(Brl::from_reais(-5.5)), "-R$ 5,50");
/// ```
pub fn brl(value: Brl) -> String {
    let negative = value.reais() < 0.0;
    // Round once, to whole centavos, half away from zero.
    let total_centavos = (value.reais().abs() * 100.0).round() as u64;
    let inteiro = total_centavos / 100;
    let centavos = total_centavos % 100;

    let sign = if negative { "-" } else { "" };
    format!("{}R$ {},{:02}", sign, group_thousands(inteiro), centavos)
}

/// Formats an optional monetary value, rendering an em dash for absence.
///
/// Absence is distinct from zero: a PIX (paid-in-full) quote has NO monthly
/// installment, which must not read as "R$ 0,00".
pub fn brl_opt(value: Option<Brl>) -> String {
    match value {
        Some(v) => brl(v),
        None => ABSENT_VALUE_PLACEHOLDER.to_string(),
    }
}

// =============================================================================
// Counts & Percentages
// =============================================================================

/// Formats an integer count with pt-BR thousands grouping: "30.000".
pub fn int(value: u64) -> String {
    group_thousands(value)
}

/// Formats a percentage with one decimal place: "20.0%".
///
/// The decimal separator is a dot here, matching the reference output for
/// discount displays (`toFixed(1)` semantics).
pub fn percent1(pct: Percent) -> String {
    format!("{:.1}%", pct.value())
}

/// Formats a percentage with no decimal places: "15%".
///
/// Used by the document template contexts.
pub fn percent0(pct: Percent) -> String {
    format!("{:.0}%", pct.value())
}

/// Discount display string for the quote summary.
///
/// Shows the literal "not applied" text when the discount is disabled or
/// zero, otherwise the one-decimal percentage.
///
/// ## Example
/// ```rust
/// use orca_core::format;
/// use orca_core::money::Percent;
///
/// assert_eq!(format::discount_display(true, Percent::from_value(20.0)), "20.0%");
/// assert_eq!(format::discount_display(false, Percent::from_value(20.0)), "— (não aplicado)");
/// assert_eq!(format::discount_display(true, Percent::zero()), "— (não aplicado)");
/// ```
pub fn discount_display(apply: bool, pct: Percent) -> String {
    if apply && pct.value() > 0.0 {
        percent1(pct)
    } else {
        "— (não aplicado)".to_string()
    }
}

// =============================================================================
// Dates
// =============================================================================

/// Formats a date in day/month/year order: "25/01/2024".
pub fn date(d: NaiveDate) -> String {
    d.format("%d/%m/%Y").to_string()
}

// =============================================================================
// Helpers
// =============================================================================

/// Groups a non-negative integer with '.' every three digits.
fn group_thousands(mut value: u64) -> String {
    if value < 1000 {
        return value.to_string();
    }

    let mut groups = Vec::new();
    while value >= 1000 {
        groups.push(format!("{:03}", value % 1000));
        value /= 1000;
    }
    groups.push(value.to_string());
    groups.reverse();
    groups.join(".")
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1.000");
        assert_eq!(group_thousands(30000), "30.000");
        assert_eq!(group_thousands(1234567), "1.234.567");
    }

    #[test]
    fn test_brl_formatting() {
        assert_eq!(brl(Brl::from_reais(1938.60)), "R$ 1.938,60");
        assert_eq!(brl(Brl::from_reais(5250.0)), "R$ 5.250,00");
        assert_eq!(brl(Brl::from_reais(52.5)), "R$ 52,50");
        assert_eq!(brl(Brl::from_reais(0.0)), "R$ 0,00");
        assert_eq!(brl(Brl::from_reais(0.03)), "R$ 0,03");
    }

    #[test]
    fn test_brl_rounds_at_format_time() {
        // 274.635 carries a sub-centavo digit; display rounds to 2 places
        assert_eq!(brl(Brl::from_reais(274.638)), "R$ 274,64");
        assert_eq!(brl(Brl::from_reais(274.632)), "R$ 274,63");
    }

    #[test]
    fn test_brl_negative() {
        assert_eq!(brl(Brl::from_reais(-5.5)), "-R$ 5,50");
    }

    #[test]
    fn test_brl_opt_absence_is_em_dash() {
        assert_eq!(brl_opt(None), "—");
        assert_eq!(brl_opt(Some(Brl::from_reais(359.0))), "R$ 359,00");
    }

    #[test]
    fn test_int() {
        assert_eq!(int(30000), "30.000");
        assert_eq!(int(250), "250");
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent1(Percent::from_value(20.0)), "20.0%");
        assert_eq!(percent1(Percent::from_value(12.5)), "12.5%");
        assert_eq!(percent0(Percent::from_value(15.0)), "15%");
        assert_eq!(percent0(Percent::from_value(30.0)), "30%");
    }

    #[test]
    fn test_discount_display() {
        assert_eq!(discount_display(true, Percent::from_value(20.0)), "20.0%");
        assert_eq!(discount_display(true, Percent::zero()), "— (não aplicado)");
        assert_eq!(
            discount_display(false, Percent::from_value(50.0)),
            "— (não aplicado)"
        );
    }

    #[test]
    fn test_date_is_day_month_year() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 25).unwrap();
        assert_eq!(date(d), "25/01/2024");
    }
}
