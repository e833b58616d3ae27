//! # Publication Package Quote Engine
//!
//! Computes packaged-service quotes: a catalog tier price with an optional
//! percentage discount and a payment-method-dependent installment split,
//! plus an optional print-run sub-quote combined additively into a grand
//! total.
//!
//! ## Quote Composition
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   Package Quote Composition                             │
//! │                                                                         │
//! │  catalog[tier].list_price_pix                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  × (1 − discount%)  ──► total_with_discount                             │
//! │       │                      │                                          │
//! │       │ 6x sem juros         │ à vista (PIX)                            │
//! │       ▼                      ▼                                          │
//! │  monthly = total/6      monthly = ABSENT (— in output, never R$ 0,00)   │
//! │                                                                         │
//! │  print-run (university mode only):                                      │
//! │  cover_price × (1 − run discount%) ──► unit ──► × qty ──► run total     │
//! │                                                                         │
//! │  grand_total = total_with_discount + run total                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Print-run participation is gated on `Option` presence: callers pass
//! `None` when university mode is off, so a disabled toggle can never bake
//! stale print-run values into the grand total.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use ts_rs::TS;

use crate::catalog::PackageTier;
use crate::error::CoreError;
use crate::format;
use crate::money::{Brl, Percent};

/// Honorifics offered by the university-mode form.
pub const HONORIFICS: [&str; 8] = [
    "Prof.", "Profa.", "Prof. Dr.", "Profa. Dra.", "Sr.", "Sra.", "Doutor", "Doutora",
];

// =============================================================================
// Payment Method
// =============================================================================

/// How the package is paid. Exactly two methods exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PaymentMethod {
    /// Six equal interest-free installments.
    #[serde(rename = "installments-6x")]
    Installments6x,

    /// Paid in full up front via PIX. No installment value exists.
    #[serde(rename = "cash-pix")]
    CashPix,
}

impl PaymentMethod {
    /// The label used in forms and documents.
    pub const fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Installments6x => "6x sem juros",
            PaymentMethod::CashPix => "à vista (PIX)",
        }
    }

    /// Resolves a form label to a payment method.
    ///
    /// ## Errors
    /// `CoreError::InvalidPaymentMethod` for anything outside the two
    /// supported labels.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        match name {
            "6x sem juros" => Ok(PaymentMethod::Installments6x),
            "à vista (PIX)" => Ok(PaymentMethod::CashPix),
            other => Err(CoreError::InvalidPaymentMethod(other.to_string())),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Input
// =============================================================================

/// Print-run parameters (university mode).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PrintRunInput {
    /// Cover price per physical copy, before the print-run discount.
    pub cover_unit_price: Brl,

    /// Number of copies in the run.
    pub quantity: u64,

    /// Print-run discount percentage, 0–100. Independent of the package
    /// discount.
    pub discount_percentage: Percent,

    /// E-book price. Informational only — never added into totals.
    pub ebook_price: Brl,
}

/// Pricing parameters for a publication package quote.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PackageQuoteInput {
    /// Selected catalog tier.
    pub tier: PackageTier,

    /// Payment method for the package portion.
    pub payment_method: PaymentMethod,

    /// Package discount percentage, 0–100.
    pub discount_percentage: Percent,

    /// Print-run sub-quote. `None` when university mode is off; its values
    /// then contribute nothing to the grand total.
    pub print_run: Option<PrintRunInput>,
}

// =============================================================================
// Result
// =============================================================================

/// Derived figures for a publication package quote.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PackageQuoteResult {
    /// The tier's full list price (PIX).
    pub list_price: Brl,

    /// list_price × (1 − discount%).
    pub total_with_discount: Brl,

    /// total_with_discount / installment count for the 6x plan;
    /// `None` (absent, not zero) when paying in full via PIX.
    pub monthly_installment: Option<Brl>,

    /// Fixed installment count of the tier's plan (6).
    pub installment_count: u32,

    /// Cover price after the print-run discount. Zero without a print run.
    pub print_run_unit_price: Brl,

    /// print_run_unit_price × quantity. Zero without a print run.
    pub print_run_total: Brl,

    /// total_with_discount + print_run_total.
    pub grand_total: Brl,
}

// =============================================================================
// Compute
// =============================================================================

/// Computes a publication package quote.
///
/// Pure and infallible: the tier is a closed enum (unknown tiers cannot
/// reach this function) and no division by user input occurs — the 6x
/// split divides by the catalog's fixed installment count.
///
/// ## Example
/// ```rust
/// use orca_core::catalog::PackageTier;
/// use orca_core::money::Percent;
/// use orca_core::pacote::{compute_package_quote, PackageQuoteInput, PaymentMethod};
///
/// let input = PackageQuoteInput {
///     tier: PackageTier::Especial,
///     payment_method: PaymentMethod::Installments6x,
///     discount_percentage: Percent::from_value(15.0),
///     print_run: None,
/// };
/// let result = compute_package_quote(&input);
/// assert!((result.total_with_discount.reais() - 1647.81).abs() < 1e-6);
/// assert!((result.monthly_installment.unwrap().reais() - 274.635).abs() < 1e-6);
/// ```
pub fn compute_package_quote(input: &PackageQuoteInput) -> PackageQuoteResult {
    let info = input.tier.info();
    let total_with_discount = info.list_price_pix.apply_discount(input.discount_percentage);

    // The 6x plan always divides by the catalog's fixed count, discount or
    // not. PIX has no installment value at all.
    let monthly_installment = match input.payment_method {
        PaymentMethod::Installments6x => Some(total_with_discount.split(info.installments)),
        PaymentMethod::CashPix => None,
    };

    let (print_run_unit_price, print_run_total) = match input.print_run {
        Some(run) => {
            let unit = run.cover_unit_price.apply_discount(run.discount_percentage);
            (unit, unit.times(run.quantity))
        }
        None => (Brl::zero(), Brl::zero()),
    };

    PackageQuoteResult {
        list_price: info.list_price_pix,
        total_with_discount,
        monthly_installment,
        installment_count: info.installments,
        print_run_unit_price,
        print_run_total,
        grand_total: total_with_discount + print_run_total,
    }
}

// =============================================================================
// Document Contexts
// =============================================================================

/// Free-text fields common to both package document variants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PackageParams {
    /// Client name (also the author/responsible in university documents).
    pub client: String,

    /// Consultant preparing the quote.
    pub consultant: String,

    /// Title of the work being published.
    pub work_title: String,

    /// Page count of the work.
    pub pages: u64,

    /// Free-form observations.
    pub observations: String,
}

/// University-specific fields for the university document variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UniversityParams {
    /// University name.
    pub university: String,

    /// Contact (phone/email).
    pub contact: String,

    /// Honorific for the author (one of [`HONORIFICS`]).
    pub honorific: String,
}

/// Builds the template context for the common (non-university) document.
///
/// Field names are a literal contract with the template files.
pub fn common_document_context(
    params: &PackageParams,
    input: &PackageQuoteInput,
    result: &PackageQuoteResult,
    date_display: &str,
) -> BTreeMap<String, String> {
    let mut ctx = BTreeMap::new();
    ctx.insert("data".into(), date_display.to_string());
    ctx.insert("cliente".into(), params.client.clone());
    ctx.insert("consultor".into(), params.consultant.clone());
    ctx.insert("obra".into(), params.work_title.clone());
    ctx.insert("paginas".into(), params.pages.to_string());
    ctx.insert("pacote".into(), input.tier.as_str().to_string());
    ctx.insert("forma_pag".into(), input.payment_method.as_str().to_string());
    ctx.insert("preco_lista".into(), format::brl(result.list_price));
    ctx.insert("desc_pac_pct".into(), format::percent0(input.discount_percentage));
    ctx.insert(
        "valor_com_desconto".into(),
        format::brl(result.total_with_discount),
    );
    ctx.insert("mensal_final".into(), format::brl_opt(result.monthly_installment));
    ctx.insert("observacoes".into(), params.observations.clone());
    ctx
}

/// Builds the template context for the university document variant:
/// the common fields plus the university/print-run additions.
///
/// Generating with the print run unset still succeeds — the print-run
/// fields render their zero values.
pub fn university_document_context(
    params: &PackageParams,
    uni: &UniversityParams,
    input: &PackageQuoteInput,
    result: &PackageQuoteResult,
    date_display: &str,
) -> BTreeMap<String, String> {
    let run = input.print_run.unwrap_or_default();

    let mut ctx = common_document_context(params, input, result, date_display);
    ctx.insert("universidade".into(), uni.university.clone());
    ctx.insert("contato".into(), uni.contact.clone());
    ctx.insert("tratamento".into(), uni.honorific.clone());
    ctx.insert("autor".into(), params.client.clone());
    ctx.insert("preco_capa".into(), format::brl(run.cover_unit_price));
    ctx.insert(
        "desc_tiragem_pct".into(),
        format::percent0(run.discount_percentage),
    );
    ctx.insert("preco_unitario".into(), format::brl(result.print_run_unit_price));
    ctx.insert("tiragem_qtd".into(), run.quantity.to_string());
    ctx.insert("total_tiragem".into(), format::brl(result.print_run_total));
    ctx.insert("ebook_preco".into(), format::brl(run.ebook_price));
    ctx.insert("total_geral".into(), format::brl(result.grand_total));
    ctx
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    fn especial_6x() -> PackageQuoteInput {
        PackageQuoteInput {
            tier: PackageTier::Especial,
            payment_method: PaymentMethod::Installments6x,
            discount_percentage: Percent::from_value(15.0),
            print_run: None,
        }
    }

    fn sample_print_run() -> PrintRunInput {
        PrintRunInput {
            cover_unit_price: Brl::from_reais(75.0),
            quantity: 100,
            discount_percentage: Percent::from_value(30.0),
            ebook_price: Brl::from_reais(0.0),
        }
    }

    #[test]
    fn test_especial_with_15_pct_discount() {
        let result = compute_package_quote(&especial_6x());

        assert!((result.list_price.reais() - 1938.60).abs() < EPS);
        assert!((result.total_with_discount.reais() - 1647.81).abs() < EPS);
        assert!(
            (result.monthly_installment.unwrap().reais() - 274.635).abs() < EPS
        );
        assert_eq!(result.installment_count, 6);
    }

    #[test]
    fn test_pix_has_no_installment_value() {
        let mut input = especial_6x();
        input.payment_method = PaymentMethod::CashPix;

        let result = compute_package_quote(&input);
        // Absent, not zero
        assert_eq!(result.monthly_installment, None);
        assert!((result.total_with_discount.reais() - 1647.81).abs() < EPS);
    }

    #[test]
    fn test_six_x_divides_by_fixed_count_regardless_of_discount() {
        for pct in [0.0, 10.0, 40.0] {
            let mut input = especial_6x();
            input.discount_percentage = Percent::from_value(pct);

            let result = compute_package_quote(&input);
            let monthly = result.monthly_installment.unwrap().reais();
            assert!((monthly * 6.0 - result.total_with_discount.reais()).abs() < EPS);
        }
    }

    #[test]
    fn test_print_run_sub_quote() {
        let mut input = especial_6x();
        input.print_run = Some(sample_print_run());

        let result = compute_package_quote(&input);
        assert!((result.print_run_unit_price.reais() - 52.50).abs() < EPS);
        assert!((result.print_run_total.reais() - 5250.0).abs() < EPS);
        assert!(
            (result.grand_total.reais() - (result.total_with_discount.reais() + 5250.0)).abs()
                < EPS
        );
    }

    #[test]
    fn test_print_run_independent_of_package_discount() {
        let mut a = especial_6x();
        a.print_run = Some(sample_print_run());
        let mut b = a;
        b.discount_percentage = Percent::zero();

        let ra = compute_package_quote(&a);
        let rb = compute_package_quote(&b);
        assert!((ra.print_run_total.reais() - rb.print_run_total.reais()).abs() < EPS);
    }

    #[test]
    fn test_no_print_run_contributes_zero() {
        let result = compute_package_quote(&especial_6x());
        assert!(result.print_run_unit_price.is_zero());
        assert!(result.print_run_total.is_zero());
        assert!(
            (result.grand_total.reais() - result.total_with_discount.reais()).abs() < EPS
        );
    }

    #[test]
    fn test_zero_quantity_print_run_contributes_zero() {
        let mut input = especial_6x();
        input.print_run = Some(PrintRunInput {
            quantity: 0,
            ..sample_print_run()
        });

        let result = compute_package_quote(&input);
        assert!(result.print_run_total.is_zero());
        assert!((result.print_run_unit_price.reais() - 52.50).abs() < EPS);
    }

    #[test]
    fn test_ebook_price_never_enters_totals() {
        let mut input = especial_6x();
        input.print_run = Some(PrintRunInput {
            ebook_price: Brl::from_reais(49.90),
            ..sample_print_run()
        });

        let result = compute_package_quote(&input);
        assert!(
            (result.grand_total.reais() - (result.total_with_discount.reais() + 5250.0)).abs()
                < EPS
        );
    }

    #[test]
    fn test_idempotence() {
        let mut input = especial_6x();
        input.print_run = Some(sample_print_run());

        let a = compute_package_quote(&input);
        let b = compute_package_quote(&input);
        assert_eq!(a, b);
    }

    #[test]
    fn test_payment_method_labels() {
        assert_eq!(PaymentMethod::Installments6x.as_str(), "6x sem juros");
        assert_eq!(PaymentMethod::CashPix.as_str(), "à vista (PIX)");
        assert_eq!(
            PaymentMethod::from_name("6x sem juros").unwrap(),
            PaymentMethod::Installments6x
        );
        assert!(matches!(
            PaymentMethod::from_name("boleto"),
            Err(CoreError::InvalidPaymentMethod(_))
        ));
    }

    #[test]
    fn test_payment_method_wire_values() {
        let json = serde_json::to_string(&PaymentMethod::Installments6x).unwrap();
        assert_eq!(json, "\"installments-6x\"");
        let back: PaymentMethod = serde_json::from_str("\"cash-pix\"").unwrap();
        assert_eq!(back, PaymentMethod::CashPix);
    }

    #[test]
    fn test_common_document_context() {
        let params = PackageParams {
            client: "Prof. João Silva".into(),
            consultant: "Lucas Martins".into(),
            work_title: "DICIONÁRIO TEMÁTICO DE TURISMO E PATRIMÔNIO".into(),
            pages: 250,
            observations: String::new(),
        };
        let input = especial_6x();
        let result = compute_package_quote(&input);
        let ctx = common_document_context(&params, &input, &result, "25/01/2024");

        let expected = [
            "data",
            "cliente",
            "consultor",
            "obra",
            "paginas",
            "pacote",
            "forma_pag",
            "preco_lista",
            "desc_pac_pct",
            "valor_com_desconto",
            "mensal_final",
            "observacoes",
        ];
        assert_eq!(ctx.len(), expected.len());
        for field in expected {
            assert!(ctx.contains_key(field), "missing field {field}");
        }

        assert_eq!(ctx["pacote"], "Especial");
        assert_eq!(ctx["forma_pag"], "6x sem juros");
        assert_eq!(ctx["preco_lista"], "R$ 1.938,60");
        assert_eq!(ctx["desc_pac_pct"], "15%");
        assert_eq!(ctx["valor_com_desconto"], "R$ 1.647,81");
        // 274.635 sits on a rounding boundary; the displayed centavo depends
        // on the f64 representation, so only pin the stable prefix here.
        assert!(ctx["mensal_final"].starts_with("R$ 274,6"));
        assert_eq!(ctx["paginas"], "250");
    }

    #[test]
    fn test_common_context_pix_renders_em_dash() {
        let mut input = especial_6x();
        input.payment_method = PaymentMethod::CashPix;
        let result = compute_package_quote(&input);
        let ctx =
            common_document_context(&PackageParams::default(), &input, &result, "25/01/2024");

        assert_eq!(ctx["mensal_final"], "—");
    }

    #[test]
    fn test_university_document_context() {
        let params = PackageParams {
            client: "Profa. Maria Souza".into(),
            consultant: "Lucas Martins".into(),
            work_title: "Obra".into(),
            pages: 180,
            observations: String::new(),
        };
        let uni = UniversityParams {
            university: "Universidade Federal de Viçosa".into(),
            contact: "(31) 99999-0000".into(),
            honorific: "Profa.".into(),
        };
        let mut input = especial_6x();
        input.print_run = Some(sample_print_run());
        let result = compute_package_quote(&input);
        let ctx = university_document_context(&params, &uni, &input, &result, "25/01/2024");

        // Common fields plus the university additions
        assert_eq!(ctx.len(), 12 + 11);
        assert_eq!(ctx["autor"], "Profa. Maria Souza");
        assert_eq!(ctx["tratamento"], "Profa.");
        assert_eq!(ctx["preco_capa"], "R$ 75,00");
        assert_eq!(ctx["desc_tiragem_pct"], "30%");
        assert_eq!(ctx["preco_unitario"], "R$ 52,50");
        assert_eq!(ctx["tiragem_qtd"], "100");
        assert_eq!(ctx["total_tiragem"], "R$ 5.250,00");
        assert_eq!(ctx["ebook_preco"], "R$ 0,00");
    }

    #[test]
    fn test_university_context_without_print_run_defaults_to_zero() {
        let input = especial_6x();
        let result = compute_package_quote(&input);
        let ctx = university_document_context(
            &PackageParams::default(),
            &UniversityParams::default(),
            &input,
            &result,
            "25/01/2024",
        );

        assert_eq!(ctx["preco_capa"], "R$ 0,00");
        assert_eq!(ctx["tiragem_qtd"], "0");
        assert_eq!(ctx["total_tiragem"], "R$ 0,00");
        assert_eq!(ctx["total_geral"], ctx["valor_com_desconto"]);
    }
}
