//! # Proofreading Quote Engine
//!
//! Computes per-word revision quotes: word count × price-per-word, optional
//! percentage discount, equal installment split and a calendar-day delivery
//! estimate.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 Proofreading Quote Pipeline                             │
//! │                                                                         │
//! │  Form state (every keystroke)                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  QuoteInput ──► compute_quote() ──► QuoteResult                         │
//! │                                         │                               │
//! │                                         ▼                               │
//! │                                   format_quote() ──► FormattedQuote     │
//! │                                         │                               │
//! │                    ┌────────────────────┼────────────────────┐          │
//! │                    ▼                    ▼                    ▼          │
//! │              screen metrics      build_sales_script()  document_context │
//! │              (UI collaborator)   (clipboard/print/txt)  (docx fields)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both compute functions are pure: no hidden state, no I/O. Results are
//! ephemeral — recomputed on every input change, never persisted.

use chrono::{Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::{Brl, Percent};
use crate::{format, EMPTY_FIELD_PLACEHOLDER};

// =============================================================================
// Input
// =============================================================================

/// Pricing parameters for a proofreading quote.
///
/// Recreated from current form state on every recompute; carries no
/// identity. All numeric fields are assumed already clamped to sane ranges
/// by the caller (see [`crate::validation`]) — the engine only guards the
/// conditions that would produce nonsense numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct QuoteInput {
    /// Words in the document (non-negative).
    pub word_count: u64,

    /// Price charged per word.
    pub price_per_word: Brl,

    /// Whether the percentage discount applies at all.
    pub apply_discount: bool,

    /// Discount percentage, 0–100. Ignored when `apply_discount` is false.
    pub discount_percentage: Percent,

    /// Number of equal installments (1–12 in practice).
    pub installment_count: u32,

    /// Delivery lead time in calendar days.
    pub delivery_days: u32,
}

// =============================================================================
// Result
// =============================================================================

/// Derived monetary figures for a proofreading quote.
///
/// Never mutated after creation. Invariants:
/// - `final_price = base_price - discount_value >= 0` (discount rate ∈ [0,1])
/// - `installment_value × installment_count ≈ final_price` within 1e-6
///   (no remainder distribution; see the money module docs)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct QuoteResult {
    /// word_count × price_per_word.
    pub base_price: Brl,

    /// base_price × discount rate (zero when the discount is disabled).
    pub discount_value: Brl,

    /// base_price − discount_value.
    pub final_price: Brl,

    /// final_price / installment_count, or zero when final_price <= 0.
    pub installment_value: Brl,

    /// The date this quote was computed.
    #[ts(as = "String")]
    pub budget_date: NaiveDate,

    /// budget_date + delivery_days calendar days (not business-day aware).
    #[ts(as = "String")]
    pub delivery_date: NaiveDate,
}

// =============================================================================
// Compute
// =============================================================================

/// Computes a proofreading quote against today's date.
///
/// Recomputing on a later day shifts both `budget_date` and
/// `delivery_date` forward; use [`compute_quote_at`] with a captured date
/// when byte-identical results matter (tests, reprints).
///
/// ## Errors
/// `CoreError::InvalidInstallmentCount` when `installment_count` is zero.
pub fn compute_quote(input: &QuoteInput) -> CoreResult<QuoteResult> {
    compute_quote_at(input, Local::now().date_naive())
}

/// Computes a proofreading quote at a given reference date.
///
/// Pure and deterministic: identical `(input, today)` pairs always yield
/// structurally identical results.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use orca_core::money::{Brl, Percent};
/// use orca_core::revisao::{compute_quote_at, QuoteInput};
///
/// let input = QuoteInput {
///     word_count: 30_000,
///     price_per_word: Brl::from_reais(0.03),
///     apply_discount: true,
///     discount_percentage: Percent::from_value(20.0),
///     installment_count: 4,
///     delivery_days: 30,
/// };
/// let today = NaiveDate::from_ymd_opt(2024, 1, 25).unwrap();
/// let result = compute_quote_at(&input, today).unwrap();
/// assert!((result.final_price.reais() - 720.0).abs() < 1e-6);
/// ```
pub fn compute_quote_at(input: &QuoteInput, today: NaiveDate) -> CoreResult<QuoteResult> {
    if input.installment_count == 0 {
        return Err(CoreError::InvalidInstallmentCount {
            requested: input.installment_count,
        });
    }

    let base_price = input.price_per_word.times(input.word_count);
    let discount_value = if input.apply_discount {
        base_price.discount_amount(input.discount_percentage)
    } else {
        Brl::zero()
    };
    let final_price = base_price - discount_value;

    // A fully-discounted quote has nothing to split.
    let installment_value = if final_price.is_positive() {
        final_price.split(input.installment_count)
    } else {
        Brl::zero()
    };

    let delivery_date = today
        .checked_add_days(Days::new(u64::from(input.delivery_days)))
        .unwrap_or(today);

    Ok(QuoteResult {
        base_price,
        discount_value,
        final_price,
        installment_value,
        budget_date: today,
        delivery_date,
    })
}

// =============================================================================
// Formatting
// =============================================================================

/// Display strings for a proofreading quote, pt-BR formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FormattedQuote {
    /// "R$ 900,00"
    pub base_price: String,

    /// "R$ 180,00"
    pub discount_value: String,

    /// "R$ 720,00"
    pub final_price: String,

    /// "R$ 180,00"
    pub installment_value: String,

    /// "4x sem juros de R$ 180,00 cada"
    pub installment_text: String,

    /// "30.000"
    pub word_count: String,

    /// "20.0%" or "— (não aplicado)"
    pub discount_display: String,

    /// "25/01/2024"
    pub budget_date: String,

    /// "24/02/2024"
    pub delivery_date: String,
}

/// Produces the display strings for a computed quote.
pub fn format_quote(input: &QuoteInput, result: &QuoteResult) -> FormattedQuote {
    FormattedQuote {
        base_price: format::brl(result.base_price),
        discount_value: format::brl(result.discount_value),
        final_price: format::brl(result.final_price),
        installment_value: format::brl(result.installment_value),
        installment_text: format!(
            "{}x sem juros de {} cada",
            input.installment_count,
            format::brl(result.installment_value)
        ),
        word_count: format::int(input.word_count),
        discount_display: format::discount_display(
            input.apply_discount,
            input.discount_percentage,
        ),
        budget_date: format::date(result.budget_date),
        delivery_date: format::date(result.delivery_date),
    }
}

// =============================================================================
// Sales Script
// =============================================================================

/// Free-text fields accompanying a quote (client, consultant, notes).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ScriptParams {
    /// Client name; "-" placeholder when empty.
    pub client_name: String,

    /// Consultant name; "-" placeholder when empty.
    pub consultant: String,

    /// Free-form observations; "-" placeholder when empty.
    pub observations: String,
}

/// Assembles the shareable sales-script text.
///
/// Deterministic template assembly with literal labels. No escaping is
/// performed — clipboard, text file and print view all receive the raw
/// string.
pub fn build_sales_script(
    params: &ScriptParams,
    input: &QuoteInput,
    result: &QuoteResult,
    formatted: &FormattedQuote,
) -> String {
    format!(
        "Olá! 😊 Segue o orçamento da revisão ortográfica e gramatical (data: {data}):\n\
         \n\
         • Cliente: {cliente}\n\
         • Consultor: {consultor}\n\
         • Contagem de palavras: {palavras}\n\
         • Preço base: {base}\n\
         • Desconto aplicado: {desconto}\n\
         • Valor do desconto: {valor_desconto}\n\
         • Valor final: {valor_final}\n\
         • Condição de pagamento: {parcelamento}\n\
         • Prazo estimado de entrega: {prazo} dias (até {entrega})\n\
         \n\
         Observações: {obs}",
        data = format::date(result.budget_date),
        cliente = or_placeholder(&params.client_name),
        consultor = or_placeholder(&params.consultant),
        palavras = formatted.word_count,
        base = formatted.base_price,
        desconto = formatted.discount_display,
        valor_desconto = formatted.discount_value,
        valor_final = formatted.final_price,
        parcelamento = formatted.installment_text,
        prazo = input.delivery_days,
        entrega = formatted.delivery_date,
        obs = or_placeholder(&params.observations),
    )
}

fn or_placeholder(value: &str) -> &str {
    if value.trim().is_empty() {
        EMPTY_FIELD_PLACEHOLDER
    } else {
        value
    }
}

// =============================================================================
// Document Context
// =============================================================================

/// Builds the flat field-name → display-string mapping handed to the
/// document-templating collaborator for the proofreading line.
///
/// Field names are a literal contract with the template files — renaming
/// any key breaks placeholder substitution downstream.
pub fn document_context(
    params: &ScriptParams,
    input: &QuoteInput,
    result: &QuoteResult,
    formatted: &FormattedQuote,
) -> BTreeMap<String, String> {
    let mut ctx = BTreeMap::new();
    ctx.insert("nome_cliente".into(), params.client_name.clone());
    ctx.insert("consultor".into(), params.consultant.clone());
    ctx.insert("observacoes".into(), params.observations.clone());
    ctx.insert("palavras".into(), formatted.word_count.clone());
    ctx.insert("valor_palavra".into(), format::brl(input.price_per_word));
    ctx.insert("preco_base".into(), formatted.base_price.clone());
    ctx.insert("desconto_percent".into(), formatted.discount_display.clone());
    ctx.insert("valor_desconto".into(), formatted.discount_value.clone());
    ctx.insert("preco_final".into(), formatted.final_price.clone());
    ctx.insert("num_parcelas".into(), input.installment_count.to_string());
    ctx.insert("valor_parcela".into(), formatted.installment_value.clone());
    ctx.insert("parcelamento_texto".into(), formatted.installment_text.clone());
    ctx.insert("prazo_dias".into(), input.delivery_days.to_string());
    ctx.insert("data_orcamento".into(), formatted.budget_date.clone());
    ctx.insert("data_entrega".into(), formatted.delivery_date.clone());
    ctx
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    fn sample_input() -> QuoteInput {
        QuoteInput {
            word_count: 30_000,
            price_per_word: Brl::from_reais(0.03),
            apply_discount: true,
            discount_percentage: Percent::from_value(20.0),
            installment_count: 4,
            delivery_days: 30,
        }
    }

    fn jan_25() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 25).unwrap()
    }

    #[test]
    fn test_base_price_is_exact_product() {
        let mut input = sample_input();
        input.apply_discount = false;

        let result = compute_quote_at(&input, jan_25()).unwrap();
        assert!((result.base_price.reais() - 900.0).abs() < EPS);
        assert!((result.final_price.reais() - 900.0).abs() < EPS);
    }

    #[test]
    fn test_zero_words_zero_price() {
        let mut input = sample_input();
        input.word_count = 0;

        let result = compute_quote_at(&input, jan_25()).unwrap();
        assert!(result.base_price.is_zero());
        assert!(result.final_price.is_zero());
        assert!(result.installment_value.is_zero());
    }

    #[test]
    fn test_discount_bounds() {
        for pct in [0.0, 15.0, 50.0, 100.0] {
            let mut input = sample_input();
            input.discount_percentage = Percent::from_value(pct);

            let result = compute_quote_at(&input, jan_25()).unwrap();
            assert!(result.discount_value.reais() >= -EPS);
            assert!(result.discount_value.reais() <= result.base_price.reais() + EPS);
            assert!(result.final_price.reais() >= -EPS);
        }
    }

    #[test]
    fn test_disabled_discount_zeroes_value_regardless_of_percentage() {
        let mut input = sample_input();
        input.apply_discount = false;
        input.discount_percentage = Percent::from_value(80.0);

        let result = compute_quote_at(&input, jan_25()).unwrap();
        assert!(result.discount_value.is_zero());
        assert!((result.final_price.reais() - result.base_price.reais()).abs() < EPS);
    }

    #[test]
    fn test_installments_sum_to_final_within_tolerance() {
        for count in 1..=12u32 {
            let mut input = sample_input();
            input.installment_count = count;

            let result = compute_quote_at(&input, jan_25()).unwrap();
            let reconstructed = result.installment_value.reais() * count as f64;
            assert!((reconstructed - result.final_price.reais()).abs() < EPS);
        }
    }

    #[test]
    fn test_full_discount_means_zero_installment() {
        let mut input = sample_input();
        input.discount_percentage = Percent::from_value(100.0);

        let result = compute_quote_at(&input, jan_25()).unwrap();
        assert!(result.final_price.reais().abs() < EPS);
        assert!(result.installment_value.is_zero());
    }

    #[test]
    fn test_zero_installment_count_is_rejected() {
        let mut input = sample_input();
        input.installment_count = 0;

        let err = compute_quote_at(&input, jan_25()).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidInstallmentCount { requested: 0 }
        ));
    }

    #[test]
    fn test_delivery_date_crosses_month_boundary() {
        let mut input = sample_input();
        input.delivery_days = 10;

        let result = compute_quote_at(&input, jan_25()).unwrap();
        assert_eq!(result.budget_date, jan_25());
        assert_eq!(
            result.delivery_date,
            NaiveDate::from_ymd_opt(2024, 2, 4).unwrap()
        );
    }

    #[test]
    fn test_delivery_date_crosses_year_boundary() {
        let mut input = sample_input();
        input.delivery_days = 15;

        let today = NaiveDate::from_ymd_opt(2024, 12, 20).unwrap();
        let result = compute_quote_at(&input, today).unwrap();
        assert_eq!(
            result.delivery_date,
            NaiveDate::from_ymd_opt(2025, 1, 4).unwrap()
        );
    }

    #[test]
    fn test_idempotence_at_captured_date() {
        let input = sample_input();
        let a = compute_quote_at(&input, jan_25()).unwrap();
        let b = compute_quote_at(&input, jan_25()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_formatted_quote() {
        let input = sample_input();
        let result = compute_quote_at(&input, jan_25()).unwrap();
        let formatted = format_quote(&input, &result);

        assert_eq!(formatted.base_price, "R$ 900,00");
        assert_eq!(formatted.discount_value, "R$ 180,00");
        assert_eq!(formatted.final_price, "R$ 720,00");
        assert_eq!(formatted.installment_text, "4x sem juros de R$ 180,00 cada");
        assert_eq!(formatted.word_count, "30.000");
        assert_eq!(formatted.discount_display, "20.0%");
        assert_eq!(formatted.budget_date, "25/01/2024");
        assert_eq!(formatted.delivery_date, "24/02/2024");
    }

    #[test]
    fn test_sales_script_content() {
        let input = sample_input();
        let result = compute_quote_at(&input, jan_25()).unwrap();
        let formatted = format_quote(&input, &result);
        let params = ScriptParams {
            client_name: "Prof. João Silva".into(),
            consultant: "Lucas Martins".into(),
            observations: "Valores válidos por 7 dias.".into(),
        };

        let script = build_sales_script(&params, &input, &result, &formatted);
        assert!(script.starts_with("Olá! 😊 Segue o orçamento"));
        assert!(script.contains("• Cliente: Prof. João Silva"));
        assert!(script.contains("• Preço base: R$ 900,00"));
        assert!(script.contains("• Condição de pagamento: 4x sem juros de R$ 180,00 cada"));
        assert!(script.contains("• Prazo estimado de entrega: 30 dias (até 24/02/2024)"));
        assert!(script.ends_with("Observações: Valores válidos por 7 dias."));
    }

    #[test]
    fn test_sales_script_placeholders_for_empty_fields() {
        let input = sample_input();
        let result = compute_quote_at(&input, jan_25()).unwrap();
        let formatted = format_quote(&input, &result);

        let script = build_sales_script(&ScriptParams::default(), &input, &result, &formatted);
        assert!(script.contains("• Cliente: -\n"));
        assert!(script.contains("• Consultor: -\n"));
        assert!(script.ends_with("Observações: -"));
    }

    #[test]
    fn test_document_context_field_names() {
        let input = sample_input();
        let result = compute_quote_at(&input, jan_25()).unwrap();
        let formatted = format_quote(&input, &result);
        let ctx = document_context(&ScriptParams::default(), &input, &result, &formatted);

        // Literal contract with the template files
        let expected = [
            "nome_cliente",
            "consultor",
            "observacoes",
            "palavras",
            "valor_palavra",
            "preco_base",
            "desconto_percent",
            "valor_desconto",
            "preco_final",
            "num_parcelas",
            "valor_parcela",
            "parcelamento_texto",
            "prazo_dias",
            "data_orcamento",
            "data_entrega",
        ];
        assert_eq!(ctx.len(), expected.len());
        for field in expected {
            assert!(ctx.contains_key(field), "missing field {field}");
        }

        assert_eq!(ctx["valor_palavra"], "R$ 0,03");
        assert_eq!(ctx["num_parcelas"], "4");
        assert_eq!(ctx["prazo_dias"], "30");
        assert_eq!(ctx["data_orcamento"], "25/01/2024");
    }

    #[test]
    fn test_serde_camel_case_for_ipc() {
        let input = sample_input();
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains("\"wordCount\":30000"));
        assert!(json.contains("\"applyDiscount\":true"));

        let back: QuoteInput = serde_json::from_str(&json).unwrap();
        assert_eq!(back, input);
    }
}
