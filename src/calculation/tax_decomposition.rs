//! Tax decomposition of a tax-inclusive amount.
//!
//! This module splits a gross (PPN-inclusive) invoice total into its tax base
//! (DPP), the PPN on that base, the PPh withheld on that base, and the cash the
//! seller receives under each settlement scenario.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, TaxBreakdown, TaxCalculationInput};

/// Legal basis recorded for the DPP step.
pub const TAX_BASE_LEGAL_BASIS: &str = "UU PPN Pasal 1 angka 17";

/// Legal basis recorded for the PPN step.
pub const VAT_LEGAL_BASIS: &str = "UU PPN Pasal 7 ayat (1)";

/// Legal basis recorded for the PPh step.
pub const WITHHOLDING_LEGAL_BASIS: &str = "UU PPh Pasal 22, Pasal 23";

/// Legal basis recorded for the settlement scenarios.
pub const SETTLEMENT_LEGAL_BASIS: &str = "UU PPN Pasal 16A";

const ONE_HUNDRED: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// The breakdown together with the audit steps that produced it.
#[derive(Debug, Clone)]
pub struct TaxDecompositionResult {
    /// The decomposed figures.
    pub breakdown: TaxBreakdown,
    /// One audit step per derived quantity, in calculation order.
    pub audit_steps: Vec<AuditStep>,
}

/// Rounds to a whole rupiah, halves away from zero.
fn round_rupiah(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

fn overflow(what: &str) -> EngineError {
    EngineError::CalculationError {
        message: format!("{what} is out of range"),
    }
}

struct Derivation {
    raw_tax_base: Decimal,
    raw_vat: Decimal,
    raw_withholding: Decimal,
    breakdown: TaxBreakdown,
}

fn derive(
    gross_amount: i64,
    vat_rate_percent: Decimal,
    withholding_rate_percent: Decimal,
) -> EngineResult<Derivation> {
    let gross = Decimal::from(gross_amount);
    let vat_fraction = vat_rate_percent / ONE_HUNDRED;
    let withholding_fraction = withholding_rate_percent / ONE_HUNDRED;

    let divisor = Decimal::ONE
        .checked_add(vat_fraction)
        .ok_or_else(|| overflow("VAT rate"))?;
    if divisor.is_zero() {
        return Err(EngineError::UndefinedTaxBase {
            vat_rate: vat_rate_percent,
        });
    }

    // Each quantity is rounded on its own; the drift against the gross is kept.
    let raw_tax_base = gross
        .checked_div(divisor)
        .ok_or_else(|| overflow("Tax base"))?;
    let tax_base = round_rupiah(raw_tax_base);

    let raw_vat = tax_base
        .checked_mul(vat_fraction)
        .ok_or_else(|| overflow("VAT amount"))?;
    let vat_amount = round_rupiah(raw_vat);

    let raw_withholding = tax_base
        .checked_mul(withholding_fraction)
        .ok_or_else(|| overflow("Withholding amount"))?;
    let withholding_amount = round_rupiah(raw_withholding);

    let cash_under_direct_sale = tax_base
        .checked_add(vat_amount)
        .ok_or_else(|| overflow("Direct sale cash"))?;
    let cash_under_withholding = cash_under_direct_sale
        .checked_sub(withholding_amount)
        .ok_or_else(|| overflow("Withholding cash"))?;
    let cash_under_treasury_collection = tax_base
        .checked_sub(withholding_amount)
        .ok_or_else(|| overflow("Treasury collection cash"))?;

    Ok(Derivation {
        raw_tax_base,
        raw_vat,
        raw_withholding,
        breakdown: TaxBreakdown {
            tax_base,
            vat_amount,
            withholding_amount,
            gross_invoice_total: gross,
            cash_under_direct_sale,
            cash_under_withholding,
            cash_under_treasury_collection,
        },
    })
}

/// Decomposes a tax-inclusive amount into DPP, PPN, PPh and settlement cash.
///
/// A gross amount of zero or less is the "nothing entered yet" state and
/// returns an all-zero breakdown. Rates are not validated: negative rates or
/// rates above 100 are computed by the same formulas.
///
/// # Arguments
///
/// * `gross_amount` - Invoice total including PPN, in whole rupiah
/// * `vat_rate_percent` - PPN rate, e.g. 11
/// * `withholding_rate_percent` - Effective PPh rate, e.g. 2
///
/// # Errors
///
/// * `UndefinedTaxBase` when `vat_rate_percent` is exactly -100
/// * `CalculationError` when an intermediate exceeds the decimal range
///
/// # Examples
///
/// ```
/// use pajak_engine::calculation::compute_tax;
/// use rust_decimal::Decimal;
///
/// let breakdown = compute_tax(111_000, Decimal::from(11), Decimal::from(2)).unwrap();
/// assert_eq!(breakdown.tax_base, Decimal::from(100_000));
/// assert_eq!(breakdown.vat_amount, Decimal::from(11_000));
/// assert_eq!(breakdown.withholding_amount, Decimal::from(2_000));
/// assert_eq!(breakdown.cash_under_withholding, Decimal::from(109_000));
/// assert_eq!(breakdown.cash_under_treasury_collection, Decimal::from(98_000));
/// ```
pub fn compute_tax(
    gross_amount: i64,
    vat_rate_percent: Decimal,
    withholding_rate_percent: Decimal,
) -> EngineResult<TaxBreakdown> {
    if gross_amount <= 0 {
        return Ok(TaxBreakdown::zero());
    }

    derive(gross_amount, vat_rate_percent, withholding_rate_percent).map(|d| d.breakdown)
}

/// Decomposes a tax-inclusive amount and records each step for audit.
///
/// Produces the same figures as [`compute_tax`]. Steps are numbered from
/// `step_number`; an empty invoice yields a single step.
pub fn decompose_tax(
    input: &TaxCalculationInput,
    step_number: u32,
) -> EngineResult<TaxDecompositionResult> {
    let TaxCalculationInput {
        gross_amount,
        vat_rate_percent: vat_rate,
        withholding_rate_percent: withholding_rate,
    } = *input;

    if gross_amount <= 0 {
        let audit_step = AuditStep {
            step_number,
            rule_id: "empty_invoice".to_string(),
            rule_name: "Empty Invoice".to_string(),
            legal_basis: TAX_BASE_LEGAL_BASIS.to_string(),
            input: serde_json::json!({
                "gross_amount": gross_amount.to_string()
            }),
            output: serde_json::json!({
                "all_zero": true
            }),
            reasoning: format!(
                "Gross amount {} is not positive; every figure is zero",
                gross_amount
            ),
        };

        return Ok(TaxDecompositionResult {
            breakdown: TaxBreakdown::zero(),
            audit_steps: vec![audit_step],
        });
    }

    let derivation = derive(gross_amount, vat_rate, withholding_rate)?;
    let b = derivation.breakdown;

    let tax_base_step = AuditStep {
        step_number,
        rule_id: "tax_base".to_string(),
        rule_name: "Tax Base (DPP)".to_string(),
        legal_basis: TAX_BASE_LEGAL_BASIS.to_string(),
        input: serde_json::json!({
            "gross_amount": gross_amount.to_string(),
            "vat_rate": vat_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "tax_base": b.tax_base.to_string()
        }),
        reasoning: format!(
            "Rp{} / (1 + {}/100) = Rp{} -> Rp{}",
            gross_amount,
            vat_rate.normalize(),
            derivation.raw_tax_base.round_dp(4).normalize(),
            b.tax_base
        ),
    };

    let vat_step = AuditStep {
        step_number: step_number + 1,
        rule_id: "vat_amount".to_string(),
        rule_name: "PPN Amount".to_string(),
        legal_basis: VAT_LEGAL_BASIS.to_string(),
        input: serde_json::json!({
            "tax_base": b.tax_base.to_string(),
            "vat_rate": vat_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "vat_amount": b.vat_amount.to_string(),
            "rounding_drift": b.rounding_drift().to_string()
        }),
        reasoning: format!(
            "Rp{} x {}% = Rp{} -> Rp{}",
            b.tax_base,
            vat_rate.normalize(),
            derivation.raw_vat.normalize(),
            b.vat_amount
        ),
    };

    let withholding_step = AuditStep {
        step_number: step_number + 2,
        rule_id: "withholding_amount".to_string(),
        rule_name: "PPh Amount".to_string(),
        legal_basis: WITHHOLDING_LEGAL_BASIS.to_string(),
        input: serde_json::json!({
            "tax_base": b.tax_base.to_string(),
            "withholding_rate": withholding_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "withholding_amount": b.withholding_amount.to_string()
        }),
        reasoning: format!(
            "Rp{} x {}% = Rp{} -> Rp{}",
            b.tax_base,
            withholding_rate.normalize(),
            derivation.raw_withholding.normalize(),
            b.withholding_amount
        ),
    };

    let settlement_step = AuditStep {
        step_number: step_number + 3,
        rule_id: "settlement_scenarios".to_string(),
        rule_name: "Settlement Scenarios".to_string(),
        legal_basis: SETTLEMENT_LEGAL_BASIS.to_string(),
        input: serde_json::json!({
            "tax_base": b.tax_base.to_string(),
            "vat_amount": b.vat_amount.to_string(),
            "withholding_amount": b.withholding_amount.to_string()
        }),
        output: serde_json::json!({
            "direct_sale": b.cash_under_direct_sale.to_string(),
            "withholding": b.cash_under_withholding.to_string(),
            "treasury_collection": b.cash_under_treasury_collection.to_string()
        }),
        reasoning: format!(
            "Direct sale Rp{} + Rp{} = Rp{}; withholding Rp{} - Rp{} = Rp{}; \
             treasury collection Rp{} - Rp{} = Rp{}",
            b.tax_base,
            b.vat_amount,
            b.cash_under_direct_sale,
            b.cash_under_direct_sale,
            b.withholding_amount,
            b.cash_under_withholding,
            b.tax_base,
            b.withholding_amount,
            b.cash_under_treasury_collection
        ),
    };

    Ok(TaxDecompositionResult {
        breakdown: b,
        audit_steps: vec![tax_base_step, vat_step, withholding_step, settlement_step],
    })
}
