//! Withholding-rate selection.
//!
//! This module decides the effective PPh rate from the transaction type,
//! the vendor's NPWP status, whether the buyer is a government collector,
//! and an optional manual override.

use rust_decimal::Decimal;

use crate::config::WithholdingSchedule;
use crate::models::{AuditStep, RateSelectionInput, RateSource, TransactionType, WithholdingRegime};

/// The result of resolving a withholding rate, including the audit step.
#[derive(Debug, Clone)]
pub struct WithholdingRateResult {
    /// The effective withholding percentage.
    pub rate: Decimal,
    /// The article the withholding falls under.
    pub regime: WithholdingRegime,
    /// Whether the rate came from an override or the schedule.
    pub source: RateSource,
    /// The audit step recording this decision.
    pub audit_step: AuditStep,
}

/// Returns the effective withholding rate under the statutory schedule.
///
/// First match wins:
/// 1. `manual_override_rate`, returned verbatim even if negative or above 100;
/// 2. services: 2% with an NPWP, 4% without; a government buyer does not
///    change the rate, only how it is paid;
/// 3. goods: 1.5% when sold to a government collector, otherwise 0%.
///
/// # Examples
///
/// ```
/// use pajak_engine::calculation::select_withholding_rate;
/// use pajak_engine::models::{RateSelectionInput, TransactionType};
/// use rust_decimal::Decimal;
///
/// let rate = select_withholding_rate(&RateSelectionInput {
///     transaction_type: TransactionType::Goods,
///     has_tax_id: true,
///     is_government_treasurer: true,
///     manual_override_rate: None,
/// });
/// assert_eq!(rate, Decimal::new(15, 1));
/// ```
pub fn select_withholding_rate(input: &RateSelectionInput) -> Decimal {
    WithholdingSchedule::default().rate_for(input)
}

/// Resolves the withholding rate against a configured schedule.
///
/// Same precedence as [`select_withholding_rate`], plus the regime, the
/// source of the rate, and an audit step naming the legal basis.
pub fn resolve_withholding_rate(
    input: &RateSelectionInput,
    schedule: &WithholdingSchedule,
    step_number: u32,
) -> WithholdingRateResult {
    let rate = schedule.rate_for(input);
    let regime = input.transaction_type.regime();
    let transaction_type_str = match input.transaction_type {
        TransactionType::Goods => "goods",
        TransactionType::Services => "services",
    };

    let (source, reasoning) = match input.manual_override_rate {
        Some(override_rate) => (
            RateSource::ManualOverride,
            format!(
                "Manual override {}% used instead of the schedule",
                override_rate.normalize()
            ),
        ),
        None => {
            let reasoning = match input.transaction_type {
                TransactionType::Services => format!(
                    "Services fall under {}; vendor {} NPWP, so the rate is {}%",
                    regime.label(),
                    if input.has_tax_id { "has an" } else { "has no" },
                    rate.normalize()
                ),
                TransactionType::Goods if input.is_government_treasurer => format!(
                    "Goods sold to a government collector fall under {} at {}%",
                    regime.label(),
                    rate.normalize()
                ),
                TransactionType::Goods => format!(
                    "Retail sale of goods carries {}% withholding",
                    rate.normalize()
                ),
            };
            (RateSource::Schedule, reasoning)
        }
    };

    let source_str = match source {
        RateSource::ManualOverride => "manual_override",
        RateSource::Schedule => "schedule",
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "withholding_rate".to_string(),
        rule_name: "Withholding Rate Selection".to_string(),
        legal_basis: schedule.clause_for(input.transaction_type).to_string(),
        input: serde_json::json!({
            "transaction_type": transaction_type_str,
            "has_tax_id": input.has_tax_id,
            "is_government_treasurer": input.is_government_treasurer,
            "manual_override_rate": input.manual_override_rate.map(|r| r.normalize().to_string())
        }),
        output: serde_json::json!({
            "rate": rate.normalize().to_string(),
            "regime": regime.label(),
            "source": source_str
        }),
        reasoning,
    };

    WithholdingRateResult {
        rate,
        regime,
        source,
        audit_step,
    }
}
