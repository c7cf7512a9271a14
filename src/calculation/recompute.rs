//! The single recompute entry point.
//!
//! Derives the withholding rate from the form state, then decomposes the
//! gross amount with it. Both steps are pure; the result carries an audit
//! trace and warnings for inputs that are computed but unusual.

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::config::TaxSchedule;
use crate::error::EngineResult;
use crate::models::{
    AuditTrace, AuditWarning, CalculationResult, CalculatorState, EffectiveRates, RateSource,
    SettlementScenario, TaxCalculationInput,
};

use super::{decompose_tax, resolve_withholding_rate};

const ONE_HUNDRED: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

fn out_of_range(rate: Decimal) -> bool {
    rate < Decimal::ZERO || rate > ONE_HUNDRED
}

fn collect_warnings(
    state: &CalculatorState,
    schedule: &TaxSchedule,
    withholding_rate: Decimal,
    source: RateSource,
    rounding_drift: Decimal,
) -> Vec<AuditWarning> {
    let mut warnings = Vec::new();

    if out_of_range(state.vat_rate) {
        warnings.push(AuditWarning {
            code: "VAT_RATE_OUT_OF_RANGE".to_string(),
            message: format!(
                "VAT rate {}% is outside 0-100%; figures are computed as entered",
                state.vat_rate.normalize()
            ),
            severity: "high".to_string(),
        });
    } else if schedule.vat.is_custom_rate(state.vat_rate) {
        warnings.push(AuditWarning {
            code: "CUSTOM_VAT_RATE".to_string(),
            message: format!(
                "VAT rate {}% is not one of the standard choices",
                state.vat_rate.normalize()
            ),
            severity: "low".to_string(),
        });
    }

    if out_of_range(withholding_rate) {
        warnings.push(AuditWarning {
            code: "WITHHOLDING_RATE_OUT_OF_RANGE".to_string(),
            message: format!(
                "Withholding rate {}% is outside 0-100%; figures are computed as entered",
                withholding_rate.normalize()
            ),
            severity: "high".to_string(),
        });
    }

    if source == RateSource::ManualOverride {
        warnings.push(AuditWarning {
            code: "MANUAL_WITHHOLDING_RATE".to_string(),
            message: format!(
                "Withholding rate {}% was entered manually",
                withholding_rate.normalize()
            ),
            severity: "low".to_string(),
        });
    }

    if !rounding_drift.is_zero() {
        warnings.push(AuditWarning {
            code: "ROUNDING_DRIFT".to_string(),
            message: format!(
                "DPP + PPN differs from the invoice total by Rp{}",
                rounding_drift
            ),
            severity: "low".to_string(),
        });
    }

    warnings
}

/// Recomputes the full result for a calculator state.
///
/// Rate selection always runs first and its output feeds the decomposition,
/// so the breakdown can never be computed against a stale withholding rate.
///
/// # Errors
///
/// Propagates the decomposition errors of [`super::compute_tax`].
///
/// # Examples
///
/// ```
/// use pajak_engine::calculation::recompute;
/// use pajak_engine::config::TaxSchedule;
/// use pajak_engine::models::{CalculatorState, FormUpdate, SettlementScenario, TransactionType};
/// use rust_decimal::Decimal;
///
/// let state = CalculatorState::default()
///     .apply(FormUpdate::GrossAmount(111_000)).unwrap()
///     .apply(FormUpdate::TransactionType(TransactionType::Services)).unwrap();
///
/// let result = recompute(&state, &TaxSchedule::default()).unwrap();
/// assert_eq!(result.rates.withholding_rate, Decimal::from(2));
/// assert_eq!(result.highlighted_scenario, SettlementScenario::Withholding);
/// assert_eq!(result.expected_cash(), Decimal::from(109_000));
/// ```
pub fn recompute(state: &CalculatorState, schedule: &TaxSchedule) -> EngineResult<CalculationResult> {
    let start_time = Instant::now();
    let mut step_number: u32 = 1;

    let rate_result = resolve_withholding_rate(&state.rate_selection, &schedule.withholding, step_number);
    step_number += 1;

    let input = TaxCalculationInput {
        gross_amount: state.gross_amount,
        vat_rate_percent: state.vat_rate,
        withholding_rate_percent: rate_result.rate,
    };
    let decomposition = decompose_tax(&input, step_number)?;

    let mut steps = Vec::with_capacity(1 + decomposition.audit_steps.len());
    steps.push(rate_result.audit_step);
    steps.extend(decomposition.audit_steps);

    let breakdown = decomposition.breakdown;
    let warnings = collect_warnings(
        state,
        schedule,
        rate_result.rate,
        rate_result.source,
        breakdown.rounding_drift(),
    );

    let highlighted_scenario = SettlementScenario::for_counterparty(
        state.rate_selection.is_government_treasurer,
        rate_result.rate,
    );

    let duration_us = start_time.elapsed().as_micros() as u64;

    debug!(
        gross_amount = state.gross_amount,
        vat_rate = %state.vat_rate,
        withholding_rate = %rate_result.rate,
        tax_base = %breakdown.tax_base,
        scenario = ?highlighted_scenario,
        warnings = warnings.len(),
        "Recomputed tax breakdown"
    );

    Ok(CalculationResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        input: *state,
        withholding_regime: rate_result.regime,
        rates: EffectiveRates {
            vat_rate: state.vat_rate,
            withholding_rate: rate_result.rate,
            withholding_source: rate_result.source,
        },
        breakdown,
        highlighted_scenario,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us,
        },
    })
}
