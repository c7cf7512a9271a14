//! Calculation result models for the tax engine.
//!
//! This module contains the [`CalculationResult`] type and the audit structures
//! that record how each figure in a [`TaxBreakdown`] was derived.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{CalculatorState, RateSource, SettlementScenario, TaxBreakdown, WithholdingRegime};

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The statute or regulation the rule implements.
    pub legal_basis: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag unusual inputs that are still computed, such as a custom
/// VAT rate or a rate outside 0-100%.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use pajak_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 12,
/// };
/// assert!(trace.steps.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The rates actually applied to a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectiveRates {
    /// VAT percentage used for the decomposition.
    pub vat_rate: Decimal,
    /// Withholding percentage used for the decomposition.
    pub withholding_rate: Decimal,
    /// Whether the withholding rate was supplied manually or derived.
    pub withholding_source: RateSource,
}

/// The complete result of one recompute.
///
/// Captures the form inputs, the rates derived from them, the tax breakdown,
/// the settlement scenario that matches the counterparty, and an audit trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The inputs the calculation was run on.
    pub input: CalculatorState,
    /// The withholding article that applies.
    pub withholding_regime: WithholdingRegime,
    /// The rates that were applied.
    pub rates: EffectiveRates,
    /// The decomposed figures.
    pub breakdown: TaxBreakdown,
    /// The settlement scenario matching the counterparty.
    pub highlighted_scenario: SettlementScenario,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

impl CalculationResult {
    /// Cash the seller receives under the highlighted scenario.
    pub fn expected_cash(&self) -> Decimal {
        self.breakdown.cash_for(self.highlighted_scenario)
    }
}
