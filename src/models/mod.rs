//! Core data models for the tax engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod calculator_state;
mod tax_breakdown;
mod transaction;

pub use calculation_result::{
    AuditStep, AuditTrace, AuditWarning, CalculationResult, EffectiveRates,
};
pub use calculator_state::{CalculatorState, DEFAULT_VAT_RATE, FormUpdate};
pub use tax_breakdown::{SettlementScenario, TaxBreakdown};
pub use transaction::{
    RateSelectionInput, RateSource, TaxCalculationInput, TransactionType, WithholdingRegime,
};
