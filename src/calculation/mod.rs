//! Calculation logic for the tax engine.
//!
//! This module contains withholding-rate selection, the decomposition of a
//! VAT-inclusive amount into DPP, PPN and PPh, and the recompute entry point
//! that chains the two.

mod recompute;
mod tax_decomposition;
mod withholding_rate;

pub use recompute::recompute;
pub use tax_decomposition::{
    SETTLEMENT_LEGAL_BASIS, TAX_BASE_LEGAL_BASIS, TaxDecompositionResult, VAT_LEGAL_BASIS,
    WITHHOLDING_LEGAL_BASIS, compute_tax, decompose_tax,
};
pub use withholding_rate::{WithholdingRateResult, resolve_withholding_rate, select_withholding_rate};
