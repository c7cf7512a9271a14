//! Request types for the tax engine API.
//!
//! This module defines the JSON request body shared by the `/calculate` and
//! `/summary` endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{CalculatorState, RateSelectionInput, TransactionType};

/// Request body for the `/calculate` and `/summary` endpoints.
///
/// Mirrors the calculator form. Only `gross_amount` and `transaction_type`
/// are required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Tax-inclusive invoice total in whole rupiah.
    pub gross_amount: i64,
    /// VAT percentage; the configured default when absent.
    #[serde(default)]
    pub vat_rate: Option<Decimal>,
    /// Goods or services.
    pub transaction_type: TransactionType,
    /// Whether the vendor has an NPWP.
    #[serde(default = "default_has_tax_id")]
    pub has_tax_id: bool,
    /// Whether the buyer is a government treasurer.
    #[serde(default)]
    pub is_government_treasurer: bool,
    /// Explicit withholding percentage that bypasses the schedule.
    #[serde(default)]
    pub manual_override_rate: Option<Decimal>,
}

fn default_has_tax_id() -> bool {
    true
}

impl CalculationRequest {
    /// Converts the request into calculator state, filling in the VAT rate.
    pub fn into_state(self, default_vat_rate: Decimal) -> CalculatorState {
        CalculatorState {
            gross_amount: self.gross_amount,
            vat_rate: self.vat_rate.unwrap_or(default_vat_rate),
            rate_selection: RateSelectionInput {
                transaction_type: self.transaction_type,
                has_tax_id: self.has_tax_id,
                is_government_treasurer: self.is_government_treasurer,
                manual_override_rate: self.manual_override_rate,
            },
        }
    }
}
