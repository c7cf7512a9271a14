//! Calculator form state and the updates that change it.
//!
//! [`CalculatorState`] is the single immutable record of everything a user
//! has entered. Each [`FormUpdate`] produces a new state; recomputing from a
//! state is a pure function, so there is never a stale intermediate result.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::presentation::parse_gross_amount;

use super::{RateSelectionInput, TransactionType};

/// Default VAT rate shown when the calculator opens.
pub const DEFAULT_VAT_RATE: Decimal = Decimal::from_parts(11, 0, 0, false, 0);

/// Everything the user has entered into the calculator.
///
/// # Example
///
/// ```
/// use pajak_engine::models::{CalculatorState, FormUpdate, TransactionType};
/// use rust_decimal::Decimal;
///
/// let state = CalculatorState::default()
///     .apply(FormUpdate::ManualOverrideRate(Some(Decimal::new(75, 1))))
///     .unwrap()
///     .apply(FormUpdate::TransactionType(TransactionType::Services))
///     .unwrap();
///
/// // Switching category discards the manual figure.
/// assert_eq!(state.rate_selection.manual_override_rate, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Tax-inclusive invoice total in whole rupiah.
    pub gross_amount: i64,
    /// VAT percentage.
    pub vat_rate: Decimal,
    /// Inputs that decide the withholding rate.
    pub rate_selection: RateSelectionInput,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            gross_amount: 0,
            vat_rate: DEFAULT_VAT_RATE,
            rate_selection: RateSelectionInput::default(),
        }
    }
}

/// A single change made through the calculator form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormUpdate {
    /// Set the gross amount directly.
    GrossAmount(i64),
    /// Set the gross amount from free text; non-digits are ignored.
    GrossAmountText(String),
    /// Set the VAT rate (quick-select or custom).
    VatRate(Decimal),
    /// Switch between goods and services. Clears any manual override.
    TransactionType(TransactionType),
    /// Toggle whether the vendor has an NPWP.
    HasTaxId(bool),
    /// Toggle whether the counterparty is a government collector.
    GovernmentTreasurer(bool),
    /// Set or clear the manual withholding rate.
    ManualOverrideRate(Option<Decimal>),
}

impl CalculatorState {
    /// Returns the state after applying `update`.
    ///
    /// Only [`FormUpdate::GrossAmountText`] can fail, when the digits do not
    /// fit a rupiah amount.
    pub fn apply(self, update: FormUpdate) -> EngineResult<Self> {
        let mut next = self;
        match update {
            FormUpdate::GrossAmount(amount) => next.gross_amount = amount,
            FormUpdate::GrossAmountText(text) => next.gross_amount = parse_gross_amount(&text)?,
            FormUpdate::VatRate(rate) => next.vat_rate = rate,
            FormUpdate::TransactionType(transaction_type) => {
                next.rate_selection.transaction_type = transaction_type;
                next.rate_selection.manual_override_rate = None;
            }
            FormUpdate::HasTaxId(has_tax_id) => next.rate_selection.has_tax_id = has_tax_id,
            FormUpdate::GovernmentTreasurer(is_treasurer) => {
                next.rate_selection.is_government_treasurer = is_treasurer
            }
            FormUpdate::ManualOverrideRate(rate) => next.rate_selection.manual_override_rate = rate,
        }
        Ok(next)
    }
}
