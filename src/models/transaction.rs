//! Transaction inputs for rate selection and tax decomposition.
//!
//! This module defines the [`TransactionType`] and the two input records the
//! engine consumes: [`RateSelectionInput`] for choosing the withholding rate
//! and [`TaxCalculationInput`] for decomposing a tax-inclusive amount.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// What is being sold, which decides the withholding regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    /// Sale of goods (PPh 22 when sold to a government collector).
    #[default]
    Goods,
    /// Supply of services (PPh 23).
    Services,
}

impl TransactionType {
    /// Returns the withholding regime that applies to this transaction type.
    pub fn regime(self) -> WithholdingRegime {
        match self {
            TransactionType::Goods => WithholdingRegime::Pph22,
            TransactionType::Services => WithholdingRegime::Pph23,
        }
    }
}

/// The income-tax article a withholding falls under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WithholdingRegime {
    /// PPh Pasal 22, collected on goods sold to treasurers and state enterprises.
    Pph22,
    /// PPh Pasal 23, withheld on services.
    Pph23,
}

impl WithholdingRegime {
    /// Returns the label printed next to the withholding amount.
    ///
    /// # Example
    ///
    /// ```
    /// use pajak_engine::models::WithholdingRegime;
    ///
    /// assert_eq!(WithholdingRegime::Pph23.label(), "PPh 23 (Jasa)");
    /// ```
    pub fn label(self) -> &'static str {
        match self {
            WithholdingRegime::Pph22 => "PPh 22 (Barang)",
            WithholdingRegime::Pph23 => "PPh 23 (Jasa)",
        }
    }
}

/// Where an effective withholding rate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateSource {
    /// The caller supplied an explicit rate.
    ManualOverride,
    /// The rate was derived from the withholding schedule.
    Schedule,
}

/// The inputs that determine the effective withholding rate.
///
/// # Example
///
/// ```
/// use pajak_engine::models::{RateSelectionInput, TransactionType};
///
/// let input = RateSelectionInput {
///     transaction_type: TransactionType::Services,
///     has_tax_id: true,
///     is_government_treasurer: false,
///     manual_override_rate: None,
/// };
/// assert!(input.manual_override_rate.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateSelectionInput {
    /// Goods or services.
    pub transaction_type: TransactionType,
    /// Whether the vendor holds a registered NPWP.
    pub has_tax_id: bool,
    /// Whether the counterparty is a government or state-enterprise collector (WAPU).
    pub is_government_treasurer: bool,
    /// An explicit rate that bypasses the schedule when present.
    #[serde(default)]
    pub manual_override_rate: Option<Decimal>,
}

impl Default for RateSelectionInput {
    fn default() -> Self {
        Self {
            transaction_type: TransactionType::Goods,
            has_tax_id: true,
            is_government_treasurer: false,
            manual_override_rate: None,
        }
    }
}

/// The three scalars fed into the decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxCalculationInput {
    /// Tax-inclusive invoice total in whole rupiah.
    pub gross_amount: i64,
    /// VAT percentage, e.g. 11 or 12.
    pub vat_rate_percent: Decimal,
    /// Effective withholding percentage; may be zero.
    pub withholding_rate_percent: Decimal,
}
