//! The decomposed tax figures for a single invoice.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How the counterparty settles the invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettlementScenario {
    /// Ordinary retail buyer pays the full invoice.
    DirectSale,
    /// Business buyer withholds income tax at source.
    Withholding,
    /// Government collector (WAPU) withholds both VAT and income tax.
    TreasuryCollection,
}

impl SettlementScenario {
    /// All scenarios in display order.
    pub const ALL: [SettlementScenario; 3] = [
        SettlementScenario::DirectSale,
        SettlementScenario::Withholding,
        SettlementScenario::TreasuryCollection,
    ];

    /// Picks the scenario that matches the counterparty.
    ///
    /// A government treasurer always settles through collection; otherwise a
    /// positive withholding rate means the buyer withholds, and a zero (or
    /// negative) rate means a plain sale.
    pub fn for_counterparty(is_government_treasurer: bool, withholding_rate: Decimal) -> Self {
        if is_government_treasurer {
            SettlementScenario::TreasuryCollection
        } else if withholding_rate > Decimal::ZERO {
            SettlementScenario::Withholding
        } else {
            SettlementScenario::DirectSale
        }
    }
}

/// The result of decomposing a tax-inclusive amount.
///
/// All derived figures are whole rupiah. `gross_invoice_total` is the input
/// echoed back, so `tax_base + vat_amount` may drift from it by rounding.
///
/// # Example
///
/// ```
/// use pajak_engine::models::{SettlementScenario, TaxBreakdown};
/// use rust_decimal::Decimal;
///
/// let breakdown = TaxBreakdown::zero();
/// assert_eq!(breakdown.cash_for(SettlementScenario::Withholding), Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    /// DPP, the pre-tax base.
    pub tax_base: Decimal,
    /// PPN on the tax base.
    pub vat_amount: Decimal,
    /// PPh on the tax base.
    pub withholding_amount: Decimal,
    /// The gross amount that was decomposed.
    pub gross_invoice_total: Decimal,
    /// Cash received from a retail buyer: `tax_base + vat_amount`.
    pub cash_under_direct_sale: Decimal,
    /// Cash received when the buyer withholds PPh.
    pub cash_under_withholding: Decimal,
    /// Cash received when a collector withholds PPN and PPh.
    pub cash_under_treasury_collection: Decimal,
}

impl TaxBreakdown {
    /// The breakdown of an empty invoice.
    pub fn zero() -> Self {
        Self {
            tax_base: Decimal::ZERO,
            vat_amount: Decimal::ZERO,
            withholding_amount: Decimal::ZERO,
            gross_invoice_total: Decimal::ZERO,
            cash_under_direct_sale: Decimal::ZERO,
            cash_under_withholding: Decimal::ZERO,
            cash_under_treasury_collection: Decimal::ZERO,
        }
    }

    /// Returns the cash the seller receives under a settlement scenario.
    pub fn cash_for(&self, scenario: SettlementScenario) -> Decimal {
        match scenario {
            SettlementScenario::DirectSale => self.cash_under_direct_sale,
            SettlementScenario::Withholding => self.cash_under_withholding,
            SettlementScenario::TreasuryCollection => self.cash_under_treasury_collection,
        }
    }

    /// Difference between the reconstructed total and the gross input.
    ///
    /// Non-zero only when independent rounding of DPP and PPN drifted.
    pub fn rounding_drift(&self) -> Decimal {
        self.tax_base + self.vat_amount - self.gross_invoice_total
    }
}
