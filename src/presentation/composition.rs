//! Invoice composition for charting.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::models::TaxBreakdown;

const ONE_HUNDRED: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// One slice of the invoice: its label, amount and share of the total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositionSlice {
    /// Display label.
    pub label: String,
    /// Amount in rupiah.
    pub amount: Decimal,
    /// Percentage of `tax_base + vat_amount`, two decimal places.
    pub share: Decimal,
}

/// How the invoice splits into DPP and PPN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceComposition {
    /// DPP first, then PPN.
    pub slices: Vec<CompositionSlice>,
}

/// Splits a breakdown into DPP and PPN slices.
///
/// Shares are taken against `tax_base + vat_amount` rather than the gross
/// total so they always sum to 100 (give or take rounding). An empty invoice
/// has zero shares, and so does a slice whose share exceeds the decimal range.
pub fn invoice_composition(breakdown: &TaxBreakdown, vat_rate: Decimal) -> InvoiceComposition {
    let total = breakdown.cash_under_direct_sale;

    let share = |amount: Decimal| -> Decimal {
        if total.is_zero() {
            return Decimal::ZERO;
        }
        amount
            .checked_div(total)
            .and_then(|ratio| ratio.checked_mul(ONE_HUNDRED))
            .map(|percent| {
                percent.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            })
            .unwrap_or(Decimal::ZERO)
    };

    InvoiceComposition {
        slices: vec![
            CompositionSlice {
                label: "DPP (Harga Barang/Jasa)".to_string(),
                amount: breakdown.tax_base,
                share: share(breakdown.tax_base),
            },
            CompositionSlice {
                label: format!("PPN ({}%)", vat_rate.normalize()),
                amount: breakdown.vat_amount,
                share: share(breakdown.vat_amount),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::compute_tax;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_standard_invoice_composition() {
        let breakdown = compute_tax(111_000, dec("11"), dec("2")).unwrap();
        let composition = invoice_composition(&breakdown, dec("11"));

        assert_eq!(composition.slices.len(), 2);
        assert_eq!(composition.slices[0].label, "DPP (Harga Barang/Jasa)");
        assert_eq!(composition.slices[0].amount, dec("100000"));
        assert_eq!(composition.slices[0].share, dec("90.09"));
        assert_eq!(composition.slices[1].label, "PPN (11%)");
        assert_eq!(composition.slices[1].amount, dec("11000"));
        assert_eq!(composition.slices[1].share, dec("9.91"));
    }

    #[test]
    fn test_fractional_vat_label() {
        let breakdown = compute_tax(100_000, dec("1.1"), dec("0")).unwrap();
        let composition = invoice_composition(&breakdown, dec("1.10"));
        assert_eq!(composition.slices[1].label, "PPN (1.1%)");
    }

    #[test]
    fn test_zero_vat_gives_full_share_to_tax_base() {
        let breakdown = compute_tax(50_000, dec("0"), dec("0")).unwrap();
        let composition = invoice_composition(&breakdown, dec("0"));

        assert_eq!(composition.slices[0].share, dec("100"));
        assert_eq!(composition.slices[1].share, dec("0"));
    }

    #[test]
    fn test_vat_rate_near_minus_100_does_not_overflow() {
        let breakdown = compute_tax(1_000_000_000_000_000_000, dec("-99.99999999"), dec("0")).unwrap();
        assert_eq!(breakdown.tax_base, dec("10000000000000000000000000000"));

        let composition = invoice_composition(&breakdown, dec("-99.99999999"));
        assert_eq!(composition.slices[0].share, dec("1000000000000"));
        assert_eq!(composition.slices[1].share, dec("-999999999900"));
        assert_eq!(composition.slices[1].label, "PPN (-99.99999999%)");
    }

    #[test]
    fn test_share_beyond_decimal_range_is_zero() {
        let breakdown = TaxBreakdown {
            tax_base: Decimal::MAX,
            vat_amount: Decimal::ONE - Decimal::MAX,
            withholding_amount: Decimal::ZERO,
            gross_invoice_total: Decimal::ONE,
            cash_under_direct_sale: Decimal::ONE,
            cash_under_withholding: Decimal::ONE,
            cash_under_treasury_collection: Decimal::MAX,
        };

        let composition = invoice_composition(&breakdown, dec("11"));
        assert_eq!(composition.slices[0].share, Decimal::ZERO);
        assert_eq!(composition.slices[1].share, Decimal::ZERO);
    }

    #[test]
    fn test_empty_invoice_has_zero_shares() {
        let composition = invoice_composition(&TaxBreakdown::zero(), dec("11"));
        for slice in &composition.slices {
            assert_eq!(slice.amount, Decimal::ZERO);
            assert_eq!(slice.share, Decimal::ZERO);
        }
    }
}
