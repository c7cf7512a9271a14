//! Plain-text invoice summary for copying into messages or documents.

use rust_decimal::Decimal;

use crate::models::{TaxBreakdown, TransactionType};

use super::format_idr;

/// Renders the invoice breakdown and the three payment options as text.
///
/// The layout is fixed Indonesian text; rates are printed without trailing
/// zeros and amounts through [`format_idr`].
///
/// # Examples
///
/// ```
/// use pajak_engine::calculation::compute_tax;
/// use pajak_engine::models::TransactionType;
/// use pajak_engine::presentation::summary_text;
/// use rust_decimal::Decimal;
///
/// let breakdown = compute_tax(111_000, Decimal::from(11), Decimal::from(2)).unwrap();
/// let text = summary_text(&breakdown, TransactionType::Services, Decimal::from(11), Decimal::from(2));
/// assert!(text.contains("PPh 23 (Jasa) (2%): Rp\u{a0}2.000"));
/// ```
pub fn summary_text(
    breakdown: &TaxBreakdown,
    transaction_type: TransactionType,
    vat_rate: Decimal,
    withholding_rate: Decimal,
) -> String {
    let label = transaction_type.regime().label();

    format!(
        "Rincian Invoice (Inc PPN):\n\
         Total Invoice: {total}\n\
         \n\
         Komponen:\n\
         DPP: {dpp}\n\
         PPN ({vat_rate}%): {vat}\n\
         {label} ({withholding_rate}%): {withholding}\n\
         \n\
         Opsi Pembayaran:\n\
         - Full (Retail): {direct}\n\
         - Potong PPh (B2B): {net}\n\
         - Potong PPh+PPN (WAPU): {collected}",
        total = format_idr(breakdown.gross_invoice_total),
        dpp = format_idr(breakdown.tax_base),
        vat_rate = vat_rate.normalize(),
        vat = format_idr(breakdown.vat_amount),
        withholding_rate = withholding_rate.normalize(),
        withholding = format_idr(breakdown.withholding_amount),
        direct = format_idr(breakdown.cash_under_direct_sale),
        net = format_idr(breakdown.cash_under_withholding),
        collected = format_idr(breakdown.cash_under_treasury_collection),
    )
}
