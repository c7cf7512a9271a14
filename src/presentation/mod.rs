//! Display helpers: rupiah formatting, amount entry, the DPP/PPN split used
//! for charting, and the plain-text summary.

mod amount;
mod composition;
mod currency;
mod summary;

pub use amount::parse_gross_amount;
pub use composition::{CompositionSlice, InvoiceComposition, invoice_composition};
pub use currency::{RUPIAH_SEPARATOR, format_idr};
pub use summary::summary_text;
