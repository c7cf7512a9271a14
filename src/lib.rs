//! PPN/PPh decomposition engine for Indonesian invoices.
//!
//! This crate splits a VAT-inclusive invoice total into its tax base (DPP),
//! VAT (PPN) and income-tax withholding (PPh 22 or PPh 23), selects the
//! withholding rate from the transaction facts, and reports the cash a
//! vendor receives under each settlement scenario.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod presentation;
