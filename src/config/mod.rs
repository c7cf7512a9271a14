//! Configuration loading and management for the tax engine.
//!
//! This module loads the tax schedule (VAT choices and withholding rates with
//! their legal references) from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use pajak_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/indonesia").unwrap();
//! println!("Loaded regime: {}", config.regime().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    GoodsWithholding, RegimeMetadata, ServicesWithholding, TaxSchedule, VatConfig,
    WithholdingSchedule,
};
