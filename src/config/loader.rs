//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the tax
//! schedule from YAML files.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::RateSelectionInput;

use super::types::{RegimeMetadata, TaxSchedule, VatConfig, WithholdingSchedule};

/// Loads and provides access to the tax schedule.
///
/// # Directory Structure
///
/// ```text
/// config/indonesia/
/// ├── regime.yaml       # Regime metadata
/// ├── vat.yaml          # Default VAT rate and quick-select choices
/// └── withholding.yaml  # PPh 22 / PPh 23 rates
/// ```
///
/// # Example
///
/// ```no_run
/// use pajak_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/indonesia")?;
/// println!("Default VAT: {}%", loader.vat().default_rate);
/// # Ok::<(), pajak_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    schedule: TaxSchedule,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if any of the three files is missing or does not
    /// parse into its expected shape.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let regime = Self::load_yaml::<RegimeMetadata>(&path.join("regime.yaml"))?;
        let vat = Self::load_yaml::<VatConfig>(&path.join("vat.yaml"))?;
        let withholding = Self::load_yaml::<WithholdingSchedule>(&path.join("withholding.yaml"))?;

        Ok(Self {
            schedule: TaxSchedule {
                regime,
                vat,
                withholding,
            },
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the whole schedule.
    pub fn schedule(&self) -> &TaxSchedule {
        &self.schedule
    }

    /// Returns the regime metadata.
    pub fn regime(&self) -> &RegimeMetadata {
        &self.schedule.regime
    }

    /// Returns the VAT configuration.
    pub fn vat(&self) -> &VatConfig {
        &self.schedule.vat
    }

    /// Returns the withholding schedule.
    pub fn withholding(&self) -> &WithholdingSchedule {
        &self.schedule.withholding
    }

    /// Gets the withholding rate for a selection under the loaded schedule.
    pub fn withholding_rate(&self, input: &RateSelectionInput) -> Decimal {
        self.schedule.withholding.rate_for(input)
    }
}
