//! Configuration types for the tax schedule.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. Every type also has a
//! `Default` carrying the statutory figures, so the engine runs without files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{RateSelectionInput, TransactionType};

/// Metadata about the tax regime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeMetadata {
    /// Short code for the regime (e.g., "ID-PPN-PPH").
    pub code: String,
    /// The human-readable name of the regime.
    pub name: String,
    /// The version or effective date of the schedule.
    pub version: String,
    /// URL to the official regulation.
    pub source_url: String,
}

impl Default for RegimeMetadata {
    fn default() -> Self {
        Self {
            code: "ID-PPN-PPH".to_string(),
            name: "Indonesian PPN and PPh withholding".to_string(),
            version: "2022-04-01".to_string(),
            source_url: "https://peraturan.bpk.go.id/Details/185162/uu-no-7-tahun-2021".to_string(),
        }
    }
}

/// VAT configuration from vat.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VatConfig {
    /// Reference to the statute setting the rate.
    pub clause: String,
    /// The rate preselected in the calculator.
    pub default_rate: Decimal,
    /// Rates offered as quick-select choices.
    pub quick_select: Vec<Decimal>,
}

impl VatConfig {
    /// Returns true when `rate` is not one of the quick-select choices.
    ///
    /// # Example
    ///
    /// ```
    /// use pajak_engine::config::VatConfig;
    /// use rust_decimal::Decimal;
    ///
    /// let vat = VatConfig::default();
    /// assert!(!vat.is_custom_rate(Decimal::from(12)));
    /// assert!(vat.is_custom_rate(Decimal::from(10)));
    /// ```
    pub fn is_custom_rate(&self, rate: Decimal) -> bool {
        !self.quick_select.contains(&rate)
    }
}

impl Default for VatConfig {
    fn default() -> Self {
        Self {
            clause: "UU PPN Pasal 7 ayat (1) (UU HPP No. 7/2021)".to_string(),
            default_rate: Decimal::from(11),
            quick_select: vec![Decimal::from(11), Decimal::from(12)],
        }
    }
}

/// PPh 23 rates for services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicesWithholding {
    /// Reference to the statute for this regime.
    pub clause: String,
    /// Rate when the vendor has an NPWP.
    pub with_tax_id: Decimal,
    /// Rate when the vendor has no NPWP.
    pub without_tax_id: Decimal,
}

/// PPh 22 rates for goods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoodsWithholding {
    /// Reference to the regulation for this regime.
    pub clause: String,
    /// Rate when selling to a government or state-enterprise collector.
    pub government_treasurer: Decimal,
    /// Rate for ordinary retail sales.
    pub retail: Decimal,
}

/// Withholding configuration from withholding.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithholdingSchedule {
    /// PPh 23 rates.
    pub services: ServicesWithholding,
    /// PPh 22 rates.
    pub goods: GoodsWithholding,
}

impl WithholdingSchedule {
    /// Returns the effective withholding rate for `input`.
    ///
    /// First match wins:
    /// 1. a manual override, returned verbatim;
    /// 2. services: the NPWP or non-NPWP PPh 23 rate, regardless of treasurer;
    /// 3. goods: the treasurer PPh 22 rate, or the retail rate.
    pub fn rate_for(&self, input: &RateSelectionInput) -> Decimal {
        if let Some(rate) = input.manual_override_rate {
            return rate;
        }

        match input.transaction_type {
            TransactionType::Services => {
                if input.has_tax_id {
                    self.services.with_tax_id
                } else {
                    self.services.without_tax_id
                }
            }
            TransactionType::Goods => {
                if input.is_government_treasurer {
                    self.goods.government_treasurer
                } else {
                    self.goods.retail
                }
            }
        }
    }

    /// Returns the legal reference for a transaction type.
    pub fn clause_for(&self, transaction_type: TransactionType) -> &str {
        match transaction_type {
            TransactionType::Services => &self.services.clause,
            TransactionType::Goods => &self.goods.clause,
        }
    }
}

impl Default for WithholdingSchedule {
    fn default() -> Self {
        Self {
            services: ServicesWithholding {
                clause: "UU PPh Pasal 23 ayat (1) huruf c, ayat (1a)".to_string(),
                with_tax_id: Decimal::from(2),
                without_tax_id: Decimal::from(4),
            },
            goods: GoodsWithholding {
                clause: "UU PPh Pasal 22; PMK 34/PMK.010/2017".to_string(),
                government_treasurer: Decimal::new(15, 1),
                retail: Decimal::ZERO,
            },
        }
    }
}

/// The complete tax schedule loaded from YAML files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSchedule {
    /// Regime metadata.
    pub regime: RegimeMetadata,
    /// VAT configuration.
    pub vat: VatConfig,
    /// Withholding rates.
    pub withholding: WithholdingSchedule,
}
