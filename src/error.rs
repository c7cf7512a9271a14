//! Error types for the PPN/PPh tax engine.
//!
//! The decomposition itself is total over ordinary inputs; these errors cover
//! configuration loading, free-text amount parsing, and the few arithmetic
//! cases that have no defined answer.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the tax engine.
///
/// # Example
///
/// ```
/// use pajak_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/vat.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/vat.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A VAT rate of exactly -100% makes the tax base a division by zero.
    #[error("Tax base is undefined for a VAT rate of {vat_rate}%")]
    UndefinedTaxBase {
        /// The offending VAT rate, in percent.
        vat_rate: Decimal,
    },

    /// A free-text amount could not be turned into a whole rupiah figure.
    #[error("Invalid amount '{input}': {message}")]
    InvalidAmount {
        /// The raw text that was supplied.
        input: String,
        /// A description of what made the amount invalid.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
