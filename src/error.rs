//! Error type shared by the parser, the locale tables and the formatter.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// The requested locale is not in the embedded locale table
    #[error("Locale not found: {0}")]
    UnknownLocale(String),
    /// Embedded locale or currency data could not be parsed
    #[error("Error parsing locale data: {0}")]
    LocaleData(String),
    /// The code is not three ASCII letters
    #[error("Invalid currency code: '{0}'")]
    InvalidCurrencyCode(String),
    /// Well-formed code with no entry in the currency table
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),
    #[error("Price is not a finite number: {0}")]
    NonFinitePrice(f64),
    #[error("Invalid price text: '{0}'")]
    InvalidPrice(String),
    #[error("Pattern error: {0}")]
    Pattern(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, FormatError>;
