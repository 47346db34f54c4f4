pub mod config;
pub mod currency;
pub mod currency_formatter;
pub mod error;
pub mod formatter;
pub mod locale;
pub mod parser;
pub mod strategy;
pub mod types;

// Main API
pub use config::FormatterConfig;
pub use currency_formatter::{CurrencyFormatter, format_currency_string};
pub use error::FormatError;
pub use formatter::format_amount;
pub use parser::parse_currency_pattern;
pub use strategy::{
    FormatPriceStrategy, LocaleDependentFormatPriceStrategy, PatternFormatPriceStrategy,
};
pub use types::PricedProduct;
