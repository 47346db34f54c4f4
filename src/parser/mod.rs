//! Currency pattern parsing module
//!
//! This module is responsible for parsing CLDR-style currency patterns such
//! as `¤#,##0.00` or `#,##0.00 ¤` into their token representation.
//! The main entry point is the `parse_currency_pattern` function.

mod combinators;
mod format;
mod sections;
mod tokens;

pub use format::parse_currency_pattern;
