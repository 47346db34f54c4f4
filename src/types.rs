//! Type definitions for currency patterns and prices
//!
//! This module defines the parsed representation of currency patterns
//! (tokens and sections), the locale settings used to render them, and the
//! priced value handed to a formatting strategy.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Represents a single token parsed from a currency pattern
#[derive(Debug, Clone, PartialEq)]
pub enum FormatToken {
    /// Number placeholder (0) that shows zero if no digit exists
    DigitOrZero,
    /// Number placeholder (#) that shows nothing if no digit exists
    DigitIfNeeded,
    /// Decimal point (.)
    DecimalPoint,
    /// Grouping separator (,)
    GroupingSeparator,
    /// Localized minus sign (-)
    MinusSign,
    /// Currency symbol (¤)
    CurrencySymbol,
    /// ISO currency code (¤¤)
    CurrencyCode,
    /// Literal character to display directly
    LiteralChar(char),
    /// Quoted text, like 'text'
    QuotedText(String),
}

impl FormatToken {
    /// Checks if the token belongs to the number block of a section
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            FormatToken::DigitOrZero
                | FormatToken::DigitIfNeeded
                | FormatToken::DecimalPoint
                | FormatToken::GroupingSeparator
        )
    }

    /// Checks if the token renders the currency (symbol or code)
    pub fn is_currency(&self) -> bool {
        matches!(self, FormatToken::CurrencySymbol | FormatToken::CurrencyCode)
    }
}

/// A section of a currency pattern with the layout of its number block
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormatSection {
    /// Sequence of format tokens
    pub tokens: Vec<FormatToken>,
    /// Count of `0` placeholders before the decimal point
    pub min_integer_digits: usize,
    /// Count of `0` placeholders after the decimal point
    pub min_fraction_digits: usize,
    /// Count of all placeholders after the decimal point
    pub max_fraction_digits: usize,
    /// Size of the group closest to the decimal point
    pub primary_grouping: Option<usize>,
    /// Size of every further group
    pub secondary_grouping: Option<usize>,
}

/// A complete currency pattern
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyPattern {
    /// Section used for zero and positive values (required)
    pub positive_section: FormatSection,
    /// Section used for negative values (optional)
    pub negative_section: Option<FormatSection>,
}

impl Default for CurrencyPattern {
    /// `¤#,##0.00`, the layout of the base locale
    fn default() -> Self {
        Self {
            positive_section: FormatSection {
                tokens: vec![
                    FormatToken::CurrencySymbol,
                    FormatToken::DigitIfNeeded,
                    FormatToken::GroupingSeparator,
                    FormatToken::DigitIfNeeded,
                    FormatToken::DigitIfNeeded,
                    FormatToken::DigitOrZero,
                    FormatToken::DecimalPoint,
                    FormatToken::DigitOrZero,
                    FormatToken::DigitOrZero,
                ],
                min_integer_digits: 1,
                min_fraction_digits: 2,
                max_fraction_digits: 2,
                primary_grouping: Some(3),
                secondary_grouping: Some(3),
            },
            negative_section: None,
        }
    }
}

/// Locale-specific number symbols and currency layout
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleSettings {
    /// Character used as decimal point
    pub decimal_point: char,
    /// Character used as grouping separator
    pub grouping_separator: char,
    /// Character used as minus sign
    pub minus_sign: char,
    /// Currency pattern, e.g. `¤#,##0.00`
    pub currency_pattern: String,
    /// Currency used when a caller passes an empty code
    pub default_currency: Option<String>,
    /// Symbols that differ from the currency's default symbol in this locale
    pub currency_symbols: HashMap<String, String>,
}

impl Default for LocaleSettings {
    fn default() -> Self {
        Self {
            decimal_point: '.',
            grouping_separator: ',',
            minus_sign: '-',
            currency_pattern: "¤#,##0.00".to_string(),
            default_currency: None,
            currency_symbols: HashMap::new(),
        }
    }
}

impl LocaleSettings {
    pub fn with_decimal_point(mut self, decimal_point: char) -> Self {
        self.decimal_point = decimal_point;
        self
    }

    pub fn with_grouping_separator(mut self, separator: char) -> Self {
        self.grouping_separator = separator;
        self
    }

    pub fn with_minus_sign(mut self, minus_sign: char) -> Self {
        self.minus_sign = minus_sign;
        self
    }

    pub fn with_currency_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.currency_pattern = pattern.into();
        self
    }

    pub fn with_default_currency(mut self, code: impl Into<String>) -> Self {
        self.default_currency = Some(code.into());
        self
    }

    pub fn with_currency_symbol(mut self, code: impl Into<String>, symbol: impl Into<String>) -> Self {
        self.currency_symbols.insert(code.into(), symbol.into());
        self
    }
}

/// The currency text a pattern's `¤` and `¤¤` tokens render to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyDisplay {
    pub symbol: String,
    pub code: String,
}

/// A price magnitude paired with the code of its currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedProduct {
    pub price: f64,
    pub currency: String,
}

impl PricedProduct {
    pub fn new(price: f64, currency: impl Into<String>) -> Self {
        Self {
            price,
            currency: currency.into(),
        }
    }
}
