//! Price formatting strategies
//!
//! A `FormatPriceStrategy` decides how a priced product is shown. Callers
//! hold a strategy and never care which rendering it performs.

use crate::currency_formatter::{CurrencyFormatter, plain_text, render_price};
use crate::error::Result;
use crate::parser::parse_currency_pattern;
use crate::types::{CurrencyPattern, LocaleSettings, PricedProduct};

/// Renders a priced product as display text
pub trait FormatPriceStrategy: Send + Sync {
    fn format(&self, product: &PricedProduct) -> String;
}

/// Delegates to the locale-aware currency formatter
///
/// The default instance follows the ambient locale; `with_formatter` pins
/// one.
#[derive(Debug, Clone, Default)]
pub struct LocaleDependentFormatPriceStrategy {
    formatter: Option<CurrencyFormatter>,
}

impl LocaleDependentFormatPriceStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_formatter(formatter: CurrencyFormatter) -> Self {
        Self {
            formatter: Some(formatter),
        }
    }

    fn formatter(&self) -> &CurrencyFormatter {
        self.formatter
            .as_ref()
            .unwrap_or_else(|| CurrencyFormatter::current())
    }
}

impl FormatPriceStrategy for LocaleDependentFormatPriceStrategy {
    fn format(&self, product: &PricedProduct) -> String {
        self.formatter().format(product.price, &product.currency)
    }
}

/// Renders with one fixed pattern and invariant number symbols
///
/// Output does not depend on the ambient locale, which suits logs, receipts
/// and exports.
#[derive(Debug, Clone)]
pub struct PatternFormatPriceStrategy {
    pattern: CurrencyPattern,
    settings: LocaleSettings,
}

impl PatternFormatPriceStrategy {
    /// `12.50 USD` style: plain digits followed by the ISO code
    pub const FIXED_PATTERN: &'static str = "0.00 ¤¤";

    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self {
            pattern: parse_currency_pattern(pattern)?,
            settings: LocaleSettings::default(),
        })
    }

    pub fn fixed() -> Result<Self> {
        Self::new(Self::FIXED_PATTERN)
    }

    /// Use other number symbols, e.g. a decimal comma
    ///
    /// An empty currency code renders in `settings.default_currency`; the
    /// invariant settings have none, so such products fall back to plain text.
    pub fn with_settings(mut self, settings: LocaleSettings) -> Self {
        self.settings = settings;
        self
    }
}

impl FormatPriceStrategy for PatternFormatPriceStrategy {
    fn format(&self, product: &PricedProduct) -> String {
        render_price(product.price, &product.currency, &self.pattern, &self.settings)
            .unwrap_or_else(|e| {
                tracing::warn!(
                    price = product.price,
                    currency = %product.currency,
                    error = %e,
                    "failed to format price"
                );
                plain_text(&product.price.to_string(), &product.currency)
            })
    }
}
