//! Locale-aware currency formatting
//!
//! `CurrencyFormatter` binds a locale's number symbols and currency pattern
//! and renders `(amount, currency code)` pairs with it. The lenient entry
//! points never fail: if an amount or code cannot be rendered they log a
//! warning and return the plain `"<amount> <code>"` text instead.

use std::sync::OnceLock;

use crate::config::{DEFAULT_FALLBACK_LOCALE, FormatterConfig};
use crate::currency::lookup_currency;
use crate::error::{FormatError, Result};
use crate::formatter::format_amount;
use crate::locale::{get_locale_settings, normalize_locale_id};
use crate::parser::parse_currency_pattern;
use crate::types::{CurrencyDisplay, CurrencyPattern, LocaleSettings};

#[derive(Debug, Clone)]
pub struct CurrencyFormatter {
    locale_id: String,
    settings: LocaleSettings,
    pattern: CurrencyPattern,
}

static CURRENT: OnceLock<CurrencyFormatter> = OnceLock::new();

impl CurrencyFormatter {
    /// Build a formatter for a locale from the embedded table
    pub fn for_locale(locale_id: &str) -> Result<Self> {
        let id = normalize_locale_id(locale_id)
            .ok_or_else(|| FormatError::UnknownLocale(locale_id.to_string()))?;
        let settings = get_locale_settings(&id)
            .ok_or_else(|| FormatError::UnknownLocale(locale_id.to_string()))?;
        Self::with_settings(id, settings)
    }

    /// Build a formatter from explicit settings
    pub fn with_settings(locale_id: impl Into<String>, settings: LocaleSettings) -> Result<Self> {
        let pattern = parse_currency_pattern(&settings.currency_pattern)?;
        Ok(Self {
            locale_id: locale_id.into(),
            settings,
            pattern,
        })
    }

    /// Build a formatter for the locale `config` resolves to
    pub fn from_config(config: &FormatterConfig) -> Self {
        Self::for_resolved_locale(&config.resolve_locale_id())
    }

    fn for_resolved_locale(locale_id: &str) -> Self {
        Self::for_locale(locale_id)
            .or_else(|e| {
                tracing::warn!(locale = %locale_id, error = %e, "falling back to default locale");
                Self::for_locale(DEFAULT_FALLBACK_LOCALE)
            })
            .unwrap_or_else(|e| {
                tracing::error!(error = %e, "default locale unavailable, using built-in settings");
                Self::builtin()
            })
    }

    /// The process-wide formatter for the ambient locale, resolved once
    pub fn current() -> &'static Self {
        CURRENT.get_or_init(|| Self::from_config(&FormatterConfig::default()))
    }

    fn builtin() -> Self {
        Self {
            locale_id: DEFAULT_FALLBACK_LOCALE.to_string(),
            settings: LocaleSettings::default(),
            pattern: CurrencyPattern::default(),
        }
    }

    pub fn locale_id(&self) -> &str {
        &self.locale_id
    }

    pub fn settings(&self) -> &LocaleSettings {
        &self.settings
    }

    /// Format an amount in a currency, reporting why it cannot be rendered
    ///
    /// An empty code selects the locale's own currency.
    pub fn try_format(&self, amount: f64, currency: &str) -> Result<String> {
        render_price(amount, currency, &self.pattern, &self.settings)
    }

    /// Format an amount in a currency, falling back to `"<amount> <code>"`
    pub fn format(&self, amount: f64, currency: &str) -> String {
        self.try_format(amount, currency).unwrap_or_else(|e| {
            tracing::warn!(
                price = amount,
                currency,
                locale = %self.locale_id,
                error = %e,
                "failed to format price"
            );
            plain_text(&amount.to_string(), currency)
        })
    }

    /// Format a price given as text, falling back to `"<text> <code>"`
    pub fn format_str(&self, price: &str, currency: &str) -> String {
        match parse_price(price) {
            Ok(amount) => self.format(amount, currency),
            Err(e) => {
                tracing::warn!(price, currency, error = %e, "failed to parse price");
                plain_text(price.trim(), currency)
            }
        }
    }
}

/// Look up the currency and render `amount` with `pattern`
///
/// An empty code selects `settings.default_currency`; without one the code
/// is reported as invalid.
pub(crate) fn render_price(
    amount: f64,
    currency: &str,
    pattern: &CurrencyPattern,
    settings: &LocaleSettings,
) -> Result<String> {
    if !amount.is_finite() {
        return Err(FormatError::NonFinitePrice(amount));
    }

    let code = if currency.trim().is_empty() {
        settings
            .default_currency
            .as_deref()
            .ok_or_else(|| FormatError::InvalidCurrencyCode(currency.to_string()))?
    } else {
        currency
    };

    let info = lookup_currency(code)?;
    let display = CurrencyDisplay {
        symbol: info.symbol_for(settings).to_string(),
        code: info.code.to_string(),
    };

    Ok(format_amount(
        amount,
        pattern,
        settings,
        &display,
        Some(info.minor_digits),
    ))
}

/// Format an amount with the ambient-locale formatter
pub fn format_currency_string(amount: f64, currency: &str) -> String {
    CurrencyFormatter::current().format(amount, currency)
}

fn parse_price(text: &str) -> Result<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| FormatError::InvalidPrice(text.to_string()))
}

pub(crate) fn plain_text(price: &str, currency: &str) -> String {
    format!("{price} {}", currency.trim()).trim_end().to_string()
}
