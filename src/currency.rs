//! Currency codes and the embedded currency table

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::error::{FormatError, Result};
use crate::types::LocaleSettings;

/// ISO 4217 style currency code: three ASCII letters, upper case
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn parse(raw: &str) -> Result<Self> {
        let code = raw.trim();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(FormatError::InvalidCurrencyCode(raw.to_string()));
        }
        Ok(Self(code.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What the currency table knows about one currency
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyInfo {
    pub code: CurrencyCode,
    /// Symbol used where the locale has no override
    pub symbol: String,
    /// Digits after the decimal point
    pub minor_digits: u8,
}

impl CurrencyInfo {
    /// The symbol this currency shows under `locale`
    pub fn symbol_for<'a>(&'a self, locale: &'a LocaleSettings) -> &'a str {
        locale
            .currency_symbols
            .get(self.code.as_str())
            .map(String::as_str)
            .unwrap_or(&self.symbol)
    }
}

#[derive(Debug, Deserialize)]
struct CurrencyEntry {
    symbol: String,
    digits: u8,
}

static CURRENCIES: OnceLock<HashMap<String, CurrencyInfo>> = OnceLock::new();

fn parse_currency_table(toml_str: &str) -> Result<HashMap<String, CurrencyInfo>> {
    let entries: HashMap<String, CurrencyEntry> =
        toml::from_str(toml_str).map_err(|e| FormatError::LocaleData(e.to_string()))?;

    entries
        .into_iter()
        .map(|(code, entry)| -> Result<(String, CurrencyInfo)> {
            let code = CurrencyCode::parse(&code)?;
            let info = CurrencyInfo {
                code: code.clone(),
                symbol: entry.symbol,
                minor_digits: entry.digits,
            };
            Ok((code.as_str().to_string(), info))
        })
        .collect()
}

fn currencies() -> &'static HashMap<String, CurrencyInfo> {
    CURRENCIES.get_or_init(|| {
        parse_currency_table(include_str!("locale/currencies.toml")).unwrap_or_else(|e| {
            tracing::error!(error = %e, "failed to load embedded currency data");
            HashMap::new()
        })
    })
}

/// Look up a currency by code, validating the code first
pub fn lookup_currency(code: &str) -> Result<CurrencyInfo> {
    let code = CurrencyCode::parse(code)?;
    currencies()
        .get(code.as_str())
        .cloned()
        .ok_or_else(|| FormatError::UnknownCurrency(code.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_normalizes_codes() {
        assert_eq!(CurrencyCode::parse("usd").unwrap().as_str(), "USD");
        assert_eq!(CurrencyCode::parse(" EUR ").unwrap().to_string(), "EUR");
        assert!(matches!(
            CurrencyCode::parse("US"),
            Err(FormatError::InvalidCurrencyCode(_))
        ));
        assert!(CurrencyCode::parse("U$D").is_err());
        assert!(CurrencyCode::parse("ДОЛ").is_err());
    }

    #[test]
    fn looks_up_minor_digits() {
        assert_eq!(lookup_currency("JPY").unwrap().minor_digits, 0);
        assert_eq!(lookup_currency("usd").unwrap().minor_digits, 2);
        assert_eq!(lookup_currency("KWD").unwrap().minor_digits, 3);
    }

    #[test]
    fn unknown_code_is_reported() {
        assert_eq!(
            lookup_currency("XYZ"),
            Err(FormatError::UnknownCurrency("XYZ".to_string()))
        );
    }

    #[test]
    fn locale_overrides_symbol() {
        let usd = lookup_currency("USD").unwrap();
        assert_eq!(usd.symbol_for(&LocaleSettings::default()), "US$");
        let us = LocaleSettings::default().with_currency_symbol("USD", "$");
        assert_eq!(usd.symbol_for(&us), "$");
    }

    #[test]
    fn symbol_borrows_from_locale_or_table() {
        let jpy = lookup_currency("JPY").unwrap();
        let symbol = {
            let ja = LocaleSettings::default().with_currency_symbol("JPY", "￥");
            jpy.symbol_for(&ja).to_string()
        };
        assert_eq!(symbol, "￥");
        assert_eq!(jpy.symbol_for(&LocaleSettings::default()), "¥");
    }

    #[test]
    fn malformed_table_is_an_error() {
        assert!(parse_currency_table("[USD]\nsymbol = \"$\"").is_err());
        assert!(parse_currency_table("[US]\nsymbol = \"$\"\ndigits = 2").is_err());
    }
}
