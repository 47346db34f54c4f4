//! Locale support for currency formatting
//!
//! This module loads the embedded locale table and resolves locale
//! identifiers, including the ambient locale taken from the environment.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::{FormatError, Result};
use crate::types::LocaleSettings;

/// Holds the settings of every locale in the embedded table
pub struct LocaleManager {
    locale_settings: HashMap<String, LocaleSettings>,
}

// Global singleton for locale settings
static LOCALE_MANAGER: OnceLock<LocaleManager> = OnceLock::new();

impl LocaleManager {
    /// Create a new locale manager with the embedded locale data
    fn new() -> Self {
        let mut manager = Self {
            locale_settings: HashMap::new(),
        };

        if let Err(e) = manager.load_embedded_data() {
            tracing::error!(error = %e, "failed to load embedded locale data");
        }

        manager
    }

    fn load_embedded_data(&mut self) -> Result<()> {
        let locale_settings_toml = include_str!("locale/locales.toml");
        self.parse_locale_settings(locale_settings_toml)
    }

    /// Parse the locale table; every entry starts from `[base]`
    fn parse_locale_settings(&mut self, toml_str: &str) -> Result<()> {
        let parsed_toml: toml::Value =
            toml::from_str(toml_str).map_err(|e| FormatError::LocaleData(e.to_string()))?;

        let table = parsed_toml
            .as_table()
            .ok_or_else(|| FormatError::LocaleData("Root is not a table".to_string()))?;

        let mut base_settings = LocaleSettings::default();
        if let Some(base) = table.get("base") {
            apply_locale_specific_settings(&mut base_settings, base)?;
        }

        for (locale_id, value) in table {
            if locale_id == "base" {
                continue;
            }

            let mut locale_settings = base_settings.clone();
            apply_locale_specific_settings(&mut locale_settings, value)?;
            self.locale_settings
                .insert(locale_id.to_string(), locale_settings);
        }

        Ok(())
    }

    fn get() -> &'static Self {
        LOCALE_MANAGER.get_or_init(Self::new)
    }

    fn get_locale_settings(&self, locale_id: &str) -> Option<&LocaleSettings> {
        self.locale_settings.get(locale_id)
    }
}

/// Apply the keys of one locale table over `settings`
fn apply_locale_specific_settings(settings: &mut LocaleSettings, value: &toml::Value) -> Result<()> {
    let table = value
        .as_table()
        .ok_or_else(|| FormatError::LocaleData("Locale setting is not a table".to_string()))?;

    if let Some(c) = single_char(table, "decimal")? {
        settings.decimal_point = c;
    }
    if let Some(c) = single_char(table, "group")? {
        settings.grouping_separator = c;
    }
    if let Some(c) = single_char(table, "minus")? {
        settings.minus_sign = c;
    }

    if let Some(pattern) = table.get("pattern").and_then(|v| v.as_str()) {
        settings.currency_pattern = pattern.to_string();
    }

    if let Some(currency) = table.get("currency").and_then(|v| v.as_str()) {
        settings.default_currency = Some(currency.to_string());
    }

    if let Some(symbols) = table.get("symbols") {
        let symbols = symbols
            .as_table()
            .ok_or_else(|| FormatError::LocaleData("symbols is not a table".to_string()))?;
        for (code, symbol) in symbols {
            let symbol = symbol.as_str().ok_or_else(|| {
                FormatError::LocaleData(format!("symbol for {code} is not a string"))
            })?;
            settings
                .currency_symbols
                .insert(code.to_string(), symbol.to_string());
        }
    }

    Ok(())
}

fn single_char(table: &toml::Table, key: &str) -> Result<Option<char>> {
    let Some(value) = table.get(key).and_then(|v| v.as_str()) else {
        return Ok(None);
    };
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(Some(c)),
        _ => Err(FormatError::LocaleData(format!(
            "{key} must be a single character, got '{value}'"
        ))),
    }
}

/// Get locale settings by locale identifier (e.g., "en_US", "de-DE")
pub fn get_locale_settings(locale_id: &str) -> Option<LocaleSettings> {
    let normalized = normalize_locale_id(locale_id)?;
    LocaleManager::get()
        .get_locale_settings(&normalized)
        .cloned()
}

/// List the identifiers of all embedded locales, sorted
pub fn available_locales() -> Vec<String> {
    let mut ids: Vec<String> = LocaleManager::get()
        .locale_settings
        .keys()
        .cloned()
        .collect();
    ids.sort();
    ids
}

/// Normalize a POSIX or BCP 47 style locale name to `ll_CC`
///
/// Encoding and modifier suffixes are dropped (`en_US.UTF-8@euro` becomes
/// `en_US`). Returns `None` for empty names and for `C`/`POSIX`, which carry
/// no language.
pub fn normalize_locale_id(raw: &str) -> Option<String> {
    let name = raw.trim();
    let name = name.split(['.', '@']).next().unwrap_or_default();
    if name.is_empty() || name.eq_ignore_ascii_case("C") || name.eq_ignore_ascii_case("POSIX") {
        return None;
    }

    let mut parts = name.split(['_', '-']);
    let language = parts.next()?.to_ascii_lowercase();
    if language.is_empty() || !language.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }

    match parts.next() {
        Some(region) if !region.is_empty() => {
            Some(format!("{language}_{}", region.to_ascii_uppercase()))
        }
        _ => Some(language),
    }
}

/// Pick the monetary locale from POSIX variables: `LC_ALL`, then `LC_MONETARY`, then `LANG`
pub fn locale_from_env_values(
    lc_all: Option<&str>,
    lc_monetary: Option<&str>,
    lang: Option<&str>,
) -> Option<String> {
    [lc_all, lc_monetary, lang]
        .into_iter()
        .flatten()
        .find_map(normalize_locale_id)
}

/// The locale of the running process, if the environment names one
pub fn ambient_locale_id() -> Option<String> {
    let read = |name: &str| std::env::var(name).ok();
    let lc_all = read("LC_ALL");
    let lc_monetary = read("LC_MONETARY");
    let lang = read("LANG");
    locale_from_env_values(lc_all.as_deref(), lc_monetary.as_deref(), lang.as_deref())
}
