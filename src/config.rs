//! Formatter configuration

use serde::Deserialize;

use crate::error::{FormatError, Result};
use crate::locale::{ambient_locale_id, get_locale_settings, normalize_locale_id};

pub const DEFAULT_FALLBACK_LOCALE: &str = "en_US";

/// Which locale a `CurrencyFormatter` renders for
///
/// ```toml
/// locale = "de_DE"
/// fallback_locale = "en_US"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatterConfig {
    /// Explicit locale; the environment is consulted when absent
    pub locale: Option<String>,
    /// Used when neither the explicit nor the ambient locale is in the table
    pub fallback_locale: String,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            locale: None,
            fallback_locale: DEFAULT_FALLBACK_LOCALE.to_string(),
        }
    }
}

impl FormatterConfig {
    pub fn with_locale(locale: impl Into<String>) -> Self {
        Self {
            locale: Some(locale.into()),
            ..Self::default()
        }
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| FormatError::Config(e.to_string()))?;
        if get_locale_settings(&config.fallback_locale).is_none() {
            return Err(FormatError::Config(format!(
                "fallback_locale '{}' is not a known locale",
                config.fallback_locale
            )));
        }
        Ok(config)
    }

    /// Resolve the locale id to use: explicit, then ambient, then fallback
    ///
    /// A candidate is only taken if the locale table has it, so a
    /// language-only or unsupported locale ends up on the fallback.
    pub fn resolve_locale_id(&self) -> String {
        self.resolve_with_ambient(ambient_locale_id())
    }

    pub(crate) fn resolve_with_ambient(&self, ambient: Option<String>) -> String {
        let candidates = self.locale.clone().into_iter().chain(ambient);
        for candidate in candidates {
            let known = normalize_locale_id(&candidate)
                .filter(|id| get_locale_settings(id).is_some());
            if let Some(id) = known {
                tracing::debug!(locale = %id, "resolved formatter locale");
                return id;
            }
            tracing::debug!(locale = %candidate, "locale not available, trying next");
        }

        let fallback = normalize_locale_id(&self.fallback_locale)
            .unwrap_or_else(|| DEFAULT_FALLBACK_LOCALE.to_string());
        tracing::debug!(locale = %fallback, "using fallback formatter locale");
        fallback
    }
}
