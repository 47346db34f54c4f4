//! Currency amount rendering
//!
//! This module renders amounts according to a parsed `CurrencyPattern`.
//! The main entry point is the `format_amount` function.

mod numeric;

use crate::types::{CurrencyDisplay, CurrencyPattern, FormatSection, FormatToken, LocaleSettings};

use numeric::{format_number_block, has_nonzero_digit};

/// No-break space placed between a letter-edged currency symbol and the digits
const CURRENCY_SPACING: char = '\u{a0}';

/// Format an amount according to a currency pattern
///
/// # Arguments
/// * `value` - The amount to format; callers reject non-finite values
/// * `pattern` - The parsed currency pattern
/// * `locale` - Number symbols used for the digits
/// * `currency` - Text rendered for the `¤` and `¤¤` tokens
/// * `fraction_digits` - Fraction width overriding the pattern's, usually the currency's minor digits
///
/// # Examples
/// ```
/// use price_format::formatter::format_amount;
/// use price_format::parser::parse_currency_pattern;
/// use price_format::types::{CurrencyDisplay, LocaleSettings};
///
/// let pattern = parse_currency_pattern("¤#,##0.00").unwrap();
/// let usd = CurrencyDisplay { symbol: "$".into(), code: "USD".into() };
/// let result = format_amount(1234.5, &pattern, &LocaleSettings::default(), &usd, None);
/// assert_eq!(result, "$1,234.50");
/// ```
pub fn format_amount(
    value: f64,
    pattern: &CurrencyPattern,
    locale: &LocaleSettings,
    currency: &CurrencyDisplay,
    fraction_digits: Option<u8>,
) -> String {
    let abs_value = value.abs();

    // Sign is decided on the rounded digits so -0.001 renders as zero
    let positive_digits =
        format_number_block(abs_value, &pattern.positive_section, locale, fraction_digits);
    let is_negative = value < 0.0 && has_nonzero_digit(&positive_digits);

    if !is_negative {
        return render_section(&pattern.positive_section, &positive_digits, locale, currency);
    }

    match &pattern.negative_section {
        Some(section) => {
            let digits = format_number_block(abs_value, section, locale, fraction_digits);
            render_section(section, &digits, locale, currency)
        }
        None => {
            let mut result = String::from(locale.minus_sign);
            result.push_str(&render_section(
                &pattern.positive_section,
                &positive_digits,
                locale,
                currency,
            ));
            result
        }
    }
}

/// Lay out a section's tokens around the already rendered number block
fn render_section(
    section: &FormatSection,
    number: &str,
    locale: &LocaleSettings,
    currency: &CurrencyDisplay,
) -> String {
    let mut result = String::new();
    let mut number_written = false;

    for (idx, token) in section.tokens.iter().enumerate() {
        match token {
            t if t.is_numeric() => {
                if !number_written {
                    result.push_str(number);
                    number_written = true;
                }
            }
            FormatToken::CurrencySymbol | FormatToken::CurrencyCode => {
                let text = if matches!(token, FormatToken::CurrencySymbol) {
                    &currency.symbol
                } else {
                    &currency.code
                };
                let follows_number = idx > 0 && section.tokens[idx - 1].is_numeric();
                let precedes_number = section
                    .tokens
                    .get(idx + 1)
                    .is_some_and(FormatToken::is_numeric);

                if follows_number && text.chars().next().is_some_and(char::is_alphabetic) {
                    result.push(CURRENCY_SPACING);
                }
                result.push_str(text);
                if precedes_number && text.chars().last().is_some_and(char::is_alphabetic) {
                    result.push(CURRENCY_SPACING);
                }
            }
            FormatToken::MinusSign => result.push(locale.minus_sign),
            FormatToken::LiteralChar(c) => result.push(*c),
            FormatToken::QuotedText(text) => result.push_str(text),
            _ => {}
        }
    }

    result
}
