use winnow::Parser;
use winnow::error::ErrMode;
use winnow::token::literal;

use crate::error::{FormatError, Result};
use crate::parser::sections::{build_section, parse_section_tokens};
use crate::types::*;

/// Parse a currency pattern
///
/// This is the main public API entry point of this module. It accepts a
/// CLDR-style pattern with one or two `;`-separated sections and returns the
/// parsed `CurrencyPattern`.
///
/// # Examples
/// ```
/// use price_format::parser::parse_currency_pattern;
///
/// let pattern = parse_currency_pattern("¤#,##0.00").unwrap();
/// assert_eq!(pattern.positive_section.max_fraction_digits, 2);
/// ```
pub fn parse_currency_pattern(input_str: &str) -> Result<CurrencyPattern> {
    let mut input = input_str;

    let make_err_msg = |e, remaining: &str| -> FormatError {
        FormatError::Pattern(format!(
            "parse error {e:?} at remaining input '{remaining}'"
        ))
    };

    let positive_tokens = parse_section_tokens
        .parse_next(&mut input)
        .map_err(|e| make_err_msg(e, input))?;

    let mut negative_tokens = None;
    if input.starts_with(';') {
        literal(";")
            .parse_next(&mut input)
            .map_err(ErrMode::Backtrack)
            .map_err(|e| make_err_msg(e, input))?;
        negative_tokens = Some(
            parse_section_tokens
                .parse_next(&mut input)
                .map_err(|e| make_err_msg(e, input))?,
        );
    }

    if !input.is_empty() {
        return Err(FormatError::Pattern(format!(
            "too many sections or trailing characters: '{input}'"
        )));
    }

    let positive_section = build_section(positive_tokens, 0)?;
    let negative_section = negative_tokens
        .map(|tokens| build_section(tokens, 1))
        .transpose()?;

    Ok(CurrencyPattern {
        positive_section,
        negative_section,
    })
}
