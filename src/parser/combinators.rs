use winnow::combinator::alt;
use winnow::{ModalResult, Parser};

use crate::parser::tokens::*;
use crate::types::*;

/// Parse a single token from a currency pattern
pub fn parse_single_token(input: &mut &str) -> ModalResult<FormatToken> {
    let currency = alt((parse_currency_code, parse_currency_symbol));

    let textual = alt((parse_escaped_apostrophe, parse_quoted_text));

    let number_symbols = alt((
        parse_digit_or_zero,
        parse_digit_if_needed,
        parse_decimal_point,
        parse_grouping_separator,
        parse_minus_sign,
    ));

    alt((currency, textual, number_symbols, parse_literal_passthrough)).parse_next(input)
}
