use winnow::combinator::{alt, delimited, repeat};
use winnow::error::ErrMode;
use winnow::token::{literal, none_of};
use winnow::{ModalResult, Parser};

use crate::types::*;

// Number block parsers
pub fn parse_digit_or_zero(input: &mut &str) -> ModalResult<FormatToken> {
    literal("0")
        .value(FormatToken::DigitOrZero)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_digit_if_needed(input: &mut &str) -> ModalResult<FormatToken> {
    literal("#")
        .value(FormatToken::DigitIfNeeded)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_decimal_point(input: &mut &str) -> ModalResult<FormatToken> {
    literal(".")
        .value(FormatToken::DecimalPoint)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_grouping_separator(input: &mut &str) -> ModalResult<FormatToken> {
    literal(",")
        .value(FormatToken::GroupingSeparator)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_minus_sign(input: &mut &str) -> ModalResult<FormatToken> {
    literal("-")
        .value(FormatToken::MinusSign)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

// Currency parsers; the two-sign form must be tried first
pub fn parse_currency_code(input: &mut &str) -> ModalResult<FormatToken> {
    literal("¤¤")
        .value(FormatToken::CurrencyCode)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_currency_symbol(input: &mut &str) -> ModalResult<FormatToken> {
    literal("¤")
        .value(FormatToken::CurrencySymbol)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

// Text parsers
pub fn parse_escaped_apostrophe(input: &mut &str) -> ModalResult<FormatToken> {
    literal("''")
        .value(FormatToken::LiteralChar('\''))
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_quoted_text(input: &mut &str) -> ModalResult<FormatToken> {
    let content_parser = repeat(1.., alt((literal("''").value('\''), none_of(['\'']))))
        .map(|chars: Vec<char>| chars.into_iter().collect::<String>());

    delimited('\'', content_parser, '\'')
        .map(FormatToken::QuotedText)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_literal_passthrough(input: &mut &str) -> ModalResult<FormatToken> {
    none_of([';', '\''])
        .map(FormatToken::LiteralChar)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}
