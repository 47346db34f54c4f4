use winnow::combinator::repeat;
use winnow::{ModalResult, Parser};

use crate::error::{FormatError, Result};
use crate::parser::combinators::parse_single_token;
use crate::types::*;

/// Parse the raw tokens of one section, stopping at `;` or end of input
pub fn parse_section_tokens(input: &mut &str) -> ModalResult<Vec<FormatToken>> {
    repeat(0.., parse_single_token).parse_next(input)
}

/// Validate the tokens of a section and derive the layout of its number block
///
/// A section must hold exactly one contiguous number block with at least one
/// digit placeholder, at most one decimal point, and no grouping separators
/// in the fraction.
pub fn build_section(tokens: Vec<FormatToken>, section_index: usize) -> Result<FormatSection> {
    let first = tokens.iter().position(FormatToken::is_numeric);
    let last = tokens.iter().rposition(FormatToken::is_numeric);
    let (first, last) = match (first, last) {
        (Some(first), Some(last)) => (first, last),
        _ => {
            return Err(FormatError::Pattern(format!(
                "section {} has no digit placeholder",
                section_index + 1
            )));
        }
    };

    let number_block = &tokens[first..=last];
    if let Some(stray) = number_block.iter().find(|t| !t.is_numeric()) {
        return Err(FormatError::Pattern(format!(
            "section {} splits its number block with {stray:?}",
            section_index + 1
        )));
    }

    let decimal_points = number_block
        .iter()
        .filter(|t| matches!(t, FormatToken::DecimalPoint))
        .count();
    if decimal_points > 1 {
        return Err(FormatError::Pattern(format!(
            "section {} has more than one decimal point",
            section_index + 1
        )));
    }

    let split = number_block
        .iter()
        .position(|t| matches!(t, FormatToken::DecimalPoint))
        .unwrap_or(number_block.len());
    let (integer_part, fraction_part) = number_block.split_at(split);
    let fraction_part = fraction_part.get(1..).unwrap_or(&[]);

    if fraction_part
        .iter()
        .any(|t| matches!(t, FormatToken::GroupingSeparator))
    {
        return Err(FormatError::Pattern(format!(
            "section {} has a grouping separator after the decimal point",
            section_index + 1
        )));
    }

    let is_placeholder =
        |t: &&FormatToken| matches!(t, FormatToken::DigitOrZero | FormatToken::DigitIfNeeded);

    if !integer_part.iter().any(|t| is_placeholder(&t)) && fraction_part.is_empty() {
        return Err(FormatError::Pattern(format!(
            "section {} has no digit placeholder",
            section_index + 1
        )));
    }

    let min_integer_digits = integer_part
        .iter()
        .filter(|t| matches!(t, FormatToken::DigitOrZero))
        .count();
    let min_fraction_digits = fraction_part
        .iter()
        .filter(|t| matches!(t, FormatToken::DigitOrZero))
        .count();
    let max_fraction_digits = fraction_part.iter().filter(is_placeholder).count();

    // Group sizes are the placeholder counts between separators
    let group_sizes: Vec<usize> = integer_part
        .split(|t| matches!(t, FormatToken::GroupingSeparator))
        .map(|group| group.iter().filter(is_placeholder).count())
        .collect();
    let (primary_grouping, secondary_grouping) = match group_sizes.as_slice() {
        [] | [_] => (None, None),
        [_, primary] => (Some(*primary), Some(*primary)),
        [.., secondary, primary] => (Some(*primary), Some(*secondary)),
    };

    if primary_grouping == Some(0) || secondary_grouping == Some(0) {
        return Err(FormatError::Pattern(format!(
            "section {} has an empty digit group",
            section_index + 1
        )));
    }

    Ok(FormatSection {
        tokens,
        min_integer_digits,
        min_fraction_digits,
        max_fraction_digits,
        primary_grouping,
        secondary_grouping,
    })
}
