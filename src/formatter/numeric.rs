use crate::types::{FormatSection, LocaleSettings};

/// Render the absolute value of an amount as the digits of a number block
///
/// `fraction_digits` replaces the section's own fraction width when set, so a
/// currency's minor units win over the placeholders written in the pattern.
/// Rounding is half-to-even on the exact binary value of the amount.
pub(super) fn format_number_block(
    abs_value: f64,
    section: &FormatSection,
    locale: &LocaleSettings,
    fraction_digits: Option<u8>,
) -> String {
    let (min_fraction, max_fraction) = match fraction_digits {
        Some(digits) => (usize::from(digits), usize::from(digits)),
        None => (section.min_fraction_digits, section.max_fraction_digits),
    };

    let rendered = format!("{abs_value:.max_fraction$}");
    let (integer_digits, fraction) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));

    let mut fraction = fraction.to_string();
    while fraction.len() > min_fraction && fraction.ends_with('0') {
        fraction.pop();
    }

    let mut integer_digits = integer_digits.trim_start_matches('0').to_string();
    if integer_digits.len() < section.min_integer_digits {
        let padding = "0".repeat(section.min_integer_digits - integer_digits.len());
        integer_digits.insert_str(0, &padding);
    }

    let mut result = group_digits(
        &integer_digits,
        section.primary_grouping,
        section.secondary_grouping,
        locale.grouping_separator,
    );

    if !fraction.is_empty() {
        result.push(locale.decimal_point);
        result.push_str(&fraction);
    }

    if result.is_empty() {
        result.push('0');
    }
    result
}

/// Insert the grouping separator, counting from the least significant digit
fn group_digits(
    digits: &str,
    primary: Option<usize>,
    secondary: Option<usize>,
    separator: char,
) -> String {
    let Some(primary) = primary.filter(|size| *size > 0) else {
        return digits.to_string();
    };
    let secondary = secondary.filter(|size| *size > 0).unwrap_or(primary);

    let chars: Vec<char> = digits.chars().collect();
    let mut grouped: Vec<char> = Vec::with_capacity(chars.len() + chars.len() / 2);
    let mut next_break = primary;
    for (count, digit) in chars.iter().rev().enumerate() {
        if count > 0 && count == next_break {
            grouped.push(separator);
            next_break += secondary;
        }
        grouped.push(*digit);
    }
    grouped.iter().rev().collect()
}

/// Whether the rendered digits hold anything but zeros
pub(super) fn has_nonzero_digit(rendered: &str) -> bool {
    rendered.chars().any(|c| c.is_ascii_digit() && c != '0')
}
