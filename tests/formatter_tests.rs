use price_format::types::{CurrencyDisplay, LocaleSettings};
use price_format::{format_amount, parse_currency_pattern};

fn usd() -> CurrencyDisplay {
    CurrencyDisplay {
        symbol: "$".to_string(),
        code: "USD".to_string(),
    }
}

fn fmt(value: f64, pattern: &str, locale: &LocaleSettings, digits: Option<u8>) -> String {
    let pattern = parse_currency_pattern(pattern).unwrap();
    format_amount(value, &pattern, locale, &usd(), digits)
}

#[test]
fn test_basic_format() {
    let locale = LocaleSettings::default();
    assert_eq!(fmt(12.5, "¤#,##0.00", &locale, None), "$12.50");
    assert_eq!(fmt(0.0, "¤#,##0.00", &locale, None), "$0.00");
    assert_eq!(fmt(1234567.891, "¤#,##0.00", &locale, None), "$1,234,567.89");
}

#[test]
fn test_code_token() {
    let locale = LocaleSettings::default();
    assert_eq!(fmt(12.5, "0.00 ¤¤", &locale, None), "12.50 USD");
    assert_eq!(fmt(1234.5, "¤¤ #,##0.00", &locale, None), "USD 1,234.50");
}

#[test]
fn test_fraction_override() {
    let locale = LocaleSettings::default();
    assert_eq!(fmt(1234.4, "¤#,##0.00", &locale, Some(0)), "$1,234");
    assert_eq!(fmt(1234.6, "¤#,##0.00", &locale, Some(0)), "$1,235");
    assert_eq!(fmt(1.5, "¤#,##0.00", &locale, Some(3)), "$1.500");
}

#[test]
fn test_optional_fraction_digits() {
    let locale = LocaleSettings::default();
    assert_eq!(fmt(12.0, "¤0.0#", &locale, None), "$12.0");
    assert_eq!(fmt(12.25, "¤0.0#", &locale, None), "$12.25");
    assert_eq!(fmt(12.0, "¤0.##", &locale, None), "$12");
}

#[test]
fn test_rounding() {
    let locale = LocaleSettings::default();
    assert_eq!(fmt(0.994, "¤0.00", &locale, None), "$0.99");
    assert_eq!(fmt(0.996, "¤0.00", &locale, None), "$1.00");
    assert_eq!(fmt(9.999, "¤#,##0.00", &locale, None), "$10.00");
    assert_eq!(fmt(999.999, "¤#,##0.00", &locale, None), "$1,000.00");
}

#[test]
fn test_locale_symbols() {
    let locale = LocaleSettings::default()
        .with_decimal_point(',')
        .with_grouping_separator('.');
    assert_eq!(fmt(1234.5, "#,##0.00 ¤", &locale, None), "1.234,50 $");

    let swiss = LocaleSettings::default().with_grouping_separator('’');
    assert_eq!(fmt(1234567.0, "¤ #,##0.00", &swiss, None), "$ 1’234’567.00");
}

#[test]
fn test_secondary_grouping() {
    let locale = LocaleSettings::default();
    assert_eq!(fmt(1234567.5, "¤#,##,##0.00", &locale, None), "$12,34,567.50");
    assert_eq!(fmt(1000.0, "¤#,##,##0.00", &locale, None), "$1,000.00");
    assert_eq!(fmt(100.0, "¤#,##,##0.00", &locale, None), "$100.00");
}

#[test]
fn test_minimum_integer_digits() {
    let locale = LocaleSettings::default();
    assert_eq!(fmt(5.0, "¤000", &locale, None), "$005");
    assert_eq!(fmt(0.5, "¤#.00", &locale, None), "$.50");
}

#[test]
fn test_negative_without_section() {
    let locale = LocaleSettings::default();
    assert_eq!(fmt(-12.5, "¤#,##0.00", &locale, None), "-$12.50");
    assert_eq!(fmt(-1234.5, "#,##0.00 ¤", &locale, None), "-1,234.50 $");

    let unicode_minus = LocaleSettings::default().with_minus_sign('−');
    assert_eq!(fmt(-1.0, "¤0.00", &unicode_minus, None), "−$1.00");
}

#[test]
fn test_negative_section() {
    let locale = LocaleSettings::default();
    assert_eq!(
        fmt(-1234.5, "¤#,##0.00;(¤#,##0.00)", &locale, None),
        "($1,234.50)"
    );
    assert_eq!(
        fmt(1234.5, "¤#,##0.00;(¤#,##0.00)", &locale, None),
        "$1,234.50"
    );
    assert_eq!(fmt(-3.0, "¤ 0.00;¤-0.00", &locale, None), "$-3.00");
}

#[test]
fn test_negative_rounding_to_zero_is_unsigned() {
    let locale = LocaleSettings::default();
    assert_eq!(fmt(-0.001, "¤0.00", &locale, None), "$0.00");
    assert_eq!(fmt(-0.0, "¤0.00", &locale, None), "$0.00");
    assert_eq!(fmt(-0.4, "¤0.00", &locale, Some(0)), "$0");
}

#[test]
fn test_currency_spacing() {
    let locale = LocaleSettings::default();
    let chf = CurrencyDisplay {
        symbol: "CHF".to_string(),
        code: "CHF".to_string(),
    };
    let symbol_first = parse_currency_pattern("¤#,##0.00").unwrap();
    assert_eq!(
        format_amount(12.5, &symbol_first, &locale, &chf, None),
        "CHF\u{a0}12.50"
    );

    let symbol_last = parse_currency_pattern("#,##0.00¤").unwrap();
    assert_eq!(
        format_amount(12.5, &symbol_last, &locale, &chf, None),
        "12.50\u{a0}CHF"
    );

    // Already separated by a literal: no extra space
    let spaced = parse_currency_pattern("¤ #,##0.00").unwrap();
    assert_eq!(format_amount(12.5, &spaced, &locale, &chf, None), "CHF 12.50");

    // Symbols ending in a non-letter touch the digits
    let us_dollar = CurrencyDisplay {
        symbol: "US$".to_string(),
        code: "USD".to_string(),
    };
    assert_eq!(
        format_amount(12.5, &symbol_first, &locale, &us_dollar, None),
        "US$12.50"
    );
}

#[test]
fn test_quoted_text_in_output() {
    let locale = LocaleSettings::default();
    assert_eq!(fmt(12.5, "'≈ '¤0.00", &locale, None), "≈ $12.50");
    assert_eq!(fmt(7.0, "¤0 'each'", &locale, None), "$7 each");
}

#[test]
fn test_large_amounts() {
    let locale = LocaleSettings::default();
    assert_eq!(
        fmt(123456789012.0, "¤#,##0.00", &locale, None),
        "$123,456,789,012.00"
    );
    assert_eq!(
        fmt(1e20, "¤#,##0", &locale, None),
        "$100,000,000,000,000,000,000"
    );
}
