use price_format::currency::lookup_currency;
use price_format::locale::{available_locales, get_locale_settings};
use price_format::CurrencyFormatter;
use proptest::prelude::*;

const CODES: &[&str] = &["USD", "EUR", "GBP", "JPY", "RUB", "CHF", "INR", "KWD", "BRL", "CNY"];

fn locale_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(available_locales())
}

fn code_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(CODES)
}

proptest! {
    #[test]
    fn output_is_never_empty(locale in locale_strategy(), code in code_strategy(), price in 0.0f64..1e12) {
        let formatter = CurrencyFormatter::for_locale(&locale).unwrap();
        let rendered = formatter.try_format(price, code).unwrap();
        prop_assert!(!rendered.trim().is_empty());
    }

    #[test]
    fn output_is_deterministic(locale in locale_strategy(), code in code_strategy(), price in 0.0f64..1e9) {
        let first = CurrencyFormatter::for_locale(&locale).unwrap().format(price, code);
        let second = CurrencyFormatter::for_locale(&locale).unwrap().format(price, code);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn output_shows_the_currency(locale in locale_strategy(), code in code_strategy(), price in 0.0f64..1e9) {
        let settings = get_locale_settings(&locale).unwrap();
        let symbol = lookup_currency(code).unwrap().symbol_for(&settings).to_string();
        let rendered = CurrencyFormatter::for_locale(&locale).unwrap().format(price, code);
        prop_assert!(rendered.contains(&symbol), "{} lacks {}", rendered, symbol);
    }

    #[test]
    fn fraction_width_matches_minor_digits(code in code_strategy(), price in 0.0f64..1e6) {
        let digits = usize::from(lookup_currency(code).unwrap().minor_digits);
        let rendered = CurrencyFormatter::for_locale("en_US").unwrap().format(price, code);
        let fraction = rendered.rsplit_once('.').map(|(_, f)| f.len()).unwrap_or(0);
        prop_assert_eq!(fraction, digits);
    }
}
