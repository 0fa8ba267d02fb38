//! Price formatting
//!
//! Renders a currency code and an amount the way an en-US storefront does:
//! a symbol prefix for well-known currencies, grouping separators, and the
//! currency's usual number of fraction digits.

use thousands::Separable;

/// Display rules for a single currency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub symbol: &'static str,
    pub fraction_digits: usize,
}

const CURRENCIES: &[(&str, CurrencyFormat)] = &[
    ("USD", CurrencyFormat { symbol: "$", fraction_digits: 2 }),
    ("CAD", CurrencyFormat { symbol: "CA$", fraction_digits: 2 }),
    ("AUD", CurrencyFormat { symbol: "A$", fraction_digits: 2 }),
    ("EUR", CurrencyFormat { symbol: "€", fraction_digits: 2 }),
    ("GBP", CurrencyFormat { symbol: "£", fraction_digits: 2 }),
    ("INR", CurrencyFormat { symbol: "₹", fraction_digits: 2 }),
    ("CNY", CurrencyFormat { symbol: "CN¥", fraction_digits: 2 }),
    ("JPY", CurrencyFormat { symbol: "¥", fraction_digits: 0 }),
    ("KRW", CurrencyFormat { symbol: "₩", fraction_digits: 0 }),
];

/// Look up the display rules of a known currency code (case-insensitive)
pub fn currency_format(code: &str) -> Option<CurrencyFormat> {
    CURRENCIES
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(code))
        .map(|(_, format)| *format)
}

fn format_amount(value: f64, fraction_digits: usize) -> (bool, String) {
    let amount = format!("{:.*}", fraction_digits, value.abs());
    // "-0.00" is not a negative price
    let negative = value.is_sign_negative() && amount.chars().any(|c| c.is_ascii_digit() && c != '0');
    (negative, amount.separate_with_commas())
}

/// Format `value` in `currency_code`
///
/// Unknown codes fall back to `"{CODE} {amount}"` with two fraction digits.
pub fn format_price(currency_code: &str, value: f64) -> String {
    match currency_format(currency_code) {
        Some(CurrencyFormat {
            symbol,
            fraction_digits,
        }) => {
            let (negative, amount) = format_amount(value, fraction_digits);
            let sign = if negative { "-" } else { "" };
            format!("{sign}{symbol}{amount}")
        }
        None => {
            let (negative, amount) = format_amount(value, 2);
            let sign = if negative { "-" } else { "" };
            let code = currency_code.to_ascii_uppercase();
            format!("{sign}{code} {amount}")
        }
    }
}
