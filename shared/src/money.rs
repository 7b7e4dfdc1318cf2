//! Money utilities using rust_decimal for precision
//!
//! Currency arrives from the backend as exact decimal strings. It is parsed
//! into `Decimal` and never passes through `f64`, so sums stay exact to
//! the cent.

use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half away from zero)
pub const DECIMAL_PLACES: u32 = 2;

const ROUNDING: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

/// Parse a decimal currency string
///
/// Accepts an optional sign, digits, and at most one decimal point.
/// Currency symbols, thousands separators, exponents and empty strings are
/// rejected rather than guessed at.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let value = raw.trim();
    let digits = value.strip_prefix(['-', '+']).unwrap_or(value);
    if digits.is_empty() || digits == "." {
        return None;
    }
    let mut seen_point = false;
    for c in digits.chars() {
        match c {
            '0'..='9' => {}
            '.' if !seen_point => seen_point = true,
            _ => return None,
        }
    }
    Decimal::from_str(value).ok()
}

/// Round to cent precision and fix the scale at two places
///
/// `5200` becomes `5200.00`, `1733.335` becomes `1733.34`. Values with more
/// than 26 integer digits cannot carry two fractional digits in a 96-bit
/// mantissa; they are returned rounded but at their own (smaller) scale.
pub fn round_money(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(DECIMAL_PLACES, ROUNDING);
    // rescale leaves the value untouched when the mantissa has no room
    rounded.rescale(DECIMAL_PLACES);
    rounded
}

/// Format an amount as US dollars: `$1,733.33`, `-$12.50`
pub fn format_currency(value: Decimal) -> String {
    let rounded = round_money(value);
    let text = rounded.abs().to_string();
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}${}.{}", sign, grouped, cents)
}

/// Serde adapter for currency fields kept as their exact decimal text
///
/// The backend sends strings, but hand-edited exports sometimes carry bare
/// JSON numbers. Both are kept as text; validation happens when the
/// engine parses the amount, so a bad value is reported against its record.
pub mod amount_text {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawAmount {
        Text(String),
        Number(serde_json::Number),
    }

    pub fn serialize<S>(value: &str, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(value)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawAmount::deserialize(deserializer)? {
            RawAmount::Text(text) => text,
            RawAmount::Number(number) => number.to_string(),
        })
    }
}
