//! Numeric keypad accumulator shared by every amount entry screen.
//!
//! The text starts at "0". The first digit replaces that "0", a decimal
//! point is appended only while none exists, and deleting the last
//! character falls back to "0".

use banca_data::models::Money;

/// Longest account/supply number a digits-only field accepts
pub const MAX_SUPPLY_DIGITS: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypadKey {
    Digit(u8),
    Dot,
    Delete,
}

impl KeypadKey {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => c.to_digit(10).map(|d| KeypadKey::Digit(d as u8)),
            '.' | ',' => Some(KeypadKey::Dot),
            _ => None,
        }
    }
}

/// Apply a key press to amount text
pub fn press(text: &str, key: KeypadKey) -> String {
    match key {
        KeypadKey::Digit(d) => {
            let digit = char::from(b'0' + d.min(9));
            if text == "0" || text.is_empty() {
                digit.to_string()
            } else {
                format!("{}{}", text, digit)
            }
        }
        KeypadKey::Dot => {
            if text.contains('.') {
                text.to_string()
            } else if text.is_empty() {
                "0.".to_string()
            } else {
                format!("{}.", text)
            }
        }
        KeypadKey::Delete => {
            let mut next = text.to_string();
            next.pop();
            if next.is_empty() {
                "0".to_string()
            } else {
                next
            }
        }
    }
}

/// Apply a key press to a digits-only field (no decimal point, no leading "0" rule)
pub fn press_digits(text: &str, key: KeypadKey) -> String {
    match key {
        KeypadKey::Digit(d) if text.len() < MAX_SUPPLY_DIGITS => {
            format!("{}{}", text, char::from(b'0' + d.min(9)))
        }
        KeypadKey::Delete => {
            let mut next = text.to_string();
            next.pop();
            next
        }
        _ => text.to_string(),
    }
}

/// Parse keypad text into money; anything unparseable counts as zero
pub fn parse_amount(text: &str) -> Money {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(Money::from_f64)
        .unwrap_or(Money::ZERO)
}

/// Render money back into keypad text, e.g. `3112.50`
pub fn amount_text(amount: Money) -> String {
    let cents = amount.cents().abs();
    format!("{}.{:02}", cents / 100, cents % 100)
}

/// Whether the text represents a zero amount ("0", "0.", "0.00")
pub fn is_zero(text: &str) -> bool {
    parse_amount(text).is_zero()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_keys(start: &str, keys: &str) -> String {
        keys.chars()
            .filter_map(KeypadKey::from_char)
            .fold(start.to_string(), |text, key| press(&text, key))
    }

    #[test]
    fn test_first_digit_replaces_zero() {
        assert_eq!(press("0", KeypadKey::Digit(5)), "5");
        assert_eq!(press("5", KeypadKey::Digit(0)), "50");
    }

    #[test]
    fn test_five_point_five() {
        assert_eq!(type_keys("0", "5.5"), "5.5");
    }

    #[test]
    fn test_second_dot_is_ignored() {
        assert_eq!(type_keys("0", "5.5."), "5.5");
        assert_eq!(type_keys("0", "1..2"), "1.2");
    }

    #[test]
    fn test_dot_on_zero_keeps_zero() {
        assert_eq!(type_keys("0", ".5"), "0.5");
    }

    #[test]
    fn test_delete_falls_back_to_zero() {
        assert_eq!(press("12", KeypadKey::Delete), "1");
        assert_eq!(press("1", KeypadKey::Delete), "0");
        assert_eq!(press("0", KeypadKey::Delete), "0");
    }

    #[test]
    fn test_digits_field_limits_length() {
        let full = "123456789012";
        assert_eq!(press_digits(full, KeypadKey::Digit(3)), full);
        assert_eq!(press_digits("", KeypadKey::Digit(0)), "0");
        assert_eq!(press_digits("12", KeypadKey::Dot), "12");
        assert_eq!(press_digits("1", KeypadKey::Delete), "");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("100"), Money::from_cents(10_000));
        assert_eq!(parse_amount("5."), Money::from_cents(500));
        assert_eq!(parse_amount("0.256"), Money::from_cents(26));
        assert_eq!(parse_amount("garbage"), Money::ZERO);
        assert!(is_zero("0."));
        assert!(!is_zero("0.01"));
    }

    #[test]
    fn test_amount_text() {
        assert_eq!(amount_text(Money::from_cents(311_250)), "3112.50");
        assert_eq!(amount_text(Money::ZERO), "0.00");
    }
}
