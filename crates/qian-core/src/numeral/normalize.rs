//! Numeral token normalization.

use super::map::{NumeralMap, TEN};
use super::CanonicalNumeral;
use crate::error::QueryError;

/// Normalizes a raw numeral token to its two-character Chinese form.
///
/// Accepts exactly two ASCII digits (`"07"` → `"零七"`) or a compact Chinese
/// numeral. With "十" the token reads as tens/ones (`"十一"` → `"一一"`,
/// `"二十"` → `"二零"`); without it the characters are read as a digit
/// sequence (`"二三"` → 23, `"五"` → 5), not as place-value grammar.
///
/// The input must be a raw token; feeding back a previous output is not
/// guaranteed to be stable.
pub fn normalize_numeral(
    map: &NumeralMap,
    token: &str,
) -> Result<CanonicalNumeral, QueryError> {
    let value = if !token.is_empty() && token.chars().all(|c| c.is_ascii_digit()) {
        ascii_value(token)
    } else {
        chinese_value(map, token)
    };
    value
        .and_then(|v| render(map, v))
        .ok_or_else(|| QueryError::UnrecognizedNumeral {
            token: token.to_string(),
        })
}

fn ascii_value(token: &str) -> Option<u8> {
    let bytes = token.as_bytes();
    if bytes.len() != 2 {
        return None;
    }
    Some((bytes[0] - b'0') * 10 + (bytes[1] - b'0'))
}

fn chinese_value(map: &NumeralMap, token: &str) -> Option<u8> {
    if token.is_empty() || !token.chars().all(|c| map.contains(c)) {
        return None;
    }
    match token.split_once(TEN) {
        Some((tens, ones)) => {
            let tens = segment_digit(map, tens, 1)?;
            let ones = segment_digit(map, ones, 0)?;
            Some(tens * 10 + ones)
        }
        None => digit_sequence(map, token),
    }
}

/// A tens/ones segment around the first "十".
///
/// A single character must be worth 0–9. An empty or multi-character
/// segment is not a table entry and reads as `missing`.
fn segment_digit(map: &NumeralMap, segment: &str, missing: u8) -> Option<u8> {
    let mut chars = segment.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => map.value_of(c).filter(|v| *v <= 9),
        _ => Some(missing),
    }
}

fn digit_sequence(map: &NumeralMap, token: &str) -> Option<u8> {
    let mut value: u32 = 0;
    for c in token.chars() {
        let digit = map.value_of(c).filter(|v| *v <= 9)?;
        value = value * 10 + u32::from(digit);
        if value > 99 {
            return None;
        }
    }
    u8::try_from(value).ok()
}

fn render(map: &NumeralMap, value: u8) -> Option<CanonicalNumeral> {
    if value > 99 {
        return None;
    }
    let tens = map.digit_char(value / 10)?;
    let ones = map.digit_char(value % 10)?;
    Some(CanonicalNumeral::new(tens, ones, value))
}
