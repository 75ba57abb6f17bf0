//! Slip numerals.
//!
//! Converts Arabic or compact Chinese numeral tokens into the two-character,
//! zero-padded Chinese form used as the asset key prefix.

mod map;
mod normalize;

use std::fmt;

pub use map::{NumeralMap, TEN};
pub use normalize::normalize_numeral;

/// Two Chinese numeral characters for a zero-padded value 00–99.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalNumeral {
    text: String,
    value: u8,
}

impl CanonicalNumeral {
    pub(crate) fn new(tens: char, ones: char, value: u8) -> Self {
        let mut text = String::with_capacity(tens.len_utf8() + ones.len_utf8());
        text.push(tens);
        text.push(ones);
        Self { text, value }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Numeric value 0–99.
    pub fn value(&self) -> u8 {
        self.value
    }
}

impl fmt::Display for CanonicalNumeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
