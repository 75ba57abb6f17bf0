//! Chinese numeral character table.

/// The character for ten; the only entry whose value is not a single digit.
pub const TEN: char = '十';

const STANDARD_ENTRIES: [(char, u8); 12] = [
    ('零', 0),
    ('〇', 0),
    ('一', 1),
    ('二', 2),
    ('三', 3),
    ('四', 4),
    ('五', 5),
    ('六', 6),
    ('七', 7),
    ('八', 8),
    ('九', 9),
    (TEN, 10),
];

/// Mapping between Chinese numeral characters and their values.
///
/// Forward lookups accept every listed character ("零" and "〇" both read as 0).
/// The reverse direction covers 0–9 only and is one-to-one: the first character
/// listed for a value is the one rendered.
#[derive(Debug, Clone)]
pub struct NumeralMap {
    entries: Vec<(char, u8)>,
    digits: [char; 10],
}

impl NumeralMap {
    /// The table used for slip numbers.
    pub fn standard() -> Self {
        Self::from_entries(&STANDARD_ENTRIES)
            .unwrap_or_else(|| unreachable!("standard numeral table covers 0-9"))
    }

    /// Builds a map from `(char, value)` pairs. Returns `None` unless every
    /// digit 0–9 has at least one character.
    pub fn from_entries(entries: &[(char, u8)]) -> Option<Self> {
        let mut digits: [Option<char>; 10] = [None; 10];
        for &(c, v) in entries {
            if let Some(slot) = digits.get_mut(usize::from(v)) {
                slot.get_or_insert(c);
            }
        }
        let mut rendered = ['\0'; 10];
        for (slot, c) in rendered.iter_mut().zip(digits) {
            *slot = c?;
        }
        Some(Self {
            entries: entries.to_vec(),
            digits: rendered,
        })
    }

    pub fn value_of(&self, c: char) -> Option<u8> {
        self.entries
            .iter()
            .find(|(k, _)| *k == c)
            .map(|&(_, v)| v)
    }

    pub fn contains(&self, c: char) -> bool {
        self.value_of(c).is_some()
    }

    /// Canonical character for a digit 0–9.
    pub fn digit_char(&self, digit: u8) -> Option<char> {
        self.digits.get(usize::from(digit)).copied()
    }

    /// Every accepted character, in table order.
    pub fn alphabet(&self) -> impl Iterator<Item = char> + '_ {
        self.entries.iter().map(|&(c, _)| c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_zero_forms_read_as_zero() {
        let map = NumeralMap::standard();
        assert_eq!(map.value_of('零'), Some(0));
        assert_eq!(map.value_of('〇'), Some(0));
        assert_eq!(map.value_of(TEN), Some(10));
        assert_eq!(map.value_of('百'), None);
    }

    #[test]
    fn reverse_is_one_to_one_over_digits() {
        let map = NumeralMap::standard();
        assert_eq!(map.digit_char(0), Some('零'));
        assert_eq!(map.digit_char(9), Some('九'));
        assert_eq!(map.digit_char(10), None);
        for d in 0..10u8 {
            let c = map.digit_char(d).unwrap();
            assert_eq!(map.value_of(c), Some(d));
        }
    }

    #[test]
    fn incomplete_table_is_rejected() {
        assert!(NumeralMap::from_entries(&[('零', 0), ('一', 1)]).is_none());
    }

    #[test]
    fn alphabet_lists_all_twelve() {
        let map = NumeralMap::standard();
        let chars: String = map.alphabet().collect();
        assert_eq!(chars, "零〇一二三四五六七八九十");
    }
}
