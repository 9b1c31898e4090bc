//! Region code module - enumerates two-letter region codes
//! and maps them to file names and regional indicator code points.

use std::fmt;

/// Number of letters per position (A-Z)
pub const ALPHABET_LEN: u8 = 26;

const LETTER_OFFSET: u32 = 65; // 'A'
const REGIONAL_INDICATOR_OFFSET: u32 = 127_397; // 'A' + this = U+1F1E6

/// Uppercase letter for an alphabet index (0 -> 'A', 25 -> 'Z')
pub fn letter(index: u8) -> char {
    debug_assert!(index < ALPHABET_LEN);
    char::from(b'A' + index)
}

/// Regional indicator symbol code point for an alphabet index
pub fn code_point(index: u8) -> u32 {
    debug_assert!(index < ALPHABET_LEN);
    u32::from(index) + LETTER_OFFSET + REGIONAL_INDICATOR_OFFSET
}

/// A candidate region, e.g. "US" or "AA"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionCode {
    first: u8,
    second: u8,
}

impl RegionCode {
    /// Returns `None` if either index falls outside the alphabet
    #[allow(dead_code)]
    pub fn new(first: u8, second: u8) -> Option<Self> {
        (first < ALPHABET_LEN && second < ALPHABET_LEN).then_some(Self { first, second })
    }

    pub fn letters(&self) -> [char; 2] {
        [letter(self.first), letter(self.second)]
    }

    pub fn code_points(&self) -> [u32; 2] {
        [code_point(self.first), code_point(self.second)]
    }

    /// Local file name (e.g. "US.svg")
    pub fn file_name(&self) -> String {
        format!("{}.svg", self)
    }

    /// Remote file name in the Noto layout (e.g. "emoji_u1f1fa_1f1f8.svg")
    pub fn remote_name(&self) -> String {
        let [a, b] = self.code_points();
        format!("emoji_u{:x}_{:x}.svg", a, b)
    }

    /// Flag emoji made of the two regional indicator symbols
    pub fn glyph(&self) -> String {
        self.code_points()
            .into_iter()
            .map(|cp| char::from_u32(cp).unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect()
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b] = self.letters();
        write!(f, "{}{}", a, b)
    }
}

/// Every region code, first letter varying slowest (AA, AB, ..., ZZ)
pub fn all() -> impl Iterator<Item = RegionCode> {
    (0..ALPHABET_LEN).flat_map(|first| {
        (0..ALPHABET_LEN).map(move |second| RegionCode { first, second })
    })
}
