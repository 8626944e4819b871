//! Character tables for the clean stage.

/// ASCII stand-in for "smart" punctuation and exotic spaces.
pub fn fold(c: char) -> Option<&'static str> {
    let folded = match c {
        '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{201B}' | '\u{2032}' | '\u{2035}' | '\u{02BC}' | '\u{2039}'
        | '\u{203A}' | '\u{FF07}' | '\u{00B4}' => "'",
        '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{201F}' | '\u{2033}' | '\u{2036}' | '\u{00AB}' | '\u{00BB}'
        | '\u{FF02}' => "\"",
        '\u{2010}'..='\u{2015}' | '\u{2212}' | '\u{FE58}' | '\u{FE63}' | '\u{FF0D}' => "-",
        '\u{2026}' => "...",
        '\u{00A0}' | '\u{2000}'..='\u{200A}' | '\u{202F}' | '\u{205F}' | '\u{3000}' => " ",
        _ => return None,
    };
    Some(folded)
}

/// Glyphs with no safe mapping; removed outright.
pub const DROPPED: &[char] = &[
    'œ', 'Œ', 'ĳ', 'Ĳ', 'ﬀ', 'ﬁ', 'ﬂ', 'ﬃ', 'ﬄ', 'ﬅ', 'ﬆ', // ligatures
    '\u{FEFF}', // byte-order mark
    '\u{FFFD}', // replacement character
    '\u{200B}', '\u{200C}', '\u{2060}', '\u{00AD}', // invisible spacing / soft hyphen
];

pub fn is_private_use(c: char) -> bool {
    matches!(c as u32, 0xE000..=0xF8FF | 0xF0000..=0xFFFFD | 0x100000..=0x10FFFD)
}
