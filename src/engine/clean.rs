//! Clean stage: structural normalization, no rule tables.
//!
//! ```text
//! ┌─▶ fold smart punctuation ─▶ drop unmappable glyphs ─▶ NFC ─┐
//! └──────────────── until a round changes nothing ◀─────────────┘
//!                                     ─▶ collapse spaces ─▶ 1,000 -> 1000
//! ```
//!
//! Total and idempotent: `clean(clean(x)) == clean(x)`.

use std::borrow::Cow;

use unicode_normalization::UnicodeNormalization;

use super::compiled_rules::BucketMask;
use super::trigger::{TriggerInfo, is_emoji};
use crate::rules::unicode;

pub fn clean(text: &str) -> String {
    let composed = compose(fold_and_drop(text));
    let tidied = tidy(&composed);
    if TriggerInfo::scan(&tidied).buckets.contains(BucketMask::HAS_DIGITS) {
        strip_thousands(&tidied).into_owned()
    } else {
        tidied
    }
}

// NFC can produce a foldable char (U+1FFD -> U+00B4) and dropping can leave a
// pair for NFC to compose. Each extra round removes a non-ASCII char.
fn compose(mut folded: String) -> String {
    loop {
        let composed: String = folded.nfc().collect();
        let refolded = fold_and_drop(&composed);
        if refolded == composed {
            return composed;
        }
        folded = refolded;
    }
}

fn fold_and_drop(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    for c in text.chars() {
        if let Some(ascii) = unicode::fold(c) {
            folded.push_str(ascii);
        } else if !is_dropped(c) {
            folded.push(c);
        }
    }
    folded
}

/// Collapse runs of 2+ whitespace characters to one space and trim.
pub(crate) fn tidy(text: &str) -> String {
    regex!(r"\s{2,}").replace_all(text, " ").trim().to_string()
}

fn is_dropped(c: char) -> bool {
    if is_emoji(c) {
        return false;
    }
    unicode::DROPPED.contains(&c) || unicode::is_private_use(c) || (c.is_control() && !c.is_whitespace())
}

/// `1,000.00` -> `1000.00`; commas outside `d{1,3}(,ddd)+` groups stay, and
/// so does a group that is only part of a longer comma list (`12,345,67`).
fn strip_thousands(text: &str) -> Cow<'_, str> {
    regex!(r"\b\d{1,3}(?:,\d{3})+\b").replace_all(text, |caps: &regex::Captures| {
        let whole = &caps[0];
        let (start, end) = caps.get(0).map_or((0, 0), |m| (m.start(), m.end()));
        if continues_list(&text[end..]) || continues_list_back(&text[..start]) {
            whole.to_string()
        } else {
            whole.replace(',', "")
        }
    })
}

fn continues_list(after: &str) -> bool {
    let mut chars = after.chars();
    chars.next() == Some(',') && chars.next().is_some_and(|c| c.is_ascii_digit())
}

fn continues_list_back(before: &str) -> bool {
    let mut chars = before.chars().rev();
    chars.next() == Some(',') && chars.next().is_some_and(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_examples() {
        let cases: Vec<(&str, &str)> = vec![
            ("3+4=7", "3+4=7"),
            ("__B__", "__B__"),
            ("this    is     spaced     out", "this is spaced out"),
            ("  padded\t\tline  ", "padded line"),
            ("how much is 1,000.00", "how much is 1000.00"),
            ("3,000,000 people", "3000000 people"),
            ("apples, pears, 1,2 and 12,34", "apples, pears, 1,2 and 12,34"),
            ("12,345,67", "12,345,67"),
            ("12,34,567", "12,34,567"),
            ("pick 1,000, 2,000", "pick 1000, 2000"),
            ("\u{1FFD}", "'"),
            ("What’s up", "What's up"),
            ("I said “shut up”", "I said \"shut up\""),
            ("wait… what", "wait... what"),
            ("well—maybe", "well-maybe"),
            ("non\u{00A0}breaking", "non breaking"),
            ("œ", ""),
            ("cœur", "cur"),
            ("\u{FEFF}hello", "hello"),
            ("😊", "😊"),
            ("👍🏽 ok", "👍🏽 ok"),
            ("👨\u{200D}👩\u{200D}👧", "👨\u{200D}👩\u{200D}👧"),
            ("❤\u{FE0F}", "❤\u{FE0F}"),
            ("cliché", "cliché"),
            ("cafe\u{0301}", "café"),
            ("", ""),
            ("?!...", "?!..."),
        ];
        for (input, expected) in cases {
            assert_eq!(clean(input), expected, "input: {input:?}");
        }
    }

    #[test]
    fn clean_is_idempotent() {
        let inputs = [
            "  What’s   up with 1,000,000 “things”…  ",
            "œuvre\u{200B}  ﬁne 😊😊",
            "plain text",
            "a\t\tb\n\nc",
            "e\u{200B}\u{0301}",
            "\u{1FFD}",
            "12,345,67 and 1,000",
        ];
        for input in inputs {
            let once = clean(input);
            assert_eq!(clean(&once), once, "input: {input:?}");
        }
    }
}
