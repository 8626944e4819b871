//! Trigger scanning (input pre-classification).
//!
//! Cheap per-call scan producing a [`BucketMask`]. A table whose
//! [`TableKind::buckets`](super::TableKind) share nothing with the scan is
//! skipped entirely: the contraction table needs an apostrophe, the emoji
//! table needs an emoji, emoji tags need an emoji or a `:`.
//!
//! The scan is a pure function of the text, recomputed before every pass
//! (earlier passes may remove the feature a later table needs). False
//! positives are harmless; the matcher still has to match.

use super::compiled_rules::BucketMask;

#[derive(Debug, Clone, Copy)]
pub struct TriggerInfo {
    pub buckets: BucketMask,
}

impl TriggerInfo {
    pub fn scan(input: &str) -> Self {
        let mut buckets = BucketMask::empty();

        for c in input.chars() {
            match c {
                '0'..='9' => buckets |= BucketMask::HAS_DIGITS,
                '\'' => buckets |= BucketMask::HAS_APOSTROPHE,
                ':' => buckets |= BucketMask::HAS_COLON,
                c if is_emoji(c) => buckets |= BucketMask::HAS_EMOJI,
                _ => {}
            }
        }

        TriggerInfo { buckets }
    }

    /// Whether a table requiring `required` (any-of) may match.
    pub fn allows(&self, required: BucketMask) -> bool {
        required.is_empty() || self.buckets.intersects(required)
    }
}

/// Emoji and emoji-component code points.
///
/// Covers the pictographic planes, dingbats/misc symbols, regional
/// indicators, keycap combiner, the zero-width joiner and variation
/// selector-16 used inside emoji sequences.
pub(crate) fn is_emoji(c: char) -> bool {
    matches!(
        c as u32,
        0x1F000..=0x1FAFF
            | 0x2600..=0x27BF
            | 0x2B00..=0x2BFF
            | 0x2190..=0x21FF
            | 0x2300..=0x23FF
            | 0x20E3
            | 0x200D
            | 0xFE0F
            | 0x00A9
            | 0x00AE
            | 0x203C
            | 0x2049
            | 0x2122
            | 0x2139
            | 0x3030
            | 0x303D
            | 0x3297
            | 0x3299
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_detects_buckets() {
        let info = TriggerInfo::scan("I'm 😊 at 10:30");
        assert!(info.buckets.contains(BucketMask::HAS_APOSTROPHE));
        assert!(info.buckets.contains(BucketMask::HAS_EMOJI));
        assert!(info.buckets.contains(BucketMask::HAS_COLON));
        assert!(info.buckets.contains(BucketMask::HAS_DIGITS));

        let plain = TriggerInfo::scan("hello there");
        assert!(plain.buckets.is_empty());
    }

    #[test]
    fn allows_is_any_of() {
        let info = TriggerInfo::scan(":wave:");
        assert!(info.allows(BucketMask::empty()));
        assert!(info.allows(BucketMask::HAS_EMOJI | BucketMask::HAS_COLON));
        assert!(!info.allows(BucketMask::HAS_EMOJI));
    }

    #[test]
    fn emoji_ranges() {
        assert!(is_emoji('😊'));
        assert!(is_emoji('❤'));
        assert!(is_emoji('\u{FE0F}'));
        assert!(!is_emoji('é'));
        assert!(!is_emoji('œ'));
        assert!(!is_emoji('+'));
    }
}
