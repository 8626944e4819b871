//! Built-in rule tables.
//!
//! Plain data plus small builders turning it into [`RuleEntry`] lists. Entry
//! order matters: it is the substitution tie-breaker and, for tag tables, the
//! order labels are reported in, so tag data is kept sorted by label.

use crate::config::LexiconSource;
use crate::{Anchor, RuleEntry};

pub mod emoji;
pub mod unicode;

mod replace {
    pub mod british;
    pub mod contractions;
    pub mod frivolous;
    pub mod spellfix;
    pub mod substitutes;
    pub mod textspeak;
}

mod tags {
    pub mod intents;
    pub mod keywords;
    pub mod text_emoji;
}


pub(crate) fn builtin() -> LexiconSource {
    LexiconSource {
        substitutes: replace::substitutes::entries(),
        contractions: replace::contractions::entries(),
        british: replace::british::entries(),
        spellfix: replace::spellfix::entries(),
        textspeak: replace::textspeak::entries(),
        frivolous: replace::frivolous::entries(),
        emoji: emoji::replace_entries(),
        keyword_tags: tags::keywords::entries(),
        emoji_tags: emoji::tag_entries(),
        text_emoji_tags: tags::text_emoji::entries(),
        intents: tags::intents::entries(),
    }
}

/// `(phrase, output)` pairs as unanchored phrase entries.
pub(crate) fn phrases(pairs: &[(&str, &str)]) -> Vec<RuleEntry> {
    pairs.iter().map(|&(phrase, output)| RuleEntry::phrase(phrase, output)).collect()
}

/// Every phrase of `words` mapped to the same `output`, restricted to `anchor`.
pub(crate) fn phrases_to(words: &[&str], output: &str, anchor: Anchor) -> impl Iterator<Item = RuleEntry> {
    let output = output.to_string();
    words.iter().map(move |&word| RuleEntry::phrase(word, output.clone()).anchored(anchor))
}
