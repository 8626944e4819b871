//! Lexicon configuration: the uncompiled rule tables.
//!
//! A [`LexiconSource`] is plain data. The built-in one is assembled from the
//! static tables in `rules/`; a user one is usually read from JSON:
//!
//! ```json
//! {
//!   "substitutes": [
//!     { "pattern": { "phrase": "brekky" }, "output": "breakfast" }
//!   ],
//!   "keyword_tags": [
//!     { "pattern": { "phrase": "cheers" }, "anchor": "start", "output": "thanks" }
//!   ]
//! }
//! ```
//!
//! Missing tables are empty. Merging with [`LexiconSource::extend`] puts the
//! user entries in front, so they win ties against built-in entries.

use serde::{Deserialize, Serialize};

use crate::RuleEntry;
use crate::engine::TableKind;
use crate::error::LexiconError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LexiconSource {
    pub substitutes: Vec<RuleEntry>,
    pub contractions: Vec<RuleEntry>,
    pub british: Vec<RuleEntry>,
    pub spellfix: Vec<RuleEntry>,
    pub textspeak: Vec<RuleEntry>,
    pub frivolous: Vec<RuleEntry>,
    pub emoji: Vec<RuleEntry>,
    pub keyword_tags: Vec<RuleEntry>,
    pub emoji_tags: Vec<RuleEntry>,
    pub text_emoji_tags: Vec<RuleEntry>,
    pub intents: Vec<RuleEntry>,
}

impl LexiconSource {
    /// The shipped tables.
    pub fn builtin() -> Self {
        crate::rules::builtin()
    }

    /// Parse tables from JSON. Unknown table names are an error.
    pub fn from_json(json: &str) -> Result<Self, LexiconError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, LexiconError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn entries(&self, kind: TableKind) -> &[RuleEntry] {
        match kind {
            TableKind::Substitutes => &self.substitutes,
            TableKind::Contractions => &self.contractions,
            TableKind::British => &self.british,
            TableKind::Spellfix => &self.spellfix,
            TableKind::Textspeak => &self.textspeak,
            TableKind::Frivolous => &self.frivolous,
            TableKind::Emoji => &self.emoji,
            TableKind::KeywordTags => &self.keyword_tags,
            TableKind::EmojiTags => &self.emoji_tags,
            TableKind::TextEmojiTags => &self.text_emoji_tags,
            TableKind::Intents => &self.intents,
        }
    }

    pub fn entries_mut(&mut self, kind: TableKind) -> &mut Vec<RuleEntry> {
        match kind {
            TableKind::Substitutes => &mut self.substitutes,
            TableKind::Contractions => &mut self.contractions,
            TableKind::British => &mut self.british,
            TableKind::Spellfix => &mut self.spellfix,
            TableKind::Textspeak => &mut self.textspeak,
            TableKind::Frivolous => &mut self.frivolous,
            TableKind::Emoji => &mut self.emoji,
            TableKind::KeywordTags => &mut self.keyword_tags,
            TableKind::EmojiTags => &mut self.emoji_tags,
            TableKind::TextEmojiTags => &mut self.text_emoji_tags,
            TableKind::Intents => &mut self.intents,
        }
    }

    /// Merge `user` into `self`, table by table, user entries first.
    pub fn extend(&mut self, mut user: LexiconSource) {
        for kind in TableKind::ALL {
            let mine = std::mem::take(self.entries_mut(kind));
            let merged = self.entries_mut(kind);
            merged.append(user.entries_mut(kind));
            merged.extend(mine);
        }
    }

    /// Total number of entries across all tables.
    pub fn len(&self) -> usize {
        TableKind::ALL.iter().map(|&kind| self.entries(kind).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Anchor, RulePattern};

    #[test]
    fn reads_partial_json() {
        let source = LexiconSource::from_json(
            r#"{
                "substitutes": [{ "pattern": { "phrase": "brekky" }, "output": "breakfast" }],
                "spellfix": [{
                    "pattern": { "sequence": { "heads": ["fo"], "followers": ["the"] } },
                    "output": "of"
                }],
                "keyword_tags": [{ "pattern": { "regex": "cheers+" }, "anchor": "start", "output": "thanks" }]
            }"#,
        )
        .unwrap();

        assert_eq!(source.len(), 3);
        assert_eq!(source.substitutes, [RuleEntry::phrase("brekky", "breakfast")]);
        assert_eq!(source.spellfix[0].pattern, RulePattern::Sequence {
            heads: vec!["fo".into()],
            followers: vec!["the".into()]
        });
        assert_eq!(source.keyword_tags[0].anchor, Anchor::Start);
        assert!(source.british.is_empty());
    }

    #[test]
    fn rejects_unknown_tables_and_bad_json() {
        assert!(matches!(LexiconSource::from_json(r#"{ "substitute": [] }"#), Err(LexiconError::Json(_))));
        assert!(matches!(LexiconSource::from_json("{"), Err(LexiconError::Json(_))));
    }

    #[test]
    fn extend_puts_user_entries_first() {
        let mut source = LexiconSource::default();
        source.british.push(RuleEntry::phrase("colour", "color"));

        let mut user = LexiconSource::default();
        user.british.push(RuleEntry::phrase("colour", "hue"));
        user.textspeak.push(RuleEntry::phrase("brb", "be right back"));

        source.extend(user);
        assert_eq!(source.british[0].output, "hue");
        assert_eq!(source.british[1].output, "color");
        assert_eq!(source.textspeak.len(), 1);
    }

    #[test]
    fn json_round_trip_of_builtin() {
        let builtin = LexiconSource::builtin();
        let json = builtin.to_json().unwrap();
        assert_eq!(LexiconSource::from_json(&json).unwrap(), builtin);
    }
}
