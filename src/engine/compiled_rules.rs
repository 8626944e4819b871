//! Rule-table compilation.
//!
//! This module holds the *static* side of the engine: a [`Lexicon`] is the set
//! of compiled tables derived once from a [`LexiconSource`], then shared
//! read-only by every call.
//!
//! Each [`CompiledTable`] splits its entries by pattern kind:
//!
//! - **Phrases** go into a single case-insensitive Aho-Corasick automaton built
//!   with `MatchKind::Standard`, so the matcher can walk *overlapping* hits
//!   and apply its own boundary and selection rules.
//! - **Sequences** and **regexes** each compile to one `regex::Regex`.
//!   A sequence has a named `head` group marking the rewritable span.
//!
//! ## Invariants
//!
//! - `CompiledTable::entries` is in source order; entry index doubles as the
//!   table-order tie breaker and as the tag ordering key.
//! - `phrase_entries[pattern_id]` maps an automaton pattern back to its entry.
//! - Nothing here stores a scan position; see `matcher.rs`.

use std::fmt;

use aho_corasick::{AhoCorasick, MatchKind};
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use crate::config::LexiconSource;
use crate::error::LexiconError;
use crate::{Anchor, RuleEntry, RulePattern};

bitflags::bitflags! {
    /// Coarse features of an input, used to skip tables that cannot match.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct BucketMask: u32 {
        const HAS_DIGITS     = 1 << 0;
        const HAS_APOSTROPHE = 1 << 1;
        const HAS_COLON      = 1 << 2;
        const HAS_EMOJI      = 1 << 3;
    }
}

/// The named rule tables of a lexicon.
///
/// Replace tables are listed in pass order, tag tables in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    Substitutes,
    Contractions,
    British,
    Spellfix,
    Textspeak,
    Frivolous,
    Emoji,
    KeywordTags,
    EmojiTags,
    TextEmojiTags,
    Intents,
}

impl TableKind {
    pub const ALL: [TableKind; 11] = [
        TableKind::Substitutes,
        TableKind::Contractions,
        TableKind::British,
        TableKind::Spellfix,
        TableKind::Textspeak,
        TableKind::Frivolous,
        TableKind::Emoji,
        TableKind::KeywordTags,
        TableKind::EmojiTags,
        TableKind::TextEmojiTags,
        TableKind::Intents,
    ];

    /// Tag tables in their fixed evaluation order.
    pub const TAGS: [TableKind; 4] =
        [TableKind::KeywordTags, TableKind::EmojiTags, TableKind::TextEmojiTags, TableKind::Intents];

    /// Table name as used in lexicon JSON and in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            TableKind::Substitutes => "substitutes",
            TableKind::Contractions => "contractions",
            TableKind::British => "british",
            TableKind::Spellfix => "spellfix",
            TableKind::Textspeak => "textspeak",
            TableKind::Frivolous => "frivolous",
            TableKind::Emoji => "emoji",
            TableKind::KeywordTags => "keyword_tags",
            TableKind::EmojiTags => "emoji_tags",
            TableKind::TextEmojiTags => "text_emoji_tags",
            TableKind::Intents => "intents",
        }
    }

    pub fn is_tag_table(self) -> bool {
        TableKind::TAGS.contains(&self)
    }

    /// Buckets of which at least one must be present for the table to run.
    /// Empty means always on.
    pub(crate) fn buckets(self) -> BucketMask {
        match self {
            TableKind::Contractions => BucketMask::HAS_APOSTROPHE,
            TableKind::Emoji => BucketMask::HAS_EMOJI,
            TableKind::EmojiTags => BucketMask::HAS_EMOJI | BucketMask::HAS_COLON,
            _ => BucketMask::empty(),
        }
    }

    /// Whether a hit preceded by a negator (`not sorry`) is discarded.
    pub(crate) fn negation_guarded(self) -> bool {
        matches!(self, TableKind::KeywordTags | TableKind::Intents)
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone)]
pub(crate) struct CompiledEntry {
    pub output: String,
    pub anchor: Anchor,
}

/// A regex-backed entry: a `Sequence` or a `Regex` pattern.
#[derive(Debug, Clone)]
pub(crate) struct CompiledPattern {
    pub entry: usize,
    pub regex: Regex,
}

/// One rule table, ready to match.
#[derive(Debug, Clone)]
pub(crate) struct CompiledTable {
    pub kind: TableKind,
    pub entries: Vec<CompiledEntry>,
    pub phrases: Option<AhoCorasick>,
    pub phrase_entries: Vec<usize>,
    pub patterns: Vec<CompiledPattern>,
}

impl CompiledTable {
    /// Validate and compile `entries` for table `kind`.
    pub fn compile(kind: TableKind, entries: &[RuleEntry]) -> Result<Self, LexiconError> {
        let mut compiled = Vec::with_capacity(entries.len());
        let mut phrase_texts: Vec<&str> = Vec::new();
        let mut phrase_entries = Vec::new();
        let mut patterns = Vec::new();

        for (index, entry) in entries.iter().enumerate() {
            if kind.is_tag_table() && entry.output.trim().is_empty() {
                return Err(LexiconError::EmptyLabel { table: kind, index });
            }

            match &entry.pattern {
                RulePattern::Phrase(text) => {
                    if text.trim().is_empty() {
                        return Err(LexiconError::EmptyPattern { table: kind, index });
                    }
                    phrase_texts.push(text.as_str());
                    phrase_entries.push(index);
                }
                RulePattern::Sequence { heads, followers } => {
                    let heads = alternation(heads);
                    let followers = alternation(followers);
                    if heads.is_empty() || followers.is_empty() {
                        return Err(LexiconError::EmptySequence { table: kind, index });
                    }
                    let source = format!(r"(?P<head>{heads})\s+(?:{followers})");
                    patterns.push(CompiledPattern { entry: index, regex: build_regex(kind, index, &source)? });
                }
                RulePattern::Regex(source) => {
                    if source.is_empty() {
                        return Err(LexiconError::EmptyPattern { table: kind, index });
                    }
                    patterns.push(CompiledPattern { entry: index, regex: build_regex(kind, index, source)? });
                }
            }

            compiled.push(CompiledEntry { output: entry.output.clone(), anchor: entry.anchor });
        }

        let phrases = if phrase_texts.is_empty() {
            None
        } else {
            let automaton = AhoCorasick::builder()
                .ascii_case_insensitive(true)
                .match_kind(MatchKind::Standard)
                .build(&phrase_texts)
                .map_err(|source| LexiconError::Automaton { table: kind, source })?;
            Some(automaton)
        };

        tracing::debug!(
            table = kind.name(),
            entries = compiled.len(),
            phrases = phrase_entries.len(),
            patterns = patterns.len(),
            "compiled rule table"
        );

        Ok(CompiledTable { kind, entries: compiled, phrases, phrase_entries, patterns })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn output(&self, entry: usize) -> &str {
        &self.entries[entry].output
    }
}

/// Escape and join alternatives, longest first so leftmost-first regex
/// semantics pick the longest head/follower. Inner spaces match any run of
/// whitespace.
fn alternation(words: &[String]) -> String {
    let mut words: Vec<&str> = words.iter().map(|w| w.trim()).filter(|w| !w.is_empty()).collect();
    words.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    words.dedup();
    words
        .iter()
        .map(|w| w.split_whitespace().map(regex::escape).collect::<Vec<_>>().join(r"\s+"))
        .collect::<Vec<_>>()
        .join("|")
}

fn build_regex(table: TableKind, index: usize, source: &str) -> Result<Regex, LexiconError> {
    RegexBuilder::new(source).case_insensitive(true).build().map_err(|err| LexiconError::InvalidRegex {
        table,
        index,
        pattern: source.to_string(),
        source: err,
    })
}

// --- Lexicon -----------------------------------------------------------------

static BUILTIN: Lazy<Lexicon> = Lazy::new(|| match Lexicon::compile(&LexiconSource::builtin()) {
    Ok(lexicon) => lexicon,
    Err(err) => panic!("built-in lexicon failed to compile: {err}"),
});

/// A complete, compiled set of rule tables.
///
/// Immutable after construction and `Send + Sync`; share one instance
/// between threads freely.
#[derive(Debug, Clone)]
pub struct Lexicon {
    tables: Vec<CompiledTable>,
}

impl Lexicon {
    /// The lexicon compiled from the shipped tables. Compiled on first use.
    pub fn builtin() -> &'static Lexicon {
        &BUILTIN
    }

    /// Validate and compile every table of `source`.
    pub fn compile(source: &LexiconSource) -> Result<Self, LexiconError> {
        let tables = TableKind::ALL
            .iter()
            .map(|&kind| CompiledTable::compile(kind, source.entries(kind)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Lexicon { tables })
    }

    /// Number of entries in table `kind`.
    pub fn table_len(&self, kind: TableKind) -> usize {
        self.table(kind).len()
    }

    pub(crate) fn table(&self, kind: TableKind) -> &CompiledTable {
        &self.tables[kind as usize]
    }
}
