//! Deterministic, rule-driven text normalization and tagging for chatbot input.
//!
//! The crate is a three-stage pipeline:
//!
//! ```text
//! raw text ── clean ──┬── replace ──▶ canonical English text
//!                     └── tag ──────▶ ordered, deduplicated tag labels
//! ```
//!
//! Every stage is a pure function of its input plus a set of immutable,
//! pre-compiled rule tables (a [`Lexicon`]). The built-in lexicon is compiled
//! once per process and shared by every call.
//!
//! ```
//! assert_eq!(botlang::clean("this    is     spaced     out"), "this is spaced out");
//! assert_eq!(botlang::replace("hwo do you"), "how do you");
//! assert_eq!(botlang::tag_all("eww , shut up , I have to go"), ["disgust", "goodbye", "stop"]);
//! ```

use serde::{Deserialize, Serialize};

#[macro_use]
mod macros;
mod api;
mod config;
mod engine;
mod error;
mod rules;

pub use api::{
    Options, Pipeline, Processed, ProcessedVerbose, clean, process, process_verbose, replace, replace_british,
    replace_contractions, replace_emoji, replace_frivolous, replace_spellfix, replace_substitutes, replace_textspeak,
    replace_with, tag_all, tag_categories, tag_test,
};
pub use config::LexiconSource;
pub use engine::{Lexicon, PassMetrics, ReplacePasses, RunMetrics, TableKind, TagMetrics, TagReport};
pub use error::LexiconError;

// --- Rule data model ---------------------------------------------------------

/// A matchable unit inside a rule table.
///
/// All variants match ASCII-case-insensitively and are boundary-safe: an edge
/// of the match that is a word character must not touch another word
/// character in the text (see [`Lexicon`] for the exact rule).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RulePattern {
    /// Literal phrase. Inner whitespace is a single literal space.
    Phrase(String),

    /// A head token followed by one of `followers`. Only the head is rewritten
    /// by substitution tables; the follower is context.
    ///
    /// ```text
    /// heads: ["hwo"], followers: ["do", "does"]  =>  "hwo do you" -> "how do you"
    /// ```
    Sequence { heads: Vec<String>, followers: Vec<String> },

    /// Token-class pattern in `regex` syntax (compiled case-insensitively).
    Regex(String),
}

/// Where in the utterance a rule is allowed to match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    /// Any boundary-safe position.
    #[default]
    Anywhere,
    /// The match must open the utterance; only punctuation or spaces may precede it.
    Start,
    /// The match must cover the whole utterance (surrounding punctuation allowed).
    Whole,
}

/// One `(pattern, output)` pair of a rule table.
///
/// For substitution tables `output` is the literal replacement (it may be
/// several words, or empty to remove the match). For tag tables it is the
/// tag label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleEntry {
    pub pattern: RulePattern,
    #[serde(default)]
    pub anchor: Anchor,
    pub output: String,
}

impl RuleEntry {
    pub fn phrase(text: impl Into<String>, output: impl Into<String>) -> Self {
        RuleEntry { pattern: RulePattern::Phrase(text.into()), anchor: Anchor::Anywhere, output: output.into() }
    }

    pub fn sequence<H, F>(heads: H, followers: F, output: impl Into<String>) -> Self
    where
        H: IntoIterator,
        H::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        RuleEntry {
            pattern: RulePattern::Sequence {
                heads: heads.into_iter().map(Into::into).collect(),
                followers: followers.into_iter().map(Into::into).collect(),
            },
            anchor: Anchor::Anywhere,
            output: output.into(),
        }
    }

    pub fn regex(pattern: impl Into<String>, output: impl Into<String>) -> Self {
        RuleEntry { pattern: RulePattern::Regex(pattern.into()), anchor: Anchor::Anywhere, output: output.into() }
    }

    /// Return the same entry restricted to `anchor`.
    pub fn anchored(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }
}

// --- Internal types ---------------------------------------------------------

/// Byte range into the text being matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Range {
    /// Start byte index (inclusive).
    pub start: usize,
    /// End byte index (exclusive).
    pub end: usize,
}

impl Range {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn overlaps(&self, other: &Range) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// A boundary-safe hit of one table entry.
///
/// `span` is the part a substitution rewrites; `extent` is everything the
/// pattern consumed (they differ for [`RulePattern::Sequence`], where the
/// follower is context only).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Match {
    pub entry: usize,
    pub span: Range,
    pub extent: Range,
}
