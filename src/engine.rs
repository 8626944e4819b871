//! Rule-table engine and the three pipeline stages.
//!
//! ## How the parts work together
//!
//! ```text
//! LexiconSource (named tables of RuleEntry)
//!        │  Lexicon::compile                    (compiled_rules.rs)
//!        v
//! Lexicon: one CompiledTable per TableKind, immutable, shared
//!        │
//! text ──┼── clean()                             (clean.rs)
//!        │
//!        ├── Replacer: pass by pass              (replace.rs)
//!        │     TriggerInfo::scan gates a table   (trigger.rs)
//!        │     CompiledTable::find_all           (matcher.rs)
//!        │     splice outputs, tidy spaces
//!        │
//!        └── Tagger: table by table              (tag.rs)
//!              CompiledTable::candidates         (matcher.rs)
//!              labels in table order -> TagSet   (dedup.rs)
//! ```
//!
//! ## Matching rules
//!
//! - The *word class* is alphanumerics, `_` and a word-internal apostrophe.
//!   An edge of a match that is itself a word character must not touch a word
//!   character outside the match. Punctuation is transparent: `colour?` and
//!   `...Sept` match `colour` / `Sept`, `September` does not match `Sept`.
//! - Selection for substitution: earliest start, then longest, then table
//!   order; overlapping candidates are dropped.
//! - Compiled tables hold no scan position. `regex::Regex` and
//!   `aho_corasick::AhoCorasick` are immutable and build their iterators per
//!   call, so one `Lexicon` serves any number of threads.
//!
//! ## Responsibilities by module
//!
//! - `compiled_rules.rs`: `TableKind`, `CompiledTable`, `Lexicon`; validation.
//! - `trigger.rs`: coarse input buckets used to skip tables that cannot match.
//! - `matcher.rs`: boundary, anchor and negation checks; candidate selection.
//! - `clean.rs`: structural normalization (no tables).
//! - `replace.rs`: ordered substitution passes.
//! - `tag.rs`: tag evaluation over the four tag tables.
//! - `dedup.rs`: ordered, duplicate-free `TagSet`.
//! - `metrics.rs`: optional timing/trace data for verbose runs.
//!
//! ## Debugging
//!
//! The engine emits `tracing` events: `debug` for lexicon compilation and
//! `trace` for every replacement and tag hit.

#[path = "engine/clean.rs"]
mod clean;
#[path = "engine/compiled_rules.rs"]
mod compiled_rules;
#[path = "engine/dedup.rs"]
mod dedup;
#[path = "engine/matcher.rs"]
mod matcher;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/replace.rs"]
mod replace;
#[path = "engine/tag.rs"]
mod tag;
#[path = "engine/trigger.rs"]
mod trigger;

pub(crate) use clean::{clean, tidy};
pub use compiled_rules::{Lexicon, TableKind};
pub use metrics::{PassMetrics, RunMetrics, TagMetrics};
pub use replace::ReplacePasses;
pub(crate) use replace::Replacer;
pub use tag::TagReport;
pub(crate) use tag::Tagger;
