//! Boundary-safe, stateless matching over a [`CompiledTable`].
//!
//! ```text
//! text ──▶ candidates()
//!            ├─ phrase automaton (overlapping hits)
//!            ├─ sequence / regex entries (captures_at, retry one char on reject)
//!            └─ accepts(): boundary ∧ anchor ∧ ¬negated
//!        ──▶ select()      earliest start, longest span, table order
//!        ──▶ Vec<Match>    non-overlapping, left to right
//! ```
//!
//! Every method takes `&self` and builds its iterators locally, so two calls
//! on the same table (or two threads) can never observe each other.

use super::compiled_rules::CompiledTable;
use crate::{Anchor, Match, Range};

/// Tokens that cancel a following guarded hit (`not sorry`, `never mind`).
const NEGATORS: &[&str] = &[
    "not", "never", "no", "dont", "don't", "doesn't", "didn't", "isn't", "wasn't", "aren't", "weren't", "won't",
    "can't", "cannot", "hardly",
];

impl CompiledTable {
    /// All boundary-safe hits, possibly overlapping, in no particular order.
    pub(crate) fn candidates(&self, text: &str) -> Vec<Match> {
        let mut out = Vec::new();

        if let Some(automaton) = &self.phrases {
            for m in automaton.find_overlapping_iter(text) {
                let range = Range { start: m.start(), end: m.end() };
                let hit = Match { entry: self.phrase_entries[m.pattern().as_usize()], span: range, extent: range };
                if self.accepts(text, &hit) {
                    out.push(hit);
                }
            }
        }

        for pattern in &self.patterns {
            let mut at = 0;
            while let Some(caps) = pattern.regex.captures_at(text, at) {
                let Some(whole) = caps.get(0) else { break };
                let extent = Range { start: whole.start(), end: whole.end() };
                let span = caps.name("head").map(|h| Range { start: h.start(), end: h.end() }).unwrap_or(extent);
                let hit = Match { entry: pattern.entry, span, extent };

                if extent.len() > 0 && self.accepts(text, &hit) {
                    out.push(hit);
                    at = extent.end;
                } else {
                    // Rejected: retry from the next character so an
                    // overlapping, boundary-safe hit is not skipped.
                    match text[whole.start()..].chars().next() {
                        Some(c) => at = whole.start() + c.len_utf8(),
                        None => break,
                    }
                }
            }
        }

        out
    }

    /// Non-overlapping hits, left to right, using the substitution tie-break.
    pub(crate) fn find_all(&self, text: &str) -> Vec<Match> {
        select(self.candidates(text))
    }

    /// Whether any entry matches anywhere in `text`.
    #[cfg(test)]
    pub(crate) fn is_match(&self, text: &str) -> bool {
        !self.candidates(text).is_empty()
    }

    fn accepts(&self, text: &str, hit: &Match) -> bool {
        boundary_ok(text, hit.extent)
            && anchor_ok(text, hit.extent, self.entries[hit.entry].anchor)
            && !(self.kind.negation_guarded() && negated(text, hit.extent.start))
    }
}

/// Earliest start first, then longest span, then table order; drop any hit
/// overlapping one already taken.
pub(crate) fn select(mut candidates: Vec<Match>) -> Vec<Match> {
    candidates.sort_by(|a, b| {
        a.span.start.cmp(&b.span.start).then(b.span.len().cmp(&a.span.len())).then(a.entry.cmp(&b.entry))
    });

    let mut taken: Vec<Match> = Vec::with_capacity(candidates.len());
    for hit in candidates {
        // Taken spans are sorted and disjoint: only the last can overlap.
        if taken.last().is_none_or(|last| !last.span.overlaps(&hit.span)) {
            taken.push(hit);
        }
    }
    taken
}

/// Characters that make up a word for boundary purposes. An apostrophe
/// counts only as a pattern edge; in the text it is word-internal when
/// followed/preceded by a letter (see `word_before`/`word_after`).
pub(crate) fn is_word_char(c: char) -> bool {
    is_solid(c) || c == '\''
}

fn is_solid(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Does the text just before byte `at` continue a word?
fn word_before(text: &str, at: usize) -> bool {
    let mut chars = text[..at].chars().rev();
    match chars.next() {
        None => false,
        Some('\'') => chars.next().is_some_and(is_solid),
        Some(c) => is_solid(c),
    }
}

/// Does the text from byte `at` continue a word?
fn word_after(text: &str, at: usize) -> bool {
    let mut chars = text[at..].chars();
    match chars.next() {
        None => false,
        Some('\'') => chars.next().is_some_and(is_solid),
        Some(c) => is_solid(c),
    }
}

pub(crate) fn boundary_ok(text: &str, extent: Range) -> bool {
    let matched = &text[extent.start..extent.end];
    if matched.chars().next().is_some_and(is_word_char) && word_before(text, extent.start) {
        return false;
    }
    if matched.chars().next_back().is_some_and(is_word_char) && word_after(text, extent.end) {
        return false;
    }
    true
}

/// Only punctuation, spaces or symbols before byte `at`.
pub(crate) fn opens_utterance(text: &str, at: usize) -> bool {
    !text[..at].chars().any(is_solid)
}

fn anchor_ok(text: &str, extent: Range, anchor: Anchor) -> bool {
    let closes = || !text[extent.end..].chars().any(is_solid);
    match anchor {
        Anchor::Anywhere => true,
        Anchor::Start => opens_utterance(text, extent.start),
        Anchor::Whole => opens_utterance(text, extent.start) && closes(),
    }
}

/// Is the token right before `start` (whitespace only in between) a negator?
fn negated(text: &str, start: usize) -> bool {
    let before = text[..start].trim_end();
    let token = before.rsplit(|c: char| !is_word_char(c)).next().unwrap_or("");
    !token.is_empty() && NEGATORS.iter().any(|n| token.eq_ignore_ascii_case(n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RuleEntry;
    use crate::engine::TableKind;

    fn table(kind: TableKind, entries: &[RuleEntry]) -> CompiledTable {
        CompiledTable::compile(kind, entries).unwrap()
    }

    fn spans(text: &str, matches: &[Match]) -> Vec<String> {
        matches.iter().map(|m| text[m.span.start..m.span.end].to_string()).collect()
    }

    #[test]
    fn phrase_respects_word_boundaries() {
        let t = table(TableKind::Substitutes, &[RuleEntry::phrase("sept", "September")]);
        let cases: Vec<(&str, Vec<&str>)> = vec![
            ("Sept", vec!["Sept"]),
            ("...Sept", vec!["Sept"]),
            ("Sept.", vec!["Sept"]),
            ("September", vec![]),
            ("inSept", vec![]),
            ("Sept_1", vec![]),
            ("(sept)", vec!["sept"]),
        ];
        for (text, expected) in cases {
            assert_eq!(spans(text, &t.find_all(text)), expected, "input: {text:?}");
        }
    }

    #[test]
    fn apostrophes_are_word_internal_only() {
        let t = table(
            TableKind::Textspeak,
            &[RuleEntry::phrase("c", "see"), RuleEntry::phrase("t", "x"), RuleEntry::phrase("colour", "color")],
        );
        assert!(t.find_all("c'mon").is_empty());
        assert!(t.find_all("don't").is_empty());
        assert_eq!(spans("'colour'", &t.find_all("'colour'")), ["colour"]);
        assert_eq!(spans("I can c u", &t.find_all("I can c u")), ["c"]);
    }

    #[test]
    fn contraction_suffix_needs_a_gap() {
        let t = table(TableKind::Contractions, &[RuleEntry::phrase("n't", "not")]);
        assert_eq!(spans("do n't", &t.find_all("do n't")), ["n't"]);
        assert!(t.find_all("don't").is_empty());
    }

    #[test]
    fn punctuation_edges_need_no_boundary() {
        let t = table(TableKind::Substitutes, &[RuleEntry::phrase("w/", "with"), RuleEntry::phrase("kgs.", "kg")]);
        assert_eq!(spans("w/friends", &t.find_all("w/friends")), ["w/"]);
        assert_eq!(spans("90 kgs.total", &t.find_all("90 kgs.total")), ["kgs."]);
    }

    #[test]
    fn earliest_then_longest_then_table_order() {
        let t = table(
            TableKind::Substitutes,
            &[
                RuleEntry::phrase("kgs", "a"),
                RuleEntry::phrase("kgs.", "b"),
                RuleEntry::phrase("new york", "c"),
                RuleEntry::phrase("york city", "d"),
                RuleEntry::phrase("KGS", "e"),
            ],
        );
        let text = "90 kgs. in new york city";
        let found = t.find_all(text);
        assert_eq!(spans(text, &found), ["kgs.", "new york"]);
        assert_eq!(t.output(found[0].entry), "b");

        let text = "kgs";
        assert_eq!(t.output(t.find_all(text)[0].entry), "a");
    }

    #[test]
    fn sequence_rewrites_head_only() {
        let t = table(
            TableKind::Spellfix,
            &[RuleEntry::sequence(["hwo"], ["do", "does"], "how"), RuleEntry::sequence(["hwo"], ["is"], "who")],
        );
        let text = "hwo does it work, hwo is that";
        let found = t.find_all(text);
        assert_eq!(spans(text, &found), ["hwo", "hwo"]);
        assert_eq!(t.output(found[0].entry), "how");
        assert_eq!(t.output(found[1].entry), "who");
        assert!(t.find_all("hwo dog").is_empty());
        assert!(t.find_all("hwo").is_empty());
    }

    #[test]
    fn regex_retries_after_rejected_hit() {
        let t = table(TableKind::TextEmojiTags, &[RuleEntry::regex("(?:ha){2,}", "laugh")]);
        assert!(t.find_all("aha").is_empty());
        assert_eq!(spans("shahaha haha!", &t.find_all("shahaha haha!")), ["haha"]);
    }

    #[test]
    fn anchors() {
        let t = table(
            TableKind::KeywordTags,
            &[
                RuleEntry::phrase("excuse me", "apology").anchored(Anchor::Start),
                RuleEntry::phrase("no", "no").anchored(Anchor::Whole),
            ],
        );
        assert!(t.is_match("excuse me princess"));
        assert!(t.is_match("...excuse me"));
        assert!(!t.is_match("well excuse me princess"));
        assert!(t.is_match("no!"));
        assert!(!t.is_match("no way"));
    }

    #[test]
    fn negation_guard_only_on_guarded_tables() {
        let entries = [RuleEntry::phrase("sorry", "apology")];
        let guarded = table(TableKind::KeywordTags, &entries);
        assert!(guarded.is_match("I am sorry"));
        assert!(!guarded.is_match("I am not sorry"));
        assert!(guarded.is_match("no, sorry"));

        let unguarded = table(TableKind::Textspeak, &entries);
        assert!(unguarded.is_match("I am not sorry"));
    }

    #[test]
    fn matching_is_stateless() {
        let t = table(TableKind::KeywordTags, &[RuleEntry::phrase("hi", "hello")]);
        let first = t.find_all("hi there");
        for _ in 0..3 {
            assert_eq!(t.find_all("hi there"), first);
            assert!(t.find_all("nothing here").is_empty());
        }
    }
}
