//! Replace stage: ordered substitution passes.
//!
//! ```text
//! substitutes ─▶ contractions ─▶ british ─▶ spellfix ─▶ textspeak ─▶ frivolous ─▶ emoji
//! ```
//!
//! A pass scans its input once, splices every selected hit's output into a
//! fresh string and tidies whitespace. Output text is never re-scanned by the
//! same pass. The frivolous pass is the exception: it only removes fillers
//! that open the utterance, and repeats until the opening is filler-free.

use std::time::Instant;

use super::clean::tidy;
use super::compiled_rules::{CompiledTable, Lexicon, TableKind};
use super::matcher::opens_utterance;
use super::metrics::PassMetrics;
use super::trigger::TriggerInfo;

bitflags::bitflags! {
    /// A subset of replace passes. Passes always run in pipeline order,
    /// whatever order the flags are combined in.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ReplacePasses: u16 {
        const SUBSTITUTES  = 1 << 0;
        const CONTRACTIONS = 1 << 1;
        const BRITISH      = 1 << 2;
        const SPELLFIX     = 1 << 3;
        const TEXTSPEAK    = 1 << 4;
        const FRIVOLOUS    = 1 << 5;
        const EMOJI        = 1 << 6;
    }
}

impl Default for ReplacePasses {
    fn default() -> Self {
        ReplacePasses::all()
    }
}

const PASS_ORDER: [(ReplacePasses, TableKind); 7] = [
    (ReplacePasses::SUBSTITUTES, TableKind::Substitutes),
    (ReplacePasses::CONTRACTIONS, TableKind::Contractions),
    (ReplacePasses::BRITISH, TableKind::British),
    (ReplacePasses::SPELLFIX, TableKind::Spellfix),
    (ReplacePasses::TEXTSPEAK, TableKind::Textspeak),
    (ReplacePasses::FRIVOLOUS, TableKind::Frivolous),
    (ReplacePasses::EMOJI, TableKind::Emoji),
];

/// Result of one pass.
struct Applied {
    text: String,
    replacements: usize,
    ran: bool,
}

pub(crate) struct Replacer<'l> {
    lexicon: &'l Lexicon,
}

impl<'l> Replacer<'l> {
    pub fn new(lexicon: &'l Lexicon) -> Self {
        Replacer { lexicon }
    }

    /// Run the selected passes in pipeline order.
    pub fn run(&self, text: &str, passes: ReplacePasses) -> String {
        let mut current = tidy(text);
        for (flag, kind) in PASS_ORDER {
            if passes.contains(flag) {
                current = self.apply(&current, kind).text;
            }
        }
        current
    }

    /// Like [`Replacer::run`], also recording one [`PassMetrics`] per selected pass.
    pub fn run_traced(&self, text: &str, passes: ReplacePasses) -> (String, Vec<PassMetrics>) {
        let mut current = tidy(text);
        let mut trace = Vec::new();
        for (flag, kind) in PASS_ORDER {
            if !passes.contains(flag) {
                continue;
            }
            let started = Instant::now();
            let applied = self.apply(&current, kind);
            trace.push(PassMetrics {
                pass: kind.name(),
                duration: started.elapsed(),
                replacements: applied.replacements,
                ran: applied.ran,
                output: applied.text.clone(),
            });
            current = applied.text;
        }
        (current, trace)
    }

    /// Run a single pass of table `kind` on `text`.
    pub fn pass(&self, text: &str, kind: TableKind) -> String {
        self.apply(&tidy(text), kind).text
    }

    fn apply(&self, text: &str, kind: TableKind) -> Applied {
        if !TriggerInfo::scan(text).allows(kind.buckets()) {
            return Applied { text: text.to_string(), replacements: 0, ran: false };
        }

        let table = self.lexicon.table(kind);
        let (spliced, replacements) = match kind {
            TableKind::Frivolous => strip_openers(table, text),
            _ => splice(table, text),
        };
        Applied { text: tidy(&spliced), replacements, ran: true }
    }
}

/// Replace every selected hit with its entry's output, left to right.
fn splice(table: &CompiledTable, text: &str) -> (String, usize) {
    let hits = table.find_all(text);
    if hits.is_empty() {
        return (text.to_string(), 0);
    }

    let mut out = String::with_capacity(text.len() + 16);
    let mut last = 0;
    for hit in &hits {
        let output = table.output(hit.entry);
        tracing::trace!(
            pass = table.kind.name(),
            start = hit.span.start,
            end = hit.span.end,
            from = %&text[hit.span.start..hit.span.end],
            to = output,
            "replace"
        );
        out.push_str(&text[last..hit.span.start]);
        out.push_str(output);
        last = hit.span.end;
    }
    out.push_str(&text[last..]);
    (out, hits.len())
}

/// Remove fillers opening the utterance, along with the spaces and commas
/// after them, until the first remaining word is not a filler.
///
/// A hit is only taken when nothing but punctuation precedes it, whatever
/// the entry's anchor; mid-utterance `well` or `um` stay.
fn strip_openers(table: &CompiledTable, text: &str) -> (String, usize) {
    let mut current = text.to_string();
    let mut removed = 0;

    // Patterns are never empty, so every round shortens the text.
    while let Some(hit) = table.find_all(&current).into_iter().next() {
        if !opens_utterance(&current, hit.span.start) {
            break;
        }
        tracing::trace!(pass = table.kind.name(), filler = %&current[hit.span.start..hit.span.end], "remove");

        let rest = current[hit.span.end..].trim_start_matches(|c: char| c.is_whitespace() || c == ',');
        current = format!("{}{}", &current[..hit.span.start], rest);
        removed += 1;
    }

    (current, removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LexiconSource;
    use crate::{Anchor, RuleEntry};

    fn lexicon(build: impl FnOnce(&mut LexiconSource)) -> Lexicon {
        let mut source = LexiconSource::default();
        build(&mut source);
        Lexicon::compile(&source).unwrap()
    }

    #[test]
    fn splices_outputs_and_tidies_removals() {
        let lex = lexicon(|s| {
            s.substitutes.push(RuleEntry::phrase("w/", "with"));
            s.substitutes.push(RuleEntry::phrase("kgs.", "kilograms"));
            s.substitutes.push(RuleEntry::phrase("really", ""));
        });
        let replacer = Replacer::new(&lex);
        let cases: Vec<(&str, &str)> = vec![
            ("90 kgs. total", "90 kilograms total"),
            ("tea w/ milk", "tea with milk"),
            ("I really   really like it", "I like it"),
            ("really", ""),
            ("nothing to do", "nothing to do"),
        ];
        for (input, expected) in cases {
            assert_eq!(replacer.run(input, ReplacePasses::all()), expected, "input: {input:?}");
        }
    }

    #[test]
    fn output_is_not_rescanned_within_a_pass() {
        let lex = lexicon(|s| {
            s.textspeak.push(RuleEntry::phrase("u", "you u"));
        });
        assert_eq!(Replacer::new(&lex).pass("see u", TableKind::Textspeak), "see you u");
    }

    #[test]
    fn passes_run_in_pipeline_order() {
        // textspeak produces a british spelling; british already ran, so it stays.
        let lex = lexicon(|s| {
            s.british.push(RuleEntry::phrase("colour", "color"));
            s.textspeak.push(RuleEntry::phrase("clr", "colour"));
            s.substitutes.push(RuleEntry::phrase("fav", "favourite"));
            s.british.push(RuleEntry::phrase("favourite", "favorite"));
        });
        let replacer = Replacer::new(&lex);
        assert_eq!(replacer.run("fav clr", ReplacePasses::all()), "favorite colour");
        assert_eq!(replacer.run("fav clr", ReplacePasses::TEXTSPEAK | ReplacePasses::SUBSTITUTES), "favourite colour");
    }

    #[test]
    fn frivolous_strips_repeated_openers_only() {
        let lex = lexicon(|s| {
            for filler in ["well ,", "well,", "um", "ahh"] {
                s.frivolous.push(RuleEntry::phrase(filler, "").anchored(Anchor::Start));
            }
        });
        let replacer = Replacer::new(&lex);
        let cases: Vec<(&str, &str)> = vec![
            ("Well , I could not help it", "I could not help it"),
            ("um, ahh well, fine", "fine"),
            ("ahh let me see", "let me see"),
            ("let me see", "let me see"),
            ("I said um twice", "I said um twice"),
            ("um", ""),
        ];
        for (input, expected) in cases {
            assert_eq!(replacer.pass(input, TableKind::Frivolous), expected, "input: {input:?}");
        }
    }

    #[test]
    fn gated_tables_are_skipped() {
        let lex = lexicon(|s| {
            s.contractions.push(RuleEntry::phrase("n't", "not"));
        });
        let (out, trace) = Replacer::new(&lex).run_traced("do nt go", ReplacePasses::CONTRACTIONS);
        assert_eq!(out, "do nt go");
        assert_eq!(trace.len(), 1);
        assert_eq!(trace[0].pass, "contractions");
        assert!(!trace[0].ran);

        let (out, trace) = Replacer::new(&lex).run_traced("do n't go", ReplacePasses::CONTRACTIONS);
        assert_eq!(out, "do not go");
        assert!(trace[0].ran);
        assert_eq!(trace[0].replacements, 1);
    }

    #[test]
    fn trace_records_each_selected_pass() {
        let (out, trace) = Replacer::new(Lexicon::builtin()).run_traced("hwo do u", ReplacePasses::all());
        assert_eq!(out, "how do you");
        let names: Vec<&str> = trace.iter().map(|p| p.pass).collect();
        assert_eq!(
            names,
            ["substitutes", "contractions", "british", "spellfix", "textspeak", "frivolous", "emoji"]
        );
        assert_eq!(trace.last().map(|p| p.output.as_str()), Some("how do you"));
    }
}
