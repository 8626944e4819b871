//! Tag stage.
//!
//! Tables are evaluated in [`TableKind::TAGS`] order. Within a table, labels
//! come out in table order (the index of the first entry that fired), not in
//! text order. The final list is the concatenation, deduplicated on first
//! occurrence.

use std::time::Instant;

use serde::Serialize;

use super::clean::clean;
use super::compiled_rules::{Lexicon, TableKind};
use super::dedup::TagSet;
use super::metrics::TagMetrics;
use super::trigger::TriggerInfo;

/// Labels per tag category, each in table order and duplicate-free.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TagReport {
    pub keyword: Vec<String>,
    pub emoji: Vec<String>,
    pub text_emoji: Vec<String>,
    pub intent: Vec<String>,
}

impl TagReport {
    /// Labels of tag table `kind`; empty for replace tables.
    pub fn category(&self, kind: TableKind) -> &[String] {
        match kind {
            TableKind::KeywordTags => &self.keyword,
            TableKind::EmojiTags => &self.emoji,
            TableKind::TextEmojiTags => &self.text_emoji,
            TableKind::Intents => &self.intent,
            _ => &[],
        }
    }

    fn category_mut(&mut self, kind: TableKind) -> Option<&mut Vec<String>> {
        match kind {
            TableKind::KeywordTags => Some(&mut self.keyword),
            TableKind::EmojiTags => Some(&mut self.emoji),
            TableKind::TextEmojiTags => Some(&mut self.text_emoji),
            TableKind::Intents => Some(&mut self.intent),
            _ => None,
        }
    }

    /// All labels, categories concatenated in evaluation order, first
    /// occurrence kept.
    pub fn labels(&self) -> Vec<String> {
        let mut set = TagSet::new();
        for kind in TableKind::TAGS {
            set.extend(self.category(kind).iter().map(String::as_str));
        }
        set.into_vec()
    }

    pub fn is_empty(&self) -> bool {
        TableKind::TAGS.iter().all(|&kind| self.category(kind).is_empty())
    }
}

pub(crate) struct Tagger<'l> {
    lexicon: &'l Lexicon,
}

impl<'l> Tagger<'l> {
    pub fn new(lexicon: &'l Lexicon) -> Self {
        Tagger { lexicon }
    }

    /// Clean `text`, then evaluate every tag table.
    pub fn report(&self, text: &str) -> TagReport {
        self.report_cleaned(&clean(text))
    }

    /// Evaluate every tag table on text that is already clean.
    pub fn report_cleaned(&self, cleaned: &str) -> TagReport {
        let mut report = TagReport::default();
        for kind in TableKind::TAGS {
            let labels = self.table_labels(kind, cleaned);
            if let Some(slot) = report.category_mut(kind) {
                *slot = labels;
            }
        }
        report
    }

    /// Like [`Tagger::report_cleaned`], also timing each table.
    pub fn report_traced(&self, cleaned: &str) -> (TagReport, Vec<TagMetrics>) {
        let mut report = TagReport::default();
        let mut trace = Vec::with_capacity(TableKind::TAGS.len());
        for kind in TableKind::TAGS {
            let started = Instant::now();
            let labels = self.table_labels(kind, cleaned);
            trace.push(TagMetrics { table: kind.name(), duration: started.elapsed(), labels: labels.clone() });
            if let Some(slot) = report.category_mut(kind) {
                *slot = labels;
            }
        }
        (report, trace)
    }

    fn table_labels(&self, kind: TableKind, text: &str) -> Vec<String> {
        if !TriggerInfo::scan(text).allows(kind.buckets()) {
            return Vec::new();
        }

        let table = self.lexicon.table(kind);
        let mut fired: Vec<usize> = table
            .candidates(text)
            .into_iter()
            .inspect(|hit| {
                tracing::trace!(
                    category = kind.name(),
                    label = table.output(hit.entry),
                    start = hit.extent.start,
                    end = hit.extent.end,
                    "tag"
                );
            })
            .map(|hit| hit.entry)
            .collect();
        fired.sort_unstable();
        fired.dedup();

        let mut set = TagSet::new();
        set.extend(fired.into_iter().map(|entry| table.output(entry)));
        set.into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LexiconSource;
    use crate::{Anchor, RuleEntry};

    #[test]
    fn labels_follow_table_order_not_text_order() {
        let mut source = LexiconSource::default();
        source.keyword_tags.push(RuleEntry::phrase("eww", "disgust"));
        source.keyword_tags.push(RuleEntry::phrase("i have to go", "goodbye"));
        source.keyword_tags.push(RuleEntry::phrase("shut up", "stop"));
        source.keyword_tags.push(RuleEntry::phrase("gross", "disgust"));
        let lex = Lexicon::compile(&source).unwrap();
        let tagger = Tagger::new(&lex);

        let report = tagger.report("I have to go , shut up , gross, eww");
        assert_eq!(report.keyword, ["disgust", "goodbye", "stop"]);
        assert!(report.emoji.is_empty());
    }

    #[test]
    fn categories_concatenate_and_dedup() {
        let mut source = LexiconSource::default();
        source.keyword_tags.push(RuleEntry::phrase("lol", "laugh"));
        source.keyword_tags.push(RuleEntry::phrase("hi", "hello"));
        source.text_emoji_tags.push(RuleEntry::phrase("xd", "laugh"));
        source.text_emoji_tags.push(RuleEntry::phrase(":(", "sad"));
        let lex = Lexicon::compile(&source).unwrap();

        let report = Tagger::new(&lex).report("hi xD lol :(");
        assert_eq!(report.keyword, ["laugh", "hello"]);
        assert_eq!(report.text_emoji, ["laugh", "sad"]);
        assert_eq!(report.labels(), ["laugh", "hello", "sad"]);
    }

    #[test]
    fn input_is_cleaned_first() {
        let mut source = LexiconSource::default();
        source.keyword_tags.push(RuleEntry::phrase("shut up", "stop").anchored(Anchor::Whole));
        let lex = Lexicon::compile(&source).unwrap();
        assert_eq!(Tagger::new(&lex).report("  “shut    up”  ").labels(), ["stop"]);
    }

    #[test]
    fn traced_report_matches_plain_report() {
        let tagger = Tagger::new(Lexicon::builtin());
        let text = clean("eww , shut up , I have to go :wave:");
        let (report, trace) = tagger.report_traced(&text);
        assert_eq!(report, tagger.report_cleaned(&text));
        let tables: Vec<&str> = trace.iter().map(|t| t.table).collect();
        assert_eq!(tables, ["keyword_tags", "emoji_tags", "text_emoji_tags", "intents"]);
        assert_eq!(trace[1].labels, ["slack_emoji_people"]);
    }

    #[test]
    fn empty_report() {
        let report = Tagger::new(Lexicon::builtin()).report("");
        assert!(report.is_empty());
        assert!(report.labels().is_empty());
        assert!(report.category(TableKind::British).is_empty());
    }
}
