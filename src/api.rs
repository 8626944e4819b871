use std::time::{Duration, Instant};

use serde::Serialize;

use crate::engine::{self, Lexicon, ReplacePasses, Replacer, RunMetrics, TableKind, TagReport, Tagger};

/// Options that affect a full pipeline run.
#[derive(Debug, Clone, Copy)]
pub struct Options {
    /// Replace passes to run; pipeline order is fixed regardless.
    pub passes: ReplacePasses,
}

impl Default for Options {
    fn default() -> Self {
        Options { passes: ReplacePasses::all() }
    }
}

/// Result from [`process`] and [`Pipeline::process`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Processed {
    /// The raw input.
    pub input: String,
    /// Output of the clean stage.
    pub cleaned: String,
    /// Output of the replace stage, run on `cleaned`.
    pub replaced: String,
    /// Tags of `cleaned`, in evaluation order.
    pub tags: Vec<String>,
    /// The same tags, per category.
    pub categories: TagReport,
}

/// Result from [`process_verbose`] and [`Pipeline::process_verbose`].
#[derive(Debug, Clone)]
pub struct ProcessedVerbose {
    pub processed: Processed,
    pub metrics: RunMetrics,
}

/// The pipeline over a particular [`Lexicon`].
///
/// The free functions of this crate are shorthands for
/// `Pipeline::default()`, which uses [`Lexicon::builtin`].
///
/// # Example
/// ```
/// use botlang::{Lexicon, LexiconSource, Pipeline};
///
/// let mut source = LexiconSource::builtin();
/// source.extend(LexiconSource::from_json(r#"{
///     "textspeak": [{ "pattern": { "phrase": "brekky" }, "output": "breakfast" }]
/// }"#).unwrap());
/// let lexicon = Lexicon::compile(&source).unwrap();
///
/// assert_eq!(Pipeline::new(&lexicon).replace("brekky w/ u"), "breakfast with you");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Pipeline<'l> {
    lexicon: &'l Lexicon,
}

impl Default for Pipeline<'static> {
    fn default() -> Self {
        Pipeline { lexicon: Lexicon::builtin() }
    }
}

impl<'l> Pipeline<'l> {
    pub fn new(lexicon: &'l Lexicon) -> Self {
        Pipeline { lexicon }
    }

    pub fn lexicon(&self) -> &'l Lexicon {
        self.lexicon
    }

    /// Run every replace pass.
    pub fn replace(&self, text: &str) -> String {
        self.replace_with(text, ReplacePasses::all())
    }

    /// Run the selected replace passes, in pipeline order.
    pub fn replace_with(&self, text: &str, passes: ReplacePasses) -> String {
        Replacer::new(self.lexicon).run(text, passes)
    }

    /// Run the single replace pass backed by `table`. Tag tables leave the
    /// text unchanged apart from whitespace tidying.
    pub fn replace_pass(&self, text: &str, table: TableKind) -> String {
        if table.is_tag_table() {
            return engine::tidy(text);
        }
        Replacer::new(self.lexicon).pass(text, table)
    }

    /// Ordered, deduplicated tags of `text` (cleaned first).
    pub fn tag_all(&self, text: &str) -> Vec<String> {
        self.tag_categories(text).labels()
    }

    /// Whether `label` is among the tags of `text`.
    pub fn tag_test(&self, label: &str, text: &str) -> bool {
        self.tag_all(text).iter().any(|tag| tag == label)
    }

    /// Tags of `text` per category.
    pub fn tag_categories(&self, text: &str) -> TagReport {
        Tagger::new(self.lexicon).report(text)
    }

    /// Clean, then replace and tag the cleaned text.
    pub fn process(&self, text: &str, options: &Options) -> Processed {
        let cleaned = engine::clean(text);
        let replaced = Replacer::new(self.lexicon).run(&cleaned, options.passes);
        let categories = Tagger::new(self.lexicon).report_cleaned(&cleaned);
        Processed { input: text.to_string(), cleaned, replaced, tags: categories.labels(), categories }
    }

    /// Like [`Pipeline::process`], with per-stage timing and a per-pass trace.
    ///
    /// The plain [`Pipeline::process`] path does not allocate these traces.
    pub fn process_verbose(&self, text: &str, options: &Options) -> ProcessedVerbose {
        let started = Instant::now();

        let cleaned = engine::clean(text);
        let clean = started.elapsed();

        let replace_started = Instant::now();
        let (replaced, passes) = Replacer::new(self.lexicon).run_traced(&cleaned, options.passes);
        let replace = replace_started.elapsed();

        let tag_started = Instant::now();
        let (categories, tags) = Tagger::new(self.lexicon).report_traced(&cleaned);
        let tag = tag_started.elapsed();

        let metrics = RunMetrics { total: started.elapsed(), clean, replace, tag, passes, tags };
        let processed =
            Processed { input: text.to_string(), cleaned, replaced, tags: categories.labels(), categories };
        ProcessedVerbose { processed, metrics }
    }
}

/// Structural normalization: smart punctuation folded to ASCII, unmappable
/// glyphs dropped, whitespace collapsed, thousands separators removed.
///
/// # Example
/// ```
/// assert_eq!(botlang::clean("What’s   up"), "What's up");
/// assert_eq!(botlang::clean("how much is 1,000.00"), "how much is 1000.00");
/// ```
pub fn clean(text: &str) -> String {
    engine::clean(text)
}

/// Run every replace pass with the built-in lexicon.
///
/// # Example
/// ```
/// assert_eq!(botlang::replace("ik wats goin on"), "I know what is going on");
/// ```
pub fn replace(text: &str) -> String {
    Pipeline::default().replace(text)
}

/// Run the selected replace passes with the built-in lexicon.
pub fn replace_with(text: &str, passes: ReplacePasses) -> String {
    Pipeline::default().replace_with(text, passes)
}

pub fn replace_substitutes(text: &str) -> String {
    Pipeline::default().replace_pass(text, TableKind::Substitutes)
}

pub fn replace_contractions(text: &str) -> String {
    Pipeline::default().replace_pass(text, TableKind::Contractions)
}

pub fn replace_british(text: &str) -> String {
    Pipeline::default().replace_pass(text, TableKind::British)
}

pub fn replace_spellfix(text: &str) -> String {
    Pipeline::default().replace_pass(text, TableKind::Spellfix)
}

pub fn replace_textspeak(text: &str) -> String {
    Pipeline::default().replace_pass(text, TableKind::Textspeak)
}

/// Remove discourse fillers opening the utterance.
pub fn replace_frivolous(text: &str) -> String {
    Pipeline::default().replace_pass(text, TableKind::Frivolous)
}

/// Emoji glyphs to `:shortcode:`.
///
/// # Example
/// ```
/// assert_eq!(botlang::replace_emoji("You make me 😊"), "You make me :blush:");
/// ```
pub fn replace_emoji(text: &str) -> String {
    Pipeline::default().replace_pass(text, TableKind::Emoji)
}

/// Ordered, deduplicated tags of `text`, using the built-in lexicon.
pub fn tag_all(text: &str) -> Vec<String> {
    Pipeline::default().tag_all(text)
}

pub fn tag_test(label: &str, text: &str) -> bool {
    Pipeline::default().tag_test(label, text)
}

pub fn tag_categories(text: &str) -> TagReport {
    Pipeline::default().tag_categories(text)
}

pub fn process(text: &str) -> Processed {
    Pipeline::default().process(text, &Options::default())
}

pub fn process_verbose(text: &str) -> ProcessedVerbose {
    Pipeline::default().process_verbose(text, &Options::default())
}

impl ProcessedVerbose {
    /// Total elapsed time of the run.
    pub fn elapsed(&self) -> Duration {
        self.metrics.total
    }
}
