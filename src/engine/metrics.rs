//! Pipeline run metrics.
//!
//! Collected only by the verbose entry points
//! ([`process_verbose`](crate::process_verbose)); the plain operations skip
//! all timing and tracing bookkeeping.

use std::time::Duration;

/// Timing for one full Clean → Replace → Tag run.
#[derive(Debug, Default, Clone)]
pub struct RunMetrics {
    /// Total elapsed time.
    pub total: Duration,
    /// Time spent in the clean stage.
    pub clean: Duration,
    /// Time spent in all replace passes.
    pub replace: Duration,
    /// Time spent evaluating tag tables.
    pub tag: Duration,
    /// One entry per replace pass that ran, in pass order.
    pub passes: Vec<PassMetrics>,
    /// One entry per tag table, in evaluation order.
    pub tags: Vec<TagMetrics>,
}

/// Outcome of a single replace pass.
#[derive(Debug, Clone)]
pub struct PassMetrics {
    /// Pass (table) name, e.g. `"contractions"`.
    pub pass: &'static str,
    pub duration: Duration,
    /// Number of substitutions applied.
    pub replacements: usize,
    /// `false` when trigger gating skipped the table.
    pub ran: bool,
    /// Text after the pass.
    pub output: String,
}

/// Outcome of evaluating one tag table.
#[derive(Debug, Clone)]
pub struct TagMetrics {
    /// Table name, e.g. `"keyword_tags"`.
    pub table: &'static str,
    pub duration: Duration,
    /// Labels this table produced, before cross-table dedup.
    pub labels: Vec<String>,
}
