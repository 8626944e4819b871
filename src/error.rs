use crate::engine::TableKind;
use thiserror::Error;

/// Failure to build a [`Lexicon`](crate::Lexicon) from table data.
///
/// Text operations never fail; only compiling rule tables can.
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("{table}: entry {index} has an empty pattern")]
    EmptyPattern { table: TableKind, index: usize },

    #[error("{table}: entry {index} is a sequence without heads or followers")]
    EmptySequence { table: TableKind, index: usize },

    #[error("{table}: entry {index} has an empty tag label")]
    EmptyLabel { table: TableKind, index: usize },

    #[error("{table}: entry {index} has an invalid regex `{pattern}`: {source}")]
    InvalidRegex {
        table: TableKind,
        index: usize,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("{table}: failed to build phrase automaton: {source}")]
    Automaton {
        table: TableKind,
        #[source]
        source: aho_corasick::BuildError,
    },

    #[error("invalid lexicon json: {0}")]
    Json(#[from] serde_json::Error),
}
