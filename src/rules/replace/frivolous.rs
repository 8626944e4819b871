//! Discourse fillers that carry nothing when they open an utterance.
//!
//! `well` and `anyway` only count with their trailing comma; on their own
//! they are too often real words.

use crate::rules::phrases_to;
use crate::{Anchor, RuleEntry};

pub(crate) fn entries() -> Vec<RuleEntry> {
    phrases_to(FILLERS, "", Anchor::Start).collect()
}

const FILLERS: &[&str] = &[
    "well ,", "well,", "anyway ,", "anyway,", "anyways ,", "anyways,", "so ,", "so,", "ah", "ahh", "ahhh", "ahem",
    "er", "erm", "hm", "hmm", "hmmm", "mmm", "uh", "uhh", "uhm", "um", "umm",
];
