//! Action intents: a verb followed by the kind of word that completes it.
//!
//! ```text
//! "John went to the kitchen"  ─ went + to   ─▶ intent_move
//! "John got the ball"         ─ got + the   ─▶ intent_get
//! ```

use crate::RuleEntry;

pub(crate) fn entries() -> Vec<RuleEntry> {
    INTENTS
        .iter()
        .map(|&(label, verbs, complements)| RuleEntry::sequence(verbs.iter().copied(), complements.iter().copied(), label))
        .collect()
}

const OBJECTS: &[&str] = &["the", "a", "an", "my", "his", "her", "their", "your", "our", "some", "this", "that", "it"];

const INTENTS: &[(&str, &[&str], &[&str])] = &[
    (
        "intent_drop",
        &["dropped", "drop", "drops", "put down", "discarded", "discard"],
        OBJECTS,
    ),
    (
        "intent_get",
        &[
            "got", "get", "gets", "picked up", "pick up", "grabbed", "grab", "took", "take", "takes", "obtained",
            "acquired", "fetched", "collected",
        ],
        OBJECTS,
    ),
    (
        "intent_give",
        &["gave", "give", "gives", "handed", "hands", "passed", "pass", "passes"],
        &[
            "the", "a", "an", "my", "his", "her", "their", "your", "our", "some", "this", "that", "it", "him",
            "me", "them", "us",
        ],
    ),
    (
        "intent_move",
        &[
            "went", "go", "goes", "moved", "move", "moves", "walked", "walk", "walks", "ran", "run", "runs",
            "travelled", "traveled", "journeyed", "headed", "came", "come", "returned",
        ],
        &["to", "into", "towards", "toward", "back to", "back into", "over to", "up to", "down to"],
    ),
];
