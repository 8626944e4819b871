//! Text emoticons and laughter, grouped by label in label order.

use crate::rules::phrases_to;
use crate::{Anchor, RuleEntry};

pub(crate) fn entries() -> Vec<RuleEntry> {
    let mut entries = Vec::new();
    for &(label, faces, patterns) in TEXT_EMOJI {
        entries.extend(phrases_to(faces, label, Anchor::Anywhere));
        entries.extend(patterns.iter().map(|&pattern| RuleEntry::regex(pattern, label)));
    }
    entries
}

/// `(label, literal faces, regex patterns)`.
const TEXT_EMOJI: &[(&str, &[&str], &[&str])] = &[
    ("happy", &[":)", ":-)", "(:", ":]", "=)", "^_^"], &[]),
    (
        "laugh",
        &["xd", ":d", ":-d", "haha", "hahaha", "hehe", "lol", "lmao", "rofl"],
        &[r"(?:ha){2,}h?", r"(?:he){2,}", r"lo+l", r"lmf?a+o+"],
    ),
    ("love", &["<3", "<33"], &[]),
    ("sad", &[":'(", ":(", ":-(", ":'-(", ";("], &[]),
    ("surprise", &[":o", ":-o", "o_o", "omg", "omfg"], &[r"o+m+g+"]),
    ("tongue", &[":p", ":-p"], &[]),
    ("wink", &[";)", ";-)"], &[]),
];
