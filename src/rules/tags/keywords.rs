//! Conversational keywords -> tag label, grouped by label in label order.
//!
//! Answers (`yes`, `no`) and attention-getters (`excuse me`) only count when
//! they open the utterance: `well excuse me princess` is sarcasm, not an
//! apology.

use crate::rules::phrases_to;
use crate::{Anchor, RuleEntry};

pub(crate) fn entries() -> Vec<RuleEntry> {
    let mut entries = Vec::new();
    for &(label, anywhere, start) in KEYWORDS {
        entries.extend(phrases_to(start, label, Anchor::Start));
        entries.extend(phrases_to(anywhere, label, Anchor::Anywhere));
        if label == "disgust" {
            entries.push(RuleEntry::regex(r"e+w{2,}", label));
        }
    }
    entries.push(RuleEntry::phrase("of course", "yes").anchored(Anchor::Whole));
    entries
}

/// `(label, anywhere, start-anchored)`.
const KEYWORDS: &[(&str, &[&str], &[&str])] = &[
    (
        "apology",
        &["sorry", "so sorry", "apologies", "my apologies", "i apologize", "my bad", "my mistake", "forgive me"],
        &["excuse me", "pardon me"],
    ),
    ("disgust", &["eww", "ew", "yuck", "yuk", "gross", "disgusting", "blech"], &[]),
    (
        "goodbye",
        &[
            "goodbye",
            "good bye",
            "bye",
            "bye bye",
            "see ya",
            "see you later",
            "see you soon",
            "cya",
            "gtg",
            "g2g",
            "ttyl",
            "i have to go",
            "i gotta go",
            "i need to go",
            "i must go",
            "gotta go",
            "take care",
            "farewell",
            "good night",
        ],
        &[],
    ),
    (
        "hello",
        &[
            "hi",
            "hello",
            "hey",
            "hi there",
            "hello there",
            "hey there",
            "howdy",
            "hiya",
            "greetings",
            "good morning",
            "good afternoon",
            "good evening",
        ],
        &[],
    ),
    ("no", &[], &["no", "nope", "nah", "no way", "not really", "negative", "nay", "absolutely not", "definitely not"]),
    (
        "stop",
        &["shut up", "stop it", "stop that", "be quiet", "knock it off", "cut it out", "leave me alone", "go away"],
        &["stop", "enough"],
    ),
    ("thanks", &["thanks", "thank you", "thanks a lot", "thx", "ty", "much appreciated", "cheers"], &[]),
    (
        "yes",
        &[],
        &[
            "yes",
            "yeah",
            "yep",
            "yup",
            "sure",
            "i am sure",
            "i'm sure",
            "absolutely",
            "definitely",
            "ok",
            "okay",
            "alright",
            "affirmative",
            "correct",
        ],
    ),
];
