//! Common misspellings.
//!
//! Transposed short words (`hwo`, `fo`, `ot`) are only fixed in front of a
//! word that disambiguates them, so the follower is part of the rule.
//! Followers also accept their texting forms (`hwo r u`), because textspeak
//! runs later and would otherwise leave a fixable pair for a second run.

use super::textspeak::TEXTSPEAK;
use crate::RuleEntry;
use crate::rules::phrases;

pub(crate) fn entries() -> Vec<RuleEntry> {
    let mut entries: Vec<RuleEntry> = SEQUENCES
        .iter()
        .map(|&(head, followers, output)| RuleEntry::sequence([head], with_textspeak(followers), output))
        .collect();
    entries.extend(phrases(WORDS));
    entries
}

fn with_textspeak(followers: &[&'static str]) -> Vec<&'static str> {
    let mut all = followers.to_vec();
    for &(short, long) in TEXTSPEAK {
        if followers.contains(&long) && !all.contains(&short) {
            all.push(short);
        }
    }
    all
}

const SEQUENCES: &[(&str, &[&str], &str)] = &[
    (
        "hwo",
        &[
            "do", "does", "did", "can", "could", "would", "should", "are", "many", "much", "about", "long", "old",
            "far", "often",
        ],
        "how",
    ),
    ("hwo", &["is", "was", "were", "will", "am"], "who"),
    ("fo", &["the", "a", "my", "your", "course"], "of"),
    ("ot", &["the", "be"], "to"),
    ("ti", &["is", "was"], "it"),
    ("si", &["it", "that", "this"], "is"),
];

const WORDS: &[(&str, &str)] = &[
    ("alot", "a lot"),
    ("becasue", "because"),
    ("becuase", "because"),
    ("beleive", "believe"),
    ("definately", "definitely"),
    ("febuary", "February"),
    ("freind", "friend"),
    ("freinds", "friends"),
    ("occured", "occurred"),
    ("probaly", "probably"),
    ("realy", "really"),
    ("recieve", "receive"),
    ("recieved", "received"),
    ("restraunt", "restaurant"),
    ("sceduled", "scheduled"),
    ("seperate", "separate"),
    ("teh", "the"),
    ("thier", "their"),
    ("thrsday", "Thursday"),
    ("tomorow", "tomorrow"),
    ("tommorow", "tomorrow"),
    ("tommorrow", "tomorrow"),
    ("untill", "until"),
    ("wensday", "Wednesday"),
    ("wendsday", "Wednesday"),
    ("wich", "which"),
    ("wierd", "weird"),
    ("yelow", "yellow"),
    // missing apostrophes
    ("arent", "are not"),
    ("couldnt", "could not"),
    ("didnt", "did not"),
    ("doesnt", "does not"),
    ("dont", "do not"),
    ("hasnt", "has not"),
    ("havent", "have not"),
    ("isnt", "is not"),
    ("shouldnt", "should not"),
    ("thats", "that is"),
    ("wasnt", "was not"),
    ("werent", "were not"),
    ("wouldnt", "would not"),
    ("youre", "you are"),
];
