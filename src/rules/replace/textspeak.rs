//! Texting slang. Single letters (`c`, `u`, `r`, `n`) only match as
//! standalone tokens, so `c'mon` and `R2` stay.

use crate::RuleEntry;
use crate::rules::phrases;

pub(crate) fn entries() -> Vec<RuleEntry> {
    phrases(TEXTSPEAK)
}

pub(crate) const TEXTSPEAK: &[(&str, &str)] = &[
    ("2day", "today"),
    ("2moro", "tomorrow"),
    ("2morrow", "tomorrow"),
    ("b4", "before"),
    ("bc", "because"),
    ("becuz", "because"),
    ("brb", "be right back"),
    ("btw", "by the way"),
    ("c", "see"),
    ("cos", "because"),
    ("coz", "because"),
    ("cuz", "because"),
    ("cya", "see you"),
    ("doin", "doing"),
    ("goin", "going"),
    ("gonna", "going to"),
    ("gotta", "got to"),
    ("gr8", "great"),
    ("idk", "I do not know"),
    ("ik", "I know"),
    ("im", "I am"),
    ("imo", "in my opinion"),
    ("jk", "just kidding"),
    ("l8r", "later"),
    ("luv", "love"),
    ("msg", "message"),
    ("n", "and"),
    ("nothin", "nothing"),
    ("np", "no problem"),
    ("nvm", "never mind"),
    ("omw", "on my way"),
    ("pls", "please"),
    ("plz", "please"),
    ("ppl", "people"),
    ("r", "are"),
    ("somethin", "something"),
    ("sry", "sorry"),
    ("tho", "though"),
    ("thru", "through"),
    ("thx", "thanks"),
    ("tmrw", "tomorrow"),
    ("ttyl", "talk to you later"),
    ("ty", "thank you"),
    ("u", "you"),
    ("ur", "your"),
    ("wanna", "want to"),
    ("wat", "what"),
    ("wats", "what is"),
    ("whats", "what is"),
    ("wut", "what"),
    ("ya", "you"),
];
