//! Contractions, expanded.
//!
//! Whole contracted words come first. The bare suffixes at the end catch
//! tokenized input (`do n't`, `they 're`), where the suffix stands alone.

use crate::RuleEntry;
use crate::rules::phrases;

pub(crate) fn entries() -> Vec<RuleEntry> {
    phrases(CONTRACTIONS)
}

const CONTRACTIONS: &[(&str, &str)] = &[
    ("i'm", "I am"),
    ("i'll", "I will"),
    ("i've", "I have"),
    ("i'd", "I would"),
    ("you're", "you are"),
    ("you'll", "you will"),
    ("you've", "you have"),
    ("you'd", "you would"),
    ("y'all", "you all"),
    ("he's", "he is"),
    ("he'll", "he will"),
    ("he'd", "he would"),
    ("she's", "she is"),
    ("she'll", "she will"),
    ("she'd", "she would"),
    ("it's", "it is"),
    ("it'll", "it will"),
    ("we're", "we are"),
    ("we'll", "we will"),
    ("we've", "we have"),
    ("we'd", "we would"),
    ("they're", "they are"),
    ("they'll", "they will"),
    ("they've", "they have"),
    ("they'd", "they would"),
    ("that's", "that is"),
    ("that'll", "that will"),
    ("there's", "there is"),
    ("here's", "here is"),
    ("what's", "what is"),
    ("what're", "what are"),
    ("who's", "who is"),
    ("where's", "where is"),
    ("when's", "when is"),
    ("why's", "why is"),
    ("how's", "how is"),
    ("let's", "let us"),
    ("can't", "can not"),
    ("won't", "will not"),
    ("ain't", "is not"),
    ("shan't", "shall not"),
    ("don't", "do not"),
    ("doesn't", "does not"),
    ("didn't", "did not"),
    ("isn't", "is not"),
    ("aren't", "are not"),
    ("wasn't", "was not"),
    ("weren't", "were not"),
    ("haven't", "have not"),
    ("hasn't", "has not"),
    ("hadn't", "had not"),
    ("shouldn't", "should not"),
    ("wouldn't", "would not"),
    ("couldn't", "could not"),
    ("mustn't", "must not"),
    ("needn't", "need not"),
    ("should've", "should have"),
    ("would've", "would have"),
    ("could've", "could have"),
    ("must've", "must have"),
    // tokenized suffixes
    ("n't", "not"),
    ("'re", "are"),
    ("'ll", "will"),
    ("'ve", "have"),
    ("'m", "am"),
];
