//! Abbreviations and shorthand, expanded to full words.
//!
//! Month and weekday abbreviations that are also common words (`mar`,
//! `may`, `wed`, `sat`, `sun`, `mon`) are left out. A trailing period is
//! only consumed for units and Latin shorthand, so `in Sept.` keeps its
//! sentence end.

use crate::RuleEntry;
use crate::rules::phrases;

pub(crate) fn entries() -> Vec<RuleEntry> {
    phrases(SUBSTITUTES)
}

const SUBSTITUTES: &[(&str, &str)] = &[
    // months
    ("jan", "January"),
    ("feb", "February"),
    ("apr", "April"),
    ("jun", "June"),
    ("jul", "July"),
    ("aug", "August"),
    ("sep", "September"),
    ("sept", "September"),
    ("oct", "October"),
    ("nov", "November"),
    ("dec", "December"),
    // weekdays
    ("tue", "Tuesday"),
    ("tues", "Tuesday"),
    ("thu", "Thursday"),
    ("thur", "Thursday"),
    ("thurs", "Thursday"),
    ("fri", "Friday"),
    // units
    ("kg", "kilograms"),
    ("kgs", "kilograms"),
    ("kgs.", "kilograms"),
    ("lb", "pounds"),
    ("lbs", "pounds"),
    ("lbs.", "pounds"),
    ("oz", "ounces"),
    ("km", "kilometers"),
    ("kms", "kilometers"),
    ("ft", "feet"),
    ("mph", "miles per hour"),
    ("hr", "hour"),
    ("hrs", "hours"),
    ("hrs.", "hours"),
    ("mins", "minutes"),
    ("mins.", "minutes"),
    ("secs", "seconds"),
    ("secs.", "seconds"),
    // shorthand
    ("w/", "with"),
    ("w/o", "without"),
    ("b/c", "because"),
    ("ie", "for example"),
    ("ie:", "for example :"),
    ("i.e.", "for example"),
    ("i.e", "for example"),
    ("e.g.", "for example"),
    ("eg:", "for example :"),
    ("fb", "Facebook"),
    ("approx", "approximately"),
    ("approx.", "approximately"),
    ("appt", "appointment"),
    ("dept", "department"),
    ("govt", "government"),
    ("info", "information"),
    ("etc", "et cetera"),
    ("vs", "versus"),
    ("vs.", "versus"),
    ("asap", "as soon as possible"),
];
