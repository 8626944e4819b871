//! Emoji glyphs, their Slack shortcodes and categories.
//!
//! One list feeds two tables:
//!
//! ```text
//! ("😊", "blush", People) ──┬─▶ emoji (replace):  "😊"      -> ":blush:"
//!                           └─▶ emoji_tags:       "😊"      -> "slack_emoji_people"
//!                                                 ":blush:" -> "slack_emoji_people"
//! ```
//!
//! Glyphs written with a variation selector (U+FE0F) also match without it.
//! The list is grouped by category in tag order.

use crate::RuleEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    People,
    Nature,
    Food,
    Activity,
    Places,
    Objects,
    Symbols,
    Flags,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::People => "slack_emoji_people",
            Category::Nature => "slack_emoji_nature",
            Category::Food => "slack_emoji_food",
            Category::Activity => "slack_emoji_activity",
            Category::Places => "slack_emoji_places",
            Category::Objects => "slack_emoji_objects",
            Category::Symbols => "slack_emoji_symbols",
            Category::Flags => "slack_emoji_flags",
        }
    }
}

/// Glyph -> `:shortcode:`.
pub(crate) fn replace_entries() -> Vec<RuleEntry> {
    EMOJI
        .iter()
        .flat_map(|&(glyph, code, _)| glyph_forms(glyph).map(move |form| RuleEntry::phrase(form, format!(":{code}:"))))
        .collect()
}

/// Glyph and `:shortcode:` -> category label.
pub(crate) fn tag_entries() -> Vec<RuleEntry> {
    EMOJI
        .iter()
        .flat_map(|&(glyph, code, category)| {
            glyph_forms(glyph)
                .chain(std::iter::once(format!(":{code}:")))
                .map(move |form| RuleEntry::phrase(form, category.label()))
        })
        .collect()
}

fn glyph_forms(glyph: &str) -> impl Iterator<Item = String> {
    let bare = glyph.contains('\u{FE0F}').then(|| glyph.replace('\u{FE0F}', ""));
    std::iter::once(glyph.to_string()).chain(bare)
}

use Category::*;

pub const EMOJI: &[(&str, &str, Category)] = &[
    // people
    ("😀", "grinning", People),
    ("😃", "smiley", People),
    ("😄", "smile", People),
    ("😁", "grin", People),
    ("😆", "laughing", People),
    ("😅", "sweat_smile", People),
    ("😂", "joy", People),
    ("🤣", "rolling_on_the_floor_laughing", People),
    ("😊", "blush", People),
    ("😇", "innocent", People),
    ("🙂", "slightly_smiling_face", People),
    ("😉", "wink", People),
    ("😍", "heart_eyes", People),
    ("😘", "kissing_heart", People),
    ("😋", "yum", People),
    ("😎", "sunglasses", People),
    ("😏", "smirk", People),
    ("😐", "neutral_face", People),
    ("😒", "unamused", People),
    ("🙄", "face_with_rolling_eyes", People),
    ("🤔", "thinking_face", People),
    ("😳", "flushed", People),
    ("😞", "disappointed", People),
    ("😢", "cry", People),
    ("😭", "sob", People),
    ("😠", "angry", People),
    ("😡", "rage", People),
    ("😱", "scream", People),
    ("😴", "sleeping", People),
    ("🤢", "nauseated_face", People),
    ("👋", "wave", People),
    ("👍", "+1", People),
    ("👎", "-1", People),
    ("👌", "ok_hand", People),
    ("✌\u{FE0F}", "v", People),
    ("👏", "clap", People),
    ("🙏", "pray", People),
    ("💪", "muscle", People),
    ("🤷", "shrug", People),
    ("👶", "baby", People),
    // nature
    ("🐶", "dog", Nature),
    ("🐱", "cat", Nature),
    ("🐭", "mouse", Nature),
    ("🦊", "fox_face", Nature),
    ("🐻", "bear", Nature),
    ("🐼", "panda_face", Nature),
    ("🐸", "frog", Nature),
    ("🐵", "monkey_face", Nature),
    ("🐔", "chicken", Nature),
    ("🐧", "penguin", Nature),
    ("🐦", "bird", Nature),
    ("🐝", "bee", Nature),
    ("🌲", "evergreen_tree", Nature),
    ("🌵", "cactus", Nature),
    ("🌸", "cherry_blossom", Nature),
    ("🌹", "rose", Nature),
    ("🌻", "sunflower", Nature),
    ("🍁", "maple_leaf", Nature),
    ("🌞", "sun_with_face", Nature),
    ("🌙", "crescent_moon", Nature),
    ("⭐", "star", Nature),
    ("☀\u{FE0F}", "sunny", Nature),
    ("☁\u{FE0F}", "cloud", Nature),
    ("❄\u{FE0F}", "snowflake", Nature),
    ("🔥", "fire", Nature),
    ("🌈", "rainbow", Nature),
    ("💧", "droplet", Nature),
    // food
    ("🍏", "green_apple", Food),
    ("🍎", "apple", Food),
    ("🍌", "banana", Food),
    ("🍉", "watermelon", Food),
    ("🍇", "grapes", Food),
    ("🍓", "strawberry", Food),
    ("🍕", "pizza", Food),
    ("🍔", "hamburger", Food),
    ("🍟", "fries", Food),
    ("🌭", "hotdog", Food),
    ("🌮", "taco", Food),
    ("🍣", "sushi", Food),
    ("🍦", "icecream", Food),
    ("🍩", "doughnut", Food),
    ("🍪", "cookie", Food),
    ("🎂", "birthday", Food),
    ("🍰", "cake", Food),
    ("☕", "coffee", Food),
    ("🍺", "beer", Food),
    ("🍷", "wine_glass", Food),
    // activity
    ("⚽", "soccer", Activity),
    ("🏀", "basketball", Activity),
    ("🏈", "football", Activity),
    ("⚾", "baseball", Activity),
    ("🎾", "tennis", Activity),
    ("🏆", "trophy", Activity),
    ("🎮", "video_game", Activity),
    ("🎲", "game_die", Activity),
    ("🎯", "dart", Activity),
    ("🎸", "guitar", Activity),
    ("🎤", "microphone", Activity),
    ("🎧", "headphones", Activity),
    ("🎨", "art", Activity),
    // places
    ("🚗", "car", Places),
    ("🚕", "taxi", Places),
    ("🚌", "bus", Places),
    ("🚲", "bike", Places),
    ("✈\u{FE0F}", "airplane", Places),
    ("🚀", "rocket", Places),
    ("🚢", "ship", Places),
    ("🏠", "house", Places),
    ("🏢", "office", Places),
    ("🏥", "hospital", Places),
    ("🏫", "school", Places),
    ("🗽", "statue_of_liberty", Places),
    ("🌍", "earth_africa", Places),
    // objects
    ("⌚", "watch", Objects),
    ("📱", "iphone", Objects),
    ("💻", "computer", Objects),
    ("⌨\u{FE0F}", "keyboard", Objects),
    ("📷", "camera", Objects),
    ("📺", "tv", Objects),
    ("💡", "bulb", Objects),
    ("🔋", "battery", Objects),
    ("💰", "moneybag", Objects),
    ("💳", "credit_card", Objects),
    ("✉\u{FE0F}", "email", Objects),
    ("📦", "package", Objects),
    ("📚", "books", Objects),
    ("✏\u{FE0F}", "pencil2", Objects),
    ("🔑", "key", Objects),
    ("🔒", "lock", Objects),
    ("🎁", "gift", Objects),
    ("🔨", "hammer", Objects),
    ("⏰", "alarm_clock", Objects),
    // symbols
    ("❤\u{FE0F}", "heart", Symbols),
    ("💔", "broken_heart", Symbols),
    ("💕", "two_hearts", Symbols),
    ("💯", "100", Symbols),
    ("✅", "white_check_mark", Symbols),
    ("✔\u{FE0F}", "heavy_check_mark", Symbols),
    ("❌", "x", Symbols),
    ("❓", "question", Symbols),
    ("❗", "exclamation", Symbols),
    ("⚠\u{FE0F}", "warning", Symbols),
    ("♻\u{FE0F}", "recycle", Symbols),
    ("➕", "heavy_plus_sign", Symbols),
    ("1\u{FE0F}\u{20E3}", "one", Symbols),
    ("2\u{FE0F}\u{20E3}", "two", Symbols),
    ("3\u{FE0F}\u{20E3}", "three", Symbols),
    ("🔟", "keycap_ten", Symbols),
    ("🆗", "ok", Symbols),
    ("🆒", "cool", Symbols),
    ("🆕", "new", Symbols),
    ("💤", "zzz", Symbols),
    // flags
    ("🇺🇸", "us", Flags),
    ("🇬🇧", "gb", Flags),
    ("🇫🇷", "fr", Flags),
    ("🇩🇪", "de", Flags),
    ("🇪🇸", "es", Flags),
    ("🇮🇹", "it", Flags),
    ("🇯🇵", "jp", Flags),
    ("🇨🇳", "cn", Flags),
    ("🇨🇦", "flag-ca", Flags),
    ("🏁", "checkered_flag", Flags),
    ("🚩", "triangular_flag_on_post", Flags),
];
