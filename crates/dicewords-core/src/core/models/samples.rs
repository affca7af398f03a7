//! Sample dice sets for demonstrations and tests.
//!
//! Each die is written as a string of its faces. The classic board's `Qu` face is carried as
//! `q`, since a face is always a single letter.

pub const SMALL: &[&str] = &["acf", "ccb", "kga", "uoa"];

pub const MEDIUM: &[&str] = &[
    "a", "b", "b", "c", "c", "d", "h", "i", "e", "k", "e", "g", "g", "h", "l", "i",
];

pub const FOUR_BY_SIX: &[&str] = &["acfgro", "cbbhut", "kgheas", "uoeatp"];

pub const CLASSIC: &[&str] = &[
    "aaciot", "abilty", "abjmoq", "acdemp", "acelrs", "adenvz", "ahmors", "biforx", "denosw",
    "dknotu", "eefhiy", "egkluy", "egintv", "ehinps", "elpstu", "gilruw",
];

pub const NAMES: &[&str] = &["small", "medium", "four-by-six", "classic"];

pub fn by_name(name: &str) -> Option<&'static [&'static str]> {
    match name {
        "small" => Some(SMALL),
        "medium" => Some(MEDIUM),
        "four-by-six" => Some(FOUR_BY_SIX),
        "classic" => Some(CLASSIC),
        _ => None,
    }
}
