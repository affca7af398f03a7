use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// The sorted letters of a word. Every anagram of a word shares its key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnagramKey(String);

impl AnagramKey {
    pub fn of_word(word: &str) -> Self {
        let mut letters: Vec<char> = word.chars().collect();
        letters.sort_unstable();
        Self(letters.into_iter().collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for AnagramKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnagramKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Maps an anagram key to the dictionary words spelled by exactly those letters.
///
/// `sorted_letters` is always in ascending order. A miss is the common case and is reported
/// as `None`, never as an error.
pub trait AnagramIndex {
    fn lookup(&self, sorted_letters: &str) -> Option<&[String]>;
}

impl<T: AnagramIndex + ?Sized> AnagramIndex for &T {
    fn lookup(&self, sorted_letters: &str) -> Option<&[String]> {
        (**self).lookup(sorted_letters)
    }
}

impl AnagramIndex for HashMap<String, Vec<String>> {
    fn lookup(&self, sorted_letters: &str) -> Option<&[String]> {
        self.get(sorted_letters).map(Vec::as_slice)
    }
}

impl AnagramIndex for BTreeMap<String, Vec<String>> {
    fn lookup(&self, sorted_letters: &str) -> Option<&[String]> {
        self.get(sorted_letters).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_sorts_letters() {
        assert_eq!(AnagramKey::of_word("cab").as_str(), "abc");
        assert_eq!(AnagramKey::of_word("cab"), AnagramKey::of_word("bca"));
        assert_eq!(AnagramKey::of_word("moose").as_str(), "emoos");
    }

    #[test]
    fn plain_maps_act_as_indexes() {
        let mut map: HashMap<String, Vec<String>> = HashMap::new();
        map.insert("abc".to_string(), vec!["cab".to_string()]);

        assert_eq!(map.lookup("abc"), Some(&["cab".to_string()][..]));
        assert_eq!(map.lookup("abd"), None);
    }
}
