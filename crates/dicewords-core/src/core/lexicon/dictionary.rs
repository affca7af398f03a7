use super::index::{AnagramIndex, AnagramKey};
use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("JSON parsing error for '{path}': {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
}

/// In-memory anagram dictionary built from a word corpus.
///
/// Words are stored lowercase; words containing anything other than letters are skipped.
/// The words under each key are kept sorted and free of duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnagramDictionary {
    entries: HashMap<AnagramKey, Vec<String>>,
}

impl AnagramDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::new();
        for word in words {
            dictionary.insert(word.as_ref());
        }
        dictionary
    }

    /// Adds a word, returning `false` when it was rejected or already present.
    pub fn insert(&mut self, word: &str) -> bool {
        let Some(word) = normalize_word(word) else {
            return false;
        };
        let words = self.entries.entry(AnagramKey::of_word(&word)).or_default();
        match words.binary_search(&word) {
            Ok(_) => false,
            Err(position) => {
                words.insert(position, word);
                true
            }
        }
    }

    /// Number of distinct anagram keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn word_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Reads a corpus with one word per line.
    pub fn read_word_list(reader: impl BufRead) -> io::Result<Self> {
        let mut dictionary = Self::new();
        let mut skipped = 0usize;
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            if !dictionary.insert(&line) {
                skipped += 1;
            }
        }
        debug!(
            keys = dictionary.len(),
            words = dictionary.word_count(),
            skipped,
            "Read word list."
        );
        Ok(dictionary)
    }

    /// Reads a persisted dictionary: a JSON object from anagram key to word list.
    ///
    /// Every word is re-keyed on load, so a file whose keys are stale still yields a
    /// consistent dictionary.
    pub fn read_json(reader: impl Read) -> serde_json::Result<Self> {
        let raw: HashMap<String, Vec<String>> = serde_json::from_reader(reader)?;
        Ok(Self::from_words(raw.into_values().flatten()))
    }

    /// Writes the dictionary as a JSON object with keys in ascending order.
    pub fn write_json(&self, writer: impl Write) -> serde_json::Result<()> {
        let ordered: BTreeMap<&str, &Vec<String>> = self
            .entries
            .iter()
            .map(|(key, words)| (key.as_str(), words))
            .collect();
        serde_json::to_writer(writer, &ordered)
    }

    pub fn load_word_list(path: &Path) -> Result<Self, LexiconError> {
        let file = File::open(path).map_err(|e| io_error(path, e))?;
        Self::read_word_list(BufReader::new(file)).map_err(|e| io_error(path, e))
    }

    pub fn load_json(path: &Path) -> Result<Self, LexiconError> {
        let file = File::open(path).map_err(|e| io_error(path, e))?;
        Self::read_json(BufReader::new(file)).map_err(|e| LexiconError::Json {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }

    /// Loads a `.json` dictionary, or treats any other file as a plain word list.
    pub fn load(path: &Path) -> Result<Self, LexiconError> {
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::load_json(path)
        } else {
            Self::load_word_list(path)
        }
    }

    pub fn save_json(&self, path: &Path) -> Result<(), LexiconError> {
        let file = File::create(path).map_err(|e| io_error(path, e))?;
        let mut writer = BufWriter::new(file);
        self.write_json(&mut writer).map_err(|e| LexiconError::Json {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        writer.flush().map_err(|e| io_error(path, e))
    }
}

impl AnagramIndex for AnagramDictionary {
    fn lookup(&self, sorted_letters: &str) -> Option<&[String]> {
        self.entries.get(sorted_letters).map(Vec::as_slice)
    }
}

fn normalize_word(raw: &str) -> Option<String> {
    let word = raw.trim().to_lowercase();
    if word.is_empty() || !word.chars().all(char::is_alphabetic) {
        return None;
    }
    Some(word)
}

fn io_error(path: &Path, source: std::io::Error) -> LexiconError {
    LexiconError::Io {
        path: path.to_string_lossy().to_string(),
        source,
    }
}
