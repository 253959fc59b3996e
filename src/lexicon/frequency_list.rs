//! Literary frequency lists
//!
//! A frequency list is a text file of `word;frequency` lines, for example a
//! word list compiled from a reference corpus of a given period. Lookups are
//! exact string matches; a word that is not listed is `unknown`.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::core::error::CorpusError;
use crate::core::model::LiteraryFrequency;

/// Separator between word and frequency
const SEPARATOR: char = ';';

#[derive(Debug, Clone, Default)]
pub struct FrequencyList {
    entries: HashMap<String, String>,
}

impl FrequencyList {
    /// Parse a frequency list body. `path` is only used in error messages.
    pub fn parse(content: &str, path: &Path) -> Result<Self, CorpusError> {
        let mut entries = HashMap::new();

        for (index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let (word, frequency) =
                line.split_once(SEPARATOR)
                    .ok_or_else(|| CorpusError::MalformedFrequencyLine {
                        path: path.to_path_buf(),
                        line_number: index + 1,
                        line: line.to_string(),
                    })?;
            entries.insert(word.trim().to_string(), frequency.trim().to_string());
        }

        Ok(Self { entries })
    }

    /// Load and parse a frequency list file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Cannot read word frequency list {}", path.display()))?;
        Ok(Self::parse(&content, path)?)
    }

    pub fn lookup(&self, word: &str) -> LiteraryFrequency {
        match self.entries.get(word) {
            Some(frequency) => LiteraryFrequency::Known(frequency.clone()),
            None => LiteraryFrequency::Unknown,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_and_lookup() {
        let list = FrequencyList::parse("the;5.2\n\ncat ; 0.01\n", Path::new("f.txt")).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.lookup("cat"), LiteraryFrequency::Known("0.01".into()));
        assert_eq!(list.lookup("dog"), LiteraryFrequency::Unknown);
    }

    #[test]
    fn test_lookup_is_exact() {
        let list = FrequencyList::parse("Cat;3\n", Path::new("f.txt")).unwrap();
        assert_eq!(list.lookup("cat"), LiteraryFrequency::Unknown);
        assert_eq!(list.lookup("Cat"), LiteraryFrequency::Known("3".into()));
    }

    #[test]
    fn test_later_duplicates_override() {
        let list = FrequencyList::parse("cat;1\ncat;2\n", Path::new("f.txt")).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.lookup("cat"), LiteraryFrequency::Known("2".into()));
    }

    #[test]
    fn test_missing_separator_is_fatal() {
        let err = FrequencyList::parse("the;1\nbroken line\n", Path::new("f.txt")).unwrap_err();
        match err {
            CorpusError::MalformedFrequencyLine {
                line_number, line, ..
            } => {
                assert_eq!(line_number, 2);
                assert_eq!(line, "broken line");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("freq.txt");
        fs::write(&path, "whale;0.003\n").unwrap();

        let list = FrequencyList::load(&path).unwrap();
        assert_eq!(list.lookup("whale"), LiteraryFrequency::Known("0.003".into()));
    }

    #[test]
    fn test_load_reports_malformed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("freq.txt");
        fs::write(&path, "whale 0.003\n").unwrap();

        let err = FrequencyList::load(&path).unwrap_err();
        assert!(err.to_string().contains(":1:"));
    }
}
