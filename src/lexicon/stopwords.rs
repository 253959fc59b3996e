//! Stopword lists
//!
//! Ships the standard English stopword list and supports custom lists loaded
//! from a file (one word per line, `#` starts a comment).

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Standard English stopwords
const ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

/// A set of words excluded from results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stopwords {
    words: HashSet<String>,
}

impl Default for Stopwords {
    fn default() -> Self {
        Self::english()
    }
}

impl Stopwords {
    /// The built-in English list
    pub fn english() -> Self {
        Self::from_list(ENGLISH)
    }

    pub fn from_list(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Parse a stopword file body
    pub fn parse(content: &str) -> Self {
        let words = content
            .lines()
            .map(|line| line.split('#').next().unwrap_or("").trim())
            .filter(|word| !word.is_empty())
            .map(str::to_lowercase)
            .collect();
        Self { words }
    }

    /// Load a custom list from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Cannot read stopword list {}", path.display()))?;
        Ok(Self::parse(&content))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Remove every stopword from `words`
    pub fn remove_from(&self, words: &mut HashSet<String>) {
        words.retain(|w| !self.contains(w));
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_list() {
        let stopwords = Stopwords::english();
        assert_eq!(stopwords.len(), 179);
        assert!(stopwords.contains("the"));
        assert!(stopwords.contains("wouldn't"));
        assert!(!stopwords.contains("cat"));
    }

    #[test]
    fn test_parse_custom_list() {
        let stopwords = Stopwords::parse("# custom list\nThe\n\n  cat  # pets\ndog\n");
        assert_eq!(stopwords.len(), 3);
        assert!(stopwords.contains("the"));
        assert!(stopwords.contains("cat"));
        assert!(stopwords.contains("dog"));
    }

    #[test]
    fn test_remove_from() {
        let mut words: HashSet<String> = ["the", "cat", "sat"].iter().map(|s| s.to_string()).collect();
        Stopwords::english().remove_from(&mut words);
        assert_eq!(words.len(), 2);
        assert!(!words.contains("the"));

        let mut words: HashSet<String> = ["the"].iter().map(|s| s.to_string()).collect();
        Stopwords::from_list(&[]).remove_from(&mut words);
        assert_eq!(words.len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Stopwords::load(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(err.to_string().contains("Cannot read stopword list"));
    }
}
