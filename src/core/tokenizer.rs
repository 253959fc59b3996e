//! Tokenizer - Treebank-style word and sentence splitting
//!
//! Words are separated from punctuation, every punctuation character becomes
//! its own token (except `...` and `--`), and English contractions are split
//! into clitics the way the Penn Treebank does it:
//!
//! ```text
//! "don't stop, it's late..."  ->  do | n't | stop | , | it | 's | late | ...
//! ```
//!
//! Sentences end after a run of `.`, `!` or `?` (plus any closing quotes or
//! brackets) that is followed by whitespace or the end of the text.

use once_cell::sync::Lazy;
use regex::Regex;

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        \p{N}+(?:[.,]\p{N}+)+
        | [\p{L}\p{M}\p{N}_]+(?:['’\-][\p{L}\p{M}\p{N}_]+)*
        | \.\.\.
        | --
        | \S",
    )
    .expect("Invalid TOKEN_RE regex")
});

static SENTENCE_END_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[.!?]+["'”’)\]]*(?:\s+|$)"#).expect("Invalid SENTENCE_END_RE regex")
});

/// Clitics split off the end of a word, checked in order
const CLITICS: &[&str] = &["n't", "'s", "'re", "'ve", "'ll", "'d", "'m"];

/// Split a word carrying a contraction into stem and clitic.
fn push_word(word: &str, tokens: &mut Vec<String>) {
    if !word.contains(['\'', '’']) {
        tokens.push(word.to_string());
        return;
    }

    let word = word.replace('’', "'");
    for clitic in CLITICS {
        if let Some(stem) = word.strip_suffix(clitic) {
            if !stem.is_empty() && !stem.ends_with(['\'', '-']) {
                tokens.push(stem.to_string());
                tokens.push((*clitic).to_string());
                return;
            }
        }
    }
    tokens.push(word);
}

/// Split text into word and punctuation tokens, preserving order.
pub fn word_tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for m in TOKEN_RE.find_iter(text) {
        let token = m.as_str();
        if token.chars().next().is_some_and(char::is_alphanumeric) {
            push_word(token, &mut tokens);
        } else {
            tokens.push(token.to_string());
        }
    }
    tokens
}

/// Split text into sentences. Sentences are trimmed; empty ones are dropped.
pub fn sent_tokenize(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for m in SENTENCE_END_RE.find_iter(text) {
        let sentence = text[start..m.end()].trim();
        if !sentence.is_empty() {
            sentences.push(sentence);
        }
        start = m.end();
    }

    let rest = text[start..].trim();
    if !rest.is_empty() {
        sentences.push(rest);
    }

    sentences
}

/// Number of tokens in the longest sentence of any text (0 if there is none)
pub fn longest_sentence<S: AsRef<str>>(texts: &[S]) -> usize {
    texts
        .iter()
        .flat_map(|t| sent_tokenize(t.as_ref()))
        .map(|s| word_tokenize(s).len())
        .max()
        .unwrap_or(0)
}

/// True when the token consists entirely of letters
#[inline]
pub fn is_word(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}

/// Tokenize and keep alphabetic words only
pub fn words_only(text: &str) -> Vec<String> {
    word_tokenize(text)
        .into_iter()
        .filter(|t| is_word(t))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_tokenize_punctuation() {
        assert_eq!(
            word_tokenize("the end. the start, again!"),
            vec!["the", "end", ".", "the", "start", ",", "again", "!"]
        );
    }

    #[test]
    fn test_word_tokenize_contractions() {
        assert_eq!(
            word_tokenize("don't stop, it's late"),
            vec!["do", "n't", "stop", ",", "it", "'s", "late"]
        );
        assert_eq!(word_tokenize("we're here"), vec!["we", "'re", "here"]);
        assert_eq!(word_tokenize("o'clock"), vec!["o'clock"]);
    }

    #[test]
    fn test_word_tokenize_curly_apostrophe() {
        assert_eq!(word_tokenize("she’ll go"), vec!["she", "'ll", "go"]);
    }

    #[test]
    fn test_word_tokenize_keeps_compounds_and_numbers() {
        assert_eq!(
            word_tokenize("a well-known 3.14 -- 1,000 things..."),
            vec!["a", "well-known", "3.14", "--", "1,000", "things", "..."]
        );
    }

    #[test]
    fn test_word_tokenize_quotes_and_brackets() {
        assert_eq!(
            word_tokenize("(\"hello\")"),
            vec!["(", "\"", "hello", "\"", ")"]
        );
    }

    #[test]
    fn test_word_tokenize_empty() {
        assert!(word_tokenize("").is_empty());
        assert!(word_tokenize("   \n\t").is_empty());
    }

    #[test]
    fn test_sent_tokenize() {
        let text = "it was late. \"who goes there?\" she asked!  nobody answered";
        assert_eq!(
            sent_tokenize(text),
            vec![
                "it was late.",
                "\"who goes there?\"",
                "she asked!",
                "nobody answered"
            ]
        );
    }

    #[test]
    fn test_sent_tokenize_decimal_is_not_a_boundary() {
        assert_eq!(sent_tokenize("pi is 3.14 or so."), vec!["pi is 3.14 or so."]);
    }

    #[test]
    fn test_longest_sentence() {
        let texts = ["the quick brown fox", "the quick brown dog"];
        assert_eq!(longest_sentence(&texts), 4);

        let texts = ["short one. a much longer sentence here, really.", "hi."];
        assert_eq!(longest_sentence(&texts), 8);
    }

    #[test]
    fn test_longest_sentence_empty() {
        let texts: [&str; 2] = ["", "  "];
        assert_eq!(longest_sentence(&texts), 0);
    }

    #[test]
    fn test_is_word() {
        assert!(is_word("cat"));
        assert!(is_word("café"));
        assert!(!is_word("n't"));
        assert!(!is_word("well-known"));
        assert!(!is_word("42"));
        assert!(!is_word(""));
    }

    #[test]
    fn test_words_only() {
        assert_eq!(
            words_only("it's 5 o'clock, go!"),
            vec!["it", "go"]
        );
    }
}
