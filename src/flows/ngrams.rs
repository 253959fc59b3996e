//! N-gram flow - Word sequences shared by every text
//!
//! For every window size from `min_words` to `max_words`, the contiguous
//! token windows of each text are intersected. A candidate's true length is
//! its length without punctuation tokens; candidates shorter than
//! `min_words` are dropped. The search stops early after `zero_results`
//! consecutive window sizes without a candidate whose true length equals the
//! window size.
//!
//! Unless subgrams are requested, a match whose rendered text is a substring
//! of a longer match's rendered text is suppressed. This is textual
//! containment, so an unrelated short match that happens to be contained in a
//! longer one is suppressed too.

use anyhow::Result;
use regex::Regex;
use std::collections::{BTreeSet, HashSet};
use std::path::PathBuf;

use crate::core::error::{ensure_file_count, CorpusError};
use crate::core::file_reader::read_texts;
use crate::core::model::{NgramRow, ResultSet};
use crate::core::render::{RenderConfig, Renderer};
use crate::core::status::Status;
use crate::core::tokenizer::{longest_sentence, word_tokenize};

pub const DEFAULT_MIN_WORDS: usize = 4;
pub const DEFAULT_ZERO_RESULTS: usize = 3;
pub const DEFAULT_PUNCTUATION: &str = "();:,.!?";

/// Punctuation characters, used for true length and rendering
#[derive(Debug, Clone)]
pub struct Punctuation {
    chars: BTreeSet<char>,
    /// Matches a space followed by a punctuation character
    joiner: Option<Regex>,
}

impl Punctuation {
    pub fn new(chars: &str) -> Result<Self> {
        let chars: BTreeSet<char> = chars.chars().filter(|c| !c.is_whitespace()).collect();

        let joiner = if chars.is_empty() {
            None
        } else {
            let class: String = chars.iter().map(|c| regex::escape(&c.to_string())).collect();
            Some(Regex::new(&format!(" ([{}])", class))?)
        };

        Ok(Self { chars, joiner })
    }

    /// A token is punctuation when all of its characters are
    pub fn is_punctuation(&self, token: &str) -> bool {
        !token.is_empty() && token.chars().all(|c| self.chars.contains(&c))
    }

    /// Number of tokens that are not punctuation
    pub fn true_length(&self, tokens: &[String]) -> usize {
        tokens.iter().filter(|t| !self.is_punctuation(t)).count()
    }

    /// Join tokens with spaces, reattaching punctuation to the preceding word
    pub fn render(&self, tokens: &[String]) -> String {
        let joined = tokens.join(" ");
        match &self.joiner {
            Some(joiner) => joiner.replace_all(&joined, "$1").into_owned(),
            None => joined,
        }
    }
}

/// Order of rows inside each true-length group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NgramSort {
    #[default]
    Alpha,
    TextLength,
}

impl std::str::FromStr for NgramSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "alpha" => Ok(NgramSort::Alpha),
            "text-length" | "text_length" => Ok(NgramSort::TextLength),
            _ => Err(format!("Unknown sort key: {}", s)),
        }
    }
}

/// Options for the n-gram flow
#[derive(Debug, Clone)]
pub struct NgramOptions {
    pub min_words: usize,
    /// Derived from the longest sentence when absent
    pub max_words: Option<usize>,
    /// Consecutive empty window sizes before stopping; 0 never stops
    pub zero_results: usize,
    pub punctuation: Punctuation,
    pub include_subgrams: bool,
    pub sort: NgramSort,
    pub reverse: bool,
}

/// Resolved window range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min_words: usize,
    pub max_words: usize,
    /// Whether `max_words` came from the longest sentence
    pub derived: bool,
}

/// Validate `min_words` and resolve `max_words`
pub fn resolve_bounds<S: AsRef<str>>(
    min_words: usize,
    max_words: Option<usize>,
    texts: &[S],
) -> Result<Bounds, CorpusError> {
    if min_words == 0 {
        return Err(CorpusError::ZeroMinWords);
    }

    let (max, derived) = match max_words {
        Some(max) => (max, false),
        None => (longest_sentence(texts), true),
    };

    if max < min_words {
        return Err(CorpusError::InvertedBounds {
            min: min_words,
            max,
        });
    }

    Ok(Bounds {
        min_words,
        max_words: max,
        derived,
    })
}

/// A sequence found verbatim in every text
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Match {
    pub true_length: usize,
    pub tokens: Vec<String>,
}

/// Counts for one examined window size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowReport {
    pub window: usize,
    /// Windows common to all texts
    pub candidates: usize,
    /// Candidates whose true length reaches `min_words`
    pub retained: usize,
    /// Candidates whose true length equals the window size
    pub exact: usize,
}

#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    /// Ordered by (true length, tokens)
    pub matches: Vec<Match>,
    pub windows: Vec<WindowReport>,
    /// Whether the zero-result limit ended the search before `max_words`
    pub stopped_early: bool,
}

fn ngram_set(tokens: &[String], n: usize) -> HashSet<&[String]> {
    if n == 0 {
        return HashSet::new();
    }
    tokens.windows(n).collect()
}

/// Length-`n` windows present in every token stream
fn common_ngrams(streams: &[Vec<String>], n: usize) -> Vec<&[String]> {
    let mut sets: Vec<HashSet<&[String]>> = streams.iter().map(|t| ngram_set(t, n)).collect();
    sets.sort_by_key(HashSet::len);

    let Some((smallest, rest)) = sets.split_first() else {
        return Vec::new();
    };
    smallest
        .iter()
        .filter(|gram| rest.iter().all(|set| set.contains(*gram)))
        .copied()
        .collect()
}

/// Windowed search over `bounds`
pub fn search(
    streams: &[Vec<String>],
    bounds: Bounds,
    zero_results: usize,
    punctuation: &Punctuation,
) -> SearchOutcome {
    let mut found: BTreeSet<Match> = BTreeSet::new();
    let mut windows = Vec::new();
    let mut zero_streak = 0;
    let mut stopped_early = false;

    for n in bounds.min_words..=bounds.max_words {
        let candidates = common_ngrams(streams, n);
        let mut retained = 0;
        let mut exact = 0;

        for gram in &candidates {
            let true_length = punctuation.true_length(gram);
            if true_length < bounds.min_words {
                continue;
            }
            retained += 1;
            if true_length == n {
                exact += 1;
            }
            found.insert(Match {
                true_length,
                tokens: gram.to_vec(),
            });
        }

        windows.push(WindowReport {
            window: n,
            candidates: candidates.len(),
            retained,
            exact,
        });

        if zero_results > 0 {
            if exact == 0 {
                zero_streak += 1;
                if zero_streak >= zero_results {
                    stopped_early = n < bounds.max_words;
                    break;
                }
            } else {
                zero_streak = 0;
            }
        }
    }

    SearchOutcome {
        matches: found.into_iter().collect(),
        windows,
        stopped_early,
    }
}

/// One row per match, rendered with `punctuation`
pub fn render_matches(matches: &[Match], punctuation: &Punctuation) -> Vec<NgramRow> {
    matches
        .iter()
        .map(|m| NgramRow::new(m.true_length, punctuation.render(&m.tokens)))
        .collect()
}

/// Drop rows whose text is contained in the text of a row with a larger
/// true length. Rows with identical text collapse into one.
pub fn suppress_subgrams(rows: Vec<NgramRow>) -> Vec<NgramRow> {
    let mut kept: Vec<NgramRow> = Vec::with_capacity(rows.len());

    for row in &rows {
        let subsumed = rows
            .iter()
            .any(|longer| longer.n > row.n && longer.sentence.contains(&row.sentence));
        let duplicate = kept.iter().any(|k| k.sentence == row.sentence);
        if !subsumed && !duplicate {
            kept.push(row.clone());
        }
    }

    kept
}

/// Group by true length (descending), then order each group by `sort`
pub fn sort_rows(rows: &mut [NgramRow], sort: NgramSort, reverse: bool) {
    rows.sort_by(|a, b| {
        let within = match sort {
            NgramSort::Alpha => a.sentence.cmp(&b.sentence),
            NgramSort::TextLength => b
                .text_length
                .cmp(&a.text_length)
                .then_with(|| a.sentence.cmp(&b.sentence)),
        };
        let within = if reverse { within.reverse() } else { within };
        b.n.cmp(&a.n).then(within)
    });
}

/// Search, render, filter and sort
pub fn find_ngrams(
    streams: &[Vec<String>],
    bounds: Bounds,
    options: &NgramOptions,
) -> (Vec<NgramRow>, SearchOutcome) {
    let outcome = search(streams, bounds, options.zero_results, &options.punctuation);

    let mut rows = render_matches(&outcome.matches, &options.punctuation);
    if !options.include_subgrams {
        rows = suppress_subgrams(rows);
    }
    sort_rows(&mut rows, options.sort, options.reverse);

    (rows, outcome)
}

/// Run the n-gram command
pub fn run_ngrams(
    files: &[PathBuf],
    options: NgramOptions,
    status: &Status,
    config: RenderConfig,
) -> Result<()> {
    ensure_file_count(files.len(), 2)?;

    let texts = read_texts(files, status)?;
    let contents: Vec<&str> = texts.iter().map(|t| t.content.as_str()).collect();

    status.info(format!("Setting min words to {}", options.min_words));
    let bounds = resolve_bounds(options.min_words, options.max_words, &contents)?;
    if bounds.derived {
        status.info(format!(
            "Setting max words to {} based on longest sentence found",
            bounds.max_words
        ));
    } else {
        status.info(format!("Setting max words to {}", bounds.max_words));
    }

    let streams: Vec<Vec<String>> = contents.iter().map(|c| word_tokenize(c)).collect();
    let (rows, outcome) = find_ngrams(&streams, bounds, &options);

    for report in &outcome.windows {
        status.info(format!(
            "Found {} matching n-grams of length {}",
            report.candidates, report.window
        ));
        status.detail(format!(
            "window {}: {} with at least {} words, {} of full length",
            report.window, report.retained, bounds.min_words, report.exact
        ));
    }
    if outcome.stopped_early {
        if let Some(last) = outcome.windows.last() {
            status.info(format!(
                "No matches for {} consecutive lengths, stopping after length {}",
                options.zero_results, last.window
            ));
        }
    }

    let result_set = ResultSet::with_items(NgramRow::columns(), rows);
    status.info(format!(
        "Found {} matches for n-grams of length {} to {}",
        result_set.len(),
        bounds.min_words,
        bounds.max_words
    ));
    Renderer::with_config(config).render_to(&result_set, std::io::stdout().lock())?;

    Ok(())
}
