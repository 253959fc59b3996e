//! Common words flow - Words shared by every text, with frequency statistics
//!
//! Steps:
//! 1. Tokenize every text and keep alphabetic words only
//! 2. Intersect the per-text vocabularies, then drop stopwords
//! 3. Compute frequency, occurrences, length and literary frequency per word
//! 4. Sort by the requested key

use anyhow::Result;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use crate::core::error::ensure_file_count;
use crate::core::file_reader::read_texts;
use crate::core::model::{ResultSet, WordRow};
use crate::core::render::{RenderConfig, Renderer};
use crate::core::status::Status;
use crate::core::tokenizer::words_only;
use crate::lexicon::frequency_list::FrequencyList;
use crate::lexicon::stopwords::Stopwords;

/// Decimal places kept for frequency percentages
const FREQUENCY_DECIMALS: i32 = 5;

/// Sort key for common words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommonSort {
    Alpha,
    Frequency,
    #[default]
    Occurrences,
    Length,
}

impl std::str::FromStr for CommonSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "alpha" => Ok(CommonSort::Alpha),
            "frequency" => Ok(CommonSort::Frequency),
            "occurrences" => Ok(CommonSort::Occurrences),
            "length" => Ok(CommonSort::Length),
            _ => Err(format!("Unknown sort key: {}", s)),
        }
    }
}

/// How the occurrences column is counted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OccurrenceMode {
    /// Sum over all texts
    #[default]
    Total,
    /// Smallest count in any single text. Replaces the occurrences
    /// column only; frequency % is always computed from the total.
    Minimum,
}

impl std::str::FromStr for OccurrenceMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "total" => Ok(OccurrenceMode::Total),
            "min" | "minimum" => Ok(OccurrenceMode::Minimum),
            _ => Err(format!("Unknown occurrence mode: {}", s)),
        }
    }
}

/// Options for the common words flow
#[derive(Debug, Clone, Default)]
pub struct CommonOptions {
    /// Applied unless `include_stopwords` is set
    pub stopwords: Stopwords,
    pub include_stopwords: bool,
    pub frequency_list: Option<FrequencyList>,
    pub occurrences: OccurrenceMode,
    pub sort: CommonSort,
    pub reverse: bool,
}

/// Per-text frequency table
fn count_words(tokens: &[String]) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for token in tokens {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }
    counts
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Words present in every token stream, minus stopwords unless included
pub fn common_vocabulary(token_streams: &[Vec<String>], options: &CommonOptions) -> HashSet<String> {
    let mut sets = token_streams
        .iter()
        .map(|tokens| tokens.iter().cloned().collect::<HashSet<String>>());

    let Some(first) = sets.next() else {
        return HashSet::new();
    };
    let mut common = sets.fold(first, |acc, set| acc.intersection(&set).cloned().collect());

    if !options.include_stopwords {
        options.stopwords.remove_from(&mut common);
    }
    common
}

/// Build one row per common word, sorted per `options`
pub fn find_common_words(token_streams: &[Vec<String>], options: &CommonOptions) -> Vec<WordRow> {
    let common = common_vocabulary(token_streams, options);
    let tables: Vec<HashMap<&str, usize>> =
        token_streams.iter().map(|t| count_words(t)).collect();
    let total_tokens: usize = token_streams.iter().map(Vec::len).sum();

    let mut rows: Vec<WordRow> = common
        .into_iter()
        .map(|word| {
            let counts = tables.iter().map(|t| t.get(word.as_str()).copied().unwrap_or(0));
            let total: usize = counts.clone().sum();
            let occurrences = match options.occurrences {
                OccurrenceMode::Total => total,
                OccurrenceMode::Minimum => counts.min().unwrap_or(0),
            };
            let frequency = if total_tokens == 0 {
                0.0
            } else {
                round_to(total as f64 / total_tokens as f64 * 100.0, FREQUENCY_DECIMALS)
            };
            let literary_frequency = options.frequency_list.as_ref().map(|l| l.lookup(&word));

            WordRow {
                length: word.chars().count(),
                word,
                frequency,
                occurrences,
                literary_frequency,
            }
        })
        .collect();

    sort_rows(&mut rows, options.sort, options.reverse);
    rows
}

fn by_frequency(a: &WordRow, b: &WordRow) -> Ordering {
    a.frequency.total_cmp(&b.frequency)
}

/// Sort rows in place.
///
/// Frequency and occurrences sort on (metric, word) ascending; reversed they
/// sort on the metric alone, descending, with ties left in word order.
pub fn sort_rows(rows: &mut [WordRow], sort: CommonSort, reverse: bool) {
    rows.sort_by(|a, b| a.word.cmp(&b.word));

    match (sort, reverse) {
        (CommonSort::Alpha, false) => {}
        (CommonSort::Alpha, true) => rows.reverse(),
        (CommonSort::Frequency, false) => rows.sort_by(by_frequency),
        (CommonSort::Frequency, true) => rows.sort_by(|a, b| by_frequency(b, a)),
        (CommonSort::Occurrences, false) => rows.sort_by_key(|r| r.occurrences),
        (CommonSort::Occurrences, true) => rows.sort_by(|a, b| b.occurrences.cmp(&a.occurrences)),
        (CommonSort::Length, false) => rows.sort_by(|a, b| b.length.cmp(&a.length)),
        (CommonSort::Length, true) => rows.sort_by_key(|r| r.length),
    }
}

/// Run the common words command
pub fn run_common(
    files: &[PathBuf],
    options: CommonOptions,
    status: &Status,
    config: RenderConfig,
) -> Result<()> {
    ensure_file_count(files.len(), 2)?;

    let texts = read_texts(files, status)?;
    let token_streams: Vec<Vec<String>> = texts.iter().map(|t| words_only(&t.content)).collect();
    for (text, tokens) in texts.iter().zip(&token_streams) {
        status.detail(format!("{}: {} words", text.path, tokens.len()));
    }

    if !options.include_stopwords {
        status.detail(format!("Removing {} stopwords", options.stopwords.len()));
    }
    if let Some(list) = &options.frequency_list {
        status.detail(format!("{} entries in word frequency list", list.len()));
    }

    let rows = find_common_words(&token_streams, &options);
    let result_set = ResultSet::with_items(WordRow::columns(options.frequency_list.is_some()), rows);
    status.info(format!("Found {} common words", result_set.len()));

    Renderer::with_config(config).render_to(&result_set, std::io::stdout().lock())?;

    Ok(())
}
