//! Word class flow - Part-of-speech classification of one text's vocabulary
//!
//! Steps:
//! 1. Tokenize the text and keep alphabetic words only
//! 2. Count occurrences and drop stopwords unless included
//! 3. Tag every distinct word in isolation
//! 4. Sort by the requested key

use anyhow::Result;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::path::Path;

use crate::core::file_reader::read_text;
use crate::core::model::{ClassRow, ResultSet};
use crate::core::render::{RenderConfig, Renderer};
use crate::core::status::Status;
use crate::core::tokenizer::words_only;
use crate::lexicon::pos::Tagger;
use crate::lexicon::stopwords::Stopwords;

/// Sort key for word classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClassSort {
    Alpha,
    #[default]
    Occurrences,
    Length,
    Class,
}

impl std::str::FromStr for ClassSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "alpha" => Ok(ClassSort::Alpha),
            "occurrences" => Ok(ClassSort::Occurrences),
            "length" => Ok(ClassSort::Length),
            "class" => Ok(ClassSort::Class),
            _ => Err(format!("Unknown sort key: {}", s)),
        }
    }
}

/// Options for the word class flow
#[derive(Debug, Clone, Default)]
pub struct ClassOptions {
    pub stopwords: Stopwords,
    pub include_stopwords: bool,
    pub sort: ClassSort,
    pub reverse: bool,
}

/// One row per distinct word in `tokens`
pub fn classify_words<T: Tagger + ?Sized>(
    tokens: &[String],
    options: &ClassOptions,
    tagger: &T,
) -> Vec<ClassRow> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in tokens {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }

    let mut rows: Vec<ClassRow> = counts
        .into_iter()
        .filter(|(word, _)| options.include_stopwords || !options.stopwords.contains(word))
        .map(|(word, occurrences)| {
            let tag = tagger.tag(word);
            ClassRow {
                word: word.to_string(),
                occurrences,
                length: word.chars().count(),
                tag,
                word_class: tag.description(),
            }
        })
        .collect();

    sort_rows(&mut rows, options.sort, options.reverse);
    rows
}

/// Sort rows in place. `reverse` flips the primary key only; ties stay in
/// word order.
pub fn sort_rows(rows: &mut [ClassRow], sort: ClassSort, reverse: bool) {
    let primary = |a: &ClassRow, b: &ClassRow| -> Ordering {
        match sort {
            ClassSort::Alpha => Ordering::Equal,
            ClassSort::Occurrences => b.occurrences.cmp(&a.occurrences),
            ClassSort::Length => b.length.cmp(&a.length),
            ClassSort::Class => a.word_class.cmp(b.word_class),
        }
    };

    rows.sort_by(|a, b| {
        let ordering = primary(a, b);
        let ordering = if reverse { ordering.reverse() } else { ordering };
        ordering.then_with(|| {
            let words = a.word.cmp(&b.word);
            if reverse && sort == ClassSort::Alpha {
                words.reverse()
            } else {
                words
            }
        })
    });
}

/// Run the word class command
pub fn run_classes<T: Tagger + ?Sized>(
    file: &Path,
    options: ClassOptions,
    tagger: &T,
    status: &Status,
    config: RenderConfig,
) -> Result<()> {
    let text = read_text(file)?;
    for warning in &text.warnings {
        status.warn(warning);
    }

    let tokens = words_only(&text.content);
    status.detail(format!("{}: {} words", text.path, tokens.len()));

    if !options.include_stopwords {
        status.detail(format!("Removing {} stopwords", options.stopwords.len()));
    }

    let rows = classify_words(&tokens, &options, tagger);
    let result_set = ResultSet::with_items(ClassRow::columns(), rows);
    status.info(format!("Found {} unique words", result_set.len()));

    Renderer::with_config(config).render_to(&result_set, std::io::stdout().lock())?;

    Ok(())
}
