//! Result Model
//!
//! Every subcommand maps its output to rows implementing [`Row`] and collects
//! them in a [`ResultSet`] before rendering.

use serde::{Serialize, Serializer};

use crate::lexicon::pos::PennTag;

/// Column alignment in table output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// A named table column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub align: Align,
}

impl Column {
    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            align: Align::Left,
        }
    }

    pub const fn number(name: &'static str) -> Self {
        Self {
            name,
            align: Align::Right,
        }
    }
}

/// A renderable result row
pub trait Row: Serialize {
    /// Cell values, one per column of the owning [`ResultSet`]
    fn cells(&self) -> Vec<String>;
}

/// Literary frequency of a word, as found in an external frequency list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiteraryFrequency {
    Known(String),
    Unknown,
}

impl std::fmt::Display for LiteraryFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LiteraryFrequency::Known(value) => write!(f, "{}", value),
            LiteraryFrequency::Unknown => write!(f, "unknown"),
        }
    }
}

impl Serialize for LiteraryFrequency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A word shared by every input text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordRow {
    pub word: String,
    /// Share of all alphabetic tokens, in percent
    pub frequency: f64,
    pub occurrences: usize,
    pub length: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub literary_frequency: Option<LiteraryFrequency>,
}

impl WordRow {
    pub fn columns(with_literary: bool) -> Vec<Column> {
        let mut columns = vec![
            Column::text("word"),
            Column::number("frequency %"),
            Column::number("occurrences"),
            Column::number("length"),
        ];
        if with_literary {
            columns.push(Column::text("literary frequency"));
        }
        columns
    }
}

impl Row for WordRow {
    fn cells(&self) -> Vec<String> {
        let mut cells = vec![
            self.word.clone(),
            self.frequency.to_string(),
            self.occurrences.to_string(),
            self.length.to_string(),
        ];
        if let Some(literary) = &self.literary_frequency {
            cells.push(literary.to_string());
        }
        cells
    }
}

/// A word sequence shared by every input text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NgramRow {
    /// Word count after discounting punctuation
    pub n: usize,
    /// Length of `sentence` in characters
    pub text_length: usize,
    pub sentence: String,
}

impl NgramRow {
    pub fn new(n: usize, sentence: String) -> Self {
        Self {
            n,
            text_length: sentence.chars().count(),
            sentence,
        }
    }

    pub fn columns() -> Vec<Column> {
        vec![
            Column::number("n"),
            Column::number("text length"),
            Column::text("full sentence"),
        ]
    }
}

impl Row for NgramRow {
    fn cells(&self) -> Vec<String> {
        vec![
            self.n.to_string(),
            self.text_length.to_string(),
            self.sentence.clone(),
        ]
    }
}

/// A word of a single text with its grammatical class
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassRow {
    pub word: String,
    pub occurrences: usize,
    pub length: usize,
    pub tag: PennTag,
    pub word_class: &'static str,
}

impl ClassRow {
    pub fn columns() -> Vec<Column> {
        vec![
            Column::text("word"),
            Column::number("occurrences"),
            Column::number("length"),
            Column::text("tag"),
            Column::text("word class"),
        ]
    }
}

impl Row for ClassRow {
    fn cells(&self) -> Vec<String> {
        vec![
            self.word.clone(),
            self.occurrences.to_string(),
            self.length.to_string(),
            self.tag.to_string(),
            self.word_class.to_string(),
        ]
    }
}

/// Result set containing multiple rows under named columns
#[derive(Debug, Clone)]
pub struct ResultSet<R> {
    pub columns: Vec<Column>,
    pub items: Vec<R>,
}

impl<R> ResultSet<R> {
    pub fn with_items(columns: Vec<Column>, items: Vec<R>) -> Self {
        Self { columns, items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
