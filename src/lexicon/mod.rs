//! Lexicon module - Word lists and tagging resources
//!
//! Provides:
//! - stopwords: Built-in English stopwords and custom lists
//! - frequency_list: `word;frequency` reference lists
//! - pos: Penn Treebank tags and the rule-based tagger

pub mod frequency_list;
pub mod pos;
pub mod stopwords;
