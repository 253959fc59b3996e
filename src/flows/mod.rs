//! Flows module - One pipeline per command
//!
//! Provides:
//! - common: Words shared by every text, with frequency statistics
//! - ngrams: Word sequences shared verbatim by every text
//! - classes: Part-of-speech classification of one text's vocabulary

pub mod classes;
pub mod common;
pub mod ngrams;
