//! Configuration errors
//!
//! Every error here is fatal and reported before any computation starts.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("You must specify at least {required} text files to compare (got {given})")]
    NotEnoughFiles { required: usize, given: usize },

    #[error("Min words must be at least 1")]
    ZeroMinWords,

    #[error("Max words ({max}) must be equal to or larger than min words ({min}), exiting")]
    InvertedBounds { min: usize, max: usize },

    #[error("{}:{line_number}: malformed frequency list line {line:?}, expected `word;frequency`", path.display())]
    MalformedFrequencyLine {
        path: PathBuf,
        line_number: usize,
        line: String,
    },
}

/// Fail unless at least `required` texts were supplied.
pub fn ensure_file_count(given: usize, required: usize) -> Result<(), CorpusError> {
    if given < required {
        return Err(CorpusError::NotEnoughFiles { required, given });
    }
    Ok(())
}
