//! Input text reading
//!
//! Provides consistent handling for:
//! - Non-UTF-8 files (lossy conversion with a warning)
//! - Binary-looking files (read anyway, with a warning)
//! - Line ending and case normalization

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::core::status::Status;

/// Number of leading bytes inspected for NUL bytes
const BINARY_CHECK_LEN: usize = 8192;

/// Warning codes for file operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningCode {
    /// Lossy encoding conversion used
    LossyConversion,
    /// File appears to be binary
    BinaryFile,
}

impl WarningCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningCode::LossyConversion => "LOSSY_CONVERSION",
            WarningCode::BinaryFile => "BINARY_FILE",
        }
    }
}

/// A structured warning
#[derive(Debug, Clone)]
pub struct FileWarning {
    pub code: WarningCode,
    pub message: String,
    pub path: String,
}

impl FileWarning {
    pub fn new(code: WarningCode, message: impl Into<String>, path: &Path) -> Self {
        Self {
            code,
            message: message.into(),
            path: path.display().to_string(),
        }
    }
}

impl std::fmt::Display for FileWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.code.as_str(), self.path, self.message)
    }
}

/// One input text, already normalized
#[derive(Debug, Clone)]
pub struct Text {
    /// Path as given on the command line
    pub path: String,
    /// Lowercased content with `\n` line endings
    pub content: String,
    pub warnings: Vec<FileWarning>,
}

/// Lowercase and normalize line endings
pub fn normalize(raw: &str) -> String {
    raw.replace("\r\n", "\n").replace('\r', "\n").to_lowercase()
}

/// Read and normalize a single text file
pub fn read_text(path: &Path) -> Result<Text> {
    let bytes = fs::read(path).with_context(|| format!("Cannot read {}", path.display()))?;
    let mut warnings = Vec::new();

    let check_len = std::cmp::min(BINARY_CHECK_LEN, bytes.len());
    if bytes[..check_len].contains(&0) {
        warnings.push(FileWarning::new(
            WarningCode::BinaryFile,
            "File appears to be binary (contains null bytes)",
            path,
        ));
    }

    let raw = match String::from_utf8(bytes) {
        Ok(content) => content,
        Err(e) => {
            warnings.push(FileWarning::new(
                WarningCode::LossyConversion,
                "Invalid UTF-8 sequences replaced",
                path,
            ));
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };

    Ok(Text {
        path: path.display().to_string(),
        content: normalize(&raw),
        warnings,
    })
}

/// Read every text, reporting warnings through `status`
pub fn read_texts<P: AsRef<Path>>(paths: &[P], status: &Status) -> Result<Vec<Text>> {
    let mut texts = Vec::with_capacity(paths.len());
    for path in paths {
        let text = read_text(path.as_ref())?;
        for warning in &text.warnings {
            status.warn(warning);
        }
        status.detail(format!("Read {} ({} bytes)", text.path, text.content.len()));
        texts.push(text);
    }
    Ok(texts)
}
