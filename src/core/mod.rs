//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Result rows and result sets shared by every command
//! - Rendering to table, JSON Lines, JSON and Markdown
//! - Text reading and normalization
//! - Word and sentence tokenization
//! - Configuration errors and status output

pub mod error;
pub mod file_reader;
pub mod model;
pub mod render;
pub mod status;
pub mod tokenizer;
