//! Renderer module
//!
//! Renders a ResultSet to different output formats: table, jsonl, json, md

use crate::core::model::{Align, Column, ResultSet, Row};
use std::io::Write;

/// Gap between table columns
const COLUMN_GAP: &str = "  ";

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Jsonl,
    Json,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" | "text" => Ok(OutputFormat::Table),
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    /// Create a new render config with pretty option
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Renderer for result sets
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    /// Create a new renderer with render config
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a result set to a string
    pub fn render<R: Row>(&self, result_set: &ResultSet<R>) -> String {
        match self.config.format {
            OutputFormat::Table => render_table(result_set),
            OutputFormat::Jsonl => self.render_jsonl(result_set),
            OutputFormat::Json => self.render_json(result_set),
            OutputFormat::Markdown => render_markdown(result_set),
        }
    }

    /// Render to a writer, with a trailing newline when there is output
    pub fn render_to<R: Row, W: Write>(
        &self,
        result_set: &ResultSet<R>,
        mut writer: W,
    ) -> std::io::Result<()> {
        let output = self.render(result_set);
        if output.is_empty() {
            return Ok(());
        }
        writeln!(writer, "{}", output)
    }

    /// Render as JSON Lines (one JSON object per line)
    fn render_jsonl<R: Row>(&self, result_set: &ResultSet<R>) -> String {
        result_set
            .items
            .iter()
            .filter_map(|item| {
                if self.config.pretty {
                    serde_json::to_string_pretty(item).ok()
                } else {
                    serde_json::to_string(item).ok()
                }
            })
            .collect::<Vec<_>>()
            .join(if self.config.pretty { "\n\n" } else { "\n" })
    }

    /// Render as a single JSON array
    fn render_json<R: Row>(&self, result_set: &ResultSet<R>) -> String {
        if self.config.pretty {
            serde_json::to_string_pretty(&result_set.items).unwrap_or_else(|_| "[]".to_string())
        } else {
            serde_json::to_string(&result_set.items).unwrap_or_else(|_| "[]".to_string())
        }
    }
}

fn pad(cell: &str, width: usize, align: Align) -> String {
    match align {
        Align::Left => format!("{:<width$}", cell, width = width),
        Align::Right => format!("{:>width$}", cell, width = width),
    }
}

fn column_widths(columns: &[Column], rows: &[Vec<String>]) -> Vec<usize> {
    columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(column.name.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect()
}

/// Plain aligned table: header, dashes, rows
fn render_table<R: Row>(result_set: &ResultSet<R>) -> String {
    let columns = &result_set.columns;
    let rows: Vec<Vec<String>> = result_set.items.iter().map(Row::cells).collect();
    let widths = column_widths(columns, &rows);

    let format_line = |cells: Vec<String>| -> String {
        cells.join(COLUMN_GAP).trim_end().to_string()
    };

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_line(
        columns
            .iter()
            .zip(&widths)
            .map(|(column, &width)| pad(column.name, width, column.align))
            .collect(),
    ));
    lines.push(format_line(widths.iter().map(|&w| "-".repeat(w)).collect()));

    for row in &rows {
        lines.push(format_line(
            columns
                .iter()
                .zip(&widths)
                .enumerate()
                .map(|(i, (column, &width))| {
                    pad(row.get(i).map(String::as_str).unwrap_or(""), width, column.align)
                })
                .collect(),
        ));
    }

    lines.join("\n")
}

/// Markdown pipe table
fn render_markdown<R: Row>(result_set: &ResultSet<R>) -> String {
    let mut output = String::new();

    let header: Vec<&str> = result_set.columns.iter().map(|c| c.name).collect();
    output.push_str(&format!("| {} |\n", header.join(" | ")));

    let rule: Vec<&str> = result_set
        .columns
        .iter()
        .map(|c| match c.align {
            Align::Left => ":---",
            Align::Right => "---:",
        })
        .collect();
    output.push_str(&format!("| {} |\n", rule.join(" | ")));

    for item in &result_set.items {
        let cells: Vec<String> = item
            .cells()
            .into_iter()
            .map(|cell| cell.replace('|', "\\|"))
            .collect();
        output.push_str(&format!("| {} |\n", cells.join(" | ")));
    }

    output.trim_end().to_string()
}
