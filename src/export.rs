//! Plain-text diff export and its inverse.

use chrono::{DateTime, Local, NaiveDate};
use tracing::debug;

use crate::diff_line::{LineKind, LineRecord};
use crate::error::ExportParseError;
use crate::language::PLAIN_TEXT;

const ORIGINAL_MARKER: &str = "--- Original";
const MODIFIED_MARKER: &str = "+++ Modified";

#[derive(Debug, Clone)]
pub struct ExportHeader {
    pub language: String,
    pub generated_at: DateTime<Local>,
}

impl ExportHeader {
    pub fn now(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            generated_at: Local::now(),
        }
    }
}

/// Renders the full downloadable diff: a short header followed by the body.
pub fn render_export(records: &[LineRecord], header: &ExportHeader) -> String {
    let mut output = format!(
        "Code Comparison - {}\n\n",
        header.generated_at.format("%-m/%-d/%Y, %-I:%M:%S %p")
    );
    output.push_str(&format!("Language: {}\n\n", header.language));
    output.push_str(&format!("{ORIGINAL_MARKER}\n{MODIFIED_MARKER}\n\n"));
    output.push_str(&render_body(records));
    output
}

/// Renders one prefixed line per record; a modified record becomes a `- `
/// line followed by a `+ ` line.
pub fn render_body(records: &[LineRecord]) -> String {
    let mut body = String::new();

    for record in records {
        match record.kind() {
            LineKind::Unchanged | LineKind::Added | LineKind::Removed => {
                body.push_str(record.kind().prefix());
                body.push_str(record.content());
                body.push('\n');
            }
            LineKind::Modified => {
                let old = record.left_text().unwrap_or_default();
                let new = record.right_text().unwrap_or_default();
                body.push_str(&format!("- {old}\n+ {new}\n"));
            }
        }
    }

    body
}

/// Each record's content on its own line, as copied to the clipboard.
pub fn plain_text(records: &[LineRecord]) -> String {
    records
        .iter()
        .map(LineRecord::content)
        .collect::<Vec<_>>()
        .join("\n")
}

/// `code-diff-<language>-<YYYY-MM-DD>.txt`, with the language reduced to
/// `[a-z0-9+#-]` so the name never leaves the target directory.
pub fn export_file_name(language: &str, date: NaiveDate) -> String {
    format!(
        "code-diff-{}-{}.txt",
        file_name_language(language),
        date.format("%Y-%m-%d")
    )
}

fn file_name_language(language: &str) -> String {
    let slug: String = language
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' | '+' | '#' | '-' => c,
            _ => '-',
        })
        .collect();
    let slug = slug.trim_matches('-');

    if slug.is_empty() {
        PLAIN_TEXT.to_string()
    } else {
        slug.to_string()
    }
}

/// Both sides recovered from an exported diff.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Reconstructed {
    pub left: String,
    pub right: String,
}

/// Parses an export produced by [`render_export`] or a bare [`render_body`].
pub fn parse_export(text: &str) -> Result<Reconstructed, ExportParseError> {
    let mut lines: Vec<&str> = text.split('\n').collect();
    // Every body line ends with a newline.
    if lines.last() == Some(&"") {
        lines.pop();
    }

    let mut start = 0;
    if let Some(pos) = lines
        .windows(2)
        .position(|pair| pair[0] == ORIGINAL_MARKER && pair[1] == MODIFIED_MARKER)
    {
        start = pos + 2;
        if lines.get(start) == Some(&"") {
            start += 1;
        }
    }

    let mut left = Vec::new();
    let mut right = Vec::new();

    for (offset, line) in lines[start..].iter().enumerate() {
        if let Some(rest) = line.strip_prefix("  ") {
            left.push(rest);
            right.push(rest);
        } else if let Some(rest) = line.strip_prefix("- ") {
            left.push(rest);
        } else if let Some(rest) = line.strip_prefix("+ ") {
            right.push(rest);
        } else {
            return Err(ExportParseError::UnknownPrefix {
                line_number: start + offset + 1,
                line: line.to_string(),
            });
        }
    }

    debug!(
        left_lines = left.len(),
        right_lines = right.len(),
        "parsed exported diff"
    );

    Ok(Reconstructed {
        left: left.join("\n"),
        right: right.join("\n"),
    })
}
