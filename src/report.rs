//! Text renderings of a positional comparison, one row per line index.

use crate::diff_line::{LineKind, LineRecord};
use crate::engine::{Strategy, compare};

/// Row number of a positional record. Both sides share it.
fn row_number(record: &LineRecord) -> usize {
    record
        .left_line_num()
        .or(record.right_line_num())
        .unwrap_or_default()
}

/// One `n: text` line per equal row, and a `- `/`+ ` pair per differing row.
pub fn inline_report(left: &str, right: &str) -> String {
    let mut result = String::new();

    for record in compare(left, right, Strategy::Positional) {
        let n = row_number(&record);
        if record.kind() == LineKind::Unchanged {
            result.push_str(&format!("{n}: {}\n", record.content()));
        } else {
            let old = record.left_text().unwrap_or_default();
            let new = record.right_text().unwrap_or_default();
            result.push_str(&format!("{n}: - {old}\n{n}: + {new}\n"));
        }
    }

    result
}

/// A pipe-separated table with both texts side by side and differing rows
/// flagged with `(DIFF)`.
pub fn table_report(left: &str, right: &str) -> String {
    let mut result = String::from("Line | Text 1 | Text 2\n");
    result.push_str("-----|--------|-------\n");

    for record in compare(left, right, Strategy::Positional) {
        let n = row_number(&record);
        let old = record.left_text().unwrap_or_default();
        let new = record.right_text().unwrap_or_default();
        result.push_str(&format!("{n} | {old} | {new}"));
        if record.kind() != LineKind::Unchanged {
            result.push_str(" (DIFF)");
        }
        result.push('\n');
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_inline_report() {
        assert_eq!(
            inline_report("a\nb\nc", "a\nx"),
            "1: a\n2: - b\n2: + x\n3: - c\n3: + \n"
        );
    }

    #[test]
    fn test_inline_report_added_row() {
        assert_eq!(inline_report("", "new"), "1: - \n1: + new\n");
    }

    #[test]
    fn test_table_report() {
        assert_eq!(
            table_report("a\nb", "a\nc\nd"),
            concat!(
                "Line | Text 1 | Text 2\n",
                "-----|--------|-------\n",
                "1 | a | a\n",
                "2 | b | c (DIFF)\n",
                "3 |  | d (DIFF)\n",
            )
        );
    }

    #[test]
    fn test_reports_of_empty_texts() {
        assert_eq!(inline_report("", ""), "");
        assert_eq!(
            table_report("", ""),
            "Line | Text 1 | Text 2\n-----|--------|-------\n"
        );
    }
}
