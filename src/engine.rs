//! Line-level comparison of two texts.
//!
//! Two alignment strategies are supported. Neither attempts a longest common
//! subsequence: positional pairs lines by index, sequential walks both sides
//! with a cursor each and never looks ahead to resynchronise.

use std::fmt;

use clap::ValueEnum;
use serde::Deserialize;
use tracing::debug;

use crate::diff_line::{LineKind, LineRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Align lines strictly by index (split view)
    #[default]
    #[value(alias = "split")]
    #[serde(alias = "split")]
    Positional,
    /// Advance both sides together on equal lines, independently otherwise (unified view)
    #[value(alias = "unified")]
    #[serde(alias = "unified")]
    Sequential,
}

impl Strategy {
    pub fn toggled(self) -> Self {
        match self {
            Strategy::Positional => Strategy::Sequential,
            Strategy::Sequential => Strategy::Positional,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Positional => f.write_str("positional"),
            Strategy::Sequential => f.write_str("sequential"),
        }
    }
}

/// Splits `text` on `\n`.
///
/// A trailing newline yields a trailing empty line. The empty text has no
/// lines at all.
pub fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        Vec::new()
    } else {
        text.split('\n').collect()
    }
}

/// Compares two texts line by line.
pub fn compare(left: &str, right: &str, strategy: Strategy) -> Vec<LineRecord> {
    let left_lines = split_lines(left);
    let right_lines = split_lines(right);

    let records = match strategy {
        Strategy::Positional => positional(&left_lines, &right_lines),
        Strategy::Sequential => sequential(&left_lines, &right_lines),
    };

    debug!(
        %strategy,
        left_lines = left_lines.len(),
        right_lines = right_lines.len(),
        records = records.len(),
        "compared texts"
    );

    records
}

/// Pairs lines by index.
///
/// A side that has run out of lines reads as the empty string, so an empty
/// left line opposite a non-empty right line is reported as `Added` rather
/// than `Modified`.
pub fn positional(left_lines: &[&str], right_lines: &[&str]) -> Vec<LineRecord> {
    let max_lines = left_lines.len().max(right_lines.len());
    let mut records = Vec::with_capacity(max_lines);

    for i in 0..max_lines {
        let left = left_lines.get(i).copied().unwrap_or("");
        let right = right_lines.get(i).copied().unwrap_or("");
        let line_num = i + 1;

        let record = if left == right {
            LineRecord::unchanged(left, line_num, line_num)
        } else if left.is_empty() {
            LineRecord::added(right, line_num)
        } else if right.is_empty() {
            LineRecord::removed(left, line_num)
        } else {
            LineRecord::modified(left, right, line_num)
        };
        records.push(record);
    }

    records
}

/// Walks both sides with independent cursors.
///
/// Equal lines advance both cursors. On a mismatch the left line is emitted as
/// removed and the right line as added in the same step, so a changed line
/// shows up as an adjacent `Removed`/`Added` pair and never as `Modified`.
pub fn sequential(left_lines: &[&str], right_lines: &[&str]) -> Vec<LineRecord> {
    let mut records = Vec::with_capacity(left_lines.len() + right_lines.len());
    let mut li = 0;
    let mut ri = 0;

    while li < left_lines.len() || ri < right_lines.len() {
        if li < left_lines.len() && ri < right_lines.len() && left_lines[li] == right_lines[ri] {
            records.push(LineRecord::unchanged(left_lines[li], li + 1, ri + 1));
            li += 1;
            ri += 1;
            continue;
        }

        if li < left_lines.len() {
            records.push(LineRecord::removed(left_lines[li], li + 1));
            li += 1;
        }
        if ri < right_lines.len() {
            records.push(LineRecord::added(right_lines[ri], ri + 1));
            ri += 1;
        }
    }

    records
}

/// Per-kind record counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffStats {
    pub unchanged: usize,
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
}

impl DiffStats {
    pub fn from_records(records: &[LineRecord]) -> Self {
        records.iter().fold(Self::default(), |mut stats, record| {
            match record.kind() {
                LineKind::Unchanged => stats.unchanged += 1,
                LineKind::Added => stats.added += 1,
                LineKind::Removed => stats.removed += 1,
                LineKind::Modified => stats.modified += 1,
            }
            stats
        })
    }

    pub fn has_changes(&self) -> bool {
        self.added + self.removed + self.modified > 0
    }
}

impl fmt::Display for DiffStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} unchanged, {} added, {} removed, {} modified",
            self.unchanged, self.added, self.removed, self.modified
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{DiffStats, Strategy, compare, split_lines};
    use crate::diff_line::{LineKind, LineRecord};
    use pretty_assertions::assert_eq;
    use proptest::prelude::{Just, prop, prop_assert, prop_assert_eq, prop_oneof, proptest};
    use proptest::strategy::Strategy as _;
    use rstest::rstest;

    #[test]
    fn test_split_lines_keeps_trailing_empty_line() {
        assert_eq!(split_lines("a\nb\n"), vec!["a", "b", ""]);
        assert_eq!(split_lines("\n"), vec!["", ""]);
        assert_eq!(split_lines(""), Vec::<&str>::new());
    }

    #[test]
    fn test_positional_changed_middle_line() {
        let records = compare("a\nb\nc", "a\nx\nc", Strategy::Positional);
        assert_eq!(
            records,
            vec![
                LineRecord::unchanged("a", 1, 1),
                LineRecord::modified("b", "x", 2),
                LineRecord::unchanged("c", 3, 3),
            ]
        );
        assert_eq!(records[1].content(), "b → x");
    }

    #[test]
    fn test_sequential_changed_middle_line() {
        let records = compare("a\nb\nc", "a\nx\nc", Strategy::Sequential);
        assert_eq!(
            records,
            vec![
                LineRecord::unchanged("a", 1, 1),
                LineRecord::removed("b", 2),
                LineRecord::added("x", 2),
                LineRecord::unchanged("c", 3, 3),
            ]
        );
    }

    #[rstest]
    #[case(Strategy::Positional)]
    #[case(Strategy::Sequential)]
    fn test_left_longer(#[case] strategy: Strategy) {
        let records = compare("a\nb", "a", strategy);
        assert_eq!(
            records,
            vec![LineRecord::unchanged("a", 1, 1), LineRecord::removed("b", 2)]
        );
    }

    #[test]
    fn test_positional_empty_left_line_is_added() {
        assert_eq!(
            compare("", "a", Strategy::Positional),
            vec![LineRecord::added("a", 1)]
        );
        // A genuinely empty left line is indistinguishable from a missing one.
        assert_eq!(
            compare("\nz", "a\nz", Strategy::Positional),
            vec![LineRecord::added("a", 1), LineRecord::unchanged("z", 2, 2)]
        );
    }

    #[test]
    fn test_positional_empty_right_line_is_removed() {
        assert_eq!(
            compare("a\nz", "\nz", Strategy::Positional),
            vec![LineRecord::removed("a", 1), LineRecord::unchanged("z", 2, 2)]
        );
    }

    #[test]
    fn test_positional_pads_missing_lines_with_empty_text() {
        // Past the end of the left text the empty right line compares equal.
        assert_eq!(
            compare("a", "a\n", Strategy::Positional),
            vec![LineRecord::unchanged("a", 1, 1), LineRecord::unchanged("", 2, 2)]
        );
    }

    #[test]
    fn test_sequential_no_lookahead() {
        // An inserted line throws every following line out of step.
        let records = compare("a\nb", "x\na\nb", Strategy::Sequential);
        assert_eq!(
            records,
            vec![
                LineRecord::removed("a", 1),
                LineRecord::added("x", 1),
                LineRecord::removed("b", 2),
                LineRecord::added("a", 2),
                LineRecord::added("b", 3),
            ]
        );
    }

    #[rstest]
    #[case(Strategy::Positional)]
    #[case(Strategy::Sequential)]
    fn test_both_empty(#[case] strategy: Strategy) {
        assert!(compare("", "", strategy).is_empty());
    }

    #[rstest]
    #[case(Strategy::Positional)]
    #[case(Strategy::Sequential)]
    fn test_one_side_empty(#[case] strategy: Strategy) {
        assert_eq!(
            compare("a\nb", "", strategy),
            vec![LineRecord::removed("a", 1), LineRecord::removed("b", 2)]
        );
        assert_eq!(
            compare("", "a\nb", strategy),
            vec![LineRecord::added("a", 1), LineRecord::added("b", 2)]
        );
    }

    #[test]
    fn test_stats() {
        let records = compare("a\nb\nc\nd", "a\nx\n\n", Strategy::Positional);
        let stats = DiffStats::from_records(&records);
        assert_eq!(
            stats,
            DiffStats {
                unchanged: 1,
                added: 0,
                removed: 2,
                modified: 1,
            }
        );
        assert!(stats.has_changes());
        assert_eq!(
            stats.to_string(),
            "1 unchanged, 0 added, 2 removed, 1 modified"
        );
    }

    #[test]
    fn test_strategy_toggle() {
        assert_eq!(Strategy::Positional.toggled(), Strategy::Sequential);
        assert_eq!(Strategy::Sequential.toggled(), Strategy::Positional);
    }

    fn text() -> impl proptest::strategy::Strategy<Value = String> {
        prop::collection::vec("[abc]{0,2}", 0..8).prop_map(|lines| lines.join("\n"))
    }

    fn any_strategy() -> impl proptest::strategy::Strategy<Value = Strategy> {
        prop_oneof![Just(Strategy::Positional), Just(Strategy::Sequential)]
    }

    proptest! {
        #[test]
        fn test_positional_covers_longest_side(left in text(), right in text()) {
            let records = compare(&left, &right, Strategy::Positional);
            let expected = split_lines(&left).len().max(split_lines(&right).len());
            prop_assert_eq!(records.len(), expected);

            for (i, record) in records.iter().enumerate() {
                if let Some(n) = record.left_line_num() {
                    prop_assert_eq!(n, i + 1);
                }
                if let Some(n) = record.right_line_num() {
                    prop_assert_eq!(n, i + 1);
                }
            }
        }

        #[test]
        fn test_sequential_walks_every_line_once(left in text(), right in text()) {
            let records = compare(&left, &right, Strategy::Sequential);

            let left_nums: Vec<usize> = records.iter().filter_map(|r| r.left_line_num()).collect();
            let right_nums: Vec<usize> =
                records.iter().filter_map(|r| r.right_line_num()).collect();
            let left_lines = split_lines(&left);
            let right_lines = split_lines(&right);

            prop_assert_eq!(left_nums, (1..=left_lines.len()).collect::<Vec<_>>());
            prop_assert_eq!(right_nums, (1..=right_lines.len()).collect::<Vec<_>>());

            for record in &records {
                if let (Some(n), Some(text)) = (record.left_line_num(), record.left_text()) {
                    prop_assert_eq!(text, left_lines[n - 1]);
                }
                if let (Some(n), Some(text)) = (record.right_line_num(), record.right_text()) {
                    prop_assert_eq!(text, right_lines[n - 1]);
                }
            }
        }

        #[test]
        fn test_sequential_never_modified(left in text(), right in text()) {
            let records = compare(&left, &right, Strategy::Sequential);
            prop_assert!(records.iter().all(|r| r.kind() != LineKind::Modified));
        }

        #[test]
        fn test_identity_is_unchanged(x in text(), strategy in any_strategy()) {
            let records = compare(&x, &x, strategy);
            prop_assert_eq!(records.len(), split_lines(&x).len());
            prop_assert!(records.iter().all(|r| r.kind() == LineKind::Unchanged));
        }

        #[test]
        fn test_compare_is_total(
            left in "(?s).{0,64}",
            right in "(?s).{0,64}",
            strategy in any_strategy(),
        ) {
            let records = compare(&left, &right, strategy);
            let longest = split_lines(&left).len().max(split_lines(&right).len());
            prop_assert!(records.len() >= longest);
        }
    }
}
