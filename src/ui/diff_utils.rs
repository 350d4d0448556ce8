use ratatui::{style::Color, text::Span};
use similar::{Algorithm, ChangeTag, TextDiff};
use std::ops::Range;

/// Byte ranges that differ between two versions of a line, as
/// `(ranges in old, ranges in new)`.
pub fn compute_intra_line_diff(
    old_text: &str,
    new_text: &str,
) -> (Vec<Range<usize>>, Vec<Range<usize>>) {
    let diff = TextDiff::configure()
        .algorithm(Algorithm::Myers)
        .diff_chars(old_text, new_text);

    let mut old_ranges: Vec<Range<usize>> = Vec::new();
    let mut new_ranges: Vec<Range<usize>> = Vec::new();
    let mut old_idx = 0;
    let mut new_idx = 0;

    for change in diff.iter_all_changes() {
        let len = change.value().len();
        match change.tag() {
            ChangeTag::Equal => {
                old_idx += len;
                new_idx += len;
            }
            ChangeTag::Delete => {
                push_range(&mut old_ranges, old_idx..old_idx + len);
                old_idx += len;
            }
            ChangeTag::Insert => {
                push_range(&mut new_ranges, new_idx..new_idx + len);
                new_idx += len;
            }
        }
    }

    (old_ranges, new_ranges)
}

// Extends the last range when the new one is adjacent.
fn push_range(ranges: &mut Vec<Range<usize>>, range: Range<usize>) {
    match ranges.last_mut() {
        Some(last) if last.end == range.start => last.end = range.end,
        _ => ranges.push(range),
    }
}

/// Applies diff highlighting to existing syntax highlighted spans.
///
/// * `spans` - The original syntax highlighted spans
/// * `diff_ranges` - Byte ranges to paint with `highlight_bg`
/// * `base_bg` - Background for the rest of the line
/// * `highlight_bg` - Background for the changed parts
pub fn apply_diff_highlight<'a>(
    spans: Vec<Span<'a>>,
    diff_ranges: &[Range<usize>],
    base_bg: Color,
    highlight_bg: Color,
) -> Vec<Span<'a>> {
    if diff_ranges.is_empty() {
        return super::highlight_line::with_background(spans, base_bg);
    }

    let mut new_spans = Vec::new();
    let mut current_idx = 0;

    for span in spans {
        let content = span.content;
        let len = content.len();
        let span_end = current_idx + len;
        let style = span.style;

        let mut last_processed = current_idx;

        for range in diff_ranges {
            if range.end <= current_idx {
                continue;
            }
            if range.start >= span_end {
                break;
            }

            let overlap_start = range.start.max(current_idx);
            let overlap_end = range.end.min(span_end);

            if overlap_start > last_processed {
                let sub_content =
                    &content[(last_processed - current_idx)..(overlap_start - current_idx)];
                new_spans.push(Span::styled(sub_content.to_string(), style.bg(base_bg)));
            }

            let sub_content = &content[(overlap_start - current_idx)..(overlap_end - current_idx)];
            new_spans.push(Span::styled(sub_content.to_string(), style.bg(highlight_bg)));

            last_processed = overlap_end;
        }

        if last_processed < span_end {
            let sub_content = &content[(last_processed - current_idx)..];
            new_spans.push(Span::styled(sub_content.to_string(), style.bg(base_bg)));
        }

        current_idx += len;
    }

    new_spans
}
