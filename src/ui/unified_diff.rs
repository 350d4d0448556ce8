use ratatui::{
    Frame,
    layout::{Margin, Rect},
    style::{Color, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};
use std::ops::Range;

use linediff::{LineKind, LineRecord};

use crate::{
    app::App,
    ui::{
        ADDED_BG, ADDED_HIGHLIGHT_BG, MODIFIED_BG, REMOVED_BG, REMOVED_HIGHLIGHT_BG,
        diff_utils::{apply_diff_highlight, compute_intra_line_diff},
        highlight_line::{highlight_line_content, with_background},
    },
};

pub fn render_unified_diff(f: &mut Frame, area: Rect, app: &App) {
    let visible_lines = area.height.saturating_sub(2) as usize; // Account for borders
    let records = &app.records;
    let end_line = (app.scroll_offset + visible_lines).min(records.len());

    let mut lines = Vec::new();
    let mut i = app.scroll_offset;

    while i < end_line {
        let record = &records[i];

        // A removal immediately followed by an addition is a changed line
        if record.kind() == LineKind::Removed
            && i + 1 < end_line
            && records[i + 1].kind() == LineKind::Added
        {
            let next = &records[i + 1];
            let (old_ranges, new_ranges) =
                compute_intra_line_diff(record.content(), next.content());

            lines.push(render_record(
                record,
                app,
                Some((&old_ranges, REMOVED_BG, REMOVED_HIGHLIGHT_BG)),
            ));
            lines.push(render_record(
                next,
                app,
                Some((&new_ranges, ADDED_BG, ADDED_HIGHLIGHT_BG)),
            ));

            i += 2;
            continue;
        }

        lines.push(render_record(record, app, None));
        i += 1;
    }

    let title = format!("{} ↔ {}", app.left.name, app.right.name);
    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().borders(Borders::ALL).title(title))
        .scroll((0, app.horizontal_scroll_offset as u16));

    f.render_widget(paragraph, area);

    let total_lines = records.len();
    if total_lines > visible_lines {
        let mut scrollbar_state = ScrollbarState::new(total_lines).position(app.scroll_offset);

        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"));

        f.render_stateful_widget(
            scrollbar,
            area.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut scrollbar_state,
        );
    }
}

/// Gutter text: `+N` for added lines, `-N` for removed ones and ` N` (left
/// numbering) otherwise.
pub fn gutter(record: &LineRecord) -> String {
    let (sign, number) = match record.kind() {
        LineKind::Added => ('+', record.right_line_num()),
        LineKind::Removed => ('-', record.left_line_num()),
        LineKind::Unchanged | LineKind::Modified => (' ', record.left_line_num()),
    };
    let number = number.map(|n| n.to_string()).unwrap_or_default();
    format!("{:>6} ", format!("{sign}{number}"))
}

fn render_record<'a>(
    record: &'a LineRecord,
    app: &App,
    intra_line_highlight: Option<(&[Range<usize>], Color, Color)>,
) -> Line<'a> {
    let mut spans = vec![Span::styled(
        gutter(record),
        Style::default().fg(Color::DarkGray),
    )];

    let bg_color = match record.kind() {
        LineKind::Added => Some(ADDED_BG),
        LineKind::Removed => Some(REMOVED_BG),
        LineKind::Modified => Some(MODIFIED_BG),
        LineKind::Unchanged => None,
    };

    spans.push(Span::styled(
        record.kind().prefix(),
        match bg_color {
            Some(bg) => Style::default().bg(bg).fg(Color::White),
            None => Style::default().fg(Color::White),
        },
    ));

    let highlighted_spans = highlight_line_content(
        record.content(),
        app.syntax(),
        app.get_syntax_set(),
        app.get_theme(),
    );

    match (intra_line_highlight, bg_color) {
        (Some((ranges, base_bg, highlight_bg)), _) => {
            spans.extend(apply_diff_highlight(
                highlighted_spans,
                ranges,
                base_bg,
                highlight_bg,
            ));
        }
        (None, Some(bg)) => spans.extend(with_background(highlighted_spans, bg)),
        (None, None) => spans.extend(highlighted_spans),
    }

    Line::from(spans)
}
