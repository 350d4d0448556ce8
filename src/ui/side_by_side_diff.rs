use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};

use linediff::LineKind;

use crate::{
    app::App,
    ui::{
        ADDED_BG, FILLER_BG, MODIFIED_BG, MODIFIED_HIGHLIGHT_BG, REMOVED_BG,
        diff_utils::{apply_diff_highlight, compute_intra_line_diff},
        highlight_line::{highlight_line_content, with_background},
    },
};

pub fn render_side_by_side_diff(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let visible_lines = area.height.saturating_sub(2) as usize;
    let panel_width = (chunks[0].width.saturating_sub(2)) as usize; // Width minus borders
    let syntax = app.syntax();
    let syntax_set = app.get_syntax_set();
    let theme = app.get_theme();

    let number = |n: Option<usize>| {
        Span::styled(
            format!("{:>4} ", n.map(|n| n.to_string()).unwrap_or_default()),
            Style::default().fg(Color::DarkGray),
        )
    };
    let filler = || {
        Line::from(Span::styled(
            " ".repeat(panel_width),
            Style::default().bg(FILLER_BG),
        ))
    };

    let mut old_lines = Vec::new();
    let mut new_lines = Vec::new();

    for record in app.records.iter().skip(app.scroll_offset).take(visible_lines) {
        match record.kind() {
            LineKind::Unchanged => {
                let highlighted_spans =
                    highlight_line_content(record.content(), syntax, syntax_set, theme);

                let mut old_spans = vec![number(record.left_line_num())];
                old_spans.extend(highlighted_spans.clone());
                old_lines.push(Line::from(old_spans));

                let mut new_spans = vec![number(record.right_line_num())];
                new_spans.extend(highlighted_spans);
                new_lines.push(Line::from(new_spans));
            }
            LineKind::Removed => {
                let highlighted_spans =
                    highlight_line_content(record.content(), syntax, syntax_set, theme);

                let mut old_spans = vec![number(record.left_line_num())];
                old_spans.extend(with_background(highlighted_spans, REMOVED_BG));
                old_lines.push(Line::from(old_spans));

                new_lines.push(filler());
            }
            LineKind::Added => {
                old_lines.push(filler());

                let highlighted_spans =
                    highlight_line_content(record.content(), syntax, syntax_set, theme);

                let mut new_spans = vec![number(record.right_line_num())];
                new_spans.extend(with_background(highlighted_spans, ADDED_BG));
                new_lines.push(Line::from(new_spans));
            }
            LineKind::Modified => {
                let old_text = record.left_text().unwrap_or_default();
                let new_text = record.right_text().unwrap_or_default();
                let (old_ranges, new_ranges) = compute_intra_line_diff(old_text, new_text);

                let mut old_spans = vec![number(record.left_line_num())];
                old_spans.extend(apply_diff_highlight(
                    highlight_line_content(old_text, syntax, syntax_set, theme),
                    &old_ranges,
                    MODIFIED_BG,
                    MODIFIED_HIGHLIGHT_BG,
                ));
                old_lines.push(Line::from(old_spans));

                let mut new_spans = vec![number(record.right_line_num())];
                new_spans.extend(apply_diff_highlight(
                    highlight_line_content(new_text, syntax, syntax_set, theme),
                    &new_ranges,
                    MODIFIED_BG,
                    MODIFIED_HIGHLIGHT_BG,
                ));
                new_lines.push(Line::from(new_spans));
            }
        }
    }

    let old_title = format!("Original: {}", app.left.name);
    let new_title = format!("Modified: {}", app.right.name);
    let scroll = (0, app.horizontal_scroll_offset as u16);

    let old_paragraph = Paragraph::new(Text::from(old_lines))
        .block(Block::default().borders(Borders::ALL).title(old_title))
        .scroll(scroll);

    let new_paragraph = Paragraph::new(Text::from(new_lines))
        .block(Block::default().borders(Borders::ALL).title(new_title))
        .scroll(scroll);

    f.render_widget(old_paragraph, chunks[0]);
    f.render_widget(new_paragraph, chunks[1]);

    // Render scrollbars for both panels
    let total_lines = app.line_count();
    if total_lines > visible_lines {
        let mut scrollbar_state = ScrollbarState::new(total_lines).position(app.scroll_offset);

        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"));

        let margin = Margin {
            vertical: 1,
            horizontal: 0,
        };
        f.render_stateful_widget(
            scrollbar.clone(),
            chunks[0].inner(margin),
            &mut scrollbar_state.clone(),
        );
        f.render_stateful_widget(scrollbar, chunks[1].inner(margin), &mut scrollbar_state);
    }
}
