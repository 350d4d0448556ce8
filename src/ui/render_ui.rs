use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use linediff::Strategy;

use crate::{
    app::App,
    ui::{
        footer::{footer_height, render_footer}, side_by_side_diff::render_side_by_side_diff,
        unified_diff::render_unified_diff,
    },
};

pub fn ui(f: &mut Frame, app: &App) {
    let size = f.area();

    let mut constraints = vec![Constraint::Length(3), Constraint::Min(0)];
    if app.show_shortcuts {
        constraints.push(Constraint::Length(footer_height(size.width)));
    }
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(size);

    render_status(f, chunks[0], app);

    let diff_area = chunks[1];
    if app.uses_side_by_side(diff_area.width) {
        render_side_by_side_diff(f, diff_area, app);
    } else {
        render_unified_diff(f, diff_area, app);
    }

    // Footer with keyboard shortcuts (if enabled)
    if let Some(footer_area) = chunks.get(2) {
        render_footer(f, *footer_area);
    }
}

fn render_status(f: &mut Frame, area: Rect, app: &App) {
    let view = match app.strategy {
        Strategy::Positional => "Split",
        Strategy::Sequential => "Unified",
    };
    let stats = &app.stats;

    let mut spans = vec![
        Span::styled(
            format!("{view} "),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("[{}]  ", app.language())),
        Span::styled(format!("+{} ", stats.added), Style::default().fg(Color::Green)),
        Span::styled(format!("-{} ", stats.removed), Style::default().fg(Color::Red)),
        Span::styled(
            format!("~{} ", stats.modified),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(
            format!("={}", stats.unchanged),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    if let Some(status) = &app.status {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            status.as_str(),
            Style::default().add_modifier(Modifier::ITALIC),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("linediff"));

    f.render_widget(paragraph, area);
}
