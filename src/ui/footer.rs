use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

const SHORTCUTS: &[(&str, &str)] = &[
    ("q", "Quit"),
    ("j/k", "Scroll"),
    ("d/u", "Page"),
    ("g/G", "Top/Bottom"),
    ("←/→/h/l", "H-Scroll"),
    ("s", "Split/Unified"),
    ("w", "Swap"),
    ("c", "Copy"),
    ("e", "Export"),
    ("?", "Hide Help"),
];

const SEPARATOR: &str = "  ";

/// Rows the footer needs at `width`, borders included, so that wrapped
/// shortcuts are never clipped.
pub fn footer_height(width: u16) -> u16 {
    let inner = usize::from(width.saturating_sub(2)).max(1);
    let mut rows = 1;
    let mut used = 0;

    for (key, label) in SHORTCUTS {
        let item = key.chars().count() + 1 + label.chars().count();
        if used > 0 && used + item > inner {
            rows += 1;
            used = 0;
        }
        used += item + SEPARATOR.len();
    }

    rows + 2
}

pub fn render_footer(f: &mut Frame, area: Rect) {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let spans: Vec<Span> = SHORTCUTS
        .iter()
        .flat_map(|(key, label)| {
            [
                Span::styled(*key, key_style),
                Span::raw(format!(":{label}{SEPARATOR}")),
            ]
        })
        .collect();

    let footer = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Shortcuts"))
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: false });

    f.render_widget(footer, area);
}
