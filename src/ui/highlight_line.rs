use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};
use syntect::easy::HighlightLines;
use syntect::highlighting::{FontStyle, Style as SyntectStyle, Theme};
use syntect::parsing::{SyntaxReference, SyntaxSet};

/// Syntax-highlights a single line. Falls back to raw text when no syntax is
/// known or highlighting fails.
pub fn highlight_line_content<'a>(
    content: &'a str,
    syntax: Option<&SyntaxReference>,
    syntax_set: &SyntaxSet,
    theme: &Theme,
) -> Vec<Span<'a>> {
    let Some(syntax) = syntax else {
        return vec![Span::raw(content)];
    };

    let mut highlighter = HighlightLines::new(syntax, theme);
    match highlighter.highlight_line(content, syntax_set) {
        Ok(ranges) => ranges
            .into_iter()
            .map(|(style, text)| Span::styled(text, syntect_style_to_ratatui(style)))
            .collect(),
        Err(_) => vec![Span::raw(content)],
    }
}

/// Paints every span with the same background.
pub fn with_background(spans: Vec<Span<'_>>, bg: Color) -> Vec<Span<'_>> {
    spans
        .into_iter()
        .map(|span| {
            let style = span.style.bg(bg);
            Span::styled(span.content, style)
        })
        .collect()
}

fn syntect_style_to_ratatui(syntect_style: SyntectStyle) -> Style {
    let fg_color = Color::Rgb(
        syntect_style.foreground.r,
        syntect_style.foreground.g,
        syntect_style.foreground.b,
    );

    let mut style = Style::default().fg(fg_color);
    let font_style = syntect_style.font_style;

    if font_style.contains(FontStyle::BOLD) {
        style = style.add_modifier(Modifier::BOLD);
    }
    if font_style.contains(FontStyle::ITALIC) {
        style = style.add_modifier(Modifier::ITALIC);
    }
    if font_style.contains(FontStyle::UNDERLINE) {
        style = style.add_modifier(Modifier::UNDERLINED);
    }

    style
}
