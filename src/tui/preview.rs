//! Conversion from styler output to ratatui text.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::markdown::{self, SpanStyle, StyledLine};

pub fn to_line(line: &StyledLine) -> Line<'static> {
    let spans: Vec<Span<'static>> = line
        .spans
        .iter()
        .map(|span| Span::styled(span.text.clone(), to_style(&span.style)))
        .collect();
    Line::from(spans)
}

pub fn to_lines(lines: &[StyledLine]) -> Vec<Line<'static>> {
    lines.iter().map(to_line).collect()
}

pub fn to_style(style: &SpanStyle) -> Style {
    let mut out = Style::default();

    if let Some(color) = style.fg {
        out = out.fg(to_color(color));
    }

    let mut modifiers = Modifier::empty();
    if style.bold {
        modifiers |= Modifier::BOLD;
    }
    if style.underline {
        modifiers |= Modifier::UNDERLINED;
    }
    if style.italic {
        modifiers |= Modifier::ITALIC;
    }
    if style.dim {
        modifiers |= Modifier::DIM;
    }

    out.add_modifier(modifiers)
}

fn to_color(color: markdown::Color) -> Color {
    match color {
        markdown::Color::Yellow => Color::Yellow,
        markdown::Color::Blue => Color::Blue,
        markdown::Color::Red => Color::Red,
        markdown::Color::Green => Color::Green,
        markdown::Color::Rgb(r, g, b) => Color::Rgb(r, g, b),
    }
}
