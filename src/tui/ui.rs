//! UI rendering for the TUI.

use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::app::{App, Mode, View, VisibleRow};
use super::preview::to_lines;

/// Render the entire UI.
///
/// Takes the app mutably so the preview can record the wrapped size of its
/// text for scroll bounds.
pub fn render(app: &mut App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    render_header(app, frame, chunks[0]);

    match app.view {
        View::Tree => render_tree_area(app, frame, chunks[1], true),
        View::Preview => {
            let panes = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Ratio(1, 3), Constraint::Ratio(2, 3)])
                .split(chunks[1]);
            render_tree_area(app, frame, panes[0], false);
            render_preview(app, frame, panes[1]);
        }
    }

    render_footer(app, frame, chunks[2]);

    if app.mode == Mode::Help {
        render_help_overlay(frame);
    }
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let header_text = format!(
        " {}  │  {} files",
        app.root.display(),
        app.file_count()
    );

    let block = Block::default()
        .title(" mdbrowse ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(header_text)
        .block(block)
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, area);
}

fn render_tree_area(app: &App, frame: &mut Frame, area: Rect, focused: bool) {
    let border_color = if focused { Color::Cyan } else { Color::Gray };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if !app.tree.has_children() {
        let paragraph = Paragraph::new("No markdown files found")
            .block(block)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));

        frame.render_widget(paragraph, area);
        return;
    }

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let visible_height = inner_area.height as usize;
    let scroll_offset =
        calculate_scroll_offset(app.selected, visible_height, app.visible_rows.len());

    for (i, row) in app
        .visible_rows
        .iter()
        .skip(scroll_offset)
        .take(visible_height)
        .enumerate()
    {
        let y = inner_area.y + i as u16;
        let is_selected = scroll_offset + i == app.selected;

        render_row(frame, row, Rect::new(inner_area.x, y, inner_area.width, 1), is_selected);
    }
}

/// First row to draw so that `selected` stays on screen with a few rows of
/// context below it. Never scrolls past the last full page.
fn calculate_scroll_offset(selected: usize, visible_height: usize, total: usize) -> usize {
    if total <= visible_height {
        return 0;
    }

    let padding = 3.min(visible_height / 4);
    let last_page = total - visible_height;

    (selected + padding + 1)
        .saturating_sub(visible_height)
        .min(last_page)
}

fn render_row(frame: &mut Frame, row: &VisibleRow, area: Rect, is_selected: bool) {
    let indent = "  ".repeat(row.depth);

    let icon = if row.has_children {
        if row.is_expanded {
            "▼ "
        } else {
            "► "
        }
    } else {
        "  "
    };

    // Directories blue, files white
    let name_style = if row.reference.is_some() {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Blue).bold()
    };

    // Truncate on char boundaries
    let name_width = (area.width as usize)
        .saturating_sub(indent.chars().count() + icon.chars().count());
    let label_chars = row.label.chars().count();
    let display_label = if label_chars > name_width && name_width > 1 {
        let truncated: String = row.label.chars().take(name_width - 1).collect();
        format!("{}…", truncated)
    } else {
        row.label.clone()
    };

    let mut line = Line::from(vec![
        Span::styled(format!("{}{}", indent, icon), name_style),
        Span::styled(display_label, name_style),
    ]);

    if is_selected {
        line = line.style(Style::default().bg(Color::DarkGray));
    }

    frame.render_widget(Paragraph::new(line), area);
}

fn render_preview(app: &mut App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);

    let Some(preview) = app.preview.as_mut() else {
        let paragraph = Paragraph::new(Line::styled(
            "No file selected",
            Style::default().fg(Color::DarkGray),
        ))
        .block(block.title(" Preview "));

        frame.render_widget(paragraph, area);
        return;
    };

    let paragraph = Paragraph::new(to_lines(&preview.lines)).wrap(Wrap { trim: false });
    preview.fit_to_viewport(paragraph.line_count(inner.width), inner.height);

    let paragraph = paragraph
        .block(block.title(preview.title.clone()))
        .scroll((preview.scroll, 0));

    frame.render_widget(paragraph, area);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let hints = match (app.mode, app.view) {
        (Mode::Help, _) => "[Esc] Close",
        (Mode::Normal, View::Tree) => {
            "[↑↓] Navigate  [←→] Fold  [Enter] Open  [^P] Preview  [?] Help  [q] Quit"
        }
        (Mode::Normal, View::Preview) => {
            "[↑↓] Scroll  [PgUp/PgDn] Page  [Esc/^P] Tree  [?] Help  [q] Quit"
        }
    };

    // Show status message if present, otherwise hints
    let text = app.status_message.as_deref().unwrap_or(hints);

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn render_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    let help_width = 56u16.min(area.width.saturating_sub(8));
    let help_height = 24u16.min(area.height.saturating_sub(4));
    let help_area = Rect {
        x: (area.width.saturating_sub(help_width)) / 2,
        y: (area.height.saturating_sub(help_height)) / 2,
        width: help_width,
        height: help_height,
    };

    frame.render_widget(Clear, help_area);

    let help_text = r#"
 TREE
 ─────────────────────────────────
 ↑/k ↓/j      Move selection
 →/l          Expand directory
 ←/h/Bksp     Collapse / Go to parent
 Space        Toggle directory
 Enter        Open file in preview
 g / G        Go to top / bottom

 PREVIEW
 ─────────────────────────────────
 ↑/k ↓/j      Scroll
 PgUp/PgDn    Page
 Esc          Back to tree

 ANYWHERE
 ─────────────────────────────────
 Ctrl+P/W     Toggle preview
 ?            Toggle this help
 q / Ctrl+C   Quit
"#;

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, help_area);
}
