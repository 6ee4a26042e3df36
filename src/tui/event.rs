//! Event handling for the TUI.

use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{App, Mode, View, PAGE_SIZE};

/// Everything that can change the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// A file row was chosen; carries its path relative to the root.
    NodeSelected(PathBuf),
    /// Switch between the tree view and the preview view.
    ToggleView,
    MoveSelection(isize),
    SelectFirst,
    SelectLast,
    Expand,
    Collapse,
    ToggleNode,
    ScrollPreview(isize),
    ShowHelp,
    CloseHelp,
    Quit,
}

/// Poll for and handle events with a timeout.
///
/// Returns `Ok(true)` if an event was handled, `Ok(false)` if timeout expired.
pub fn handle_events(app: &mut App, timeout: Duration) -> std::io::Result<bool> {
    if event::poll(timeout)? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key_event(app, key);
                return Ok(true);
            }
        }
    }
    Ok(false)
}

/// Handle a single key event.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if let Some(event) = key_to_event(app, key) {
        app.dispatch(event);
    }
}

/// Translate a key press into an event for the current view and mode.
pub fn key_to_event(app: &App, key: KeyEvent) -> Option<AppEvent> {
    // Global keys (work in any mode)
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(AppEvent::Quit),
            KeyCode::Char('p') | KeyCode::Char('w') => Some(AppEvent::ToggleView),
            _ => None,
        };
    }

    match (app.mode, app.view) {
        (Mode::Help, _) => help_mode_event(key),
        (Mode::Normal, View::Tree) => tree_view_event(app, key),
        (Mode::Normal, View::Preview) => preview_view_event(key),
    }
}

fn tree_view_event(app: &App, key: KeyEvent) -> Option<AppEvent> {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Esc => Some(AppEvent::Quit),

        // Navigation
        KeyCode::Up | KeyCode::Char('k') => Some(AppEvent::MoveSelection(-1)),
        KeyCode::Down | KeyCode::Char('j') => Some(AppEvent::MoveSelection(1)),
        KeyCode::Home | KeyCode::Char('g') => Some(AppEvent::SelectFirst),
        KeyCode::End | KeyCode::Char('G') => Some(AppEvent::SelectLast),
        KeyCode::PageUp => Some(AppEvent::MoveSelection(-PAGE_SIZE)),
        KeyCode::PageDown => Some(AppEvent::MoveSelection(PAGE_SIZE)),

        // Expand/Collapse
        KeyCode::Right | KeyCode::Char('l') => Some(AppEvent::Expand),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Backspace => Some(AppEvent::Collapse),
        KeyCode::Char(' ') => Some(AppEvent::ToggleNode),

        // Open a file, or fold a directory
        KeyCode::Enter => match app.selected_row() {
            Some(row) => match &row.reference {
                Some(path) => Some(AppEvent::NodeSelected(path.clone())),
                None => Some(AppEvent::ToggleNode),
            },
            None => None,
        },

        KeyCode::Char('?') => Some(AppEvent::ShowHelp),

        _ => None,
    }
}

fn preview_view_event(key: KeyEvent) -> Option<AppEvent> {
    match key.code {
        KeyCode::Char('q') => Some(AppEvent::Quit),
        KeyCode::Esc => Some(AppEvent::ToggleView),

        KeyCode::Up | KeyCode::Char('k') => Some(AppEvent::ScrollPreview(-1)),
        KeyCode::Down | KeyCode::Char('j') => Some(AppEvent::ScrollPreview(1)),
        KeyCode::PageUp => Some(AppEvent::ScrollPreview(-PAGE_SIZE)),
        KeyCode::PageDown | KeyCode::Char(' ') => Some(AppEvent::ScrollPreview(PAGE_SIZE)),
        KeyCode::Home | KeyCode::Char('g') => Some(AppEvent::ScrollPreview(isize::MIN)),
        KeyCode::End | KeyCode::Char('G') => Some(AppEvent::ScrollPreview(isize::MAX)),

        KeyCode::Char('?') => Some(AppEvent::ShowHelp),

        _ => None,
    }
}

fn help_mode_event(key: KeyEvent) -> Option<AppEvent> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Enter => {
            Some(AppEvent::CloseHelp)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::build;
    use std::collections::HashSet;

    fn test_app() -> App {
        let tree = build(["docs/a.md", "b.md"], &HashSet::new());
        App::new(PathBuf::from("/notes"), tree)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_quit_on_q() {
        let mut app = test_app();
        handle_key_event(&mut app, press(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_quit_on_esc_in_tree_view() {
        let mut app = test_app();
        handle_key_event(&mut app, press(KeyCode::Esc));
        assert!(app.should_quit);
    }

    #[test]
    fn test_esc_in_preview_returns_to_tree() {
        let mut app = test_app();
        app.view = View::Preview;
        handle_key_event(&mut app, press(KeyCode::Esc));
        assert_eq!(app.view, View::Tree);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_ctrl_p_and_ctrl_w_toggle_view() {
        let mut app = test_app();
        handle_key_event(&mut app, ctrl('p'));
        assert_eq!(app.view, View::Preview);
        handle_key_event(&mut app, ctrl('w'));
        assert_eq!(app.view, View::Tree);
    }

    #[test]
    fn test_ctrl_c_works_in_any_mode() {
        let mut app = test_app();
        handle_key_event(&mut app, ctrl('c'));
        assert!(app.should_quit);

        let mut app = test_app();
        app.view = View::Preview;
        handle_key_event(&mut app, ctrl('c'));
        assert!(app.should_quit);

        let mut app = test_app();
        app.mode = Mode::Help;
        handle_key_event(&mut app, ctrl('c'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_enter_on_file_selects_node() {
        let mut app = test_app();
        app.selected = 2; // docs/a.md
        assert_eq!(
            key_to_event(&app, press(KeyCode::Enter)),
            Some(AppEvent::NodeSelected(PathBuf::from("docs/a.md")))
        );
    }

    #[test]
    fn test_enter_on_directory_toggles() {
        let app = test_app();
        assert_eq!(
            key_to_event(&app, press(KeyCode::Enter)),
            Some(AppEvent::ToggleNode)
        );
    }

    #[test]
    fn test_arrow_keys_scroll_in_preview() {
        let app = App {
            view: View::Preview,
            ..test_app()
        };
        assert_eq!(
            key_to_event(&app, press(KeyCode::Down)),
            Some(AppEvent::ScrollPreview(1))
        );
        assert_eq!(
            key_to_event(&app, press(KeyCode::Char('k'))),
            Some(AppEvent::ScrollPreview(-1))
        );
    }

    #[test]
    fn test_enter_help_mode() {
        let mut app = test_app();
        handle_key_event(&mut app, press(KeyCode::Char('?')));
        assert_eq!(app.mode, Mode::Help);
    }

    #[test]
    fn test_exit_help_mode() {
        let mut app = test_app();
        app.mode = Mode::Help;
        handle_key_event(&mut app, press(KeyCode::Esc));
        assert_eq!(app.mode, Mode::Normal);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_help_mode_swallows_navigation() {
        let mut app = test_app();
        app.mode = Mode::Help;
        handle_key_event(&mut app, press(KeyCode::Down));
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let app = test_app();
        assert_eq!(key_to_event(&app, press(KeyCode::Char('z'))), None);
        assert_eq!(key_to_event(&app, ctrl('x')), None);
    }
}
