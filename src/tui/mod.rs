//! TUI module for browsing and previewing Markdown files.

pub mod app;
pub mod event;
pub mod preview;
pub mod ui;

use std::io;
use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

pub use app::App;
pub use event::AppEvent;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Raw mode and the alternate screen, restored on drop.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Run the event loop until the user quits.
pub fn run(mut app: App) -> io::Result<()> {
    let _guard = TerminalGuard::enter()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    while !app.should_quit {
        terminal.draw(|frame| ui::render(&mut app, frame))?;
        event::handle_events(&mut app, POLL_INTERVAL)?;
    }

    terminal.show_cursor()?;
    Ok(())
}
