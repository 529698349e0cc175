//! TUI (Terminal User Interface) runtime loop.
//!
//! Terminal setup, the event loop and teardown.

use std::io;
use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::{
    event::{self, DisableFocusChange, EnableFocusChange, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing::debug;

use crate::config::{preferences_path, UserConfig};
use crate::data::{Preferences, StatsCollector};
use crate::input;
use crate::ui;

use super::App;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Sets up the terminal for TUI mode.
///
/// Enables raw mode, focus reporting and the alternate screen buffer.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableFocusChange)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restores the terminal to its original state.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableFocusChange, LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Entry point for running the TUI application.
pub fn run_tui(user_config: UserConfig) -> Result<()> {
    let preferences = Preferences::load(preferences_path())?;
    let collector = StatsCollector::new(&user_config);
    let mut app = App::new(user_config, preferences, collector);

    let mut terminal = setup_terminal()?;
    let result = run_tui_loop(&mut terminal, &mut app);
    restore_terminal(&mut terminal)?;
    result
}

/// Redraws only after input, focus or resize events. Data is refreshed on
/// demand, never on a timer.
fn run_tui_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut needs_redraw = true;

    loop {
        if needs_redraw {
            terminal.draw(|frame| ui::render(frame, app))?;
            needs_redraw = false;
        }

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let action = input::handle_key(app, key);
                if !app.handle_action(action) {
                    break;
                }
                needs_redraw = true;
            }
            Event::FocusGained => {
                debug!("Terminal focus regained, refreshing");
                app.on_focus_gained();
                needs_redraw = true;
            }
            Event::Resize(_, _) => {
                needs_redraw = true;
            }
            _ => {}
        }
    }

    Ok(())
}
