mod dashboard;
mod help;
mod onboarding;
mod status_bar;
mod utils;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

use crate::app::{App, AppView};
use crate::theme::ThemeColors;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn render(frame: &mut Frame, app: &App) {
    let theme = ThemeColors::DEFAULT;
    let area = frame.area();

    frame.render_widget(Block::default().style(Style::default().bg(theme.bg)), area);

    let outer_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(10),
            Constraint::Length(1),
        ])
        .split(area);

    status_bar::render_title_bar(frame, outer_chunks[0], app, &theme);
    status_bar::render_status_bar(frame, outer_chunks[2], app, &theme);

    match app.view {
        AppView::Onboarding => onboarding::render(frame, outer_chunks[1], app, &theme),
        AppView::Dashboard => dashboard::render(frame, outer_chunks[1], app, &theme),
        AppView::Help => {
            dashboard::render(frame, outer_chunks[1], app, &theme);
            help::render_help(frame, app, &theme);
        }
    }
}
