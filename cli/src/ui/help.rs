use drainwatch_platform::USAGE_WINDOW_HOURS;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::config::config_path;
use crate::input::KEY_BINDINGS;
use crate::theme::ThemeColors;
use crate::ui::VERSION;

use super::utils::centered_rect;

pub fn render_help(frame: &mut Frame, app: &App, theme: &ThemeColors) {
    let content_height = KEY_BINDINGS.len() as u16 + 16;
    let content_width = 62;
    let area = centered_rect(frame.area(), content_width, content_height);

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent))
        .style(Style::default().bg(theme.dialog_bg));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(KEY_BINDINGS.len() as u16 + 1),
            Constraint::Min(1),
        ])
        .margin(1)
        .split(inner);

    let title = Paragraph::new(vec![Line::from(vec![
        Span::styled(
            "drainwatch - Battery Drain Predictor",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  v{}", VERSION), theme.muted_style()),
    ])])
    .centered();
    frame.render_widget(title, chunks[0]);

    let lines: Vec<Line> = KEY_BINDINGS
        .iter()
        .map(|binding| {
            Line::from(vec![
                Span::styled(
                    format!("{:15}", binding.key),
                    Style::default()
                        .fg(theme.highlight)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(binding.description, Style::default().fg(theme.fg)),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), chunks[1]);

    let settings = app.config.estimator_settings();
    let about = vec![
        Line::from(Span::styled(
            "How the estimate works",
            theme.accent_style().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "Daily drain comes from a linear model over the last {}h of app usage, \
                 screen time, installed apps and data usage, plus your age and gender. \
                 Remaining time assumes a {:.0} mAh battery; estimates of {:.0}h or more \
                 are shown as --h --m.",
                USAGE_WINDOW_HOURS,
                settings.capacity_mah,
                settings.display_clamp_hours
            ),
            theme.fg_style(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Config: ", theme.muted_style()),
            Span::styled(config_path().display().to_string(), theme.fg_style()),
        ]),
    ];
    frame.render_widget(Paragraph::new(about).wrap(Wrap { trim: true }), chunks[2]);
}
