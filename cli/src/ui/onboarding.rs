use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, FormField};
use crate::theme::ThemeColors;

use super::utils::centered_rect;

const PANEL_WIDTH: u16 = 64;
const PANEL_HEIGHT: u16 = 24;

pub fn render(frame: &mut Frame, area: Rect, app: &App, theme: &ThemeColors) {
    let panel = centered_rect(area, PANEL_WIDTH, PANEL_HEIGHT);

    let block = Block::default()
        .title(" Welcome ")
        .borders(Borders::ALL)
        .border_style(theme.accent_style())
        .padding(Padding::horizontal(2))
        .style(Style::default().bg(theme.dialog_bg));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "Battery Drain Predictor",
            theme.accent_style().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Tell us a little about yourself to personalize the estimate",
            theme.muted_style(),
        )),
    ])
    .centered();
    frame.render_widget(header, chunks[0]);

    let focus = app.form.focus;
    render_text_field(frame, chunks[1], "Name", &app.form.name, focus == FormField::Name, theme);
    render_text_field(frame, chunks[2], "Age", &app.form.age, focus == FormField::Age, theme);
    render_gender(frame, chunks[3], app.form.is_male, focus == FormField::Gender, theme);
    render_permission_card(frame, chunks[4], app, focus == FormField::Permission, theme);
    render_submit(frame, chunks[5], app, focus == FormField::Submit, theme);

    if let Some(message) = &app.status_message {
        let status = Paragraph::new(Span::styled(message.as_str(), theme.warning_style())).centered();
        frame.render_widget(status, chunks[6]);
    }
}

fn field_block(title: &str, focused: bool, theme: &ThemeColors) -> Block<'static> {
    let border = if focused {
        theme.accent_style()
    } else {
        theme.border_style()
    };
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(border)
        .padding(Padding::horizontal(1))
}

fn render_text_field(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    focused: bool,
    theme: &ThemeColors,
) {
    let mut spans = vec![Span::styled(value.to_string(), theme.fg_style())];
    if focused {
        spans.push(Span::styled("▏", theme.accent_style()));
    }
    let field = Paragraph::new(Line::from(spans)).block(field_block(title, focused, theme));
    frame.render_widget(field, area);
}

fn render_gender(frame: &mut Frame, area: Rect, is_male: bool, focused: bool, theme: &ThemeColors) {
    let option = |label: &'static str, selected: bool| {
        let marker = if selected { "(●) " } else { "( ) " };
        let style = if selected {
            theme.highlight_style()
        } else {
            theme.muted_style()
        };
        Span::styled(format!("{}{}", marker, label), style)
    };

    let line = Line::from(vec![
        option("Male", is_male),
        Span::raw("    "),
        option("Female", !is_male),
    ]);
    let field = Paragraph::new(line).block(field_block("Gender", focused, theme));
    frame.render_widget(field, area);
}

fn render_permission_card(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    focused: bool,
    theme: &ThemeColors,
) {
    let lines = if app.usage_access {
        vec![Line::from(vec![
            Span::styled("✓ ", theme.fg_style().fg(theme.success)),
            Span::styled("Usage access granted", theme.fg_style()),
        ])]
    } else {
        vec![
            Line::from(vec![
                Span::styled("✗ ", theme.danger_style()),
                Span::styled(
                    "Usage access required",
                    theme.fg_style().add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(app.grant_instructions(), theme.muted_style())),
            Line::from(Span::styled(
                "Press Enter here to check again.",
                theme.accent_secondary_style(),
            )),
        ]
    };

    let card = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(field_block("Permission", focused, theme));
    frame.render_widget(card, area);
}

fn render_submit(frame: &mut Frame, area: Rect, app: &App, focused: bool, theme: &ThemeColors) {
    let style = match (app.can_submit(), focused) {
        (true, true) => theme.selected_style().add_modifier(Modifier::BOLD),
        (true, false) => theme.accent_style().add_modifier(Modifier::BOLD),
        (false, true) => theme.muted_style().add_modifier(Modifier::REVERSED),
        (false, false) => theme.muted_style(),
    };
    let button = Paragraph::new(Span::styled("[ Get Started ]", style)).centered();
    frame.render_widget(button, area);
}
