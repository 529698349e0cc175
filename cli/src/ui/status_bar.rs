use std::sync::OnceLock;

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use sysinfo::System;

use crate::app::{App, AppView};
use crate::input::keys;
use crate::theme::ThemeColors;

static SYSTEM_LABEL: OnceLock<String> = OnceLock::new();

fn system_label() -> &'static str {
    SYSTEM_LABEL.get_or_init(|| {
        let host = System::host_name().unwrap_or_else(|| "localhost".to_string());
        let os = System::long_os_version().unwrap_or_else(|| "Unknown OS".to_string());
        format!("{} · {}", host, os)
    })
}

pub fn render_title_bar(frame: &mut Frame, area: Rect, app: &App, theme: &ThemeColors) {
    let version = super::VERSION;

    let left_spans = vec![
        Span::styled("⚡drainwatch ", Style::default().fg(theme.accent)),
        Span::styled(format!("v{}", version), Style::default().fg(theme.muted)),
    ];

    let right_text = match app.last_refresh {
        Some(at) => format!("{} · updated {} ", system_label(), at.format("%H:%M:%S")),
        None => format!("{} ", system_label()),
    };

    let left_width: usize = left_spans.iter().map(|s| s.width()).sum();
    let right_width = right_text.chars().count();
    let padding = (area.width as usize).saturating_sub(left_width + right_width);

    let mut spans = left_spans;
    spans.push(Span::raw(" ".repeat(padding)));
    spans.push(Span::styled(right_text, Style::default().fg(theme.muted)));

    let bar = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.bg));
    frame.render_widget(bar, area);
}

fn hints(view: AppView) -> Vec<(&'static str, &'static str)> {
    match view {
        AppView::Onboarding => vec![
            (keys::NEXT_FIELD, "next"),
            (keys::PREV_FIELD, "previous"),
            (keys::ACTIVATE, "select"),
            (keys::ESC, "quit"),
        ],
        AppView::Dashboard => vec![
            (keys::REFRESH, "refresh"),
            (keys::HELP, "help"),
            (keys::QUIT, "quit"),
        ],
        AppView::Help => vec![(keys::ESC, "close")],
    }
}

pub fn render_status_bar(frame: &mut Frame, area: Rect, app: &App, theme: &ThemeColors) {
    let mut left_spans: Vec<Span> = vec![Span::raw(" ")];
    for (i, (key, desc)) in hints(app.view).iter().enumerate() {
        if i > 0 {
            left_spans.push(Span::styled(" │ ", Style::default().fg(theme.border)));
        }
        left_spans.push(Span::styled(*key, Style::default().fg(theme.accent)));
        left_spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(theme.muted),
        ));
    }

    let (access_label, access_color) = if app.usage_access {
        ("granted", theme.success)
    } else {
        ("missing", theme.danger)
    };

    let right_spans: Vec<Span> = vec![
        Span::styled("usage access: ", Style::default().fg(theme.muted)),
        Span::styled(access_label, Style::default().fg(access_color)),
        Span::raw(" "),
    ];

    let left_width: usize = left_spans.iter().map(|s| s.width()).sum();
    let right_width: usize = right_spans.iter().map(|s| s.width()).sum();
    let padding = (area.width as usize).saturating_sub(left_width + right_width);

    left_spans.push(Span::raw(" ".repeat(padding)));
    left_spans.extend(right_spans);

    let line = Line::from(left_spans);
    let bar = Paragraph::new(line)
        .style(Style::default().bg(theme.bg))
        .alignment(Alignment::Left);

    frame.render_widget(bar, area);
}
