use drainwatch_model::{format, DrainReport, TopAppEntry};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::theme::ThemeColors;

use super::utils::{color_for_health, color_for_percent, color_for_remaining};

const HERO_HEIGHT: u16 = 8;
const STATS_HEIGHT: u16 = 4;

pub fn render(frame: &mut Frame, area: Rect, app: &App, theme: &ThemeColors) {
    let banner_height = if app.usage_access { 0 } else { 3 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(banner_height),
            Constraint::Length(HERO_HEIGHT),
            Constraint::Length(STATS_HEIGHT),
            Constraint::Min(6),
        ])
        .split(area);

    let greeting = Paragraph::new(Line::from(Span::styled(
        format::greeting(&app.profile.name),
        theme.fg_style().add_modifier(Modifier::BOLD),
    )))
    .block(Block::default().padding(Padding::new(1, 1, 1, 0)));
    frame.render_widget(greeting, chunks[0]);

    if banner_height > 0 {
        render_access_banner(frame, chunks[1], app, theme);
    }

    let Some(report) = &app.report else {
        let empty = Paragraph::new(Span::styled("Press r to load usage data", theme.muted_style()))
            .alignment(Alignment::Center);
        frame.render_widget(empty, chunks[2]);
        return;
    };

    render_hero(frame, chunks[2], report, theme);
    render_stats(frame, chunks[3], report, theme);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(2, 5), Constraint::Ratio(3, 5)])
        .split(chunks[4]);

    render_hardware(frame, bottom[0], report, theme);
    render_top_apps(frame, bottom[1], &report.top_apps, theme);
}

fn card(title: &str, theme: &ThemeColors) -> Block<'static> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(theme.bg))
}

fn render_access_banner(frame: &mut Frame, area: Rect, app: &App, theme: &ThemeColors) {
    let banner = Paragraph::new(Span::styled(app.grant_instructions(), theme.fg_style()))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Usage access required ")
                .borders(Borders::ALL)
                .border_style(theme.danger_style())
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(banner, area);
}

fn render_hero(frame: &mut Frame, area: Rect, report: &DrainReport, theme: &ThemeColors) {
    let block = card("Battery", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 4 {
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let percent = report.battery.percentage * 100.0;
    let gauge = Gauge::default()
        .gauge_style(
            Style::default()
                .fg(color_for_percent(percent, 50.0, 20.0, theme))
                .bg(theme.border),
        )
        .ratio(f64::from(report.battery.percentage).clamp(0.0, 1.0))
        .label(format::battery_percent(report.battery.percentage))
        .use_unicode(true);
    frame.render_widget(gauge, rows[0]);

    let remaining = report.estimate.remaining();
    let status = if report.battery.is_charging {
        format!("{} · {}", report.battery.status, format::CHARGING_LABEL)
    } else {
        report.battery.status.to_string()
    };

    frame.render_widget(
        Paragraph::new(Span::styled(status, theme.muted_style())).alignment(Alignment::Right),
        rows[1],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(report.estimate.hero_label(), theme.muted_style()))
            .alignment(Alignment::Center),
        rows[2],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            remaining.label(),
            Style::default()
                .fg(color_for_remaining(remaining, theme))
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        rows[3],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            report.estimate.drain_label(),
            theme.accent_secondary_style(),
        ))
        .alignment(Alignment::Center),
        rows[4],
    );
}

fn render_stats(frame: &mut Frame, area: Rect, report: &DrainReport, theme: &ThemeColors) {
    let usage = &report.usage;
    let stats = [
        ("App Usage", format::app_usage(usage.app_usage_minutes)),
        ("Screen Time", format::screen_time(usage.screen_time_hours)),
        ("Apps", format::installed_apps(usage.installed_app_count)),
        ("Data Usage", format::data_usage(usage.data_usage_mb)),
    ];

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for ((title, value), column) in stats.into_iter().zip(columns.iter()) {
        let stat = Paragraph::new(Span::styled(
            value,
            theme.highlight_style().add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .block(card(title, theme));
        frame.render_widget(stat, *column);
    }
}

fn render_hardware(frame: &mut Frame, area: Rect, report: &DrainReport, theme: &ThemeColors) {
    let battery = &report.battery;
    let row = |label: &'static str, value: String, color: Color| {
        Line::from(vec![
            Span::styled(format!("{:<13}", label), theme.muted_style()),
            Span::styled(value, Style::default().fg(color)),
        ])
    };

    let lines = vec![
        row("Temperature", format::temperature(battery), theme.fg),
        row("Voltage", format::voltage(battery), theme.fg),
        row(
            "Health",
            battery.health.label().to_string(),
            color_for_health(battery.health, theme),
        ),
        row("Status", battery.status.label().to_string(), theme.fg),
    ];

    let hardware = Paragraph::new(lines).block(card("Battery Details", theme));
    frame.render_widget(hardware, area);
}

fn render_top_apps(frame: &mut Frame, area: Rect, apps: &[TopAppEntry], theme: &ThemeColors) {
    let block = card("Top Apps (24h)", theme);

    if apps.is_empty() {
        let empty = Paragraph::new(Span::styled("No app usage recorded", theme.muted_style()))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let width = block.inner(area).width as usize;
    let lines: Vec<Line> = apps
        .iter()
        .enumerate()
        .map(|(i, app)| {
            let time = format::app_time(app.foreground_minutes);
            let prefix = format!("{}. ", i + 1);
            let name_width = width.saturating_sub(prefix.len() + time.chars().count() + 1);
            let name: String = app.display_name.chars().take(name_width).collect();
            let padding = name_width.saturating_sub(name.chars().count()) + 1;
            Line::from(vec![
                Span::styled(prefix, theme.muted_style()),
                Span::styled(name, theme.fg_style()),
                Span::raw(" ".repeat(padding)),
                Span::styled(time, theme.accent_style()),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
