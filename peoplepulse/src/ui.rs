//! Top-level frame composition

use crate::app::App;
use crate::directory;
use crate::notify::ToastKind;
use crate::shell::{self, Module};
use ratatui::{prelude::*, widgets::*};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};

pub fn ui(f: &mut Frame, app: &App) {
    if app.auth.current_user().is_none() {
        app.landing.render(f, f.area(), &app.theme);
        render_toasts(f, app);
        return;
    }

    let log_height = if app.show_log { 10 } else { 0 };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(log_height),
        ])
        .split(f.area());

    render_header(f, rows[0], app);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(1)])
        .split(rows[1]);

    shell::render_sidebar(f, body[0], app.active, app.auth.current_user(), &app.theme);

    match app.active {
        Module::Dashboard => shell::dashboard::render(
            f,
            body[1],
            &app.directory,
            &app.events,
            app.pending_invites,
            &app.theme,
        ),
        Module::Employees => directory::view::render(f, body[1], &app.directory, &app.theme),
        other => render_placeholder(f, body[1], other, app),
    }

    if app.show_log {
        render_log(f, rows[2], app);
    }
    render_toasts(f, app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let hints = if app.search_active {
        "type to search · Enter/Esc done".to_string()
    } else {
        format!(
            "{} · Tab modules · t theme · l log · x sign out · q quit",
            app.active.name()
        )
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled("PeoplePulse", app.theme.title()),
        Span::raw("  "),
        Span::styled(hints, app.theme.hint()),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.panel_border)),
    );
    f.render_widget(header, area);
}

fn render_placeholder(f: &mut Frame, area: Rect, module: Module, app: &App) {
    let body = Paragraph::new(vec![
        Line::raw(""),
        Line::from(Span::styled(
            format!("{}  {}", module.icon().glyph(), module.name()),
            app.theme.title(),
        )),
        Line::raw(""),
        Line::from(Span::styled(module.unavailable_message(), app.theme.hint())),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.panel_border)),
    );
    f.render_widget(body, area);
}

fn render_log(f: &mut Frame, area: Rect, app: &App) {
    let widget = TuiLoggerWidget::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Log ")
                .border_style(Style::default().fg(app.theme.panel_border)),
        )
        .output_separator(' ')
        .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
        .style(app.theme.body())
        .state(&app.logger_state);
    f.render_widget(widget, area);
}

/// Newest toasts stack down from the top-right corner
fn render_toasts(f: &mut Frame, app: &App) {
    let area = f.area();
    for (i, toast) in app.toasts.iter().enumerate() {
        let width = (toast.message.len() as u16 + 4).min(area.width.saturating_sub(2)).max(10);
        let x = area.right().saturating_sub(width + 1);
        let y = area.top() + 1 + i as u16 * 3;
        if y + 3 > area.bottom() {
            break;
        }
        let rect = Rect::new(x, y, width, 3);

        let color = match toast.kind {
            ToastKind::Success => app.theme.success,
            ToastKind::Error => app.theme.error,
            ToastKind::Info => app.theme.info,
        };
        let widget = Paragraph::new(toast.message.as_str())
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            );
        f.render_widget(Clear, rect);
        f.render_widget(widget, rect);
    }
}
