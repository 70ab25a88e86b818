//! Dashboard panel: headline stats and upcoming events

use crate::directory::DirectoryState;
use crate::icons::Icon;
use crate::theme::Theme;
use chrono::{Datelike, Local};
use ratatui::{prelude::*, widgets::*};
use shared::models::{CompanyEvent, EmployeeStatus};

pub fn render(
    f: &mut Frame,
    area: Rect,
    directory: &DirectoryState,
    events: &[CompanyEvent],
    pending_invites: usize,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Stat cards
            Constraint::Min(1),    // Events
        ])
        .split(area);

    render_stats(f, chunks[0], directory, pending_invites, theme);
    render_events(f, chunks[1], events, theme);
}

fn render_stats(
    f: &mut Frame,
    area: Rect,
    directory: &DirectoryState,
    pending_invites: usize,
    theme: &Theme,
) {
    let now = Local::now().date_naive();
    let stats: [(&str, String, Icon); 4] = [
        (
            "Total Employees",
            directory.len().to_string(),
            Icon::resolve("users"),
        ),
        (
            "On Leave Today",
            directory.count_by_status(EmployeeStatus::OnLeave).to_string(),
            Icon::resolve("calendar"),
        ),
        (
            "This Month Joiners",
            directory.joined_in_month(now.year(), now.month()).to_string(),
            Icon::resolve("user-plus"),
        ),
        (
            "Pending Invites",
            pending_invites.to_string(),
            Icon::resolve("clipboard-check"),
        ),
    ];

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25); 4])
        .split(area);

    for (slot, (title, value, icon)) in cards.iter().zip(stats) {
        let card = Paragraph::new(vec![
            Line::from(vec![
                Span::raw(format!("{} ", icon.glyph())),
                Span::styled(title, theme.hint()),
            ]),
            Line::from(Span::styled(
                value,
                theme.body().add_modifier(Modifier::BOLD),
            )),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.panel_border)),
        );
        f.render_widget(card, *slot);
    }
}

fn render_events(f: &mut Frame, area: Rect, events: &[CompanyEvent], theme: &Theme) {
    let items: Vec<ListItem> = if events.is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            "No upcoming events",
            theme.hint(),
        )))]
    } else {
        events
            .iter()
            .map(|event| {
                let icon = Icon::resolve(event.kind.icon_name());
                ListItem::new(vec![
                    Line::from(vec![
                        Span::raw(format!("{} ", icon.glyph())),
                        Span::styled(event.title.clone(), theme.body()),
                    ]),
                    Line::from(Span::styled(format!("   {}", event.date), theme.hint())),
                ])
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Upcoming Events ")
            .title_style(theme.title())
            .border_style(Style::default().fg(theme.panel_border)),
    );
    f.render_widget(list, area);
}
