//! Directory rendering: table/grid plus modal overlays

use crate::directory::form::{EmployeeForm, Field};
use crate::directory::state::{DirectoryState, Selection, ViewMode};
use crate::theme::Theme;
use ratatui::{prelude::*, widgets::*};
use shared::models::Employee;

pub fn render(f: &mut Frame, area: Rect, state: &DirectoryState, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Filter bar
            Constraint::Min(1),    // Listing
        ])
        .split(area);

    render_filter_bar(f, chunks[0], state, theme);

    match state.view_mode {
        ViewMode::Table => render_table(f, chunks[1], state, theme),
        ViewMode::Grid => render_grid(f, chunks[1], state, theme),
    }

    match &state.selection {
        Selection::Idle => {}
        Selection::Viewing(id) => {
            if let Some(employee) = state.get(*id) {
                render_detail(f, area, employee, theme);
            }
        }
        Selection::Editing(form) => render_form(f, area, form, theme),
        Selection::ConfirmingDelete(id) => {
            if let Some(employee) = state.get(*id) {
                render_confirm(f, area, employee, theme);
            }
        }
    }
}

fn render_filter_bar(f: &mut Frame, area: Rect, state: &DirectoryState, theme: &Theme) {
    let filter = &state.filter;
    let mut spans = vec![
        Span::styled("🔍 ", theme.hint()),
        if filter.search.is_empty() {
            Span::styled("Search employees...", theme.hint())
        } else {
            Span::styled(filter.search.clone(), theme.body())
        },
        Span::raw("  "),
    ];

    let mut criterion = |label: &str, value: Option<String>| {
        spans.push(Span::styled(format!("{}: ", label), theme.hint()));
        spans.push(match value {
            Some(v) => Span::styled(v, theme.body().add_modifier(Modifier::BOLD)),
            None => Span::styled("All", theme.hint()),
        });
        spans.push(Span::raw("  "));
    };
    criterion("Dept", filter.department.map(|d| d.to_string()));
    criterion("Loc", filter.location.map(|l| l.to_string()));
    criterion("Status", filter.status.map(|s| s.to_string()));

    if state.loading {
        spans.push(Span::styled(" Loading... ", theme.title()));
    }

    let mode = match state.view_mode {
        ViewMode::Table => " Table ",
        ViewMode::Grid => " Grid ",
    };
    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Employee Management ")
            .title_style(theme.title())
            .title_bottom(Line::from(mode).right_aligned())
            .border_style(Style::default().fg(theme.panel_border)),
    );
    f.render_widget(bar, area);
}

fn render_table(f: &mut Frame, area: Rect, state: &DirectoryState, theme: &Theme) {
    let rows: Vec<Row> = state
        .list()
        .iter()
        .map(|e| {
            Row::new(vec![
                e.name.clone(),
                e.email.clone(),
                e.department.to_string(),
                e.designation.clone(),
                e.location.to_string(),
                e.status.to_string(),
            ])
        })
        .collect();
    let count = rows.len();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(18),
            Constraint::Percentage(26),
            Constraint::Percentage(14),
            Constraint::Percentage(18),
            Constraint::Percentage(12),
            Constraint::Percentage(12),
        ],
    )
    .header(
        Row::new(vec!["Name", "Email", "Department", "Designation", "Location", "Status"])
            .style(theme.title()),
    )
    .row_highlight_style(theme.highlight())
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Employees ({}) ", count))
            .border_style(Style::default().fg(theme.panel_border)),
    );

    let mut table_state = TableState::default();
    table_state.select((count > 0).then_some(state.cursor.min(count.saturating_sub(1))));
    f.render_stateful_widget(table, area, &mut table_state);
}

fn render_grid(f: &mut Frame, area: Rect, state: &DirectoryState, theme: &Theme) {
    let items: Vec<ListItem> = state
        .list()
        .iter()
        .map(|e| {
            ListItem::new(vec![
                Line::from(Span::styled(e.name.clone(), theme.body().add_modifier(Modifier::BOLD))),
                Line::from(vec![
                    Span::styled(format!("  {} · {}", e.designation, e.department), theme.body()),
                ]),
                Line::from(vec![
                    Span::styled(format!("  {} · {} · {}", e.email, e.location, e.status), theme.hint()),
                ]),
                Line::raw(""),
            ])
        })
        .collect();
    let count = items.len();

    let list = List::new(items)
        .highlight_style(theme.highlight())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Employees ({}) ", count))
                .border_style(Style::default().fg(theme.panel_border)),
        );

    let mut list_state = ListState::default();
    list_state.select((count > 0).then_some(state.cursor.min(count.saturating_sub(1))));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn render_detail(f: &mut Frame, area: Rect, employee: &Employee, theme: &Theme) {
    let popup = centered_rect(area, 60, 14);
    f.render_widget(Clear, popup);

    let mut lines = vec![
        detail_line("Name", &employee.name, theme),
        detail_line("Email", &employee.email, theme),
        detail_line("Department", &employee.department.to_string(), theme),
        detail_line("Designation", &employee.designation, theme),
        detail_line("Location", &employee.location.to_string(), theme),
        detail_line("Status", &employee.status.to_string(), theme),
        detail_line("Join date", &employee.join_date.to_string(), theme),
    ];
    if let Some(phone) = &employee.phone {
        lines.push(detail_line("Phone", phone, theme));
    }
    if let Some(avatar) = &employee.avatar {
        lines.push(detail_line("Avatar", avatar, theme));
    }
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "e edit · d delete · Esc close",
        theme.hint(),
    )));

    let detail = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Employee ")
            .title_style(theme.title())
            .border_style(Style::default().fg(theme.accent)),
    );
    f.render_widget(detail, popup);
}

fn detail_line<'a>(label: &'a str, value: &str, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:<12}", label), theme.hint()),
        Span::styled(value.to_string(), theme.body()),
    ])
}

fn render_form(f: &mut Frame, area: Rect, form: &EmployeeForm, theme: &Theme) {
    let popup = centered_rect(area, 64, 15);
    f.render_widget(Clear, popup);

    let focused = |field: Field| {
        if form.focus == field {
            theme.body().add_modifier(Modifier::REVERSED)
        } else {
            theme.body()
        }
    };
    let text_row = |field: Field, value: &str| {
        Line::from(vec![
            Span::styled(format!("{:<12}", field.label()), theme.hint()),
            Span::styled(value.to_string(), focused(field)),
        ])
    };
    let choice_row = |field: Field, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<12}", field.label()), theme.hint()),
            Span::styled(format!("‹ {} ›", value), focused(field)),
        ])
    };

    let lines = vec![
        text_row(Field::Name, form.name.value()),
        text_row(Field::Email, form.email.value()),
        choice_row(
            Field::Department,
            form.department.map(|d| d.to_string()).unwrap_or_else(|| "—".into()),
        ),
        text_row(Field::Designation, form.designation.value()),
        choice_row(
            Field::Location,
            form.location.map(|l| l.to_string()).unwrap_or_else(|| "—".into()),
        ),
        choice_row(Field::Status, form.status.to_string()),
        text_row(Field::JoinDate, form.join_date.value()),
        text_row(Field::Phone, form.phone.value()),
        text_row(Field::Avatar, form.avatar.value()),
        Line::raw(""),
        Line::from(Span::styled(
            "Tab/Shift-Tab move · ←/→ choose · Enter save · Esc cancel",
            theme.hint(),
        )),
    ];

    let title = if form.is_create() {
        " Add Employee "
    } else {
        " Edit Employee "
    };
    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_style(theme.title())
            .border_style(Style::default().fg(theme.accent)),
    );
    f.render_widget(widget, popup);
}

fn render_confirm(f: &mut Frame, area: Rect, employee: &Employee, theme: &Theme) {
    let popup = centered_rect(area, 50, 7);
    f.render_widget(Clear, popup);

    let body = Paragraph::new(vec![
        Line::raw(""),
        Line::from(Span::styled(
            format!("Delete {}?", employee.name),
            theme.body().add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(Span::styled("y confirm · n / Esc cancel", theme.hint())),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Confirm Delete ")
            .title_style(Style::default().fg(theme.error).add_modifier(Modifier::BOLD))
            .border_style(Style::default().fg(theme.error)),
    );
    f.render_widget(body, popup);
}

/// Center a fixed-size popup inside `area`
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
