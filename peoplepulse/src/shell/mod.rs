//! Application shell: sidebar navigation and chrome

pub mod dashboard;
pub mod landing;

use crate::icons::Icon;
use crate::theme::Theme;
use ratatui::{prelude::*, widgets::*};
use shared::models::UserAccount;

/// Top-level HRMS modules, in sidebar order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Module {
    #[default]
    Dashboard,
    Employees,
    Attendance,
    Leave,
    Payroll,
    Performance,
    Documents,
    Settings,
}

impl Module {
    pub const ALL: [Module; 8] = [
        Module::Dashboard,
        Module::Employees,
        Module::Attendance,
        Module::Leave,
        Module::Payroll,
        Module::Performance,
        Module::Documents,
        Module::Settings,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Employees => "Employees",
            Self::Attendance => "Attendance",
            Self::Leave => "Leave Management",
            Self::Payroll => "Payroll",
            Self::Performance => "Performance",
            Self::Documents => "Documents",
            Self::Settings => "Settings",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            Self::Dashboard => Icon::resolve("layout-dashboard"),
            Self::Employees => Icon::resolve("users"),
            Self::Attendance => Icon::resolve("clock"),
            Self::Leave => Icon::resolve("calendar"),
            Self::Payroll => Icon::resolve("credit-card"),
            Self::Performance => Icon::resolve("bar-chart"),
            Self::Documents => Icon::resolve("file-text"),
            Self::Settings => Icon::resolve("settings"),
        }
    }

    /// Only the dashboard and the directory are implemented; selecting any
    /// other module produces an info toast instead of a screen.
    pub fn is_built(self) -> bool {
        matches!(self, Self::Dashboard | Self::Employees)
    }

    /// Toast shown when a not-yet-built module is selected
    pub fn unavailable_message(self) -> String {
        format!("{} module will be available in the full version.", self.name())
    }

    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|m| *m == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let i = Self::ALL.iter().position(|m| *m == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Render the sidebar with the active module highlighted
pub fn render_sidebar(
    f: &mut Frame,
    area: Rect,
    active: Module,
    user: Option<&UserAccount>,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Brand
            Constraint::Min(1),    // Modules
            Constraint::Length(3), // User footer
        ])
        .split(area);

    let brand = Paragraph::new(Line::from(vec![
        Span::styled(" PP ", theme.title().add_modifier(Modifier::REVERSED)),
        Span::styled(" PeoplePulse", theme.title()),
    ]));
    f.render_widget(brand, chunks[0]);

    let items: Vec<ListItem> = Module::ALL
        .iter()
        .map(|m| {
            ListItem::new(Line::from(format!(" {} {}", m.icon().glyph(), m.name())))
        })
        .collect();
    let list = List::new(items)
        .style(theme.body())
        .highlight_style(theme.highlight())
        .block(
            Block::default()
                .borders(Borders::RIGHT)
                .border_style(Style::default().fg(theme.panel_border)),
        );
    let mut list_state = ListState::default();
    list_state.select(Module::ALL.iter().position(|m| *m == active));
    f.render_stateful_widget(list, chunks[1], &mut list_state);

    let (name, email) = match user {
        Some(u) => (u.name.as_str(), u.email.as_str()),
        None => ("Guest", "not signed in"),
    };
    let footer = Paragraph::new(vec![
        Line::from(Span::styled(format!(" 👤 {}", name), theme.body())),
        Line::from(Span::styled(format!("    {}", email), theme.hint())),
    ])
    .block(
        Block::default()
            .borders(Borders::TOP | Borders::RIGHT)
            .border_style(Style::default().fg(theme.panel_border)),
    );
    f.render_widget(footer, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_dashboard_and_employees_are_built() {
        let built: Vec<Module> = Module::ALL.into_iter().filter(|m| m.is_built()).collect();
        assert_eq!(built, [Module::Dashboard, Module::Employees]);
    }

    #[test]
    fn test_unavailable_message_wording() {
        assert_eq!(
            Module::Attendance.unavailable_message(),
            "Attendance module will be available in the full version."
        );
        assert_eq!(
            Module::Leave.unavailable_message(),
            "Leave Management module will be available in the full version."
        );
    }

    #[test]
    fn test_module_cycling_wraps() {
        assert_eq!(Module::Settings.next(), Module::Dashboard);
        assert_eq!(Module::Dashboard.prev(), Module::Settings);
    }

    #[test]
    fn test_icons_are_not_fallback() {
        for module in Module::ALL {
            assert_ne!(module.icon(), Icon::Fallback, "{:?}", module);
        }
    }
}
