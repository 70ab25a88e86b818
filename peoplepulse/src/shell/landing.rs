//! Pre-auth landing screen: sign-in form plus the invite widget

use crate::theme::Theme;
use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::{prelude::*, widgets::*};
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LandingField {
    #[default]
    Email,
    Password,
    InviteEmail,
    InviteName,
}

impl LandingField {
    const ALL: [LandingField; 4] = [
        LandingField::Email,
        LandingField::Password,
        LandingField::InviteEmail,
        LandingField::InviteName,
    ];

    fn next(self) -> Self {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    fn prev(self) -> Self {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn in_invite_form(self) -> bool {
        matches!(self, Self::InviteEmail | Self::InviteName)
    }
}

/// What a key press on the landing screen asks the app to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LandingAction {
    None,
    LogIn { email: String, password: String },
    SendInvite { email: String, name: String },
}

#[derive(Debug, Default)]
pub struct LandingScreen {
    pub email: Input,
    pub password: Input,
    pub invite_email: Input,
    pub invite_name: Input,
    pub focus: LandingField,
    /// A login or invite call is in flight
    pub busy: bool,
    /// Set after a successful invite, cleared on the next key
    pub invite_sent: bool,
}

impl LandingScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route a key press; Enter submits whichever form has focus
    pub fn handle_key(&mut self, key: KeyEvent) -> LandingAction {
        self.invite_sent = false;
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.next();
                LandingAction::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.prev();
                LandingAction::None
            }
            KeyCode::Enter => {
                if self.busy {
                    return LandingAction::None;
                }
                if self.focus.in_invite_form() {
                    LandingAction::SendInvite {
                        email: self.invite_email.value().trim().to_string(),
                        name: self.invite_name.value().trim().to_string(),
                    }
                } else {
                    LandingAction::LogIn {
                        email: self.email.value().trim().to_string(),
                        password: self.password.value().to_string(),
                    }
                }
            }
            _ => {
                let input = match self.focus {
                    LandingField::Email => &mut self.email,
                    LandingField::Password => &mut self.password,
                    LandingField::InviteEmail => &mut self.invite_email,
                    LandingField::InviteName => &mut self.invite_name,
                };
                input.handle_event(&Event::Key(key));
                LandingAction::None
            }
        }
    }

    /// Clear the invite inputs after a successful send
    pub fn invite_succeeded(&mut self) {
        self.invite_email.reset();
        self.invite_name.reset();
        self.invite_sent = true;
    }

    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let popup = crate::directory::view::centered_rect(area, 56, 18);

        let focused = |field: LandingField| {
            if self.focus == field {
                theme.body().add_modifier(Modifier::REVERSED)
            } else {
                theme.body()
            }
        };
        let masked: String = "•".repeat(self.password.value().len());

        let mut lines = vec![
            Line::from(Span::styled(
                "Modern HR management for growing teams",
                theme.body(),
            )),
            Line::raw(""),
            Line::from(Span::styled("Sign in", theme.title())),
            Line::from(vec![
                Span::styled("Email     ", theme.hint()),
                Span::styled(self.email.value().to_string(), focused(LandingField::Email)),
            ]),
            Line::from(vec![
                Span::styled("Password  ", theme.hint()),
                Span::styled(masked, focused(LandingField::Password)),
            ]),
            Line::raw(""),
            Line::from(Span::styled("Invite a Colleague", theme.title())),
            Line::from(vec![
                Span::styled("Email     ", theme.hint()),
                Span::styled(
                    self.invite_email.value().to_string(),
                    focused(LandingField::InviteEmail),
                ),
            ]),
            Line::from(vec![
                Span::styled("Name      ", theme.hint()),
                Span::styled(
                    self.invite_name.value().to_string(),
                    focused(LandingField::InviteName),
                ),
            ]),
            Line::raw(""),
        ];

        if self.invite_sent {
            lines.push(Line::from(Span::styled(
                "✔ Invitation Sent! Your colleague will receive an email with instructions to join.",
                Style::default().fg(theme.success),
            )));
        } else if self.busy {
            lines.push(Line::from(Span::styled("Working...", theme.hint())));
        } else {
            lines.push(Line::from(Span::styled(
                "Tab move · Enter submit · Esc quit",
                theme.hint(),
            )));
        }

        let widget = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" PeoplePulse ")
                .title_style(theme.title())
                .border_style(Style::default().fg(theme.accent)),
        );
        f.render_widget(Clear, popup);
        f.render_widget(widget, popup);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_enter_submits_focused_form() {
        let mut screen = LandingScreen::new();
        for c in "a@b.co".chars() {
            screen.handle_key(key(KeyCode::Char(c)));
        }
        screen.focus = LandingField::Password;
        for c in "pw".chars() {
            screen.handle_key(key(KeyCode::Char(c)));
        }

        let action = screen.handle_key(key(KeyCode::Enter));
        assert_eq!(
            action,
            LandingAction::LogIn {
                email: "a@b.co".to_string(),
                password: "pw".to_string()
            }
        );
    }

    #[test]
    fn test_invite_form_submits_separately() {
        let mut screen = LandingScreen::new();
        screen.focus = LandingField::InviteEmail;
        for c in "x@y.z".chars() {
            screen.handle_key(key(KeyCode::Char(c)));
        }

        let action = screen.handle_key(key(KeyCode::Enter));
        assert_eq!(
            action,
            LandingAction::SendInvite {
                email: "x@y.z".to_string(),
                name: String::new()
            }
        );
    }

    #[test]
    fn test_busy_blocks_resubmission() {
        let mut screen = LandingScreen::new();
        screen.busy = true;
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), LandingAction::None);
    }

    #[test]
    fn test_invite_success_clears_inputs() {
        let mut screen = LandingScreen::new();
        screen.focus = LandingField::InviteEmail;
        screen.handle_key(key(KeyCode::Char('x')));
        screen.invite_succeeded();
        assert_eq!(screen.invite_email.value(), "");
        assert!(screen.invite_sent);
    }
}
