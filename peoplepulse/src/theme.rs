//! Color themes for light and dark mode

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub accent: Color,
    pub text: Color,
    pub dim: Color,
    pub panel_border: Color,
    pub success: Color,
    pub error: Color,
    pub info: Color,
}

impl Theme {
    pub fn new(dark_mode: bool) -> Self {
        if dark_mode {
            Self {
                accent: Color::Cyan,
                text: Color::White,
                dim: Color::DarkGray,
                panel_border: Color::Gray,
                success: Color::Green,
                error: Color::Red,
                info: Color::Blue,
            }
        } else {
            Self {
                accent: Color::Blue,
                text: Color::Black,
                dim: Color::Gray,
                panel_border: Color::DarkGray,
                success: Color::Green,
                error: Color::Red,
                info: Color::Cyan,
            }
        }
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn body(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn hint(&self) -> Style {
        Style::default().fg(self.dim)
    }

    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::REVERSED)
    }
}
