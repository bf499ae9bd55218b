//! Theme and Styling
//!
//! Colors and styles for the terminal form. Two palettes, switchable at
//! runtime with Ctrl+T.

use ratatui::style::{Color, Modifier, Style};

/// Which palette is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

/// Application theme
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub mode: ThemeMode,
    accent: Color,
    success: Color,
    warning: Color,
    error: Color,
    text_primary: Color,
    text_secondary: Color,
    text_dim: Color,
    border: Color,
    border_focused: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            accent: Color::Rgb(0, 212, 255),
            success: Color::Rgb(34, 197, 94),
            warning: Color::Rgb(251, 191, 36),
            error: Color::Rgb(239, 68, 68),
            text_primary: Color::Rgb(241, 242, 246),
            text_secondary: Color::Rgb(178, 190, 195),
            text_dim: Color::Rgb(99, 110, 114),
            border: Color::Rgb(68, 68, 68),
            border_focused: Color::Rgb(9, 132, 227),
        }
    }

    pub fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            accent: Color::Rgb(9, 132, 227),
            success: Color::Rgb(21, 128, 61),
            warning: Color::Rgb(180, 83, 9),
            error: Color::Rgb(185, 28, 28),
            text_primary: Color::Rgb(34, 47, 62),
            text_secondary: Color::Rgb(99, 110, 114),
            text_dim: Color::Rgb(178, 190, 195),
            border: Color::Rgb(178, 190, 195),
            border_focused: Color::Rgb(9, 132, 227),
        }
    }

    /// The other palette
    pub fn toggled(&self) -> Self {
        match self.mode {
            ThemeMode::Dark => Self::light(),
            ThemeMode::Light => Self::dark(),
        }
    }

    /// Default text style
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Secondary/muted text style
    pub fn text_secondary(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    pub fn text_dim(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn heading(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Field labels inside result cards
    pub fn label(&self) -> Style {
        Style::default()
            .fg(self.text_secondary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn link(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::UNDERLINED)
    }

    pub fn warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(self.error)
    }

    pub fn error_label(&self) -> Style {
        Style::default()
            .fg(self.error)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.border_focused)
    }

    /// Keyboard shortcut style
    pub fn shortcut_key(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn shortcut_desc(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Active/in-progress indicator
    pub fn active(&self) -> Style {
        Style::default()
            .fg(self.warning)
            .add_modifier(Modifier::BOLD)
    }

    pub fn complete(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Submit hint when the button is enabled
    pub fn button(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Submit hint when the button is disabled
    pub fn button_disabled(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    pub fn placeholder(&self) -> Style {
        Style::default().fg(self.text_dim)
    }
}

/// Status icons
pub struct Icons;

impl Icons {
    pub const COMPLETE: &'static str = "✓";
    pub const ERROR: &'static str = "✗";
    pub const DOT: &'static str = "•";
    pub const SPINNER: [&'static str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        let theme = Theme::default();
        assert_eq!(theme.mode, ThemeMode::Dark);
        assert_eq!(theme.toggled().mode, ThemeMode::Light);
        assert_eq!(theme.toggled().toggled().mode, ThemeMode::Dark);
    }
}
