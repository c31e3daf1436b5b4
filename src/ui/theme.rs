//! Colors used by the jog panel.

use ratatui::style::{Color, Modifier, Style};

/// Color theme for the panel.
pub struct Theme {
    /// Enabled button color.
    pub enabled: Color,
    /// Disabled button color.
    pub disabled: Color,
    /// Key hint and focus highlight color.
    pub highlight: Color,
    /// Secondary text color.
    pub muted: Color,
}

impl Theme {
    /// Style for a button label.
    pub fn button(&self, enabled: bool) -> Style {
        if enabled {
            Style::default()
                .fg(self.enabled)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.disabled)
        }
    }

    /// Border style for a block, highlighted when it has focus.
    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.highlight)
        } else {
            Style::default().fg(self.muted)
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            enabled: Color::Green,
            disabled: Color::DarkGray,
            highlight: Color::Cyan,
            muted: Color::Gray,
        }
    }
}
