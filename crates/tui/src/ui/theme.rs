//! Theme helpers and style builders.
//!
//! Extends `fleet_config::Theme` with ergonomic helpers for building
//! ratatui `Style` objects consistently across screens.

use fleet_client::models::ColourClass;
use fleet_config::Theme;
use ratatui::style::{Color, Modifier, Style};

/// Spinner characters for the animated loading indicator.
pub const SPINNER_CHARS: [char; 8] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧'];

/// Get the spinner character for a given animation frame.
pub fn spinner_char(frame: u8) -> char {
    SPINNER_CHARS[frame as usize % SPINNER_CHARS.len()]
}

/// Map a status colour classification to a terminal colour.
pub fn status_color(colour: ColourClass) -> Color {
    match colour {
        ColourClass::Green => Color::Green,
        ColourClass::Red => Color::Red,
    }
}

/// Trait extending Theme with helper methods for styled widgets.
pub trait ThemeExt {
    /// Base text style.
    fn text(&self) -> Style;
    /// Dimmed text style.
    fn text_dim(&self) -> Style;
    /// Title style (accent + bold).
    fn title(&self) -> Style;
    /// Border style.
    fn border(&self) -> Style;
    /// Highlight/selection style.
    fn highlight(&self) -> Style;
    /// Success style.
    fn success(&self) -> Style;
    /// Warning style.
    fn warning(&self) -> Style;
    /// Error style.
    fn error(&self) -> Style;
    /// Info style.
    fn info(&self) -> Style;
}

impl ThemeExt for Theme {
    fn text(&self) -> Style {
        Style::default().fg(self.text)
    }

    fn text_dim(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    fn highlight(&self) -> Style {
        Style::default().fg(self.highlight_fg).bg(self.highlight_bg)
    }

    fn success(&self) -> Style {
        Style::default().fg(self.success)
    }

    fn warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    fn error(&self) -> Style {
        Style::default().fg(self.error)
    }

    fn info(&self) -> Style {
        Style::default().fg(self.info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_cycles_through_frames() {
        assert_eq!(spinner_char(0), SPINNER_CHARS[0]);
        assert_eq!(spinner_char(8), SPINNER_CHARS[0]);
        assert_eq!(spinner_char(11), SPINNER_CHARS[3]);
    }

    #[test]
    fn test_status_colors() {
        assert_eq!(status_color(ColourClass::Green), Color::Green);
        assert_eq!(status_color(ColourClass::Red), Color::Red);
    }
}
