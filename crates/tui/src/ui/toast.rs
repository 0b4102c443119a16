//! Toast notifications for transient feedback messages.
//!
//! Toasts render in the bottom-right corner and expire automatically
//! after their TTL; expired toasts are pruned on every tick.

use fleet_config::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use std::time::{Duration, Instant};

use crate::ui::theme::ThemeExt;

/// Severity level for toast notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    /// Display label for this level.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Success => "OK",
            Self::Warning => "WARN",
            Self::Error => "ERR",
        }
    }

    /// Time-to-live for this level. Errors linger longer.
    pub fn ttl(&self) -> Duration {
        match self {
            Self::Info | Self::Success | Self::Warning => Duration::from_secs(5),
            Self::Error => Duration::from_secs(10),
        }
    }
}

/// A single toast notification.
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    pub created_at: Instant,
    pub ttl: Duration,
}

impl Toast {
    /// Creates a new toast with the given message and level.
    pub fn new(message: String, level: ToastLevel) -> Self {
        Self {
            message,
            level,
            created_at: Instant::now(),
            ttl: level.ttl(),
        }
    }

    pub fn info(message: String) -> Self {
        Self::new(message, ToastLevel::Info)
    }

    pub fn success(message: String) -> Self {
        Self::new(message, ToastLevel::Success)
    }

    pub fn warning(message: String) -> Self {
        Self::new(message, ToastLevel::Warning)
    }

    pub fn error(message: String) -> Self {
        Self::new(message, ToastLevel::Error)
    }

    /// Whether this toast has outlived its TTL.
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.ttl
    }
}

/// Render the toast stack in the bottom-right corner of `area`.
pub fn render_toasts(f: &mut Frame, area: Rect, toasts: &[Toast], theme: &Theme) {
    const TOAST_WIDTH: u16 = 44;
    const TOAST_HEIGHT: u16 = 3;

    for (i, toast) in toasts.iter().rev().take(4).enumerate() {
        let width = TOAST_WIDTH.min(area.width);
        let y_offset = (i as u16 + 1) * TOAST_HEIGHT;
        if y_offset + 1 > area.height {
            break;
        }
        let rect = Rect {
            x: area.right().saturating_sub(width + 1),
            y: area.bottom().saturating_sub(y_offset + 1),
            width,
            height: TOAST_HEIGHT,
        };

        let style = match toast.level {
            ToastLevel::Info => theme.info(),
            ToastLevel::Success => theme.success(),
            ToastLevel::Warning => theme.warning(),
            ToastLevel::Error => theme.error(),
        };

        let widget = Paragraph::new(Line::from(toast.message.as_str()))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(toast.level.label())
                    .border_style(style),
            );

        f.render_widget(Clear, rect);
        f.render_widget(widget, rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_toast_is_not_expired() {
        assert!(!Toast::info("hello".to_string()).is_expired());
    }

    #[test]
    fn test_expired_toast_is_pruned() {
        let mut toast = Toast::success("done".to_string());
        toast.created_at = Instant::now() - Duration::from_secs(30);
        assert!(toast.is_expired());
    }

    #[test]
    fn test_error_toasts_linger_longer() {
        assert!(ToastLevel::Error.ttl() > ToastLevel::Success.ttl());
    }
}
