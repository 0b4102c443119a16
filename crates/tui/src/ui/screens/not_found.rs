//! Terminal fallback screen for unmatched routes.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::ui::theme::ThemeExt;

pub fn render_not_found(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let lines = vec![
        Line::from(""),
        Line::from("404 - route not found"),
        Line::from(""),
        Line::from("Press Enter or Esc to go home."),
    ];
    let widget = Paragraph::new(lines)
        .style(theme.warning())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Not Found")
                .border_style(theme.border())
                .title_style(theme.title()),
        );
    f.render_widget(widget, area);
}
