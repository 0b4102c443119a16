//! UI rendering for the dashboard.
//!
//! Screen-specific rendering is separated from state management: the
//! `render` entry point draws the chrome (header, footer, toasts) and
//! dispatches the body to the screen matching the current route.

pub mod screens;
pub mod theme;
pub mod toast;

pub use toast::{Toast, ToastLevel};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, FOOTER_HEIGHT, HEADER_HEIGHT};
use crate::router::Route;
use crate::ui::theme::{ThemeExt, spinner_char};

/// Render the whole frame.
pub fn render(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let body = chunks[1];
    match app.route {
        Route::Home => screens::home::render_home(f, body, app),
        Route::Results => screens::results::render_results(f, body, app),
        Route::VehicleDetails => screens::vehicle_details::render_vehicle_details(f, body, app),
        Route::MyFleet => screens::my_fleet::render_my_fleet(f, body, app),
        Route::Analytics => screens::analytics::render_analytics(f, body, app),
        Route::NotFound => screens::not_found::render_not_found(f, body, app),
    }

    render_footer(f, app, chunks[2]);
    toast::render_toasts(f, f.area(), &app.toasts, &app.theme);
}

fn render_header(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let theme = &app.theme;
    let busy = if app.is_busy() {
        format!(" {}", spinner_char(app.spinner_frame))
    } else {
        String::new()
    };

    let line = Line::from(vec![
        Span::styled("Fleet TUI", theme.title()),
        Span::raw("  "),
        Span::styled(app.route.path(), theme.text()),
        Span::raw("  "),
        Span::styled(
            format!("{} ({})", app.base_url, app.auth_mode),
            theme.text_dim(),
        ),
        Span::styled(busy, theme.info()),
    ]);

    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(app.route.title())
            .border_style(theme.border())
            .title_style(theme.title()),
    );
    f.render_widget(header, area);
}

fn render_footer(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let hints = match app.route {
        Route::Home => "type to search | Enter search | Esc clear | Tab next screen | Ctrl+C quit",
        Route::Results => "j/k move | Enter details | Esc home | r refresh | q quit",
        Route::VehicleDetails => "R rent | U return | Esc back | q quit",
        Route::MyFleet => {
            "j/k move | Space mark | d/D remove | v available | b/c filter | s search | Enter details | q quit"
        }
        Route::Analytics => "h/l branch | r refresh | q quit",
        Route::NotFound => "Enter/Esc home",
    };

    let footer = Paragraph::new(Line::from(Span::styled(hints, app.theme.text_dim()))).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(app.theme.border()),
    );
    f.render_widget(footer, area);
}
