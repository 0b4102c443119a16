//! Analytics screen: the six aggregate datasets.
//!
//! The datasets are opaque backend-computed JSON; each pane
//! pretty-prints its payload and the by-branch panes follow the
//! branch selection.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use serde_json::Value;

use crate::app::App;
use crate::stores::Remote;
use crate::ui::theme::{ThemeExt, spinner_char};

pub fn render_analytics(f: &mut Frame, area: Rect, app: &App) {
    let branch = app.analytics_branch.as_deref().unwrap_or("-");

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(rows[0]);
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(rows[1]);

    let store = &app.analytics_store;
    render_aggregate(f, top[0], app, "Fleet insights", &store.fleet_insights);
    render_aggregate(
        f,
        top[1],
        app,
        &format!("Status - {}", branch),
        &store.status_by_branch,
    );
    render_aggregate(
        f,
        top[2],
        app,
        &format!("Categories - {}", branch),
        &store.category_by_branch,
    );
    render_aggregate(
        f,
        bottom[0],
        app,
        &format!("Utilisation - {}", branch),
        &store.rental_utilisation_by_branch,
    );
    render_aggregate(
        f,
        bottom[1],
        app,
        &format!("Rented by category - {}", branch),
        &store.rented_by_category,
    );
    render_aggregate(
        f,
        bottom[2],
        app,
        &format!("Issues - {}", branch),
        &store.issues_percentage,
    );
}

fn render_aggregate(f: &mut Frame, area: Rect, app: &App, title: &str, data: &Remote<Value>) {
    let theme = &app.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .border_style(theme.border())
        .title_style(theme.title());

    match data {
        Remote::NotAsked => {
            let placeholder = Paragraph::new("Press 'r' to load")
                .style(theme.text_dim())
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(placeholder, area);
        }
        Remote::Loading => {
            let spinner = spinner_char(app.spinner_frame);
            let loading = Paragraph::new(format!("{} Loading...", spinner))
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(loading, area);
        }
        Remote::Failed(message) => {
            let error = Paragraph::new(message.as_str())
                .style(theme.error())
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(error, area);
        }
        Remote::Loaded(value) => {
            let body = serde_json::to_string_pretty(value)
                .unwrap_or_else(|_| "<unrenderable payload>".to_string());
            let pane = Paragraph::new(body)
                .wrap(Wrap { trim: false })
                .block(block);
            f.render_widget(pane, area);
        }
    }
}
