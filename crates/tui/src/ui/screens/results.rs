//! Search results screen: hits of the last global search.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::Style,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use crate::app::App;
use crate::stores::Remote;
use crate::ui::theme::{ThemeExt, spinner_char, status_color};

pub fn render_results(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = app.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border())
        .title_style(theme.title());

    let results = match &app.vehicle_store.global_search_results {
        Remote::NotAsked => {
            let placeholder = Paragraph::new("No search yet. Type a query on the Home screen.")
                .style(theme.text_dim())
                .alignment(Alignment::Center)
                .block(block.title("Search Results"));
            f.render_widget(placeholder, area);
            return;
        }
        Remote::Loading => {
            let spinner = spinner_char(app.spinner_frame);
            let loading = Paragraph::new(format!("{} Searching...", spinner))
                .alignment(Alignment::Center)
                .block(block.title("Search Results"));
            f.render_widget(loading, area);
            return;
        }
        Remote::Failed(message) => {
            let error = Paragraph::new(message.as_str())
                .style(theme.error())
                .alignment(Alignment::Center)
                .block(block.title("Search Results"));
            f.render_widget(error, area);
            return;
        }
        Remote::Loaded(results) => results,
    };

    let header = Row::new(vec![
        Cell::from("Reg"),
        Cell::from("Vehicle"),
        Cell::from("Category"),
        Cell::from("Branch"),
        Cell::from("Status"),
    ])
    .style(theme.title());

    let rows: Vec<Row> = results
        .iter()
        .map(|v| {
            Row::new(vec![
                Cell::from(v.vrm.clone()),
                Cell::from(v.display_name()),
                Cell::from(v.category.clone()),
                Cell::from(v.branch.clone()),
                Cell::from(v.status.label()).style(Style::default().fg(status_color(
                    v.status.colour_class(),
                ))),
            ])
        })
        .collect();

    let count = app
        .vehicle_store
        .last_search_count
        .unwrap_or(results.len() as u64);

    let widths = [
        Constraint::Length(9),
        Constraint::Min(16),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(16),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block.title(format!("Search Results - {} hits", count)))
        .row_highlight_style(theme.highlight());

    f.render_stateful_widget(table, area, &mut app.results_table);
}
