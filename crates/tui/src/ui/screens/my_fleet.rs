//! Fleet screen: the vehicle table with mark/remove operations.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::Style,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use crate::app::App;
use crate::stores::Remote;
use crate::ui::theme::{ThemeExt, spinner_char, status_color};

pub fn render_my_fleet(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = app.theme;
    let remote = if app.show_available_only {
        &app.vehicle_store.available
    } else {
        &app.vehicle_store.vehicles
    };

    let title = if app.show_available_only {
        "My Fleet (available)"
    } else {
        "My Fleet"
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border())
        .title_style(theme.title());

    let vehicles = match remote {
        Remote::NotAsked => {
            let placeholder = Paragraph::new("No vehicles loaded. Press 'r' to refresh.")
                .style(theme.text_dim())
                .alignment(Alignment::Center)
                .block(block.title(title));
            f.render_widget(placeholder, area);
            return;
        }
        Remote::Loading => {
            let spinner = spinner_char(app.spinner_frame);
            let loading = Paragraph::new(format!("{} Loading fleet...", spinner))
                .alignment(Alignment::Center)
                .block(block.title(title));
            f.render_widget(loading, area);
            return;
        }
        Remote::Failed(message) => {
            let error = Paragraph::new(message.as_str())
                .style(theme.error())
                .alignment(Alignment::Center)
                .block(block.title(title));
            f.render_widget(error, area);
            return;
        }
        Remote::Loaded(vehicles) => vehicles,
    };

    let header = Row::new(vec![
        Cell::from(" "),
        Cell::from("Reg"),
        Cell::from("Vehicle"),
        Cell::from("Category"),
        Cell::from("Branch"),
        Cell::from("Status"),
        Cell::from("Rate"),
    ])
    .style(theme.title());

    let rows: Vec<Row> = vehicles
        .iter()
        .map(|v| {
            let mark = if app.marked.contains(&v.id) { "*" } else { " " };
            Row::new(vec![
                Cell::from(mark.to_string()),
                Cell::from(v.vrm.clone()),
                Cell::from(v.display_name()),
                Cell::from(v.category.clone()),
                Cell::from(v.branch.clone()),
                Cell::from(v.status.label()).style(Style::default().fg(status_color(
                    v.status.colour_class(),
                ))),
                Cell::from(
                    v.day_rate
                        .map(|r| format!("{:.0}/day", r))
                        .unwrap_or_default(),
                ),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(1),
        Constraint::Length(9),
        Constraint::Min(16),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(16),
        Constraint::Length(8),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block.title(format!(
            "{} - {} vehicles, {} marked",
            title,
            vehicles.len(),
            app.marked.len()
        )))
        .row_highlight_style(theme.highlight());

    f.render_stateful_widget(table, area, &mut app.fleet_table);
}
