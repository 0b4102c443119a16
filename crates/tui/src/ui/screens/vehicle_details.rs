//! Vehicle details screen.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::stores::Remote;
use crate::ui::theme::{ThemeExt, spinner_char, status_color};

pub fn render_vehicle_details(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Vehicle Details")
        .border_style(theme.border())
        .title_style(theme.title());

    match &app.vehicle_store.selected {
        Remote::NotAsked => {
            let placeholder =
                Paragraph::new("No vehicle selected. Open one from My Fleet or Search Results.")
                    .style(theme.text_dim())
                    .alignment(Alignment::Center)
                    .block(block);
            f.render_widget(placeholder, area);
        }
        Remote::Loading => {
            let spinner = spinner_char(app.spinner_frame);
            let loading = Paragraph::new(format!("{} Loading vehicle...", spinner))
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
        Remote::Loaded(vehicle) => {
            let field = |label: &str, value: String| {
                Line::from(vec![
                    Span::styled(format!("{:<14}", label), theme.text_dim()),
                    Span::styled(value, theme.text()),
                ])
            };

            let lines = vec![
                field("Registration", vehicle.vrm.clone()),
                field("Make/Model", vehicle.display_name()),
                field("Colour", vehicle.colour.clone()),
                field("VIN", vehicle.vin.clone()),
                field(
                    "Year",
                    vehicle.year.map(|y| y.to_string()).unwrap_or_default(),
                ),
                field("Category", vehicle.category.clone()),
                field("Branch", vehicle.branch.clone()),
                field(
                    "Seats",
                    vehicle
                        .number_seats
                        .map(|s| s.to_string())
                        .unwrap_or_default(),
                ),
                field(
                    "Day rate",
                    vehicle
                        .day_rate
                        .map(|r| format!("{:.2}", r))
                        .unwrap_or_default(),
                ),
                field(
                    "Fuel economy",
                    vehicle
                        .fuel_economy
                        .map(|e| format!("{:.1} mpg", e))
                        .unwrap_or_default(),
                ),
                Line::from(vec![
                    Span::styled(format!("{:<14}", "Status"), theme.text_dim()),
                    Span::styled(
                        vehicle.status.label(),
                        ratatui::style::Style::default()
                            .fg(status_color(vehicle.status.colour_class())),
                    ),
                ]),
            ];

            let details = Paragraph::new(lines).block(block);
            f.render_widget(details, area);
        }
    }
}
