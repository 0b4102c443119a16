//! Home screen: global search input and fleet filter metadata.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::app::App;
use crate::stores::Remote;
use crate::ui::theme::{ThemeExt, spinner_char};

pub fn render_home(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    render_search_box(f, chunks[0], app);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(chunks[1]);

    render_string_list(f, columns[0], app, "Branches", &app.vehicle_store.branches);
    render_string_list(
        f,
        columns[1],
        app,
        "Categories",
        &app.vehicle_store.categories,
    );
    render_string_list(f, columns[2], app, "Statuses", &app.vehicle_store.statuses);
}

fn render_search_box(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let input = Paragraph::new(Line::from(vec![
        Span::styled("> ", theme.title()),
        Span::styled(app.search_input.as_str(), theme.text()),
        Span::styled("█", theme.text_dim()),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Search the fleet")
            .border_style(theme.border())
            .title_style(theme.title()),
    );
    f.render_widget(input, area);
}

fn render_string_list(f: &mut Frame, area: Rect, app: &App, title: &str, data: &Remote<Vec<String>>) {
    let theme = &app.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
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
        Remote::Loaded(values) => {
            let items: Vec<ListItem> = values
                .iter()
                .map(|v| ListItem::new(v.as_str().to_string()))
                .collect();
            let list = List::new(items).block(block);
            f.render_widget(list, area);
        }
    }
}
