//! Fleet TUI - Terminal dashboard for the fleet management API.
//!
//! Responsibilities:
//! - Orchestrate application startup and shutdown.
//! - Initialize terminal, logging, and the async runtime.
//! - Run the main event loop.
//!
//! Does NOT handle:
//! - REST API implementation (see `crates/client`).
//! - Configuration resolution (see `crates/config`).
//! - Async API calls (see `runtime::side_effects`).
//!
//! Invariants:
//! - The TUI enters raw mode and alternate screen on startup.
//! - `load_dotenv()` is called at startup to support `.env` files.
//! - Configuration precedence: CLI args > env vars > profile file >
//!   defaults.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures_util::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::sync::Arc;
use tokio::sync::mpsc::channel;
use tracing_appender::non_blocking;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use fleet_config::constants::{DEFAULT_CHANNEL_CAPACITY, DEFAULT_UI_TICK_MS};
use fleet_config::{ConfigLoader, ConfigManager, PersistedState, load_dotenv};
use fleet_tui::action::Action;
use fleet_tui::app::{App, ConnectionContext};
use fleet_tui::cli::Cli;
use fleet_tui::runtime::side_effects::handle_side_effects;
use fleet_tui::runtime::terminal::TerminalGuard;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    load_dotenv();

    // File-based logging: stdout belongs to the terminal UI
    std::fs::create_dir_all(&cli.log_dir)?;
    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, "fleet-tui.log");
    let (non_blocking, _log_guard) = non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(non_blocking))
        .init();

    // Resolve configuration and build the shared client
    let config = ConfigLoader::new()
        .with_base_url(cli.base_url.clone())
        .with_config_path(cli.config_path.clone())
        .load()?;

    let mut client_builder = fleet_client::FleetClient::builder()
        .base_url(config.connection.base_url.clone())
        .timeout(config.connection.timeout);
    if let Some(token) = config.api_token.clone() {
        client_builder = client_builder.api_token(token);
    }
    let client = Arc::new(client_builder.build()?);
    tracing::info!(base_url = %client.base_url(), "Fleet client ready");

    // Load persisted preferences
    let config_manager = ConfigManager::new()?;
    let mut persisted = if cli.fresh {
        tracing::info!("--fresh flag set, starting with default state");
        PersistedState::default()
    } else {
        config_manager.load()
    };

    // CLI --route wins over the persisted route
    if let Some(route) = &cli.route {
        persisted.last_route = Some(route.clone());
    }

    let connection_ctx = ConnectionContext {
        base_url: config.connection.base_url.clone(),
        auth_mode: config.auth_mode().to_string(),
    };
    let mut app = App::new(Some(persisted), connection_ctx);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Guard restores the terminal even on panic; the explicit cleanup
    // below runs first on normal exit.
    let _terminal_guard = TerminalGuard::new();

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Bounded channel for actions
    let (tx, mut rx) = channel::<Action>(DEFAULT_CHANNEL_CAPACITY);

    // Input stream task: key presses become actions
    let tx_input = tx.clone();
    tokio::spawn(async move {
        let mut reader = crossterm::event::EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            if let crossterm::event::Event::Key(key) = event {
                if key.kind == crossterm::event::KeyEventKind::Press
                    && tx_input.send(Action::Input(key)).await.is_err()
                {
                    break;
                }
            }
        }
    });

    // Kick off the loads for the initial route
    for action in app.load_actions_for_route() {
        app.update(action.clone());
        handle_side_effects(action, client.clone(), tx.clone()).await;
    }

    let mut tick_interval =
        tokio::time::interval(tokio::time::Duration::from_millis(DEFAULT_UI_TICK_MS));

    // Main event loop
    'main: loop {
        terminal.draw(|f| fleet_tui::ui::render(f, &mut app))?;

        tokio::select! {
            Some(action) = rx.recv() => {
                tracing::debug!(?action, "Handling action");

                if matches!(action, Action::Quit) {
                    save_state(&config_manager, &app);
                    break 'main;
                }

                let actions = match action {
                    Action::Input(key) => app.handle_input(key),
                    other => vec![other],
                };

                for action in actions {
                    if matches!(action, Action::Quit) {
                        save_state(&config_manager, &app);
                        break 'main;
                    }

                    let is_navigation = action.is_navigation();
                    app.update(action.clone());
                    handle_side_effects(action, client.clone(), tx.clone()).await;

                    // Navigation triggers the loads of the new screen
                    if is_navigation {
                        for load in app.load_actions_for_route() {
                            app.update(load.clone());
                            handle_side_effects(load, client.clone(), tx.clone()).await;
                        }
                    }
                }
            }
            _ = tick_interval.tick() => {
                app.update(Action::Tick);
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

fn save_state(config_manager: &ConfigManager, app: &App) {
    if let Err(e) = config_manager.save(&app.get_persisted_state()) {
        tracing::error!(error = %e, "Failed to save persisted state");
    }
}
