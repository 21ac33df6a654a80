//! Food Dashboard - Terminal User Interface for a food catalog.
//!
//! Main entry point and event loop for the application.

mod api;
mod config;
mod dashboard;
mod form;
mod ui;

use anyhow::Context;
use api::FoodClient;
use config::Config;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use dashboard::{Dashboard, UiMode};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
};
use std::io;
use std::time::Duration;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LIST_HINT: &str =
    "q: quit  j/k: move  n: new  e: edit  d: delete  a: toggle availability  r: reload";

/// Main application entry point.
///
/// # Returns
/// * `Result<()>` - Success or error
///
/// # Details
/// Loads configuration (writing a default file on first run), starts file logging,
/// fetches the food list, and runs the event loop.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load(None)?;
    let _log_guard = init_logging(&config)?;

    let default_path = Config::default_config_path()?;
    if !default_path.exists() {
        Config::default().save(None)?;
        tracing::info!(path = %default_path.display(), "wrote default config");
    }

    let client = FoodClient::new(&config)?;
    tracing::info!(api_url = %client.base_url(), "starting food dashboard");
    let mut dashboard = Dashboard::new(Box::new(client));

    // Fetch on startup
    dashboard.load_foods().await;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut dashboard, &config).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "dashboard exited with error");
    }
    result
}

/// Send logs to the configured log file.
///
/// # Returns
/// * `Result<WorkerGuard>` - Guard that flushes the writer when dropped
///
/// # Details
/// The terminal is owned by the UI, so nothing is logged to stdout/stderr.
/// `RUST_LOG` overrides the default `food_dashboard=info` filter.
fn init_logging(config: &Config) -> anyhow::Result<WorkerGuard> {
    let log_path = config.log_file_path()?;
    let log_dir = log_path
        .parent()
        .context("Log file path has no parent directory")?;
    let file_name = log_path
        .file_name()
        .context("Log file path has no file name")?;
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(log_dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("food_dashboard=info"));

    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_env_filter(filter)
        .init();

    Ok(guard)
}

/// Split the frame into header, list and status bar.
fn layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Food list
            Constraint::Length(1), // Status bar
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Render the complete UI.
///
/// # Arguments
/// * `f` - Frame to render to
/// * `dashboard` - Dashboard state
/// * `config` - Configuration
fn render_ui(f: &mut ratatui::Frame, dashboard: &Dashboard, config: &Config) {
    let area = f.area();
    let (header_area, list_area, status_area) = layout(area);

    ui::render_header(dashboard, header_area, f.buffer_mut());
    ui::render_list(
        dashboard,
        &config.currency_symbol,
        list_area,
        f.buffer_mut(),
    );

    let status = ratatui::widgets::Paragraph::new(ratatui::text::Line::from(LIST_HINT));
    f.render_widget(status, status_area);

    ui::render_modal(dashboard, area, f.buffer_mut());
}

/// Main event loop.
///
/// # Arguments
/// * `terminal` - Terminal instance
/// * `dashboard` - Dashboard state
/// * `config` - Configuration
///
/// # Returns
/// * `Result<()>` - Success or error
///
/// # Details
/// Handles keyboard and mouse events, awaits the backend call each action triggers, and renders UI.
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    dashboard: &mut Dashboard,
    config: &Config,
) -> anyhow::Result<()> {
    let mut list_area = Rect::default();

    loop {
        terminal.draw(|f| {
            list_area = layout(f.area()).1;
            render_ui(f, dashboard, config);
        })?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let keep_running = match dashboard.mode() {
                    UiMode::List => dashboard.handle_list_key(key).await,
                    UiMode::AddModal | UiMode::EditModal => {
                        dashboard.handle_modal_key(key).await;
                        true
                    }
                };
                if !keep_running {
                    break;
                }
            }
            Event::Mouse(mouse) => handle_mouse_event(mouse, dashboard, list_area),
            _ => {}
        }
    }

    Ok(())
}

/// Handle mouse events (scroll and click).
///
/// # Details
/// Scrolling moves the selection; a left click selects the card under the cursor.
fn handle_mouse_event(mouse: MouseEvent, dashboard: &mut Dashboard, list_area: Rect) {
    if dashboard.mode() != UiMode::List {
        return;
    }

    match mouse.kind {
        MouseEventKind::ScrollUp => dashboard.move_up(),
        MouseEventKind::ScrollDown => dashboard.move_down(),
        MouseEventKind::Down(MouseButton::Left) => {
            if mouse.column >= list_area.x
                && mouse.column < list_area.x + list_area.width
                && let Some(index) = ui::food_index_at(dashboard, list_area, mouse.row)
            {
                dashboard.selected_index = index;
            }
        }
        _ => {}
    }
}
