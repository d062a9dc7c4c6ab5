//! Carousel: a horizontally scrollable list of items fetched from a local
//! endpoint, with page dots that follow and drive the scroll position.

use std::io::{self, stdout};
use std::sync::mpsc;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use tracing::{error, info};

use carousel_core::{HttpItemSource, ItemSource, LoadError};
use carousel_tui::app::AppState;
use carousel_tui::cli::Cli;
use carousel_tui::{input, logging, ui, worker};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    let log_path = cli.log_file.clone().unwrap_or_else(logging::default_log_path);
    logging::init_logging(&log_path);

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen, DisableMouseCapture);
        default_hook(info);
    }));

    let endpoint = config.endpoint.clone();
    let timeout = config.request_timeout();

    let (fetch_tx, fetch_rx) = mpsc::channel();
    let mut app = AppState::new(config, fetch_rx);

    // Mount: exactly one fetch for this screen's lifetime.
    let ticket = app.mount();
    let build = move || -> Result<Arc<dyn ItemSource>, LoadError> {
        let source: Arc<dyn ItemSource> = Arc::new(HttpItemSource::new(endpoint, timeout)?);
        Ok(source)
    };
    if let Err(e) = worker::spawn_fetch_with(build, ticket, fetch_tx) {
        error!(event = "tui.main.fetch_spawn_failed", error = %e);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    if app.running {
        app.quit();
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!(event = "tui.main.exited", ok = result.is_ok());
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    let tick = app.config.scroll_throttle();
    loop {
        // 1. Apply a finished fetch (non-blocking)
        app.drain_fetches();

        // 2. Lay out and render
        let size = terminal.size()?;
        app.resize(Rect::new(0, 0, size.width, size.height));
        terminal.draw(|f| ui::draw(f, app))?;

        // 3. Sample input once per tick
        if event::poll(tick)? {
            match event::read()? {
                Event::Key(key) => input::handle_key(app, key),
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                _ => {}
            }
        }

        // 4. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
