//! Terminal User Interface Module
//!
//! Interactive query form for the developer-tools research agent.
//! Built with Ratatui.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │        Developer Research Agent  http://localhost:8000/...      │
//! ├──────────────────────────────────────────────┬──────────────────┤
//! │ Query: > open source feature flag services   │   Ask Agent      │
//! ├──────────────────────────────────────────────┴──────────────────┤
//! │ Results                                                         │
//! │  Analysis: ...                                                  │
//! │  Companies:                                                     │
//! │    • Name: ...                                                  │
//! └─────────────────────────────────────────────────────────────────┘
//!  Ready │ [Enter] Ask [Ctrl+L] Clear [Ctrl+T] Theme [Ctrl+Q] Quit
//! ```

pub mod app;
pub mod event;
pub mod theme;
pub mod ui;
pub mod widgets;

pub use app::{App, AppEvent, View};
pub use event::{AppAction, EventHandler};

use crate::client::SharedAgentClient;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use tracing::{error, info};

/// Type alias for our terminal backend
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> anyhow::Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal(terminal: &mut Tui) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run the TUI application
pub async fn run(client: SharedAgentClient, trim_query: bool) -> anyhow::Result<()> {
    info!(endpoint = %client.endpoint(), "Starting TUI mode");

    let mut terminal = init_terminal()?;
    let mut app = App::new(client, trim_query);
    let mut events = EventHandler::new(std::time::Duration::from_millis(100));

    let result = run_app(&mut terminal, &mut app, &mut events).await;

    if let Err(e) = restore_terminal(&mut terminal) {
        error!("Failed to restore terminal: {}", e);
    }

    result
}

/// Main application loop
async fn run_app(
    terminal: &mut Tui,
    app: &mut App,
    events: &mut EventHandler,
) -> anyhow::Result<()> {
    loop {
        let size = terminal.size()?;
        let inner = ui::results_inner(ratatui::layout::Rect::new(0, 0, size.width, size.height));
        app.update_scroll_bounds(inner.width, inner.height);

        terminal.draw(|frame| ui::render(frame, app))?;

        // Ticks arrive every 100ms, so completions are picked up promptly
        let Some(action) = events.next().await else {
            break;
        };
        app.handle_action(action);
        app.poll_events();

        if app.should_quit {
            break;
        }
    }

    info!("TUI exited normally");
    Ok(())
}
