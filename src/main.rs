//! Main entry point for the shadow-console application.
//!
//! Initializes logging and the TUI terminal, creates the application state,
//! runs the main event loop, and restores the terminal on exit.

use anyhow::Result;
use shadow_console::app::App;
use shadow_console::utils;

use crate::utils::term::RestoreGuard;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging before anything else
    utils::logger::init_logging();

    let mut terminal = ratatui::init();

    // Guard ensures terminal restoration on both normal exit and panic
    let _guard = RestoreGuard::new();

    let mut app = App::new()?;
    // draw 1st frame
    app.draw(&mut terminal)?;
    // run event-driven main loop of app
    app.run(&mut terminal).await
}
