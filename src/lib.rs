//! todo-tui Library
//!
//! Entry points for the terminal UI and the headless NDJSON mode.

pub mod headless;

use todo_app::config::Settings;
use todo_core::prelude::*;

pub use headless::run_headless;

/// Install error reporting and file logging (the TUI owns stdout)
pub fn init_runtime() -> Result<()> {
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;
    todo_core::logging::init()
}

/// Run the terminal UI
pub fn run(settings: Settings) -> Result<()> {
    info!("Starting terminal UI");
    let result = todo_term::run(settings);

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("todo-tui exiting");
    result
}

/// Run headless mode on stdin/stdout
pub fn run_headless_mode(settings: Settings) -> Result<()> {
    let result = run_headless(settings);

    if let Err(ref e) = result {
        error!("Headless error: {:?}", e);
    }
    result
}
