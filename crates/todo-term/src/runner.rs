//! Main TUI runner - entry point and event loop

use todo_app::config::Settings;
use todo_app::process::process_message;
use todo_app::state::AppState;
use todo_core::prelude::*;

use crate::{event, render, terminal};

/// Run the TUI until the user quits
pub fn run(settings: Settings) -> Result<()> {
    terminal::install_panic_hook();

    let mut term = terminal::init().context("Entering the alternate screen")?;
    let mut state = AppState::with_settings(settings);
    info!(todos = state.todos.len(), "TUI started");

    let result = run_loop(&mut term, &mut state);
    let restored = terminal::restore();
    info!("TUI exited");

    finish(result, restored)
}

/// The loop's own error wins over a restore failure, which is only logged.
fn finish(result: Result<()>, restored: Result<()>) -> Result<()> {
    match (result, restored) {
        (Err(e), Err(restore_err)) => {
            error!("Terminal restore also failed: {}", restore_err);
            Err(e)
        }
        (result, restored) => result.and(restored),
    }
}

/// Draw, then block on the next key; each message runs to completion.
fn run_loop(terminal: &mut ratatui::DefaultTerminal, state: &mut AppState) -> Result<()> {
    while !state.should_quit() {
        terminal
            .draw(|frame| render::view(frame, state))
            .map_err(|e| Error::terminal(e.to_string()))?;

        if let Some(message) = event::poll()? {
            process_message(state, message);
        }
    }

    Ok(())
}
