//! Headless mode runner - command loop without TUI

use std::io::{self, BufRead, Write};

use todo_app::config::Settings;
use todo_app::{process_message, AppState, Message};
use todo_core::prelude::*;
use todo_core::TodoDraft;

use super::{parse_command, Command, HeadlessEvent};

/// Run in headless mode over stdin/stdout
pub fn run_headless(settings: Settings) -> Result<()> {
    info!("═══════════════════════════════════════════════════════");
    info!("todo-tui starting in HEADLESS mode");
    info!("═══════════════════════════════════════════════════════");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = run_headless_with(settings, stdin.lock(), &mut stdout.lock());

    info!("Headless mode exiting");
    result
}

/// Headless loop over any line source and sink.
///
/// Emits a snapshot first, then one or more events per command. A recoverable
/// failure produces an `error` event and the loop continues; anything else is
/// reported once and ends the loop. End of input is treated as `quit`.
pub fn run_headless_with<R: BufRead, W: Write>(
    settings: Settings,
    input: R,
    output: &mut W,
) -> Result<()> {
    let mut state = AppState::with_settings(settings);
    HeadlessEvent::snapshot(&state).emit(output)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        debug!("headless command: {}", line);

        match parse_command(&line).and_then(|cmd| execute(&mut state, cmd)) {
            Ok(event) => event.emit(output)?,
            Err(e) => report(e, output)?,
        }

        if state.should_quit() {
            return Ok(());
        }
    }

    info!("stdin closed");
    process_message(&mut state, Message::Quit);
    HeadlessEvent::quit().emit(output)?;
    Ok(())
}

/// Route one command through `update` and describe the outcome.
fn execute(state: &mut AppState, command: Command) -> Result<HeadlessEvent> {
    match command {
        Command::List => Ok(HeadlessEvent::snapshot(state)),

        Command::Add(name) => {
            let before = state.todos.len();
            process_message(state, Message::AddNew(TodoDraft::named(name)));
            // add_new appends, so a new record is always last
            match state.todos.as_slice().last() {
                Some(todo) if state.todos.len() > before => {
                    Ok(HeadlessEvent::todo_added(todo.clone()))
                }
                _ => Err(rejection(state)),
            }
        }

        Command::Toggle(id) => {
            let toggled = state
                .todos
                .get(id)
                .map(|t| t.toggled())
                .ok_or(Error::todo_not_found(id))?;
            process_message(state, Message::ApplyMutation(toggled));
            updated(state, id)
        }

        Command::Edit(id) => {
            let todo = state.todos.get(id).cloned().ok_or(Error::todo_not_found(id))?;
            process_message(state, Message::BeginEdit(todo.clone()));
            Ok(HeadlessEvent::edit_started(todo))
        }

        Command::Rename(name) => {
            let id = state
                .edit_target()
                .map(|t| t.id)
                .ok_or_else(|| Error::command("rename requires an open edit (use `edit <id>`)"))?;
            process_message(state, Message::FormSetName(name));
            process_message(state, Message::SubmitForm);
            if state.edit_target().is_some() {
                return Err(rejection(state));
            }
            updated(state, id)
        }

        Command::Close => {
            process_message(state, Message::CancelEdit);
            Ok(HeadlessEvent::edit_closed())
        }

        Command::Quit => {
            process_message(state, Message::Quit);
            Ok(HeadlessEvent::quit())
        }
    }
}

/// Emit an `error` event; only recoverable errors let the loop go on.
fn report<W: Write>(err: Error, output: &mut W) -> Result<()> {
    HeadlessEvent::error(&err).emit(output)?;
    if err.is_recoverable() {
        warn!("headless command failed: {}", err);
        Ok(())
    } else {
        error!("headless loop stopping: {}", err);
        Err(err)
    }
}

fn updated(state: &AppState, id: todo_core::TodoId) -> Result<HeadlessEvent> {
    state
        .todos
        .get(id)
        .cloned()
        .map(HeadlessEvent::todo_updated)
        .ok_or(Error::todo_not_found(id))
}

/// The controller refused a command; its reason is on the status line.
fn rejection(state: &AppState) -> Error {
    let reason = state
        .status
        .as_ref()
        .map(|s| s.text.clone())
        .unwrap_or_else(|| "rejected".to_string());
    Error::command(reason)
}
