//! Headless mode - NDJSON event output instead of the TUI
//!
//! Commands are read from stdin one per line and routed through the same
//! `update` function as the TUI. Every outcome is written to stdout as one
//! JSON object per line, tagged by an `"event"` field.
//!
//! ```json
//! {"event":"snapshot","todos":[{"id":1,"name":"Write A TODO App","done":false}],"edit_target":null,"timestamp":1704700001000}
//! {"event":"todo_added","todo":{"id":3,"name":"Buy milk","done":false},"timestamp":1704700002000}
//! ```

pub mod command;
pub mod runner;

use std::io::Write;

use chrono::Utc;
use serde::Serialize;

use todo_app::AppState;
use todo_core::prelude::*;
use todo_core::Todo;

pub use command::{parse_command, Command};
pub use runner::{run_headless, run_headless_with};

/// Events emitted in headless mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Full collection in iteration order, plus the open edit target
    Snapshot {
        todos: Vec<Todo>,
        edit_target: Option<Todo>,
        timestamp: i64,
    },

    TodoAdded { todo: Todo, timestamp: i64 },

    /// A record was replaced (toggle or edit commit)
    TodoUpdated { todo: Todo, timestamp: i64 },

    EditStarted { todo: Todo, timestamp: i64 },

    EditClosed { timestamp: i64 },

    Quit { timestamp: i64 },

    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Write this event as one NDJSON line and flush
    pub fn emit<W: Write>(&self, out: &mut W) -> Result<()> {
        serde_json::to_writer(&mut *out, self)?;
        out.write_all(b"\n")?;
        out.flush()?;
        Ok(())
    }

    /// Current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn snapshot(state: &AppState) -> Self {
        Self::Snapshot {
            todos: state.todos.as_slice().to_vec(),
            edit_target: state.edit_target().cloned(),
            timestamp: Self::now(),
        }
    }

    pub fn todo_added(todo: Todo) -> Self {
        Self::TodoAdded {
            todo,
            timestamp: Self::now(),
        }
    }

    pub fn todo_updated(todo: Todo) -> Self {
        Self::TodoUpdated {
            todo,
            timestamp: Self::now(),
        }
    }

    pub fn edit_started(todo: Todo) -> Self {
        Self::EditStarted {
            todo,
            timestamp: Self::now(),
        }
    }

    pub fn edit_closed() -> Self {
        Self::EditClosed {
            timestamp: Self::now(),
        }
    }

    pub fn quit() -> Self {
        Self::Quit {
            timestamp: Self::now(),
        }
    }

    pub fn error(err: &Error) -> Self {
        Self::Error {
            message: err.to_string(),
            fatal: err.is_fatal(),
            timestamp: Self::now(),
        }
    }
}
