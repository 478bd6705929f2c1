//! todo-app - Application state and update logic for todo-tui
//!
//! Implements the TEA (The Elm Architecture) pattern: `AppState` is the
//! model, `handler::update` derives the next state from a `Message`, and
//! the terminal crate renders `AppState` read-only. Configuration loading
//! lives here too.

pub mod config;
pub mod form;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod state;

// Re-export primary types
pub use form::TodoFormState;
pub use handler::{update, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use process::process_message;
pub use state::{AppState, EditModalState, Focus, StatusLevel, StatusMessage, UiMode};
