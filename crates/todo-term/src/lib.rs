//! todo-term - Terminal UI for todo-tui
//!
//! This crate provides the ratatui-based terminal interface: event polling,
//! the widget tree, and the synchronous draw/poll loop driving `todo-app`.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
