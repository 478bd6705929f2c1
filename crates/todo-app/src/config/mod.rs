//! Configuration file parsing for todo-tui
//!
//! Supports `<config_dir>/todo-tui/config.toml` or an explicit `--config` path.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config, load_settings, read_settings};
pub use types::*;
