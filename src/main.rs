//! todo-tui - a terminal todo list
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use todo_app::config::{default_config_path, init_config, load_settings};
use todo_core::prelude::*;

/// todo-tui - a terminal todo list
#[derive(Parser, Debug)]
#[command(name = "todo-tui")]
#[command(about = "A terminal todo list with pending and done sections", long_about = None)]
struct Args {
    /// Path to config.toml (defaults to the platform config dir)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,

    /// Run in headless mode (NDJSON on stdout, commands on stdin)
    #[arg(long)]
    headless: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.init_config {
        let path = args
            .config
            .or_else(default_config_path)
            .ok_or_else(|| Error::config("No config directory on this platform; pass --config"))?;
        let written =
            init_config(&path).with_context(|| format!("Writing config to {}", path.display()))?;
        eprintln!("Config: {}", written.display());
        return Ok(());
    }

    todo_tui::init_runtime()?;
    let settings = load_settings(args.config.as_deref());
    info!(icons = %settings.ui.icons, "Loaded settings");

    if args.headless {
        todo_tui::run_headless_mode(settings)
    } else {
        todo_tui::run(settings)
    }
}
