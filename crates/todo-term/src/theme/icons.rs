//! Icon set for the TUI.
//!
//! `IconSet` resolves glyphs at runtime from the configured `IconMode`.

use todo_app::config::IconMode;

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    pub fn checkbox(&self, done: bool) -> &'static str {
        match (self.mode, done) {
            (IconMode::Unicode, true) => "\u{2611}",  // ☑
            (IconMode::Unicode, false) => "\u{2610}", // ☐
            (IconMode::Ascii, true) => "[x]",
            (IconMode::Ascii, false) => "[ ]",
        }
    }

    /// Marker in front of the selected row
    pub fn pointer(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "\u{276f}", // ❯
            IconMode::Ascii => ">",
        }
    }

    pub fn close(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "\u{2717}", // ✗
            IconMode::Ascii => "x",
        }
    }

    pub fn edit(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "\u{270e}", // ✎
            IconMode::Ascii => "*",
        }
    }
}
