//! Footer row of key hints for the current mode and focus

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use todo_app::{Focus, UiMode};

use crate::theme::styles;

pub struct KeyHints {
    mode: UiMode,
    focus: Focus,
}

impl KeyHints {
    pub fn new(mode: UiMode, focus: Focus) -> Self {
        Self { mode, focus }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match (self.mode, self.focus) {
            (UiMode::EditModal, _) => &[("Enter", "save"), ("Esc", "close"), ("^U", "clear")],
            (UiMode::Normal, Focus::List) => &[
                ("\u{2191}\u{2193}/jk", "move"),
                ("Space", "toggle"),
                ("e", "edit"),
                ("Tab", "add new"),
                ("q", "quit"),
            ],
            (UiMode::Normal, Focus::Form) => &[
                ("Enter", "add"),
                ("^U", "clear"),
                ("Tab/Esc", "list"),
                ("^C", "quit"),
            ],
        }
    }
}

impl Widget for KeyHints {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        for (key, action) in self.hints() {
            spans.push(Span::styled(format!(" {key}"), styles::keybinding()));
            spans.push(Span::styled(format!(" {action} "), styles::text_muted()));
        }
        Line::from(spans).render(area, buf);
    }
}
