//! Header bar with the app title and collection counts

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use todo_core::TodoList;

use crate::theme::styles;

pub const APP_TITLE: &str = "A Todo App";

pub struct MainHeader<'a> {
    todos: &'a TodoList,
}

impl<'a> MainHeader<'a> {
    pub fn new(todos: &'a TodoList) -> Self {
        Self { todos }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let partition = self.todos.partition();
        let line = Line::from(vec![
            Span::raw(" "),
            Span::styled(APP_TITLE, styles::accent_bold()),
            Span::styled(" / ", styles::text_muted()),
            Span::styled(
                format!("{} pending", partition.pending.len()),
                styles::text_secondary(),
            ),
            Span::styled(" \u{b7} ", styles::text_muted()),
            Span::styled(
                format!("{} done", partition.done.len()),
                styles::text_secondary(),
            ),
        ]);
        line.render(inner, buf);
    }
}
