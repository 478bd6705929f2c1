//! Single todo row

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use todo_core::Todo;

use crate::theme::{icons::IconSet, styles};

/// One row: selection pointer, checkbox and name.
///
/// Toggle and edit act on this row's full record (see `handler::keys`).
pub struct TodoItem<'a> {
    todo: &'a Todo,
    icons: IconSet,
    selected: bool,
    focused: bool,
}

impl<'a> TodoItem<'a> {
    pub fn new(todo: &'a Todo, icons: IconSet) -> Self {
        Self {
            todo,
            icons,
            selected: false,
            focused: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Whether the containing list has focus
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn line(&self) -> Line<'a> {
        let pointer = if self.selected {
            self.icons.pointer()
        } else {
            " "
        };

        let (checkbox_style, name_style) = if self.todo.done {
            (styles::checkbox_done(), styles::done_text())
        } else {
            (styles::text_secondary(), styles::text_primary())
        };

        let line = Line::from(vec![
            Span::styled(format!(" {pointer} "), styles::accent()),
            Span::styled(self.icons.checkbox(self.todo.done), checkbox_style),
            Span::raw(" "),
            Span::styled(self.todo.name.as_str(), name_style),
        ]);

        match (self.selected, self.focused) {
            (true, true) => line.style(styles::focused_selected()),
            (true, false) => line.style(styles::unfocused_selected()),
            _ => line.style(Style::default()),
        }
    }
}

impl Widget for TodoItem<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.line().render(area, buf);
    }
}
