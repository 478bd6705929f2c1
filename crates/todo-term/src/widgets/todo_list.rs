//! The todo list: a "Todo" section of pending items and a "Done" section.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use todo_core::{Todo, TodoId, TodoList};

use crate::theme::{icons::IconSet, styles};

use super::TodoItem;

const PENDING_TITLE: &str = "Todo";
const DONE_TITLE: &str = "Done";

/// Both sections in one bordered panel.
///
/// Rows are rendered in display order (pending then done), each section in
/// collection iteration order. Scrolls to keep the selected row visible.
pub struct TodoListView<'a> {
    todos: &'a TodoList,
    selected: Option<TodoId>,
    focused: bool,
    icons: IconSet,
}

impl<'a> TodoListView<'a> {
    pub fn new(todos: &'a TodoList, icons: IconSet) -> Self {
        Self {
            todos,
            selected: None,
            focused: false,
            icons,
        }
    }

    pub fn selected(mut self, selected: Option<TodoId>) -> Self {
        self.selected = selected;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// All rows plus the index of the selected one.
    fn lines(&self) -> (Vec<Line<'a>>, Option<usize>) {
        let partition = self.todos.partition();
        let mut lines = Vec::with_capacity(self.todos.len() + 3);
        let mut selected_line = None;

        lines.push(self.section_header(PENDING_TITLE, partition.pending.len()));
        self.push_section(&partition.pending, &mut lines, &mut selected_line);

        lines.push(Line::default());

        lines.push(self.section_header(DONE_TITLE, partition.done.len()));
        self.push_section(&partition.done, &mut lines, &mut selected_line);

        (lines, selected_line)
    }

    fn section_header(&self, title: &'static str, count: usize) -> Line<'a> {
        Line::from(vec![
            Span::styled(format!(" {title}"), styles::section_title()),
            Span::styled(format!(" ({count})"), styles::text_muted()),
        ])
    }

    fn push_section(
        &self,
        items: &[&'a Todo],
        lines: &mut Vec<Line<'a>>,
        selected_line: &mut Option<usize>,
    ) {
        if items.is_empty() {
            lines.push(Line::styled("     nothing here", styles::text_muted()));
            return;
        }

        for &todo in items {
            let selected = self.selected == Some(todo.id);
            if selected {
                *selected_line = Some(lines.len());
            }
            let item = TodoItem::new(todo, self.icons)
                .selected(selected)
                .focused(self.focused);
            lines.push(item.line());
        }
    }
}

/// First visible row so that `selected` stays in a window of `height` rows.
fn scroll_offset(selected: Option<usize>, height: usize) -> usize {
    match selected {
        Some(line) if height > 0 && line >= height => line + 1 - height,
        _ => 0,
    }
}

impl Widget for TodoListView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused).title(Line::styled(
            format!(" Todos ({}) ", self.todos.len()),
            styles::accent_bold(),
        ));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let (lines, selected_line) = self.lines();
        let offset = scroll_offset(selected_line, inner.height as usize);
        let offset = u16::try_from(offset).unwrap_or(u16::MAX);

        Paragraph::new(lines)
            .scroll((offset, 0))
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use todo_app::config::IconMode;

    fn ascii() -> IconSet {
        IconSet::new(IconMode::Ascii)
    }

    fn row_of(term: &TestTerminal, text: &str) -> Option<u16> {
        (0..term.area().height).find(|&y| term.line_contains(y, text))
    }

    #[test]
    fn test_seed_renders_in_two_sections() {
        let todos = TodoList::seeded();
        let mut term = TestTerminal::with_size(40, 10);

        term.render_widget(TodoListView::new(&todos, ascii()), term.area());

        let todo_header = row_of(&term, "Todo (1)").unwrap();
        let pending = row_of(&term, "[ ] Write A TODO App").unwrap();
        let done_header = row_of(&term, "Done (1)").unwrap();
        let done = row_of(&term, "[x] Hang up lights").unwrap();

        assert!(todo_header < pending);
        assert!(pending < done_header);
        assert!(done_header < done);
    }

    #[test]
    fn test_sections_follow_iteration_order() {
        let todos: TodoList = [
            Todo::new(5, "e", true),
            Todo::new(3, "c", false),
            Todo::new(4, "d", true),
            Todo::new(1, "a", false),
        ]
        .into_iter()
        .collect();
        let mut term = TestTerminal::with_size(30, 12);

        term.render_widget(TodoListView::new(&todos, ascii()), term.area());

        assert!(row_of(&term, "[ ] c").unwrap() < row_of(&term, "[ ] a").unwrap());
        assert!(row_of(&term, "[x] e").unwrap() < row_of(&term, "[x] d").unwrap());
    }

    #[test]
    fn test_empty_section_placeholder() {
        let todos: TodoList = [Todo::new(1, "only", false)].into_iter().collect();
        let mut term = TestTerminal::with_size(30, 8);

        term.render_widget(TodoListView::new(&todos, ascii()), term.area());

        assert!(term.buffer_contains("Done (0)"));
        assert!(term.buffer_contains("nothing here"));
    }

    #[test]
    fn test_selected_row_has_pointer() {
        let todos = TodoList::seeded();
        let mut term = TestTerminal::with_size(40, 10);

        term.render_widget(
            TodoListView::new(&todos, ascii()).selected(Some(2)).focused(true),
            term.area(),
        );

        assert!(term.buffer_contains("> [x] Hang up lights"));
        assert!(!term.buffer_contains("> [ ] Write A TODO App"));
    }

    #[test]
    fn test_scrolls_to_keep_selection_visible() {
        let todos: TodoList = (1..=20)
            .map(|id| Todo::new(id, format!("item {id}"), false))
            .collect();
        let mut term = TestTerminal::with_size(30, 8);

        term.render_widget(
            TodoListView::new(&todos, ascii()).selected(Some(20)),
            term.area(),
        );

        assert!(term.buffer_contains("> [ ] item 20"));
        assert!(!term.buffer_contains("item 1 "));
    }

    #[test]
    fn test_scroll_offset() {
        assert_eq!(scroll_offset(None, 5), 0);
        assert_eq!(scroll_offset(Some(4), 5), 0);
        assert_eq!(scroll_offset(Some(5), 5), 1);
        assert_eq!(scroll_offset(Some(9), 5), 5);
        assert_eq!(scroll_offset(Some(3), 0), 0);
    }
}
