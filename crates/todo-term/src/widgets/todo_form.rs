//! Single-field todo form, used for "Add New" and inside the edit modal.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use todo_app::TodoFormState;

use crate::theme::styles;

const PLACEHOLDER: &str = "What needs doing?";
const LABEL: &str = " Name: ";

/// Text input over a `TodoFormState`, with a block cursor while focused.
pub struct TodoForm<'a> {
    form: &'a TodoFormState,
    title: &'a str,
    focused: bool,
    bordered: bool,
}

impl<'a> TodoForm<'a> {
    pub fn new(form: &'a TodoFormState, title: &'a str) -> Self {
        Self {
            form,
            title,
            focused: false,
            bordered: true,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Render the field only, for embedding in another bordered widget
    pub fn borderless(mut self) -> Self {
        self.bordered = false;
        self
    }

    fn input_line(&self, width: u16) -> Line<'static> {
        let name = self.form.name();

        let label = Span::styled(LABEL, styles::text_secondary());

        if name.is_empty() && !self.focused {
            return Line::from(vec![label, Span::styled(PLACEHOLDER, styles::text_muted())]);
        }
        if !self.focused {
            return Line::from(vec![
                label,
                Span::styled(name.to_string(), styles::text_primary()),
            ]);
        }

        let (before, at, after) = split_at_cursor(name, self.form.cursor());
        let cursor_style = Style::default().add_modifier(Modifier::REVERSED);

        // Label plus a cell for the cursor itself
        let visible = usize::from(width).saturating_sub(LABEL.width() + 1);
        let before = tail_fitting(before, visible);

        Line::from(vec![
            label,
            Span::styled(before.to_string(), styles::text_primary()),
            Span::styled(at.unwrap_or(" ").to_string(), cursor_style),
            Span::styled(after.to_string(), styles::text_primary()),
        ])
    }
}

/// Split `text` around the char at `cursor` (a char index).
fn split_at_cursor(text: &str, cursor: usize) -> (&str, Option<&str>, &str) {
    let mut indices = text.char_indices().skip(cursor);
    match indices.next() {
        Some((start, c)) => {
            let end = start + c.len_utf8();
            (&text[..start], Some(&text[start..end]), &text[end..])
        }
        None => (text, None, ""),
    }
}

/// Longest suffix of `text` whose display width fits in `width` columns.
fn tail_fitting(text: &str, width: usize) -> &str {
    if text.width() <= width {
        return text;
    }
    let mut start = text.len();
    for (i, _) in text.char_indices().rev() {
        if text[i..].width() > width {
            break;
        }
        start = i;
    }
    &text[start..]
}

impl Widget for TodoForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = if self.bordered {
            let block: Block = styles::glass_block(self.focused).title(Line::styled(
                format!(" {} ", self.title),
                if self.focused {
                    styles::accent_bold()
                } else {
                    styles::text_secondary()
                },
            ));
            let inner = block.inner(area);
            block.render(area, buf);
            inner
        } else {
            area
        };

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        Paragraph::new(self.input_line(inner.width)).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use todo_core::Todo;

    fn typed(text: &str) -> TodoFormState {
        let mut form = TodoFormState::new();
        for c in text.chars() {
            form.insert_char(c);
        }
        form
    }

    #[test]
    fn test_renders_title_and_placeholder() {
        let form = TodoFormState::new();
        let mut term = TestTerminal::with_size(40, 3);

        term.render_widget(TodoForm::new(&form, "Add New"), term.area());

        assert!(term.line_contains(0, "Add New"));
        assert!(term.line_contains(1, PLACEHOLDER));
    }

    #[test]
    fn test_focused_form_shows_text_and_cursor() {
        let form = typed("Buy milk");
        let mut term = TestTerminal::with_size(40, 3);

        term.render_widget(TodoForm::new(&form, "Add New").focused(true), term.area());

        assert!(term.line_contains(1, "Buy milk"));
        // Border, 7-cell label, 8 chars: cursor cell at x = 16
        assert!(term.line_contains(1, "Name: Buy milk"));
        let cursor = &term.buffer()[(16, 1)];
        assert!(cursor.modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_seeded_form_shows_record_name() {
        let form = TodoFormState::seeded(&Todo::new(2, "Hang up lights", true));
        let mut term = TestTerminal::with_size(40, 1);

        term.render_widget(
            TodoForm::new(&form, "Name").focused(true).borderless(),
            term.area(),
        );

        assert!(term.line_contains(0, "Hang up lights"));
    }

    #[test]
    fn test_split_at_cursor() {
        assert_eq!(split_at_cursor("abc", 0), ("", Some("a"), "bc"));
        assert_eq!(split_at_cursor("abc", 1), ("a", Some("b"), "c"));
        assert_eq!(split_at_cursor("abc", 3), ("abc", None, ""));
        assert_eq!(split_at_cursor("café", 3), ("caf", Some("é"), ""));
    }

    #[test]
    fn test_tail_fitting() {
        assert_eq!(tail_fitting("hello", 10), "hello");
        assert_eq!(tail_fitting("hello", 3), "llo");
        assert_eq!(tail_fitting("hello", 0), "");
        // Wide chars take two columns
        assert_eq!(tail_fitting("日本語", 4), "本語");
        assert_eq!(tail_fitting("日本語", 3), "語");
    }

    #[test]
    fn test_long_input_keeps_cursor_visible() {
        let form = typed("a very long todo name that overflows");
        let mut term = TestTerminal::with_size(20, 3);

        term.render_widget(TodoForm::new(&form, "Add New").focused(true), term.area());

        assert!(term.line_contains(1, "overflows"));
    }
}
