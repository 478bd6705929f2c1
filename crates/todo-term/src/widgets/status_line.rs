//! One-line outcome of the last controller operation

use ratatui::{buffer::Buffer, layout::Rect, text::Line, widgets::Widget};

use todo_app::StatusMessage;

use crate::theme::styles;

pub struct StatusLine<'a> {
    status: Option<&'a StatusMessage>,
}

impl<'a> StatusLine<'a> {
    pub fn new(status: Option<&'a StatusMessage>) -> Self {
        Self { status }
    }
}

impl Widget for StatusLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if let Some(status) = self.status {
            Line::styled(format!(" {}", status.text), styles::status(status.level))
                .render(area, buf);
        }
    }
}
