//! Edit modal: header with a close affordance, the seeded edit form and
//! a hint row, centred over a dimmed background.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Widget,
};

use todo_app::EditModalState;

use crate::theme::{icons::IconSet, styles};

use super::modal_overlay;
use super::TodoForm;

const MODAL_WIDTH: u16 = 56;
/// Border, meta row, field row, spacer, hint row, border
const MODAL_HEIGHT: u16 = 6;

pub const EDIT_TITLE: &str = "Edit Todo";

/// Renders over the full screen area; only drawn while an edit target exists.
pub struct EditModal<'a> {
    edit: &'a EditModalState,
    icons: IconSet,
}

impl<'a> EditModal<'a> {
    pub fn new(edit: &'a EditModalState, icons: IconSet) -> Self {
        Self { edit, icons }
    }

    /// Where the modal sits within `area`
    pub fn modal_rect(area: Rect) -> Rect {
        modal_overlay::centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area)
    }

    fn meta_line(&self) -> Line<'static> {
        let target = &self.edit.target;
        let state = if target.done { "done" } else { "pending" };
        Line::from(vec![
            Span::styled(format!(" {} ", self.icons.edit()), styles::accent()),
            Span::styled(format!("#{}", target.id), styles::text_secondary()),
            Span::styled(format!(" \u{b7} {state}"), styles::text_muted()),
        ])
    }

    fn hint_line() -> Line<'static> {
        Line::from(vec![
            Span::styled(" Enter", styles::keybinding()),
            Span::styled(" save  ", styles::text_muted()),
            Span::styled("Esc", styles::keybinding()),
            Span::styled(" close", styles::text_muted()),
        ])
    }
}

impl Widget for EditModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        modal_overlay::dim_background(buf, area);

        let modal = Self::modal_rect(area);
        modal_overlay::render_shadow(buf, modal);
        modal_overlay::clear_area(buf, modal);

        let block = styles::modal_block()
            .title(Line::styled(format!(" {EDIT_TITLE} "), styles::accent_bold()))
            .title_top(
                Line::styled(format!(" {} ", self.icons.close()), styles::close_button())
                    .right_aligned(),
            );
        let inner = block.inner(modal);
        block.render(modal, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let [meta, field, _, hints] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        self.meta_line().render(meta, buf);
        TodoForm::new(&self.edit.form, "Name")
            .focused(true)
            .borderless()
            .render(field, buf);
        Self::hint_line().render(hints, buf);
    }
}
