//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use todo_app::state::{AppState, Focus, UiMode};

use crate::theme::{icons::IconSet, palette};
use crate::{layout, widgets};

/// Render the complete UI (View function in TEA)
///
/// Pure with respect to `state`: the whole tree is rebuilt every frame.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area, state.settings.ui.show_hints);
    let icons = IconSet::new(state.settings.ui.icons);
    let mode = state.ui_mode();
    let list_focused = mode == UiMode::Normal && state.focus == Focus::List;
    let form_focused = mode == UiMode::Normal && state.focus == Focus::Form;

    frame.render_widget(widgets::MainHeader::new(&state.todos), areas.header);

    frame.render_widget(
        widgets::TodoListView::new(&state.todos, icons)
            .selected(state.selected)
            .focused(list_focused),
        areas.list,
    );

    frame.render_widget(
        widgets::TodoForm::new(&state.create_form, "Add New").focused(form_focused),
        areas.form,
    );

    frame.render_widget(widgets::StatusLine::new(state.status.as_ref()), areas.status);

    if state.settings.ui.show_hints {
        frame.render_widget(widgets::KeyHints::new(mode, state.focus), areas.hints);
    }

    // Mounted exactly while an edit target is present
    if let Some(edit) = &state.edit {
        frame.render_widget(widgets::EditModal::new(edit, icons), area);
    }
}
