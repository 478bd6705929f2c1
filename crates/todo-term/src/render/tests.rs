//! Full-screen rendering tests

use super::*;
use crate::test_utils::TestTerminal;
use todo_app::config::{IconMode, Settings, UiSettings};
use todo_app::{process_message, InputKey, Message};
use todo_core::Todo;

fn ascii_state() -> AppState {
    AppState::with_settings(Settings {
        ui: UiSettings {
            icons: IconMode::Ascii,
            show_hints: true,
        },
        ..Settings::default()
    })
}

fn draw(term: &mut TestTerminal, state: &AppState) {
    term.draw_with(|frame| view(frame, state));
}

fn row_of(term: &TestTerminal, text: &str) -> Option<u16> {
    (0..term.area().height).find(|&y| term.line_contains(y, text))
}

#[test]
fn test_initial_screen() {
    let state = ascii_state();
    let mut term = TestTerminal::new();

    draw(&mut term, &state);

    assert!(term.buffer_contains(widgets::APP_TITLE));
    assert!(term.buffer_contains("> [ ] Write A TODO App"));
    assert!(term.buffer_contains("[x] Hang up lights"));
    assert!(term.buffer_contains("Add New"));
    assert!(term.buffer_contains("Space toggle"));
    assert!(!term.buffer_contains(widgets::EDIT_TITLE));
}

#[test]
fn test_add_new_appears_in_todo_section() {
    let mut state = ascii_state();
    process_message(&mut state, Message::AddNew(todo_core::TodoDraft::named("Buy milk")));
    let mut term = TestTerminal::new();

    draw(&mut term, &state);

    let milk = row_of(&term, "[ ] Buy milk").unwrap();
    let done_header = row_of(&term, "Done (1)").unwrap();
    assert!(milk < done_header);
    assert!(term.buffer_contains("Added #3"));
}

#[test]
fn test_toggle_moves_item_to_done_section() {
    let mut state = ascii_state();
    process_message(&mut state, Message::Key(InputKey::Char(' ')));
    let mut term = TestTerminal::new();

    draw(&mut term, &state);

    let done_header = row_of(&term, "Done (2)").unwrap();
    let toggled = row_of(&term, "[x] Write A TODO App").unwrap();
    assert!(toggled > done_header);
    assert!(term.buffer_contains("Todo (0)"));
}

#[test]
fn test_edit_modal_mounts_and_unmounts() {
    let mut state = ascii_state();
    let mut term = TestTerminal::new();

    process_message(&mut state, Message::BeginEdit(Todo::new(2, "Hang up lights", true)));
    draw(&mut term, &state);
    assert!(term.buffer_contains(widgets::EDIT_TITLE));
    assert!(term.buffer_contains("Esc close"));

    process_message(&mut state, Message::CancelEdit);
    draw(&mut term, &state);
    assert!(!term.buffer_contains(widgets::EDIT_TITLE));
}

#[test]
fn test_edit_submit_closes_modal_and_renames() {
    let mut state = ascii_state();
    let mut term = TestTerminal::new();

    process_message(&mut state, Message::Key(InputKey::Char('e')));
    process_message(&mut state, Message::Key(InputKey::CharCtrl('u')));
    for c in "Write a better app".chars() {
        process_message(&mut state, Message::Key(InputKey::Char(c)));
    }
    process_message(&mut state, Message::Key(InputKey::Enter));
    draw(&mut term, &state);

    assert!(!term.buffer_contains(widgets::EDIT_TITLE));
    assert!(term.buffer_contains("[ ] Write a better app"));
    assert!(term.buffer_contains("Updated #1"));
}

#[test]
fn test_hints_hidden_by_setting() {
    let mut state = ascii_state();
    state.settings.ui.show_hints = false;
    let mut term = TestTerminal::new();

    draw(&mut term, &state);

    assert!(!term.buffer_contains("Space toggle"));
}

#[test]
fn test_compact_terminal_renders() {
    let state = ascii_state();
    let mut term = TestTerminal::compact();

    draw(&mut term, &state);

    assert!(term.buffer_contains("Write A TODO App"));
}

#[test]
fn test_unicode_icons() {
    let state = AppState::new();
    let mut term = TestTerminal::new();

    draw(&mut term, &state);

    assert!(term.buffer_contains("\u{2611}"));
    assert!(term.buffer_contains("\u{2610}"));
}
