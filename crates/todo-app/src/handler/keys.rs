//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Focus, UiMode};

/// Convert key events to messages based on current UI mode and focus
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit with Ctrl+C everywhere
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.ui_mode() {
        UiMode::EditModal => handle_key_edit_modal(key),
        UiMode::Normal => match state.focus {
            Focus::List => handle_key_list(key),
            Focus::Form => handle_key_create_form(key),
        },
    }
}

/// Handle key events while the todo list has focus
fn handle_key_list(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),

        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNext),
        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPrevious),
        InputKey::Home | InputKey::Char('g') => Some(Message::SelectFirst),
        InputKey::End | InputKey::Char('G') => Some(Message::SelectLast),

        InputKey::Char(' ' | 'x') => Some(Message::ToggleSelected),
        InputKey::Char('e') | InputKey::Enter => Some(Message::EditSelected),

        InputKey::Tab | InputKey::Char('a') => Some(Message::FocusNext),
        InputKey::BackTab => Some(Message::FocusPrevious),

        _ => None,
    }
}

/// Handle key events while the "Add New" form has focus
fn handle_key_create_form(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::FocusNext),
        InputKey::Tab => Some(Message::FocusNext),
        InputKey::BackTab => Some(Message::FocusPrevious),
        _ => handle_key_form_field(key),
    }
}

/// Handle key events in the edit modal
fn handle_key_edit_modal(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::CancelEdit),
        _ => handle_key_form_field(key),
    }
}

/// Text-field editing shared by both forms
fn handle_key_form_field(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::SubmitForm),
        InputKey::Backspace => Some(Message::FormBackspace),
        InputKey::Delete => Some(Message::FormDelete),
        InputKey::Left => Some(Message::FormCursorLeft),
        InputKey::Right => Some(Message::FormCursorRight),
        InputKey::Home => Some(Message::FormCursorHome),
        InputKey::End => Some(Message::FormCursorEnd),
        InputKey::CharCtrl('u') => Some(Message::FormClear),
        _ => key.as_text_input().map(Message::FormInsert),
    }
}
