//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppState, StatusMessage};
use todo_core::prelude::*;

use super::{keys::handle_key, UpdateResult};

const NAME_REQUIRED: &str = "Name is required";

/// Process a message and update state
/// Returns an optional follow-up message
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Quit => {
            info!("Quit requested");
            state.request_quit();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Collection Operations
        // ─────────────────────────────────────────────────────────
        Message::ApplyMutation(todo) => {
            state.apply_mutation(todo);
            UpdateResult::none()
        }

        Message::AddNew(draft) => {
            if let Err(e) = state.add_new(draft) {
                debug!("AddNew left the collection unchanged: {}", e);
            }
            UpdateResult::none()
        }

        Message::BeginEdit(todo) => {
            state.begin_edit(todo);
            UpdateResult::none()
        }

        Message::CancelEdit => {
            state.cancel_edit();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // List Navigation
        // ─────────────────────────────────────────────────────────
        Message::SelectNext => {
            state.select_next();
            UpdateResult::none()
        }
        Message::SelectPrevious => {
            state.select_previous();
            UpdateResult::none()
        }
        Message::SelectFirst => {
            state.select_first();
            UpdateResult::none()
        }
        Message::SelectLast => {
            state.select_last();
            UpdateResult::none()
        }

        Message::ToggleSelected => match state.selected_todo() {
            Some(todo) => UpdateResult::message(Message::ApplyMutation(todo.toggled())),
            None => {
                debug!("ToggleSelected with no selection");
                UpdateResult::none()
            }
        },

        Message::EditSelected => match state.selected_todo() {
            Some(todo) => UpdateResult::message(Message::BeginEdit(todo.clone())),
            None => {
                debug!("EditSelected with no selection");
                UpdateResult::none()
            }
        },

        // ─────────────────────────────────────────────────────────
        // Focus
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => {
            state.focus = state.focus.next();
            UpdateResult::none()
        }
        Message::FocusPrevious => {
            state.focus = state.focus.previous();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Form Messages
        // ─────────────────────────────────────────────────────────
        Message::FormInsert(c) => {
            state.active_form_mut().insert_char(c);
            UpdateResult::none()
        }
        Message::FormBackspace => {
            state.active_form_mut().backspace();
            UpdateResult::none()
        }
        Message::FormDelete => {
            state.active_form_mut().delete();
            UpdateResult::none()
        }
        Message::FormCursorLeft => {
            state.active_form_mut().move_left();
            UpdateResult::none()
        }
        Message::FormCursorRight => {
            state.active_form_mut().move_right();
            UpdateResult::none()
        }
        Message::FormCursorHome => {
            state.active_form_mut().move_home();
            UpdateResult::none()
        }
        Message::FormCursorEnd => {
            state.active_form_mut().move_end();
            UpdateResult::none()
        }
        Message::FormClear => {
            state.active_form_mut().clear();
            UpdateResult::none()
        }
        Message::FormSetName(name) => {
            state.active_form_mut().set_name(name);
            UpdateResult::none()
        }

        Message::SubmitForm => handle_submit_form(state),
    }
}

/// Submit the active form.
///
/// The edit modal's draft carries the seeded id and becomes a full
/// replacement record; the "Add New" draft goes through `AddNew`.
fn handle_submit_form(state: &mut AppState) -> UpdateResult {
    let editing = state.edit.is_some();

    let Some(draft) = state.active_form_mut().submit() else {
        warn!("Form submit rejected: blank name");
        state.status = Some(StatusMessage::warning(NAME_REQUIRED));
        return UpdateResult::none();
    };

    if !editing {
        return UpdateResult::message(Message::AddNew(draft));
    }

    match draft.into_todo() {
        Some(todo) => UpdateResult::message(Message::ApplyMutation(todo)),
        None => {
            // A seeded form always carries an id
            warn!("Edit submit produced a draft without an id");
            UpdateResult::none()
        }
    }
}
