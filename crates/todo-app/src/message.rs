//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use todo_core::{Todo, TodoDraft};

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Quit immediately
    Quit,

    // ─────────────────────────────────────────────────────────
    // Collection Operations
    // ─────────────────────────────────────────────────────────
    /// Replace-or-insert a full record (toggle and edit commit)
    ApplyMutation(Todo),
    /// Create a new record from a submitted draft
    AddNew(TodoDraft),
    /// Open the edit modal for a record
    BeginEdit(Todo),
    /// Close the edit modal without committing
    CancelEdit,

    // ─────────────────────────────────────────────────────────
    // List Navigation
    // ─────────────────────────────────────────────────────────
    SelectNext,
    SelectPrevious,
    SelectFirst,
    SelectLast,
    /// Toggle the selected row (resolves to `ApplyMutation`)
    ToggleSelected,
    /// Edit the selected row (resolves to `BeginEdit`)
    EditSelected,

    // ─────────────────────────────────────────────────────────
    // Focus
    // ─────────────────────────────────────────────────────────
    FocusNext,
    FocusPrevious,

    // ─────────────────────────────────────────────────────────
    // Form Messages
    // ─────────────────────────────────────────────────────────
    // These target the edit modal's form while it is open and the
    // "Add New" form otherwise.
    FormInsert(char),
    FormBackspace,
    FormDelete,
    FormCursorLeft,
    FormCursorRight,
    FormCursorHome,
    FormCursorEnd,
    FormClear,
    /// Replace the whole name field
    FormSetName(String),
    /// Submit the active form (resolves to `AddNew` or `ApplyMutation`)
    SubmitForm,
}
