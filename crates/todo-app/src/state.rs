//! Application state (Model in TEA pattern)
//!
//! `AppState` is the single owner of the todo collection and the edit
//! target. Views receive it read-only; only `handler::update` mutates it.

use todo_core::prelude::*;
use todo_core::{Todo, TodoDraft, TodoId, TodoList};

use crate::config::Settings;
use crate::form::TodoFormState;

/// Which screen layer receives input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// List and "Add New" form
    Normal,
    /// Edit modal open on top of the list
    EditModal,
}

/// Focused pane in `UiMode::Normal`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    List,
    Form,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::List => Focus::Form,
            Focus::Form => Focus::List,
        }
    }

    pub fn previous(self) -> Self {
        // Two panes: previous and next coincide
        self.next()
    }
}

/// The open edit modal: the target record and the form seeded from it.
///
/// Exists exactly while an edit target is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditModalState {
    pub target: Todo,
    pub form: TodoFormState,
}

impl EditModalState {
    pub fn new(target: Todo) -> Self {
        let form = TodoFormState::seeded(&target);
        Self { target, form }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// One-line outcome of the last operation, shown in the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Info,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Warning,
            text: text.into(),
        }
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug, Clone)]
pub struct AppState {
    /// The authoritative collection
    pub todos: TodoList,

    /// Edit modal; `Some` iff an edit target is present
    pub edit: Option<EditModalState>,

    /// The "Add New" form
    pub create_form: TodoFormState,

    pub focus: Focus,

    /// Selected row, keyed by id so it survives reordering
    pub selected: Option<TodoId>,

    pub status: Option<StatusMessage>,

    pub settings: Settings,

    quitting: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self::with_todos(TodoList::seeded(), settings)
    }

    pub fn with_todos(todos: TodoList, settings: Settings) -> Self {
        let selected = todos.display_order().first().map(|t| t.id);
        Self {
            todos,
            edit: None,
            create_form: TodoFormState::new(),
            focus: Focus::default(),
            selected,
            status: None,
            settings,
            quitting: false,
        }
    }

    pub fn ui_mode(&self) -> UiMode {
        if self.edit.is_some() {
            UiMode::EditModal
        } else {
            UiMode::Normal
        }
    }

    pub fn edit_target(&self) -> Option<&Todo> {
        self.edit.as_ref().map(|e| &e.target)
    }

    /// The form keystrokes go to: the modal's while it is open.
    pub fn active_form(&self) -> &TodoFormState {
        match &self.edit {
            Some(edit) => &edit.form,
            None => &self.create_form,
        }
    }

    pub fn active_form_mut(&mut self) -> &mut TodoFormState {
        match &mut self.edit {
            Some(edit) => &mut edit.form,
            None => &mut self.create_form,
        }
    }

    pub fn request_quit(&mut self) {
        self.quitting = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }

    // ─────────────────────────────────────────────────────────
    // Collection Operations
    // ─────────────────────────────────────────────────────────

    /// Replace-or-insert `todo` and close any open edit.
    pub fn apply_mutation(&mut self, todo: Todo) {
        let row_before = self.selected_index();
        let id = todo.id;
        let is_new = !self.todos.contains(id);

        debug!(id, name = %todo.name, done = todo.done, "apply_mutation");
        self.todos.apply_mutation(todo);
        self.edit = None;

        if !self.settings.behavior.follow_toggled && self.selected == Some(id) {
            if let Some(row) = row_before {
                self.select_row(row);
            }
        }
        self.clamp_selection();

        self.status = Some(StatusMessage::info(if is_new {
            format!("Inserted #{id}")
        } else {
            format!("Updated #{id}")
        }));
    }

    /// Create a record from `draft`; id assigned, `done` forced false.
    pub fn add_new(&mut self, draft: TodoDraft) -> Result<Todo> {
        match self.todos.add_new(draft) {
            Ok(todo) => {
                debug!(id = todo.id, name = %todo.name, "add_new");
                if self.selected.is_none() {
                    self.selected = Some(todo.id);
                }
                self.status = Some(StatusMessage::info(format!("Added #{}", todo.id)));
                Ok(todo)
            }
            Err(e) => {
                warn!("add_new rejected: {}", e);
                self.status = Some(StatusMessage::warning(e.to_string()));
                Err(e)
            }
        }
    }

    pub fn begin_edit(&mut self, todo: Todo) {
        debug!(id = todo.id, "begin_edit");
        self.edit = Some(EditModalState::new(todo));
    }

    pub fn cancel_edit(&mut self) {
        if let Some(edit) = self.edit.take() {
            debug!(id = edit.target.id, "cancel_edit");
        }
    }

    // ─────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────

    /// Row of the selected todo in display order (pending, then done).
    pub fn selected_index(&self) -> Option<usize> {
        let id = self.selected?;
        self.todos.display_order().iter().position(|t| t.id == id)
    }

    pub fn selected_todo(&self) -> Option<&Todo> {
        self.selected.and_then(|id| self.todos.get(id))
    }

    pub fn select_row(&mut self, row: usize) {
        let order = self.todos.display_order();
        if order.is_empty() {
            self.selected = None;
            return;
        }
        let row = row.min(order.len() - 1);
        self.selected = Some(order[row].id);
    }

    pub fn select_next(&mut self) {
        match self.selected_index() {
            Some(row) => self.select_row(row + 1),
            None => self.select_row(0),
        }
    }

    pub fn select_previous(&mut self) {
        match self.selected_index() {
            Some(row) => self.select_row(row.saturating_sub(1)),
            None => self.select_row(0),
        }
    }

    pub fn select_first(&mut self) {
        self.select_row(0);
    }

    pub fn select_last(&mut self) {
        self.select_row(usize::MAX);
    }

    /// Point the selection at an existing row, or clear it if there are none.
    pub fn clamp_selection(&mut self) {
        if self.selected_index().is_none() {
            self.select_row(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BehaviorSettings;

    #[test]
    fn test_new_state_is_seeded_without_edit_target() {
        let state = AppState::new();
        assert_eq!(state.todos, TodoList::seeded());
        assert_eq!(state.edit_target(), None);
        assert_eq!(state.ui_mode(), UiMode::Normal);
        assert_eq!(state.focus, Focus::List);
        assert_eq!(state.selected, Some(1));
        assert!(!state.should_quit());
    }

    #[test]
    fn test_begin_edit_sets_target_and_seeds_form() {
        let mut state = AppState::new();
        let todo = Todo::new(2, "Hang up lights", true);

        state.begin_edit(todo.clone());

        assert_eq!(state.edit_target(), Some(&todo));
        assert_eq!(state.ui_mode(), UiMode::EditModal);
        assert_eq!(state.active_form().name(), "Hang up lights");
    }

    #[test]
    fn test_apply_mutation_clears_edit_target() {
        let mut state = AppState::new();
        state.begin_edit(Todo::new(2, "Hang up lights", true));

        state.apply_mutation(Todo::new(2, "Hang lights up", true));

        assert_eq!(state.edit_target(), None);
        assert_eq!(state.todos.get(2), Some(&Todo::new(2, "Hang lights up", true)));
    }

    #[test]
    fn test_apply_mutation_without_edit_target_is_fine() {
        let mut state = AppState::new();
        state.apply_mutation(Todo::new(1, "Write A TODO App", true));
        assert_eq!(state.edit_target(), None);
    }

    #[test]
    fn test_cancel_edit_leaves_collection_unchanged() {
        let mut state = AppState::new();
        let before = state.todos.clone();

        state.begin_edit(Todo::new(2, "Hang up lights", true));
        state.cancel_edit();

        assert_eq!(state.todos, before);
        assert_eq!(state.edit_target(), None);
    }

    #[test]
    fn test_add_new_does_not_touch_edit_target() {
        let mut state = AppState::new();
        let target = Todo::new(1, "Write A TODO App", false);
        state.begin_edit(target.clone());

        state.add_new(TodoDraft::named("Buy milk")).unwrap();

        assert_eq!(state.edit_target(), Some(&target));
        assert_eq!(state.todos.get(3), Some(&Todo::new(3, "Buy milk", false)));
    }

    #[test]
    fn test_add_new_on_empty_collection_reports_warning() {
        let mut state = AppState::with_todos(TodoList::new(), Settings::default());

        let result = state.add_new(TodoDraft::named("Buy milk"));

        assert!(matches!(result, Err(Error::EmptyCollection)));
        assert!(state.todos.is_empty());
        assert_eq!(
            state.status.as_ref().map(|s| s.level),
            Some(StatusLevel::Warning)
        );
    }

    #[test]
    fn test_active_form_follows_modal() {
        let mut state = AppState::new();
        state.create_form.set_name("draft");
        assert_eq!(state.active_form().name(), "draft");

        state.begin_edit(Todo::new(1, "Write A TODO App", false));
        assert_eq!(state.active_form().name(), "Write A TODO App");

        state.cancel_edit();
        assert_eq!(state.active_form().name(), "draft");
    }

    #[test]
    fn test_selection_navigation_in_display_order() {
        let mut state = AppState::new();
        state.add_new(TodoDraft::named("Buy milk")).unwrap();
        // Display order: 1, 3 (pending), 2 (done)
        assert_eq!(state.selected, Some(1));

        state.select_next();
        assert_eq!(state.selected, Some(3));
        state.select_next();
        assert_eq!(state.selected, Some(2));
        state.select_next();
        assert_eq!(state.selected, Some(2));

        state.select_previous();
        assert_eq!(state.selected, Some(3));
        state.select_first();
        assert_eq!(state.selected, Some(1));
        state.select_last();
        assert_eq!(state.selected, Some(2));
    }

    #[test]
    fn test_toggle_selection_follows_item_by_default() {
        let mut state = AppState::new();
        state.apply_mutation(Todo::new(1, "Write A TODO App", true));
        assert_eq!(state.selected, Some(1));
    }

    #[test]
    fn test_toggle_selection_stays_on_row_when_not_following() {
        let settings = Settings {
            behavior: BehaviorSettings {
                follow_toggled: false,
            },
            ..Settings::default()
        };
        let mut state = AppState::with_settings(settings);
        state.add_new(TodoDraft::named("Buy milk")).unwrap();
        // Display order: 1, 3, 2 with row 0 selected
        state.apply_mutation(Todo::new(1, "Write A TODO App", true));
        // Display order: 3, 2, 1
        assert_eq!(state.selected, Some(3));
    }

    #[test]
    fn test_empty_collection_has_no_selection() {
        let mut state = AppState::with_todos(TodoList::new(), Settings::default());
        assert_eq!(state.selected, None);
        state.select_next();
        assert_eq!(state.selected, None);
        assert_eq!(state.selected_todo(), None);
    }

    #[test]
    fn test_focus_cycles() {
        assert_eq!(Focus::List.next(), Focus::Form);
        assert_eq!(Focus::Form.next(), Focus::List);
        assert_eq!(Focus::List.previous(), Focus::Form);
    }
}
