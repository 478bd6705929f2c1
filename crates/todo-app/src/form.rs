//! Form-local draft state
//!
//! One `TodoFormState` backs the "Add New" form and another backs the edit
//! modal. The draft is seeded once at construction; typing only ever changes
//! the name, so a seed's `id` and `done` flow into the submission untouched.

use todo_core::{Todo, TodoDraft};

/// Draft plus a text cursor (in chars, not bytes).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoFormState {
    draft: TodoDraft,
    cursor: usize,
}

impl TodoFormState {
    /// Unseeded form: `{ name: "", done: false }`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Form seeded from an existing record, cursor at the end of the name.
    pub fn seeded(todo: &Todo) -> Self {
        let draft = TodoDraft::from(todo);
        let cursor = draft.name.chars().count();
        Self { draft, cursor }
    }

    pub fn draft(&self) -> &TodoDraft {
        &self.draft
    }

    pub fn name(&self) -> &str {
        &self.draft.name
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_seeded(&self) -> bool {
        self.draft.id.is_some()
    }

    /// Replace the whole name field.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
        self.cursor = self.char_len();
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.draft.name.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the char before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let at = self.byte_offset(self.cursor - 1);
        self.draft.name.remove(at);
        self.cursor -= 1;
    }

    /// Delete the char under the cursor.
    pub fn delete(&mut self) {
        if self.cursor >= self.char_len() {
            return;
        }
        let at = self.byte_offset(self.cursor);
        self.draft.name.remove(at);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    pub fn clear(&mut self) {
        self.set_name(String::new());
    }

    /// Hand out the draft and reset to the empty default.
    ///
    /// A blank name is refused: `None` is returned and the draft is kept so
    /// the user can keep typing.
    pub fn submit(&mut self) -> Option<TodoDraft> {
        if self.draft.is_blank() {
            return None;
        }
        let submitted = std::mem::take(&mut self.draft);
        self.cursor = 0;
        Some(submitted)
    }

    fn char_len(&self) -> usize {
        self.draft.name.chars().count()
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.draft
            .name
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.draft.name.len())
    }
}
