//! Todo record and form draft types
//!
//! A [`Todo`] is always fully populated when it crosses a component boundary.
//! A [`TodoDraft`] is the not-yet-submitted value held by a form; it carries
//! the seed's `id` and `done` through unchanged so an edit submission can be
//! turned back into a complete record.

use serde::{Deserialize, Serialize};

/// Identifier of a todo, unique within a collection.
pub type TodoId = u64;

/// A single todo item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub name: String,
    pub done: bool,
}

impl Todo {
    pub fn new(id: TodoId, name: impl Into<String>, done: bool) -> Self {
        Self {
            id,
            name: name.into(),
            done,
        }
    }

    /// Full replacement record with `done` inverted.
    pub fn toggled(&self) -> Self {
        Self {
            id: self.id,
            name: self.name.clone(),
            done: !self.done,
        }
    }
}

/// Form-local draft of a todo.
///
/// `id` is `None` for the creation form and `Some` when the draft was seeded
/// from an existing record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TodoDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TodoId>,
    pub name: String,
    #[serde(default)]
    pub done: bool,
}

impl TodoDraft {
    /// The empty default: `{ name: "", done: false }`.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            done: false,
        }
    }

    /// Replace only the name; id and done pass through.
    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self
        }
    }

    /// True when the name is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
    }

    /// Convert a seeded draft back into a full record.
    ///
    /// Returns `None` for unseeded drafts, which have no id yet.
    pub fn into_todo(self) -> Option<Todo> {
        let id = self.id?;
        Some(Todo {
            id,
            name: self.name,
            done: self.done,
        })
    }
}

impl From<Todo> for TodoDraft {
    fn from(todo: Todo) -> Self {
        Self {
            id: Some(todo.id),
            name: todo.name,
            done: todo.done,
        }
    }
}

impl From<&Todo> for TodoDraft {
    fn from(todo: &Todo) -> Self {
        Self::from(todo.clone())
    }
}
