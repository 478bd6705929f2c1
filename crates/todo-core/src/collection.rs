//! The todo collection and its mutation rules
//!
//! Todos are only ever replaced as whole records: [`TodoList::apply_mutation`]
//! drops any entry sharing the incoming id and appends the new value. Toggling
//! and editing both go through it. New items get their id from
//! [`TodoList::next_id`], which refuses to guess on an empty collection.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::todo::{Todo, TodoDraft, TodoId};

/// The two built-in items every session starts with.
pub fn seed_todos() -> Vec<Todo> {
    vec![
        Todo::new(1, "Write A TODO App", false),
        Todo::new(2, "Hang up lights", true),
    ]
}

/// Ordered collection of todos, unique by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TodoList {
    items: Vec<Todo>,
}

/// Pending and done views over a collection, in iteration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition<'a> {
    pub pending: Vec<&'a Todo>,
    pub done: Vec<&'a Todo>,
}

impl Partition<'_> {
    pub fn len(&self) -> usize {
        self.pending.len() + self.done.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty() && self.done.is_empty()
    }
}

impl TodoList {
    /// An empty collection. Only reachable programmatically.
    pub fn new() -> Self {
        Self::default()
    }

    /// The startup collection: ids 1 and 2.
    pub fn seeded() -> Self {
        seed_todos().into_iter().collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Todo> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Todo] {
        &self.items
    }

    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.items.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: TodoId) -> bool {
        self.get(id).is_some()
    }

    /// `max(id) + 1`.
    ///
    /// Fails with [`Error::EmptyCollection`] when there is nothing to take
    /// the maximum of, and with [`Error::IdOverflow`] at the top of the id
    /// space.
    pub fn next_id(&self) -> Result<TodoId> {
        let max = self
            .items
            .iter()
            .map(|t| t.id)
            .max()
            .ok_or(Error::EmptyCollection)?;
        max.checked_add(1).ok_or(Error::IdOverflow { max })
    }

    /// Replace-or-insert by id. The incoming record ends up last.
    pub fn apply_mutation(&mut self, todo: Todo) {
        self.items.retain(|t| t.id != todo.id);
        self.items.push(todo);
    }

    /// Insert a new record built from `draft`.
    ///
    /// The id is always freshly assigned and `done` is always false,
    /// whatever the draft carries.
    pub fn add_new(&mut self, draft: TodoDraft) -> Result<Todo> {
        let id = self.next_id()?;
        let todo = Todo {
            id,
            name: draft.name,
            done: false,
        };
        self.items.push(todo.clone());
        Ok(todo)
    }

    pub fn pending(&self) -> impl Iterator<Item = &Todo> {
        self.items.iter().filter(|t| !t.done)
    }

    pub fn done(&self) -> impl Iterator<Item = &Todo> {
        self.items.iter().filter(|t| t.done)
    }

    pub fn partition(&self) -> Partition<'_> {
        let (done, pending) = self.items.iter().partition(|t| t.done);
        Partition { pending, done }
    }

    /// Rows as displayed: the pending section followed by the done section.
    pub fn display_order(&self) -> Vec<&Todo> {
        self.pending().chain(self.done()).collect()
    }
}

impl FromIterator<Todo> for TodoList {
    /// Builds through `apply_mutation`, so duplicate ids collapse to the last
    /// occurrence.
    fn from_iter<I: IntoIterator<Item = Todo>>(iter: I) -> Self {
        let mut list = Self::new();
        for todo in iter {
            list.apply_mutation(todo);
        }
        list
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a Todo;
    type IntoIter = std::slice::Iter<'a, Todo>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
