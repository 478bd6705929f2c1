//! # todo-core - Core Domain Types
//!
//! Foundation crate for todo-tui. Provides the todo record, the collection
//! with its mutation rules, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`todo`)
//! - [`Todo`] - A fully populated `{id, name, done}` record
//! - [`TodoDraft`] - A form's not-yet-submitted value
//!
//! ### Collection (`collection`)
//! - [`TodoList`] - Todos unique by id; `apply_mutation`, `add_new`, `next_id`
//! - [`Partition`] - Pending/done split in iteration order
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use todo_core::prelude::*;
//! ```

pub mod collection;
pub mod error;
pub mod logging;
pub mod todo;

/// Prelude for common imports used throughout all todo-tui crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use collection::{seed_todos, Partition, TodoList};
pub use error::{Error, Result, ResultExt};
pub use todo::{Todo, TodoDraft, TodoId};
