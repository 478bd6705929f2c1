//! Custom widget components

mod edit_modal;
mod header;
mod key_hints;
pub mod modal_overlay;
mod status_line;
mod todo_form;
mod todo_item;
mod todo_list;

pub use edit_modal::{EditModal, EDIT_TITLE};
pub use header::{MainHeader, APP_TITLE};
pub use key_hints::KeyHints;
pub use status_line::StatusLine;
pub use todo_form::TodoForm;
pub use todo_item::TodoItem;
pub use todo_list::TodoListView;
