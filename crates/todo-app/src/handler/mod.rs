//! Handler module - TEA update function and key routing
//!
//! - `update`: main `update()` function and message dispatch
//! - `keys`: key event handlers for each UI mode and focus

pub(crate) mod keys;
pub(crate) mod update;


use crate::message::Message;

pub use keys::handle_key;
pub use update::update;

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Follow-up message to process immediately
    pub message: Option<Message>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self { message: Some(msg) }
    }
}
