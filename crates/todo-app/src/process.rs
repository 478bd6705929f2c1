//! Message processing
//!
//! Runs a message through `update` and keeps going until no follow-up
//! message remains, so each input is handled to completion.

use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update loop
pub fn process_message(state: &mut AppState, message: Message) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        msg = handler::update(state, m).message;
    }
}
