#[cfg(test)]
#[path = "composer_test.rs"]
mod composer_test;

use crate::net::types::ClientMessage;

/// Draft text in the message input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Composer {
    pub draft: String,
}

impl Composer {
    /// Take the draft as an outbound message, leaving the field empty.
    ///
    /// The text is sent as typed; an empty draft still produces a message.
    pub fn submit(&mut self) -> ClientMessage {
        ClientMessage::Message { message: std::mem::take(&mut self.draft) }
    }

    /// Handle a key release in the input. Only Enter submits.
    pub fn on_key(&mut self, key: &str) -> Option<ClientMessage> {
        (key == "Enter").then(|| self.submit())
    }
}
