//! Chat room state: the rendered log, the roster, and the socket status.
//!
//! DESIGN
//! ======
//! Each inbound `ServerEvent` maps to exactly one handler here. Handlers are
//! plain `&mut self` methods so the dispatcher can run them inside a signal
//! update and tests can drive them without a browser. The time stamp is passed
//! in rather than read from a clock for the same reason.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use std::sync::Arc;

use crate::net::types::{HistoryMessage, ServerEvent, UserId};
use crate::state::roster::Roster;

/// State behind the chat box and the roster.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub entries: Vec<ChatEntry>,
    pub roster: Roster,
    pub connection_status: ConnectionStatus,
    /// Bumped once per dispatched event; the chat box scrolls on change.
    pub revision: u64,
}

/// WebSocket connection status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

/// A single rendered entry in the chat log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatEntry {
    /// Local key for keyed rendering.
    pub id: String,
    pub author: String,
    /// Local time of day the entry was rendered.
    pub timestamp: String,
    /// Whether the username label and time stamp lead the entry.
    pub show_author: bool,
    pub body: EntryBody,
}

/// Content of a chat entry.
///
/// Payloads are shared so re-reading the log never copies image data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntryBody {
    Text(Arc<str>),
    Image { data_url: Arc<str> },
}

impl ChatEntry {
    fn new(author: &str, stamp: &str, show_author: bool, body: EntryBody) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            author: author.to_owned(),
            timestamp: stamp.to_owned(),
            show_author,
            body,
        }
    }

    /// Whether a text message from `author` continues this entry's run.
    ///
    /// Only text entries lead with their author's class; image entries lead
    /// with a time stamp and always break the run.
    #[must_use]
    pub fn continues_run(&self, author: &str) -> bool {
        matches!(self.body, EntryBody::Text(_)) && self.author == author
    }
}

impl ChatState {
    /// Record that the socket carried a frame in either direction.
    ///
    /// A socket still `Connecting` becomes `Connected`; a closed one stays
    /// `Disconnected`. Returns `true` when the status changed.
    pub fn note_traffic(&mut self) -> bool {
        if self.connection_status != ConnectionStatus::Connecting {
            return false;
        }
        self.connection_status = ConnectionStatus::Connected;
        true
    }

    /// Apply one inbound event. Unrecognized events change nothing but the revision.
    pub fn apply(&mut self, event: ServerEvent, stamp: &str) {
        match event {
            ServerEvent::ChatMessage { message, username } => {
                self.handle_chat_message(&message, &username, stamp);
            }
            ServerEvent::ChatFile { data_url, username } => {
                self.handle_chat_file(&data_url, &username, stamp);
            }
            ServerEvent::ChatConnect { active_users, active_user_ids, username } => {
                if let Some(name) = username {
                    log::debug!("chat: {name} connected");
                }
                self.handle_connection(&active_users, &active_user_ids);
            }
            ServerEvent::ChatDisconnect { user_id } => {
                self.handle_disconnection(&user_id);
            }
            ServerEvent::ChatLoad { messages } => {
                self.load_chat(&messages, stamp);
            }
            ServerEvent::Unknown => {}
        }
        self.revision += 1;
    }

    /// Append a text entry, grouping consecutive messages by the same author.
    pub fn handle_chat_message(&mut self, message: &str, username: &str, stamp: &str) {
        let show_author = !self
            .entries
            .last()
            .is_some_and(|last| last.continues_run(username));
        self.entries.push(ChatEntry::new(
            username,
            stamp,
            show_author,
            EntryBody::Text(Arc::from(message)),
        ));
    }

    /// Append an image entry. File entries always carry the label.
    pub fn handle_chat_file(&mut self, data_url: &str, username: &str, stamp: &str) {
        self.entries.push(ChatEntry::new(
            username,
            stamp,
            true,
            EntryBody::Image { data_url: Arc::from(data_url) },
        ));
    }

    /// Add a roster entry for every active member not already listed.
    ///
    /// Names pair with IDs by position; names without an ID are skipped.
    pub fn handle_connection(&mut self, active_users: &[String], active_user_ids: &[UserId]) {
        if active_users.len() != active_user_ids.len() {
            log::warn!(
                "chat_connect: {} names for {} ids",
                active_users.len(),
                active_user_ids.len()
            );
        }
        for (name, id) in active_users.iter().zip(active_user_ids) {
            self.roster.insert(id.clone(), name.as_str());
        }
    }

    /// Drop the departing member from the roster, if listed.
    pub fn handle_disconnection(&mut self, user_id: &UserId) {
        if !self.roster.remove(user_id) {
            log::debug!("chat_disconnect: user {user_id} not in roster");
        }
    }

    /// Replay stored messages through the text renderer, in order.
    pub fn load_chat(&mut self, messages: &[HistoryMessage], stamp: &str) {
        for msg in messages {
            self.handle_chat_message(&msg.body, &msg.author, stamp);
        }
    }
}
