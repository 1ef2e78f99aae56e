//! Wire-protocol DTOs for the chat room socket.
//!
//! DESIGN
//! ======
//! Both directions are JSON objects tagged on `type`, so each direction maps
//! to one serde enum. Field names follow the server's camelCase keys via
//! explicit renames; Rust-side names stay snake_case.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of a room member as assigned by the server.
///
/// The server emits database integer keys; string keys are accepted too.
/// Both normalize to the decimal/string form.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    /// Borrow the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        match value {
            serde_json::Value::String(s) => Ok(Self(s)),
            serde_json::Value::Number(number) => {
                if let Some(int) = number.as_i64() {
                    return Ok(Self(int.to_string()));
                }
                if let Some(uint) = number.as_u64() {
                    return Ok(Self(uint.to_string()));
                }
                Err(D::Error::custom("expected integer user id"))
            }
            _ => Err(D::Error::custom("expected string or integer user id")),
        }
    }
}

/// One stored message as rendered into the page or replayed by `chat_load`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryMessage {
    /// Username of the message author.
    pub author: String,
    /// Message text.
    pub body: String,
}

/// Event pushed by the server over the chat socket.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerEvent {
    /// A text message posted to the room.
    ChatMessage { message: String, username: String },
    /// An image posted to the room, inlined as a data URL.
    ChatFile {
        #[serde(rename = "dataURL")]
        data_url: String,
        username: String,
    },
    /// Someone joined; carries the full list of active members.
    ChatConnect {
        #[serde(rename = "activeUsers", default)]
        active_users: Vec<String>,
        #[serde(rename = "activeUserIDs", default)]
        active_user_ids: Vec<UserId>,
        /// The member whose arrival triggered this event.
        #[serde(default)]
        username: Option<String>,
    },
    /// A member left the room.
    ChatDisconnect {
        #[serde(rename = "userID")]
        user_id: UserId,
    },
    /// Replay of stored room history.
    ChatLoad {
        #[serde(default)]
        messages: Vec<HistoryMessage>,
    },
    /// Any `type` this client does not handle.
    #[serde(other)]
    Unknown,
}

impl ServerEvent {
    /// Wire tag of the event, for logging.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ChatMessage { .. } => "chat_message",
            Self::ChatFile { .. } => "chat_file",
            Self::ChatConnect { .. } => "chat_connect",
            Self::ChatDisconnect { .. } => "chat_disconnect",
            Self::ChatLoad { .. } => "chat_load",
            Self::Unknown => "unknown",
        }
    }
}

/// Message sent by this client to the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Plain text posted to the room.
    Message { message: String },
    /// A file inlined as a data URL.
    File {
        #[serde(rename = "dataURL")]
        data_url: String,
    },
}
