//! Page contract and startup configuration.
//!
//! The server renders the room name (and optionally stored history) into the
//! page as JSON script elements. Everything else comes from
//! `window.location`. Parsing lives in [`PageConfig::from_parts`] so it can be
//! exercised without a browser; [`PageConfig::from_document`] only gathers the
//! raw strings.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::error::ClientError;
use crate::net::endpoint::chat_socket_url;
use crate::net::types::HistoryMessage;

/// Element holding the room name as a JSON string. Required.
pub const ROOM_NAME_ID: &str = "room-name";
/// Element holding stored history as a JSON array of `{author, body}`. Optional.
pub const CHAT_HISTORY_ID: &str = "chat-history";
/// Mount point for the client. Falls back to `<body>` when absent.
pub const MOUNT_ID: &str = "chat-root";
/// Rendered chat log container.
pub const CHAT_BOX_ID: &str = "chat-box";
/// Rendered text input.
pub const MESSAGE_INPUT_ID: &str = "message-input";
/// Rendered file input.
pub const FILE_INPUT_ID: &str = "file-input";
/// Rendered roster container.
pub const USER_COUNT_ID: &str = "user-count";

/// Everything the client needs to know about the page it runs in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageConfig {
    pub room_name: String,
    /// `location.protocol`, e.g. `"https:"`.
    pub protocol: String,
    /// `location.host`, including the port when present.
    pub host: String,
    /// Messages rendered into the page by the server.
    pub history: Vec<HistoryMessage>,
}

impl PageConfig {
    /// Build a config from the raw page strings.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::RoomName`] when `room_json` is not a JSON string
    /// and [`ClientError::History`] when a non-blank `history_json` is not a
    /// JSON array of history messages.
    pub fn from_parts(
        room_json: &str,
        history_json: Option<&str>,
        protocol: &str,
        host: &str,
    ) -> Result<Self, ClientError> {
        let room_name = serde_json::from_str::<String>(room_json.trim()).map_err(ClientError::RoomName)?;

        let history = match history_json.map(str::trim) {
            Some(raw) if !raw.is_empty() => {
                serde_json::from_str::<Vec<HistoryMessage>>(raw).map_err(ClientError::History)?
            }
            _ => Vec::new(),
        };

        Ok(Self {
            room_name,
            protocol: protocol.to_owned(),
            host: host.to_owned(),
            history,
        })
    }

    /// Socket URL for this page's room.
    #[must_use]
    pub fn socket_url(&self) -> String {
        chat_socket_url(&self.protocol, &self.host, &self.room_name)
    }

    /// Read the config from the live document.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NoWindow`] outside a browser document,
    /// [`ClientError::MissingElement`] when `room-name` is absent, and the
    /// parse errors of [`PageConfig::from_parts`].
    #[cfg(feature = "csr")]
    pub fn from_document() -> Result<Self, ClientError> {
        let window = web_sys::window().ok_or(ClientError::NoWindow)?;
        let document = window.document().ok_or(ClientError::NoWindow)?;

        let room_json = document
            .get_element_by_id(ROOM_NAME_ID)
            .ok_or(ClientError::MissingElement(ROOM_NAME_ID))?
            .text_content()
            .unwrap_or_default();
        let history_json = document
            .get_element_by_id(CHAT_HISTORY_ID)
            .and_then(|el| el.text_content());

        let location = window.location();
        let protocol = location.protocol().map_err(|_| ClientError::NoWindow)?;
        let host = location.host().map_err(|_| ClientError::NoWindow)?;

        Self::from_parts(&room_json, history_json.as_deref(), &protocol, &host)
    }
}
