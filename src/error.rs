//! Client error taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! Fallible client operations return `Result<_, ClientError>`. The browser
//! boundary (`app`, `net::chat_client`, the input components) logs these and
//! carries on; nothing here is retried and nothing panics.

/// Errors raised while reading the page, talking to the socket, or reading files.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// A required page element is absent.
    #[error("missing page element #{0}")]
    MissingElement(&'static str),
    /// The `room-name` element does not hold a JSON string.
    #[error("invalid room name payload: {0}")]
    RoomName(#[source] serde_json::Error),
    /// The `chat-history` element does not hold valid history JSON.
    #[error("invalid chat history payload: {0}")]
    History(#[source] serde_json::Error),
    /// An inbound frame is not a valid server event.
    #[error("failed to decode server event: {0}")]
    Decode(#[source] serde_json::Error),
    /// An outbound message could not be serialized.
    #[error("failed to encode client message: {0}")]
    Encode(#[source] serde_json::Error),
    /// The WebSocket could not be opened or a receive failed.
    #[error("websocket error: {0}")]
    Socket(String),
    /// The browser failed to read a selected file.
    #[error("file read failed: {0}")]
    FileRead(String),
    /// No browser window or document is available.
    #[error("browser window unavailable")]
    NoWindow,
}
