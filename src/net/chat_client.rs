//! WebSocket chat client for one room.
//!
//! The client opens a single socket for the page's lifetime. Inbound text
//! frames are decoded into [`ServerEvent`]s and applied to the shared
//! [`ChatState`] signal; outbound [`ClientMessage`]s are queued through a
//! [`ChatSender`]. There is no reconnection: once the socket closes the status
//! stays `Disconnected`.
//!
//! Socket plumbing is gated behind `#[cfg(feature = "csr")]` since it needs a
//! browser; decoding, encoding and dispatch are plain functions.

#[cfg(test)]
#[path = "chat_client_test.rs"]
mod chat_client_test;

use futures::channel::mpsc::UnboundedSender;

use crate::error::ClientError;
use crate::net::types::{ClientMessage, ServerEvent};
use crate::state::chat::ChatState;

/// Decode one inbound text frame.
///
/// # Errors
///
/// Returns [`ClientError::Decode`] when the frame is not a tagged JSON event.
pub fn decode_event(text: &str) -> Result<ServerEvent, ClientError> {
    serde_json::from_str(text).map_err(ClientError::Decode)
}

/// Encode one outbound message as a JSON text frame.
///
/// # Errors
///
/// Returns [`ClientError::Encode`] if serialization fails.
pub fn encode_message(msg: &ClientMessage) -> Result<String, ClientError> {
    serde_json::to_string(msg).map_err(ClientError::Encode)
}

/// Decode a text frame and apply it to `state`.
///
/// Malformed frames leave `state` untouched.
///
/// # Errors
///
/// Returns [`ClientError::Decode`] for frames that do not decode.
pub fn apply_frame(state: &mut ChatState, text: &str, stamp: &str) -> Result<(), ClientError> {
    let event = decode_event(text)?;
    log::debug!("chat event: {}", event.kind());
    state.apply(event, stamp);
    Ok(())
}

/// Handle for queuing outbound messages on the room socket.
///
/// The default sender has no socket behind it and drops everything.
#[derive(Clone, Debug, Default)]
pub struct ChatSender {
    tx: Option<UnboundedSender<String>>,
}

impl ChatSender {
    /// Wrap the outbound half of a socket's message channel.
    #[must_use]
    pub fn from_channel(tx: UnboundedSender<String>) -> Self {
        Self { tx: Some(tx) }
    }

    /// Queue `msg` for sending.
    ///
    /// Returns `false` if there is no open socket or the message could not be
    /// encoded.
    pub fn send(&self, msg: &ClientMessage) -> bool {
        let Some(tx) = &self.tx else {
            return false;
        };
        match encode_message(msg) {
            Ok(json) => tx.unbounded_send(json).is_ok(),
            Err(e) => {
                log::warn!("{e}");
                false
            }
        }
    }
}

/// Open the room socket and run it as a local async task.
///
/// Returns the sender used by the input components.
#[cfg(feature = "csr")]
pub fn spawn_chat_client(url: String, chat: leptos::prelude::RwSignal<ChatState>) -> ChatSender {
    use crate::state::chat::ConnectionStatus;
    use futures::channel::mpsc;
    use leptos::prelude::Update;

    let (tx, rx) = mpsc::unbounded::<String>();

    leptos::task::spawn_local(async move {
        chat.update(|c| c.connection_status = ConnectionStatus::Connecting);
        match connect_and_run(&url, chat, rx).await {
            Ok(()) => log::info!("chat socket closed"),
            Err(e) => log::warn!("chat socket ended: {e}"),
        }
        chat.update(|c| c.connection_status = ConnectionStatus::Disconnected);
    });

    ChatSender::from_channel(tx)
}

/// Connect to the socket and process messages until either direction ends.
#[cfg(feature = "csr")]
async fn connect_and_run(
    url: &str,
    chat: leptos::prelude::RwSignal<ChatState>,
    mut rx: futures::channel::mpsc::UnboundedReceiver<String>,
) -> Result<(), ClientError> {
    use crate::util::clock::local_time_stamp;
    use futures::future::Either;
    use futures::{SinkExt, StreamExt};
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;
    use leptos::prelude::Update;

    let ws = WebSocket::open(url).map_err(|e| ClientError::Socket(e.to_string()))?;
    let (mut ws_write, mut ws_read) = ws.split();
    log::info!("chat socket opening: {url}");

    // The handshake may still fail after `open`; status flips to `Connected`
    // only once a frame actually crosses the socket.
    let send_task = async {
        while let Some(msg) = rx.next().await {
            if ws_write.send(Message::Text(msg)).await.is_err() {
                break;
            }
            mark_live(chat);
        }
    };

    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Text(text)) => {
                    let stamp = local_time_stamp();
                    chat.update(|c| {
                        if c.note_traffic() {
                            log::info!("chat socket connected");
                        }
                        if let Err(e) = apply_frame(c, &text, &stamp) {
                            log::warn!("{e}");
                        }
                    });
                }
                Ok(Message::Bytes(_)) => mark_live(chat),
                Err(e) => return Err(ClientError::Socket(e.to_string())),
            }
        }
        Ok(())
    };

    match futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await {
        Either::Left(((), _)) => Ok(()),
        Either::Right((result, _)) => result,
    }
}

/// Flip a `Connecting` status to `Connected` without notifying otherwise.
#[cfg(feature = "csr")]
fn mark_live(chat: leptos::prelude::RwSignal<ChatState>) {
    use crate::state::chat::ConnectionStatus;
    use leptos::prelude::{Update, WithUntracked};

    if chat.with_untracked(|c| c.connection_status == ConnectionStatus::Connecting) {
        chat.update(|c| {
            if c.note_traffic() {
                log::info!("chat socket connected");
            }
        });
    }
}
