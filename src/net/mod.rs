//! Networking modules for the chat room socket.
//!
//! SYSTEM CONTEXT
//! ==============
//! `endpoint` builds the socket URL, `chat_client` manages the socket
//! lifecycle and dispatch, `file_reader` turns picked files into data URLs,
//! and `types` defines the wire schema.

pub mod chat_client;
pub mod endpoint;
#[cfg(feature = "csr")]
pub mod file_reader;
pub mod types;
