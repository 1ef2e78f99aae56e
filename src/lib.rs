//! # chatroom-client
//!
//! Leptos + WASM client for a single chat room. It opens one WebSocket to
//! `/ws/chat/<room>/`, renders chat messages, images and presence, and sends
//! text and file messages.
//!
//! Browser-only pieces (socket, file reads, mounting) are gated behind the
//! `csr` feature; state, wire types and page parsing build and test natively.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
