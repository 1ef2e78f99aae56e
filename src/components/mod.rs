//! Leptos view components for the chat room page.

pub mod chat_box;
pub mod file_input;
pub mod message_input;
pub mod user_list;
