//! Chat socket URL construction.
//!
//! A page served over `https:` may only upgrade to `wss`; a plain `http:` page
//! (local development) upgrades to `ws`.

#[cfg(test)]
#[path = "endpoint_test.rs"]
mod endpoint_test;

/// Socket scheme for a page loaded with the given `location.protocol`.
#[must_use]
pub fn ws_scheme(protocol: &str) -> &'static str {
    if protocol.eq_ignore_ascii_case("https:") { "wss" } else { "ws" }
}

/// Full socket URL for `room` on `host`: `{ws|wss}://<host>/ws/chat/<room>/`.
#[must_use]
pub fn chat_socket_url(protocol: &str, host: &str, room: &str) -> String {
    format!("{}://{host}/ws/chat/{room}/", ws_scheme(protocol))
}
