use super::*;

const STAMP: &str = "10:15:00 AM";

fn history(pairs: &[(&str, &str)]) -> Vec<HistoryMessage> {
    pairs
        .iter()
        .map(|(author, body)| HistoryMessage { author: (*author).to_owned(), body: (*body).to_owned() })
        .collect()
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_owned()).collect()
}

fn ids(list: &[i64]) -> Vec<UserId> {
    list.iter().copied().map(UserId::from).collect()
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn chat_state_default_is_empty_and_disconnected() {
    let state = ChatState::default();
    assert!(state.entries.is_empty());
    assert!(state.roster.is_empty());
    assert_eq!(state.connection_status, ConnectionStatus::Disconnected);
    assert_eq!(state.revision, 0);
}

// =============================================================
// note_traffic
// =============================================================

#[test]
fn traffic_promotes_connecting_to_connected() {
    let mut state = ChatState { connection_status: ConnectionStatus::Connecting, ..ChatState::default() };
    assert!(state.note_traffic());
    assert_eq!(state.connection_status, ConnectionStatus::Connected);
    assert!(!state.note_traffic());
}

#[test]
fn traffic_does_not_revive_closed_socket() {
    let mut state = ChatState::default();
    assert!(!state.note_traffic());
    assert_eq!(state.connection_status, ConnectionStatus::Disconnected);
}

// =============================================================
// handle_chat_message
// =============================================================

#[test]
fn first_message_shows_author() {
    let mut state = ChatState::default();
    state.handle_chat_message("hello", "ann", STAMP);
    assert_eq!(state.entries.len(), 1);
    assert!(state.entries[0].show_author);
    assert_eq!(state.entries[0].timestamp, STAMP);
    assert_eq!(state.entries[0].body, EntryBody::Text("hello".into()));
}

#[test]
fn consecutive_same_author_messages_are_grouped() {
    let mut state = ChatState::default();
    state.handle_chat_message("one", "ann", STAMP);
    state.handle_chat_message("two", "ann", STAMP);
    assert!(state.entries[0].show_author);
    assert!(!state.entries[1].show_author);
}

#[test]
fn different_author_always_gets_label() {
    let mut state = ChatState::default();
    state.handle_chat_message("one", "ann", STAMP);
    state.handle_chat_message("two", "bob", STAMP);
    state.handle_chat_message("three", "ann", STAMP);
    assert!(state.entries.iter().all(|e| e.show_author));
}

#[test]
fn message_after_image_from_same_author_gets_label() {
    let mut state = ChatState::default();
    state.handle_chat_file("data:image/png;base64,AAAA", "ann", STAMP);
    state.handle_chat_message("caption", "ann", STAMP);
    assert!(state.entries[1].show_author);
}

#[test]
fn entries_get_distinct_ids() {
    let mut state = ChatState::default();
    state.handle_chat_message("one", "ann", STAMP);
    state.handle_chat_message("two", "ann", STAMP);
    assert_ne!(state.entries[0].id, state.entries[1].id);
}

// =============================================================
// handle_chat_file
// =============================================================

#[test]
fn consecutive_files_each_show_author() {
    let mut state = ChatState::default();
    state.handle_chat_file("data:image/png;base64,AAAA", "ann", STAMP);
    state.handle_chat_file("data:image/png;base64,BBBB", "ann", STAMP);
    assert!(state.entries.iter().all(|e| e.show_author));
    assert_eq!(
        state.entries[1].body,
        EntryBody::Image { data_url: "data:image/png;base64,BBBB".into() }
    );
}

#[test]
fn cloned_log_shares_image_payload() {
    let mut state = ChatState::default();
    state.handle_chat_file("data:image/png;base64,AAAA", "ann", STAMP);
    state.handle_chat_message("caption", "bob", STAMP);

    let copy = state.entries.clone();

    let (EntryBody::Image { data_url: a }, EntryBody::Image { data_url: b }) =
        (&state.entries[0].body, &copy[0].body)
    else {
        panic!("expected image entries");
    };
    assert!(std::sync::Arc::ptr_eq(a, b));

    let (EntryBody::Text(a), EntryBody::Text(b)) = (&state.entries[1].body, &copy[1].body) else {
        panic!("expected text entries");
    };
    assert!(std::sync::Arc::ptr_eq(a, b));
}

// =============================================================
// handle_connection / handle_disconnection
// =============================================================

#[test]
fn connect_adds_one_entry_per_new_id() {
    let mut state = ChatState::default();
    state.handle_connection(&names(&["ann", "bob"]), &ids(&[1, 2]));
    assert_eq!(state.roster.len(), 2);
    assert_eq!(state.roster.entries[1].name, "bob");
}

#[test]
fn redelivered_connect_adds_no_duplicates() {
    let mut state = ChatState::default();
    state.handle_connection(&names(&["ann", "bob"]), &ids(&[1, 2]));
    state.handle_connection(&names(&["ann", "bob", "cy"]), &ids(&[1, 2, 3]));
    assert_eq!(state.roster.len(), 3);
}

#[test]
fn connect_skips_names_without_ids() {
    let mut state = ChatState::default();
    state.handle_connection(&names(&["ann", "bob"]), &ids(&[1]));
    assert_eq!(state.roster.len(), 1);
}

#[test]
fn disconnect_removes_only_matching_entry() {
    let mut state = ChatState::default();
    state.handle_connection(&names(&["ann", "bob"]), &ids(&[1, 2]));
    state.handle_disconnection(&UserId::from(1_i64));
    assert_eq!(state.roster.len(), 1);
    assert_eq!(state.roster.entries[0].id, UserId::from(2_i64));
}

#[test]
fn disconnect_of_absent_id_is_noop() {
    let mut state = ChatState::default();
    state.handle_connection(&names(&["ann"]), &ids(&[1]));
    let before = state.roster.clone();
    state.handle_disconnection(&UserId::from(99_i64));
    assert_eq!(state.roster, before);
}

// =============================================================
// load_chat
// =============================================================

#[test]
fn load_chat_renders_entries_in_input_order() {
    let mut state = ChatState::default();
    let messages = history(&[("ann", "one"), ("bob", "two"), ("bob", "three"), ("ann", "four")]);
    state.load_chat(&messages, STAMP);

    assert_eq!(state.entries.len(), 4);
    let bodies: Vec<_> = state.entries.iter().map(|e| e.body.clone()).collect();
    assert_eq!(
        bodies,
        ["one", "two", "three", "four"].map(|b| EntryBody::Text(b.into())).to_vec()
    );
    let labels: Vec<_> = state.entries.iter().map(|e| e.show_author).collect();
    assert_eq!(labels, vec![true, true, false, true]);
}

#[test]
fn load_chat_empty_is_noop() {
    let mut state = ChatState::default();
    state.load_chat(&[], STAMP);
    assert!(state.entries.is_empty());
}

// =============================================================
// apply
// =============================================================

#[test]
fn apply_dispatches_by_event_kind() {
    let mut state = ChatState::default();
    state.apply(
        ServerEvent::ChatConnect {
            active_users: names(&["ann"]),
            active_user_ids: ids(&[1]),
            username: Some("ann".to_owned()),
        },
        STAMP,
    );
    state.apply(
        ServerEvent::ChatMessage { message: "hi".to_owned(), username: "ann".to_owned() },
        STAMP,
    );
    state.apply(
        ServerEvent::ChatFile { data_url: "data:,x".to_owned(), username: "ann".to_owned() },
        STAMP,
    );
    state.apply(ServerEvent::ChatDisconnect { user_id: UserId::from(1_i64) }, STAMP);

    assert_eq!(state.entries.len(), 2);
    assert!(state.roster.is_empty());
    assert_eq!(state.revision, 4);
}

#[test]
fn apply_chat_load_seeds_log() {
    let mut state = ChatState::default();
    state.apply(ServerEvent::ChatLoad { messages: history(&[("ann", "a"), ("bob", "b")]) }, STAMP);
    assert_eq!(state.entries.len(), 2);
}

#[test]
fn apply_unknown_only_bumps_revision() {
    let mut state = ChatState::default();
    state.handle_chat_message("hi", "ann", STAMP);
    let entries = state.entries.clone();

    state.apply(ServerEvent::Unknown, STAMP);

    assert_eq!(state.entries, entries);
    assert!(state.roster.is_empty());
    assert_eq!(state.revision, 1);
}
