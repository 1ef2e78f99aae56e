//! Active member roster with the socket status indicator.

use leptos::prelude::*;

use crate::config::USER_COUNT_ID;
use crate::state::chat::{ChatState, ConnectionStatus};
use crate::state::roster::RosterEntry;

#[component]
pub fn UserList() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let status_class = move || match chat.with(|c| c.connection_status) {
        ConnectionStatus::Connected => "user-panel__dot user-panel__dot--connected",
        ConnectionStatus::Connecting => "user-panel__dot user-panel__dot--connecting",
        ConnectionStatus::Disconnected => "user-panel__dot user-panel__dot--disconnected",
    };

    let count_label = move || {
        let n = chat.with(|c| c.roster.len());
        if n == 1 { "1 online".to_owned() } else { format!("{n} online") }
    };

    view! {
        <div class="user-panel">
            <div class="user-panel__header">
                <span class=status_class></span>
                {count_label}
            </div>
            <div id=USER_COUNT_ID class="user-count">
                <For
                    each=move || chat.with(|c| c.roster.entries.clone())
                    key=|user| user.id.clone()
                    children=|user: RosterEntry| view! { <div id=user.id.as_str().to_owned()>{user.name}</div> }
                />
            </div>
        </div>
    }
}
