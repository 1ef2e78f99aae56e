//! Scrolling chat log.

use leptos::prelude::*;

use crate::config::CHAT_BOX_ID;
use crate::state::chat::{ChatEntry, ChatState, EntryBody};

/// Chat log rendering every entry in arrival order.
///
/// Scrolls to the bottom after each dispatched event.
#[component]
pub fn ChatBox() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let box_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = chat.with(|c| c.revision);

        #[cfg(feature = "csr")]
        {
            if let Some(el) = box_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    view! {
        <div id=CHAT_BOX_ID class="chat-box" node_ref=box_ref>
            <For
                each=move || chat.with(|c| c.entries.clone())
                key=|entry| entry.id.clone()
                children=|entry: ChatEntry| view! { <ChatEntryView entry/> }
            />
        </div>
    }
}

/// One log entry: optional time stamp and username label, then the body.
#[component]
fn ChatEntryView(entry: ChatEntry) -> impl IntoView {
    let ChatEntry { author, timestamp, show_author, body, .. } = entry;

    let header = show_author.then(|| {
        let label_class = format!("{author} username");
        view! {
            <div class="timestamp">{timestamp}</div>
            <span class=label_class>{author.clone()}</span>
        }
    });

    // Bodies render as text nodes, never as markup.
    let body = match body {
        EntryBody::Text(text) => view! { <span class=author>{text}</span> }.into_any(),
        EntryBody::Image { data_url } => view! { <img class="chat-image" src=data_url alt=""/> }.into_any(),
    };

    view! { <div class="chat-entry">{header}{body}</div> }
}
