//! Text input that sends on Enter.

use leptos::prelude::*;

use crate::config::MESSAGE_INPUT_ID;
use crate::net::chat_client::ChatSender;
use crate::state::composer::Composer;

#[component]
pub fn MessageInput() -> impl IntoView {
    let sender = expect_context::<ChatSender>();
    let composer = RwSignal::new(Composer::default());
    let input_ref = NodeRef::<leptos::html::Input>::new();

    Effect::new(move || {
        #[cfg(feature = "csr")]
        {
            if let Some(el) = input_ref.get() {
                let _ = el.focus();
            }
        }
    });

    let on_keyup = move |ev: leptos::ev::KeyboardEvent| {
        let key = ev.key();
        let Some(msg) = composer.try_update(|c| c.on_key(&key)).flatten() else {
            return;
        };
        if !sender.send(&msg) {
            log::warn!("message dropped: chat socket is closed");
        }
    };

    view! {
        <input
            id=MESSAGE_INPUT_ID
            class="message-input"
            type="text"
            autocomplete="off"
            node_ref=input_ref
            prop:value=move || composer.with(|c| c.draft.clone())
            on:input=move |ev| composer.update(|c| c.draft = event_target_value(&ev))
            on:keyup=on_keyup
        />
    }
}
