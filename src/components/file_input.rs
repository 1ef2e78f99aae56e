//! File picker that uploads the chosen image as a data URL.

use leptos::prelude::*;

use crate::config::FILE_INPUT_ID;
use crate::net::chat_client::ChatSender;

#[component]
pub fn FileInput() -> impl IntoView {
    let sender = expect_context::<ChatSender>();

    let on_change = {
        #[cfg(feature = "csr")]
        {
            move |ev: leptos::ev::Event| {
                use crate::net::file_reader::{first_selected_file, read_file_as_data_url};
                use crate::net::types::ClientMessage;
                use wasm_bindgen::JsCast;

                let Some(input) = ev
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                else {
                    return;
                };
                let Some(file) = first_selected_file(&input) else {
                    return;
                };
                // Reset so picking the same file again fires `change`.
                input.set_value("");

                let sender = sender.clone();
                leptos::task::spawn_local(async move {
                    match read_file_as_data_url(&file).await {
                        Ok(data_url) => {
                            if !sender.send(&ClientMessage::File { data_url }) {
                                log::warn!("file dropped: chat socket is closed");
                            }
                        }
                        Err(e) => log::warn!("{e}"),
                    }
                });
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = sender;
            move |_ev: leptos::ev::Event| {}
        }
    };

    view! {
        <input id=FILE_INPUT_ID class="file-input" type="file" accept="image/*" on:change=on_change/>
    }
}
