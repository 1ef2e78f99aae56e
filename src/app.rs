//! Root application component and browser entry point.

use leptos::prelude::*;

use crate::config::PageConfig;
use crate::net::chat_client::ChatSender;
use crate::pages::room::RoomPage;
use crate::state::chat::ChatState;
use crate::util::clock::local_time_stamp;

/// Root application component.
///
/// Seeds the log from the page's stored history, opens the room socket and
/// provides the shared state and sender to child components.
#[component]
pub fn App(config: PageConfig) -> impl IntoView {
    let mut initial = ChatState::default();
    initial.load_chat(&config.history, &local_time_stamp());
    let chat = RwSignal::new(initial);

    #[cfg(feature = "csr")]
    let sender = crate::net::chat_client::spawn_chat_client(config.socket_url(), chat);
    #[cfg(not(feature = "csr"))]
    let sender = ChatSender::default();

    provide_context(chat);
    provide_context::<ChatSender>(sender);

    view! { <RoomPage room_name=config.room_name/> }
}

/// Read the page config and mount [`App`] into `#chat-root` (or `<body>`).
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use crate::config::MOUNT_ID;
    use wasm_bindgen::JsCast;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let config = match PageConfig::from_document() {
        Ok(config) => config,
        Err(e) => {
            log::error!("chat client not started: {e}");
            return;
        }
    };
    log::info!("joining room {}", config.room_name);

    let mount_point = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(MOUNT_ID))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());

    match mount_point {
        Some(parent) => leptos::mount::mount_to(parent, move || view! { <App config/> }).forget(),
        None => leptos::mount::mount_to_body(move || view! { <App config/> }),
    }
}
