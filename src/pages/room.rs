//! Chat room page: roster beside the log and the inputs.

use leptos::prelude::*;

use crate::components::chat_box::ChatBox;
use crate::components::file_input::FileInput;
use crate::components::message_input::MessageInput;
use crate::components::user_list::UserList;

#[component]
pub fn RoomPage(room_name: String) -> impl IntoView {
    view! {
        <div class="chat-room">
            <UserList/>
            <div class="chat-room__main">
                <h2 class="chat-room__title">{room_name}</h2>
                <ChatBox/>
                <div class="chat-room__inputs">
                    <MessageInput/>
                    <FileInput/>
                </div>
            </div>
        </div>
    }
}
