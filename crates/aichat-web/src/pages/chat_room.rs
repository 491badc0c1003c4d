//! Chat Room Page

use leptos::prelude::*;

use aichat_router::AppRoute;

use crate::components::{ChatMessage, MessageBubble};
use crate::links::RouteLinks;

#[component]
pub fn ChatRoomPage() -> impl IntoView {
    let links = expect_context::<RouteLinks>();
    let (messages, set_messages) = signal(Vec::<ChatMessage>::new());
    let (input, set_input) = signal(String::new());

    let send = move |()| {
        let content = input.get();
        if content.trim().is_empty() {
            return;
        }

        set_messages.update(|msgs| {
            let id = msgs.len();
            msgs.push(ChatMessage {
                id,
                role: "user",
                content,
            });
        });
        set_input.set(String::new());
    };

    view! {
        <div class="chat">
            <header class="chat-header">
                <h2>"Chat room"</h2>
                <a href=links.href(AppRoute::Home) class="btn">"Leave"</a>
            </header>

            <main class="chat-main">
                <div class="messages">
                    <For
                        each=move || messages.get()
                        key=|msg| msg.id
                        children=move |msg| view! { <MessageBubble message=msg /> }
                    />
                </div>

                <div class="input-area">
                    <textarea
                        placeholder="Ask a yes/no question..."
                        prop:value=move || input.get()
                        on:input=move |ev| set_input.set(event_target_value(&ev))
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" && !ev.shift_key() {
                                ev.prevent_default();
                                send(());
                            }
                        }
                    />
                    <button on:click=move |_| send(())>"Send"</button>
                </div>
            </main>
        </div>
    }
}
