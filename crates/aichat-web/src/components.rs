//! UI Components

use leptos::prelude::*;

/// Chat message for display
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: usize,
    pub role: &'static str,
    pub content: String,
}

/// Message bubble component
#[component]
pub fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let class = format!("message message-{}", message.role);

    view! {
        <div class=class>
            <span class="role">{message.role}</span>
            <p class="content">{message.content}</p>
        </div>
    }
}
