//! Landing Page

use leptos::prelude::*;

use aichat_router::AppRoute;

use crate::links::RouteLinks;

#[component]
pub fn HomePage() -> impl IntoView {
    let links = expect_context::<RouteLinks>();

    view! {
        <div class="home">
            <header class="hero">
                <h1>"Turtle Soup"</h1>
                <p class="tagline">"A lateral-thinking puzzle game hosted by an AI"</p>
                <div class="cta">
                    <a href=links.href(AppRoute::Chat) class="btn btn-primary">"Enter the chat room"</a>
                </div>
            </header>

            <section class="features">
                <div class="feature">
                    <h3>"🐢 Ask"</h3>
                    <p>"Say \"start\" and the host sets a riddle."</p>
                </div>
                <div class="feature">
                    <h3>"❓ Probe"</h3>
                    <p>"The host only answers yes, no or irrelevant."</p>
                </div>
                <div class="feature">
                    <h3>"🍲 Solve"</h3>
                    <p>"Piece the story together before the game ends."</p>
                </div>
            </section>
        </div>
    }
}
