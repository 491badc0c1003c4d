use leptos::prelude::*;

use aichat_router::AppRoute;

use crate::links::RouteLinks;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let links = expect_context::<RouteLinks>();

    view! {
        <div class="not-found">
            <p>"Page not found"</p>
            <a href=links.href(AppRoute::Home) class="btn">"Back to start"</a>
        </div>
    }
}
