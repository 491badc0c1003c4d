//! Main App Component

use aichat_router::{AppRoute, RouterConfig};
use leptos::prelude::*;
use leptos_router::{components::Router, hooks::use_location};

use crate::links::RouteLinks;
use crate::pages::{ChatRoomPage, HomePage, NotFoundPage};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let config = RouterConfig::from_build_env().unwrap_or_else(|e| {
        log::error!("{e}; falling back to default routing");
        RouterConfig::default()
    });
    log::info!("mounting aichat under base {}", config.base);

    provide_context(RouteLinks::from_config(&config));

    // Base and match options are applied by `RouteLinks`, so the router only
    // tracks the raw browser path
    view! {
        <Router>
            <main class="app">
                <RouteOutlet />
            </main>
        </Router>
    }
}

/// Resolves the current path through the route table and mounts its view
#[component]
fn RouteOutlet() -> impl IntoView {
    let links = expect_context::<RouteLinks>();
    let location = use_location();

    move || {
        let pathname = location.pathname.get();
        match links.resolve(&pathname) {
            Some(route) => mount(route),
            None => {
                log::warn!("no route matches {pathname}");
                view! { <NotFoundPage /> }.into_any()
            }
        }
    }
}

/// The view for each route
fn mount(route: AppRoute) -> AnyView {
    log::debug!("mounting view for route {route}");
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Chat => view! { <ChatRoomPage /> }.into_any(),
    }
}
