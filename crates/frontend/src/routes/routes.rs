use crate::dashboards::page_view;
use crate::layout::Shell;
use contracts::routing::RouteTable;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Router};
use leptos_router::hooks::use_location;

/// Mounts the page for the current browser path.
///
/// Redirect entries are applied before anything else, so `/` never reaches
/// the Not Found page.
#[component]
fn RouteOutlet() -> impl IntoView {
    let table = RouteTable::standard();
    let location = use_location();

    move || {
        let path = location.pathname.get();
        if let Some(target) = table.redirect_for(&path) {
            log::debug!("Redirect: '{}' -> '{}'", path, target);
            return view! { <Redirect path=target /> }.into_any();
        }

        let page = table.resolve_page(&path);
        log::debug!("Route: '{}' -> {}", path, page);
        page_view(page)
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <RouteOutlet />
            </Shell>
        </Router>
    }
}
