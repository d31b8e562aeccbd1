pub mod left;

use left::sidebar::Sidebar;
use leptos::prelude::*;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |                TopHeader                 |
/// +------------------------------------------+
/// |  Sidebar  |           Content            |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <header class="top-header">
                <span class="top-header__title">"Метрики продаж"</span>
            </header>

            <div class="app-body">
                <aside data-zone="left" class="left">
                    <Sidebar />
                </aside>

                // Page selected by the router outlet
                <main class="app-main">
                    {children()}
                </main>
            </div>
        </div>
    }
}
