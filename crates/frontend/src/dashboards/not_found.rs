use contracts::routing::{PageId, DEFAULT_PATH};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let location = use_location();

    view! {
        <div id="not_found--page" class="page page--not-found">
            <h1 class="page--not-found__code">"404"</h1>
            <p>
                {PageId::NotFound.title()}
                ": "
                <code>{move || location.pathname.get()}</code>
            </p>
            <A href=DEFAULT_PATH>"Перейти к продажам"</A>
        </div>
    }
}
