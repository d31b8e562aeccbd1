pub mod metrics_page;
pub mod not_found;

use contracts::routing::PageId;
use leptos::prelude::*;
use metrics_page::MetricsPage;
use not_found::NotFoundPage;

/// View for a resolved page.
pub fn page_view(page: PageId) -> AnyView {
    match page {
        PageId::NotFound => view! { <NotFoundPage /> }.into_any(),
        page => view! { <MetricsPage page=page /> }.into_any(),
    }
}
