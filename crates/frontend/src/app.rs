use crate::api::provide_api_client;
use crate::routes::routes::AppRoutes;
use contracts::api::ApiConfig;
use leptos::prelude::*;

#[component]
pub fn App(config: ApiConfig) -> impl IntoView {
    // Provide the API client to every page via context.
    provide_api_client(config);

    view! {
        <AppRoutes />
    }
}
