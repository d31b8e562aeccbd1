use contracts::dashboards::ColumnKind;
use contracts::shared::number_format::{format_integer, format_money};
use leptos::prelude::*;

fn format_value(value: f64, kind: ColumnKind) -> String {
    match kind {
        ColumnKind::Money => format_money(value),
        _ => format_integer(value),
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<f64>,
    /// Money values keep two decimals, everything else is an integer
    kind: ColumnKind,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__label">{label}</div>
            <div class="stat-card__value">{move || format_value(value.get(), kind)}</div>
        </div>
    }
}
