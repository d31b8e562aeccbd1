//! Страница дашборда: продажи, заказы, склады, доходы
//!
//! All four pages share one layout; the [`PageId`] picks the endpoint, the
//! columns and the default query.

use chrono::Datelike;
use contracts::dashboards::summary::MetricsSummary;
use contracts::dashboards::{columns_for, default_params, ColumnKind};
use contracts::routing::PageId;
use contracts::shared::date_utils::{format_date, month_bounds, parse_date, today};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;
use thaw::{Button, ButtonAppearance, MessageBar, MessageBarIntent, Spinner};

use crate::api::use_api_client;
use crate::shared::components::data_table::DataTable;
use crate::shared::components::date_range_picker::DateRangePicker;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;

/// Start a new request and return its token; earlier tokens become stale.
fn next_request(generation: StoredValue<u64>) -> u64 {
    generation
        .try_update_value(|g| {
            *g += 1;
            *g
        })
        .unwrap_or_default()
}

/// Whether `token` still belongs to the latest request. False once the page
/// has been unmounted and the counter disposed.
fn is_latest(generation: StoredValue<u64>, token: u64) -> bool {
    generation.try_get_value() == Some(token)
}

#[component]
pub fn MetricsPage(page: PageId) -> impl IntoView {
    let client = StoredValue::new(use_api_client());
    let columns = columns_for(page);
    let endpoint = page.endpoint().unwrap_or_default();

    // Период по умолчанию - текущий месяц
    let now = today();
    let (default_from, default_to) = month_bounds(now.year(), now.month()).unwrap_or((now, now));
    let date_from = RwSignal::new(format_date(&default_from));
    let date_to = RwSignal::new(format_date(&default_to));

    let (rows, set_rows) = signal(Vec::<Value>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    // Responses may arrive out of order; only the latest request updates the page.
    let generation = StoredValue::new(0u64);

    let load_data = move || {
        let (Some(from), Some(to)) = (
            parse_date(&date_from.get_untracked()),
            parse_date(&date_to.get_untracked()),
        ) else {
            // Отменяем запрос в полёте, чтобы он не перезаписал ошибку
            next_request(generation);
            set_loading.set(false);
            set_rows.set(Vec::new());
            set_error.set(Some("Укажите корректный период".to_string()));
            return;
        };

        let params = default_params(page, from, to, today());
        let client = client.get_value();
        let current = next_request(generation);

        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            let result = client.fetch_data::<Vec<Value>>(endpoint, &params).await;
            if !is_latest(generation, current) {
                return;
            }
            match result {
                Ok(data) => {
                    log::debug!("Loaded {} rows from '{}'", data.len(), endpoint);
                    set_rows.set(data);
                }
                Err(e) => {
                    set_rows.set(Vec::new());
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    // Загружаем данные при монтировании
    Effect::new(move |_| {
        load_data();
    });

    let on_period_change = Callback::new(move |(from, to): (String, String)| {
        date_from.set(from);
        date_to.set(to);
        load_data();
    });

    let summary = Memo::new(move |_| rows.with(|rows| MetricsSummary::compute(rows, columns)));

    let subtitle = if page == PageId::Stocks {
        format!("Остатки на {}", format_date(&now))
    } else {
        "Данные за выбранный период".to_string()
    };

    view! {
        <div id=format!("{}--dashboard", endpoint) class="page page--dashboard">
            <PageHeader title=page.title() subtitle=subtitle>
                <Show when=move || page != PageId::Stocks>
                    <DateRangePicker
                        date_from=date_from
                        date_to=date_to
                        on_change=on_period_change
                    />
                </Show>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| load_data()>
                    "Обновить"
                </Button>
            </PageHeader>

            {move || error.get().map(|err| view! {
                <MessageBar intent=MessageBarIntent::Error>
                    {err}
                </MessageBar>
            })}

            <div class="stat-cards">
                <StatCard
                    label="Строк"
                    value=Signal::derive(move || summary.with(|s| s.rows as f64))
                    kind=ColumnKind::Integer
                />
                {move || summary.with(|s| {
                    s.totals
                        .iter()
                        .map(|total| view! {
                            <StatCard
                                label=total.column.label
                                value=Signal::stored(total.value)
                                kind=total.column.kind
                            />
                        })
                        .collect_view()
                })}
            </div>

            {move || {
                if loading.get() {
                    view! {
                        <div class="page__loading">
                            <Spinner />
                        </div>
                    }.into_any()
                } else if rows.with(|r| r.is_empty()) {
                    view! {
                        <div class="page__empty">"Нет данных для отображения"</div>
                    }.into_any()
                } else {
                    view! { <DataTable columns=columns rows=rows /> }.into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_newer_request_supersedes_older() {
        let owner = Owner::new();
        owner.with(|| {
            let generation = StoredValue::new(0u64);
            let first = next_request(generation);
            assert!(is_latest(generation, first));

            let second = next_request(generation);
            assert!(!is_latest(generation, first));
            assert!(is_latest(generation, second));
        });
    }

    #[test]
    fn test_response_after_unmount_is_dropped() {
        let owner = Owner::new();
        let (generation, token) = owner.with(|| {
            let generation = StoredValue::new(0u64);
            let token = next_request(generation);
            (generation, token)
        });

        owner.cleanup();

        assert!(!is_latest(generation, token));
        assert_eq!(next_request(generation), 0);
    }
}
