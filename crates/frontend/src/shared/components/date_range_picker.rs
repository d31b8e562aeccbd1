use chrono::{Datelike, NaiveDate};
use contracts::shared::date_utils::{format_date, month_bounds, parse_date, previous_month, today};
use leptos::prelude::*;
use thaw::*;

fn month_range(bounds: Option<(NaiveDate, NaiveDate)>) -> Option<(String, String)> {
    bounds.map(|(start, end)| (format_date(&start), format_date(&end)))
}

/// DateRangePicker component - выбор периода дат
///
/// Two `<input type="date">` fields plus quick buttons for the current and
/// the previous month.
#[component]
pub fn DateRangePicker(
    /// Значение даты "от" в формате yyyy-mm-dd
    #[prop(into)]
    date_from: Signal<String>,

    /// Значение даты "до" в формате yyyy-mm-dd
    #[prop(into)]
    date_to: Signal<String>,

    /// Callback при изменении диапазона дат (from, to)
    on_change: Callback<(String, String)>,
) -> impl IntoView {
    let on_from_change = move |new_from: String| {
        on_change.run((new_from, date_to.get_untracked()));
    };

    let on_to_change = move |new_to: String| {
        on_change.run((date_from.get_untracked(), new_to));
    };

    let on_current_month = move |_: ()| {
        let now = today();
        if let Some(range) = month_range(month_bounds(now.year(), now.month())) {
            on_change.run(range);
        }
    };

    // Предыдущий месяц относительно выбранной даты "от"
    let on_previous_month = move |_: ()| {
        let anchor = parse_date(&date_from.get_untracked()).unwrap_or_else(today);
        if let Some(range) = month_range(previous_month(anchor)) {
            on_change.run(range);
        }
    };

    view! {
        <Flex class="date-range-picker" align=FlexAlign::Center gap=FlexGap::Small>
            <input
                type="date"
                class="date-range-picker__input"
                prop:value=date_from
                on:input=move |ev| on_from_change(event_target_value(&ev))
            />

            <div>"—"</div>

            <input
                type="date"
                class="date-range-picker__input"
                prop:value=date_to
                on:input=move |ev| on_to_change(event_target_value(&ev))
            />

            <ButtonGroup>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| on_previous_month(())
                >
                    "-1M"
                </Button>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| on_current_month(())
                >
                    "0M"
                </Button>
            </ButtonGroup>
        </Flex>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_range_formats_bounds() {
        assert_eq!(
            month_range(month_bounds(2024, 2)),
            Some(("2024-02-01".to_string(), "2024-02-29".to_string()))
        );
        assert_eq!(month_range(None), None);
    }
}
