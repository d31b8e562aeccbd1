use contracts::dashboards::{cell_text, Column, ColumnKind};
use leptos::prelude::*;
use serde_json::Value;

fn cell_class(column: &Column) -> &'static str {
    if column.kind.is_numeric() {
        "data-table__cell data-table__cell--number"
    } else if column.kind == ColumnKind::Flag {
        "data-table__cell data-table__cell--center"
    } else {
        "data-table__cell"
    }
}

/// Read-only table over opaque JSON rows
#[component]
pub fn DataTable(
    columns: &'static [Column],
    #[prop(into)] rows: Signal<Vec<Value>>,
) -> impl IntoView {
    view! {
        <div class="table-wrapper">
            <table class="data-table">
                <thead>
                    <tr>
                        {columns
                            .iter()
                            .map(|column| view! {
                                <th class=cell_class(column)>{column.label}</th>
                            })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {move || rows.with(|rows| {
                        rows.iter()
                            .map(|row| view! {
                                <tr>
                                    {columns
                                        .iter()
                                        .map(|column| view! {
                                            <td class=cell_class(column)>{cell_text(row, column)}</td>
                                        })
                                        .collect_view()}
                                </tr>
                            })
                            .collect_view()
                    })}
                </tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::columns_for;
    use contracts::routing::PageId;

    fn column(field: &str) -> &'static Column {
        columns_for(PageId::Sales)
            .iter()
            .find(|c| c.field == field)
            .unwrap()
    }

    #[test]
    fn test_numeric_columns_align_right() {
        assert_eq!(cell_class(column("total_price")), "data-table__cell data-table__cell--number");
        assert_eq!(cell_class(column("discount_percent")), "data-table__cell data-table__cell--number");
        assert_eq!(cell_class(column("is_storno")), "data-table__cell data-table__cell--center");
        assert_eq!(cell_class(column("brand")), "data-table__cell");
    }
}
