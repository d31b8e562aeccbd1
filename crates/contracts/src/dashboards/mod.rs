//! Описание таблиц дашбордов
//!
//! Rows arrive as opaque JSON objects; the column descriptors below name the
//! fields each page shows and how to render them.

pub mod summary;

use chrono::NaiveDate;
use serde_json::Value;

use crate::api::QueryParams;
use crate::routing::PageId;
use crate::shared::number_format::{format_integer, format_money};

/// Placeholder for missing or null cells.
pub const EMPTY_CELL: &str = "—";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    /// ISO date or datetime; only the date part is shown.
    Date,
    Integer,
    Money,
    Flag,
}

impl ColumnKind {
    pub fn is_numeric(self) -> bool {
        matches!(self, ColumnKind::Integer | ColumnKind::Money)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub field: &'static str,
    pub label: &'static str,
    pub kind: ColumnKind,
    /// Summed into a stat card above the table.
    pub total: bool,
}

const fn col(field: &'static str, label: &'static str, kind: ColumnKind) -> Column {
    Column {
        field,
        label,
        kind,
        total: false,
    }
}

const fn total(field: &'static str, label: &'static str, kind: ColumnKind) -> Column {
    Column {
        field,
        label,
        kind,
        total: true,
    }
}

const SALES_COLUMNS: &[Column] = &[
    col("date", "Дата", ColumnKind::Date),
    col("g_number", "Номер", ColumnKind::Text),
    col("supplier_article", "Артикул", ColumnKind::Text),
    col("brand", "Бренд", ColumnKind::Text),
    col("warehouse_name", "Склад", ColumnKind::Text),
    col("region_name", "Регион", ColumnKind::Text),
    total("total_price", "Цена", ColumnKind::Money),
    col("discount_percent", "Скидка, %", ColumnKind::Integer),
    total("for_pay", "К перечислению", ColumnKind::Money),
    total("finished_price", "Итоговая цена", ColumnKind::Money),
    col("is_storno", "Сторно", ColumnKind::Flag),
];

const ORDERS_COLUMNS: &[Column] = &[
    col("date", "Дата", ColumnKind::Date),
    col("g_number", "Номер", ColumnKind::Text),
    col("supplier_article", "Артикул", ColumnKind::Text),
    col("brand", "Бренд", ColumnKind::Text),
    col("warehouse_name", "Склад", ColumnKind::Text),
    col("oblast", "Область", ColumnKind::Text),
    total("total_price", "Цена", ColumnKind::Money),
    col("discount_percent", "Скидка, %", ColumnKind::Integer),
    col("is_cancel", "Отменён", ColumnKind::Flag),
    col("cancel_dt", "Дата отмены", ColumnKind::Date),
];

const STOCKS_COLUMNS: &[Column] = &[
    col("last_change_date", "Изменено", ColumnKind::Date),
    col("supplier_article", "Артикул", ColumnKind::Text),
    col("tech_size", "Размер", ColumnKind::Text),
    col("barcode", "Баркод", ColumnKind::Text),
    col("warehouse_name", "Склад", ColumnKind::Text),
    total("quantity", "Остаток", ColumnKind::Integer),
    total("quantity_full", "Полный остаток", ColumnKind::Integer),
    total("in_way_to_client", "В пути к клиенту", ColumnKind::Integer),
    total("in_way_from_client", "В пути от клиента", ColumnKind::Integer),
    col("price", "Цена", ColumnKind::Money),
];

const INCOMES_COLUMNS: &[Column] = &[
    col("date", "Дата", ColumnKind::Date),
    col("income_id", "Поставка", ColumnKind::Text),
    col("number", "Номер", ColumnKind::Text),
    col("supplier_article", "Артикул", ColumnKind::Text),
    col("barcode", "Баркод", ColumnKind::Text),
    col("warehouse_name", "Склад", ColumnKind::Text),
    total("quantity", "Количество", ColumnKind::Integer),
    total("total_price", "Сумма", ColumnKind::Money),
    col("date_close", "Закрыта", ColumnKind::Date),
];

pub fn columns_for(page: PageId) -> &'static [Column] {
    match page {
        PageId::Sales => SALES_COLUMNS,
        PageId::Orders => ORDERS_COLUMNS,
        PageId::Stocks => STOCKS_COLUMNS,
        PageId::Incomes => INCOMES_COLUMNS,
        PageId::NotFound => &[],
    }
}

/// Query sent when a page loads its rows.
///
/// Stocks are a snapshot: the backend only accepts today's `dateFrom`.
pub fn default_params(page: PageId, from: NaiveDate, to: NaiveDate, today: NaiveDate) -> QueryParams {
    match page {
        PageId::Stocks => QueryParams::new().with("dateFrom", today),
        _ => QueryParams::new().with("dateFrom", from).with("dateTo", to),
    }
}

/// Numbers pass through; numeric strings (the API sends prices both ways) are
/// parsed.
pub fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

pub fn cell_text(row: &Value, column: &Column) -> String {
    let value = match row.get(column.field) {
        None | Some(Value::Null) => return EMPTY_CELL.to_string(),
        Some(value) => value,
    };

    match column.kind {
        ColumnKind::Text => match value {
            Value::String(s) if s.is_empty() => EMPTY_CELL.to_string(),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        },
        ColumnKind::Date => match value.as_str() {
            Some(s) if !s.is_empty() => s
                .split(['T', ' '])
                .next()
                .unwrap_or(s)
                .to_string(),
            _ => EMPTY_CELL.to_string(),
        },
        ColumnKind::Integer => numeric(value)
            .map(format_integer)
            .unwrap_or_else(|| value.to_string()),
        ColumnKind::Money => numeric(value)
            .map(format_money)
            .unwrap_or_else(|| value.to_string()),
        ColumnKind::Flag => match value {
            Value::Bool(true) => "Да".to_string(),
            Value::Bool(false) => "Нет".to_string(),
            Value::Number(n) if n.as_f64() == Some(0.0) => "Нет".to_string(),
            Value::Number(_) => "Да".to_string(),
            other => other.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_every_dashboard_has_columns() {
        for page in PageId::DASHBOARDS {
            assert!(!columns_for(page).is_empty(), "{} has no columns", page);
        }
        assert!(columns_for(PageId::NotFound).is_empty());
    }

    #[test]
    fn test_default_params() {
        let from = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();

        let sales = default_params(PageId::Sales, from, to, today);
        assert_eq!(sales.to_query_string("k"), "dateFrom=2024-01-01&dateTo=2024-01-31&key=k");

        let stocks = default_params(PageId::Stocks, from, to, today);
        assert_eq!(stocks.to_query_string("k"), "dateFrom=2024-02-10&key=k");
    }

    #[test]
    fn test_cell_text() {
        let row = json!({
            "date": "2024-01-05T10:11:12",
            "brand": "",
            "total_price": "1234.5",
            "quantity": 1500,
            "is_cancel": false,
            "is_storno": 1,
            "oblast": null
        });
        let text = |field: &'static str, kind| {
            cell_text(
                &row,
                &Column {
                    field,
                    label: field,
                    kind,
                    total: false,
                },
            )
        };

        assert_eq!(text("date", ColumnKind::Date), "2024-01-05");
        assert_eq!(text("brand", ColumnKind::Text), EMPTY_CELL);
        assert_eq!(text("total_price", ColumnKind::Money), "1 234.50");
        assert_eq!(text("quantity", ColumnKind::Integer), "1 500");
        assert_eq!(text("is_cancel", ColumnKind::Flag), "Нет");
        assert_eq!(text("is_storno", ColumnKind::Flag), "Да");
        assert_eq!(text("oblast", ColumnKind::Text), EMPTY_CELL);
        assert_eq!(text("missing", ColumnKind::Text), EMPTY_CELL);
    }

    #[test]
    fn test_numeric() {
        assert_eq!(numeric(&json!(12)), Some(12.0));
        assert_eq!(numeric(&json!(" 7.25 ")), Some(7.25));
        assert_eq!(numeric(&json!("abc")), None);
        assert_eq!(numeric(&json!(true)), None);
    }
}
