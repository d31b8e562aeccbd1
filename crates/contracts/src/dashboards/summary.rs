//! Итоги по загруженным строкам

use serde_json::Value;

use super::{numeric, Column};

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnTotal {
    pub column: Column,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MetricsSummary {
    pub rows: usize,
    pub totals: Vec<ColumnTotal>,
}

impl MetricsSummary {
    /// Sums every `total` column; non-numeric cells are skipped.
    pub fn compute(rows: &[Value], columns: &[Column]) -> Self {
        let totals = columns
            .iter()
            .filter(|c| c.total)
            .map(|column| ColumnTotal {
                column: *column,
                value: rows
                    .iter()
                    .filter_map(|row| row.get(column.field))
                    .filter_map(numeric)
                    .sum(),
            })
            .collect();

        Self {
            rows: rows.len(),
            totals,
        }
    }
}
