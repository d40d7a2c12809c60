// Category summary: units and revenue summed per category, biggest revenue first.

use crate::modules::product_showcase::core::dataset::ProductCatalog;
use crate::modules::product_showcase::core::format_spec::FormatSpecError;
use crate::modules::product_showcase::core::gradient::Colormap;
use crate::modules::product_showcase::core::table::{Cell, CellValue, Column, Table};
use crate::modules::product_showcase::use_cases::styled_view::handler::{
    apply_gradient, format_columns,
};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    pub category: String,
    pub units: u64,
    pub revenue: f64,
}

pub fn pivot_by_category(catalog: &ProductCatalog) -> Vec<CategorySummary> {
    let mut groups: BTreeMap<&str, (u64, f64)> = BTreeMap::new();
    for row in catalog.rows() {
        let entry = groups.entry(row.category.as_str()).or_default();
        entry.0 += u64::from(row.units);
        entry.1 += row.revenue();
    }

    let mut summary: Vec<CategorySummary> = groups
        .into_iter()
        .map(|(category, (units, revenue))| CategorySummary {
            category: category.to_string(),
            units,
            revenue,
        })
        .collect();
    summary.sort_by(|a, b| b.revenue.total_cmp(&a.revenue));
    summary
}

pub fn pivot_table(catalog: &ProductCatalog) -> Result<Table, FormatSpecError> {
    let summary = pivot_by_category(catalog);
    let mut table = Table {
        columns: vec![
            Column::plain("category"),
            Column::plain("revenue"),
            Column::plain("units"),
        ],
        rows: summary
            .into_iter()
            .map(|s| {
                vec![
                    Cell::raw(CellValue::Text(s.category)),
                    Cell::raw(CellValue::Float(s.revenue)),
                    Cell::raw(CellValue::Int(s.units as i64)),
                ]
            })
            .collect(),
    };
    format_columns(&mut table, &[("units", "{:,}"), ("revenue", "₹ {:,.2f}")])?;
    apply_gradient(&mut table, "revenue", Colormap::Blues);
    apply_gradient(&mut table, "units", Colormap::Blues);
    Ok(table)
}
