// Editable grid over the catalog.
//
// Only `units` and `in_stock` accept edits. Edits are keyed by row id and left-joined onto the
// immutable base rows; revenue follows from the joined units. Anything else a client sends
// for a row is dropped at deserialization.

use crate::modules::product_showcase::core::dataset::ProductCatalog;
use crate::modules::product_showcase::core::format_spec::FormatSpecError;
use crate::modules::product_showcase::core::product::{ProductColumn, ProductRow};
use crate::modules::product_showcase::core::table::{Column, ColumnKind, Table};
use crate::modules::product_showcase::use_cases::formatted_columns::handler::configured_table;
use serde::Deserialize;
use std::collections::HashMap;

pub const EDITOR_COLUMNS: [ProductColumn; 5] = [
    ProductColumn::Id,
    ProductColumn::Product,
    ProductColumn::Units,
    ProductColumn::Price,
    ProductColumn::InStock,
];

pub const RECOMPUTED_COLUMNS: [ProductColumn; 5] = [
    ProductColumn::Product,
    ProductColumn::Units,
    ProductColumn::Price,
    ProductColumn::Revenue,
    ProductColumn::InStock,
];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RowEdit {
    pub id: u32,
    #[serde(default)]
    pub units: Option<u32>,
    #[serde(default)]
    pub in_stock: Option<bool>,
}

fn number(format: &str) -> ColumnKind {
    ColumnKind::Number {
        format: format.to_string(),
    }
}

fn editor_column(column: ProductColumn) -> Column {
    let key = column.as_ref();
    match column {
        ProductColumn::Units => Column::labelled(key, "Units", number("localized")).editable(),
        ProductColumn::Price => Column::labelled(key, "Unit Price", number("accounting")),
        ProductColumn::Revenue => Column::labelled(key, "Revenue", number("accounting")),
        ProductColumn::InStock => {
            Column::labelled(key, "In Stock", ColumnKind::Checkbox).editable()
        }
        _ => Column::plain(key),
    }
}

/// Left join of `edits` onto `base` by id. For repeated ids the last edit wins.
pub fn apply_edits(base: &[ProductRow], edits: &[RowEdit]) -> Vec<ProductRow> {
    let by_id: HashMap<u32, &RowEdit> = edits.iter().map(|edit| (edit.id, edit)).collect();

    base.iter()
        .map(|row| {
            let mut joined = row.clone();
            if let Some(edit) = by_id.get(&row.id) {
                if let Some(units) = edit.units {
                    joined.units = units;
                }
                if let Some(in_stock) = edit.in_stock {
                    joined.in_stock = in_stock;
                }
            }
            joined
        })
        .collect()
}

pub fn editor_table(catalog: &ProductCatalog) -> Result<Table, FormatSpecError> {
    let columns: Vec<Column> = EDITOR_COLUMNS.iter().map(|c| editor_column(*c)).collect();
    configured_table(catalog.rows(), &columns, &EDITOR_COLUMNS)
}

pub fn recomputed_table(
    catalog: &ProductCatalog,
    edits: &[RowEdit],
) -> Result<Table, FormatSpecError> {
    let unknown = edits
        .iter()
        .filter(|edit| catalog.rows().iter().all(|row| row.id != edit.id))
        .count();
    if unknown > 0 {
        tracing::debug!(unknown, "ignoring edits for unknown product ids");
    }

    let rows = apply_edits(catalog.rows(), edits);
    let columns: Vec<Column> = RECOMPUTED_COLUMNS
        .iter()
        .map(|c| editor_column(*c))
        .collect();
    configured_table(&rows, &columns, &RECOMPUTED_COLUMNS)
}
