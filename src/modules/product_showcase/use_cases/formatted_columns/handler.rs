// Every column of the dataset with a label, help text and a display format.

use crate::modules::product_showcase::core::dataset::ProductCatalog;
use crate::modules::product_showcase::core::format_spec::{FormatSpec, FormatSpecError};
use crate::modules::product_showcase::core::product::{ProductColumn, ProductRow};
use crate::modules::product_showcase::core::table::{
    Cell, CellValue, Column, ColumnKind, ColumnWidth, Table,
};

pub const RATING_MAX: f64 = 5.0;

fn number(format: &str) -> ColumnKind {
    ColumnKind::Number {
        format: format.to_string(),
    }
}

pub fn column_config(column: ProductColumn) -> Column {
    let key = column.as_ref();
    match column {
        ProductColumn::Id => Column::labelled(key, "ID", number("%d"))
            .help("Internal identifier")
            .width(ColumnWidth::Small),
        ProductColumn::Product => {
            Column::labelled(key, "Product", ColumnKind::Text).width(ColumnWidth::Medium)
        }
        ProductColumn::Category => {
            Column::labelled(key, "Category", ColumnKind::Text).width(ColumnWidth::Small)
        }
        ProductColumn::Units => {
            Column::labelled(key, "Units", number("localized")).help("Pieces sold")
        }
        ProductColumn::Price => {
            Column::labelled(key, "Unit Price", number("accounting")).help("Per item")
        }
        ProductColumn::Revenue => {
            Column::labelled(key, "Revenue", number("accounting")).help("units × price")
        }
        ProductColumn::Rating => Column::labelled(
            key,
            "Rating",
            ColumnKind::Progress {
                min_value: 0.0,
                max_value: RATING_MAX,
                format: "%d".to_string(),
            },
        )
        .help("Out of 5")
        .width(ColumnWidth::Small),
        ProductColumn::InStock => {
            Column::labelled(key, "In Stock", ColumnKind::Checkbox).help("Available now?")
        }
        ProductColumn::AddedOn => {
            Column::labelled(key, "Added On", ColumnKind::Date).help("Date added")
        }
        ProductColumn::Url => Column::labelled(
            key,
            "Link",
            ColumnKind::Link {
                display_text: "View".to_string(),
            },
        ),
    }
}

/// Renders one cell according to its column kind.
pub fn render_cell(kind: &ColumnKind, value: CellValue) -> Result<Cell, FormatSpecError> {
    let display = match (kind, &value) {
        (ColumnKind::Number { format }, v) | (ColumnKind::Progress { format, .. }, v) => {
            match v.as_f64() {
                Some(n) => Some(FormatSpec::parse(format)?.apply(n)),
                None => None,
            }
        }
        (ColumnKind::Checkbox, CellValue::Bool(flag)) => {
            Some(if *flag { "☑" } else { "☐" }.to_string())
        }
        (ColumnKind::Date, CellValue::Date(date)) => Some(date.format("%Y-%m-%d").to_string()),
        (ColumnKind::Link { display_text }, CellValue::Text(_)) => Some(display_text.clone()),
        _ => None,
    };
    Ok(Cell {
        value,
        display,
        style: None,
    })
}

pub fn configured_table(
    rows: &[ProductRow],
    columns: &[Column],
    keys: &[ProductColumn],
) -> Result<Table, FormatSpecError> {
    let rendered = rows
        .iter()
        .map(|row| {
            keys.iter()
                .zip(columns)
                .map(|(key, column)| render_cell(&column.kind, row.value(*key)))
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Table {
        columns: columns.to_vec(),
        rows: rendered,
    })
}

pub fn formatted_table(catalog: &ProductCatalog) -> Result<Table, FormatSpecError> {
    let keys = ProductColumn::all();
    let columns: Vec<Column> = keys.iter().map(|c| column_config(*c)).collect();
    configured_table(catalog.rows(), &columns, &keys)
}
