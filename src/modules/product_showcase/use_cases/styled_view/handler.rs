use crate::modules::product_showcase::core::dataset::ProductCatalog;
use crate::modules::product_showcase::core::format_spec::{FormatSpec, FormatSpecError};
use crate::modules::product_showcase::core::gradient::{
    Colormap, HIGHLIGHT_COLOR, background_gradient, highlight_max,
};
use crate::modules::product_showcase::core::product::ProductColumn;
use crate::modules::product_showcase::core::table::{Cell, Table};

pub const STYLED_COLUMNS: [ProductColumn; 6] = [
    ProductColumn::Product,
    ProductColumn::Category,
    ProductColumn::Units,
    ProductColumn::Price,
    ProductColumn::Revenue,
    ProductColumn::Rating,
];

pub const STYLED_FORMATS: [(ProductColumn, &str); 4] = [
    (ProductColumn::Units, "{:,}"),
    (ProductColumn::Price, "₹ {:,.2f}"),
    (ProductColumn::Revenue, "₹ {:,.2f}"),
    (ProductColumn::Rating, "{:.1f}"),
];

/// Applies `formats` to the matching columns of `table`, leaving the others untouched.
pub fn format_columns(
    table: &mut Table,
    formats: &[(&str, &str)],
) -> Result<(), FormatSpecError> {
    for (key, spec) in formats {
        let spec = FormatSpec::parse(spec)?;
        let Some(index) = table.column_index(key) else {
            continue;
        };
        for row in table.rows.iter_mut() {
            if let Some(value) = row[index].value.as_f64() {
                row[index].display = Some(spec.apply(value));
            }
        }
    }
    Ok(())
}

/// Gradient over one numeric column.
pub fn apply_gradient(table: &mut Table, key: &str, colormap: Colormap) {
    let Some(index) = table.column_index(key) else {
        return;
    };
    let values: Vec<f64> = table
        .rows
        .iter()
        .map(|row| row[index].value.as_f64().unwrap_or(0.0))
        .collect();
    for (row, style) in table.rows.iter_mut().zip(background_gradient(&values, colormap)) {
        row[index].style = Some(style);
    }
}

fn highlight_top(table: &mut Table, key: &str) {
    let Some(index) = table.column_index(key) else {
        return;
    };
    let values: Vec<f64> = table
        .rows
        .iter()
        .map(|row| row[index].value.as_f64().unwrap_or(f64::NEG_INFINITY))
        .collect();
    for (row, is_max) in table.rows.iter_mut().zip(highlight_max(&values)) {
        if !is_max {
            continue;
        }
        let cell: &mut Cell = &mut row[index];
        if let Some(style) = cell.style.as_mut() {
            style.background_color = HIGHLIGHT_COLOR.to_string();
        }
    }
}

pub fn styled_table(catalog: &ProductCatalog) -> Result<Table, FormatSpecError> {
    let mut table = Table::project(catalog.rows(), &STYLED_COLUMNS);
    let formats: Vec<(&str, &str)> = STYLED_FORMATS
        .iter()
        .map(|(column, spec)| (column.as_ref(), *spec))
        .collect();
    format_columns(&mut table, &formats)?;
    apply_gradient(&mut table, ProductColumn::Revenue.as_ref(), Colormap::Greens);
    highlight_top(&mut table, ProductColumn::Revenue.as_ref());
    Ok(table)
}
