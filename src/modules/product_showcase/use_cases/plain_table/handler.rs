use crate::modules::product_showcase::core::dataset::ProductCatalog;
use crate::modules::product_showcase::core::product::ProductColumn;
use crate::modules::product_showcase::core::table::Table;

pub const INTERACTIVE_ROWS: usize = 8;
pub const STATIC_LAST_ROW: usize = 4;

pub const STATIC_COLUMNS: [ProductColumn; 4] = [
    ProductColumn::Product,
    ProductColumn::Category,
    ProductColumn::Units,
    ProductColumn::Price,
];

/// First rows, every column, unformatted. Meant for a scrollable grid.
pub fn interactive_table(catalog: &ProductCatalog) -> Table {
    let rows = &catalog.rows()[..INTERACTIVE_ROWS.min(catalog.rows().len())];
    Table::project(rows, &ProductColumn::all())
}

/// Rows 0 through 4 inclusive, four columns. Meant for a static snapshot.
pub fn static_table(catalog: &ProductCatalog) -> Table {
    let rows = &catalog.rows()[..(STATIC_LAST_ROW + 1).min(catalog.rows().len())];
    Table::project(rows, &STATIC_COLUMNS)
}
