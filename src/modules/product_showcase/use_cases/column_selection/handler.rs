use crate::modules::product_showcase::core::dataset::ProductCatalog;
use crate::modules::product_showcase::core::product::ProductColumn;
use crate::modules::product_showcase::core::table::{ShowcaseError, Table};

pub const DEFAULT_SELECTION: [ProductColumn; 5] = [
    ProductColumn::Product,
    ProductColumn::Category,
    ProductColumn::Units,
    ProductColumn::Price,
    ProductColumn::Revenue,
];

pub fn parse_selection<S: AsRef<str>>(names: &[S]) -> Result<Vec<ProductColumn>, ShowcaseError> {
    names
        .iter()
        .map(|name| {
            let name = name.as_ref().trim();
            name.parse::<ProductColumn>()
                .map_err(|_| ShowcaseError::UnknownColumn(name.to_string()))
        })
        .collect()
}

/// The chosen columns in the order given. An empty choice shows an empty-column table.
pub fn select_columns(catalog: &ProductCatalog, columns: &[ProductColumn]) -> Table {
    Table::project(catalog.rows(), columns)
}
