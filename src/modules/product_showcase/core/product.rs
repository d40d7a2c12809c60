use chrono::NaiveDate;
use serde::Serialize;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

use crate::modules::product_showcase::core::table::CellValue;

/// Dataset columns in frame order. `revenue` is derived and always last.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString, AsRefStr, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ProductColumn {
    Id,
    Product,
    Category,
    Units,
    Price,
    Rating,
    InStock,
    AddedOn,
    Url,
    Revenue,
}

impl ProductColumn {
    pub fn all() -> Vec<ProductColumn> {
        ProductColumn::iter().collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductRow {
    pub id: u32,
    pub product: String,
    pub category: String,
    pub units: u32,
    pub price: f64,
    pub rating: f64,
    pub in_stock: bool,
    pub added_on: NaiveDate,
    pub url: String,
}

impl ProductRow {
    /// units × price. Not stored, so it can never drift from the units it depends on.
    pub fn revenue(&self) -> f64 {
        f64::from(self.units) * self.price
    }

    pub fn value(&self, column: ProductColumn) -> CellValue {
        match column {
            ProductColumn::Id => CellValue::Int(i64::from(self.id)),
            ProductColumn::Product => CellValue::Text(self.product.clone()),
            ProductColumn::Category => CellValue::Text(self.category.clone()),
            ProductColumn::Units => CellValue::Int(i64::from(self.units)),
            ProductColumn::Price => CellValue::Float(self.price),
            ProductColumn::Rating => CellValue::Float(self.rating),
            ProductColumn::InStock => CellValue::Bool(self.in_stock),
            ProductColumn::AddedOn => CellValue::Date(self.added_on),
            ProductColumn::Url => CellValue::Text(self.url.clone()),
            ProductColumn::Revenue => CellValue::Float(self.revenue()),
        }
    }
}
