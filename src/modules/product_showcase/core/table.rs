// Presentation artifact shared by every showcase view.
//
// A table is a list of column descriptors plus rows of cells. A cell keeps its raw value and,
// when the view formats or styles it, the rendered text and the CSS-ish style.

use crate::modules::product_showcase::core::format_spec::FormatSpecError;
use crate::modules::product_showcase::core::product::{ProductColumn, ProductRow};
use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShowcaseError {
    #[error("unknown column: {0}")]
    UnknownColumn(String),

    #[error(transparent)]
    FormatSpec(#[from] FormatSpecError),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Date(NaiveDate),
    Text(String),
}

impl CellValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Int(v) => Some(*v as f64),
            CellValue::Float(v) => Some(*v),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellStyle {
    pub background_color: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    pub value: CellValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<CellStyle>,
}

impl Cell {
    pub fn raw(value: CellValue) -> Self {
        Self {
            value,
            display: None,
            style: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnWidth {
    Small,
    Medium,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ColumnKind {
    Plain,
    Text,
    Number { format: String },
    Progress { min_value: f64, max_value: f64, format: String },
    Checkbox,
    Date,
    Link { display_text: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    pub key: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<ColumnWidth>,
    pub kind: ColumnKind,
    pub editable: bool,
}

impl Column {
    pub fn plain(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            label: key.clone(),
            key,
            help: None,
            width: None,
            kind: ColumnKind::Plain,
            editable: false,
        }
    }

    pub fn labelled(key: impl Into<String>, label: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            help: None,
            width: None,
            kind,
            editable: false,
        }
    }

    pub fn help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }

    pub fn width(mut self, width: ColumnWidth) -> Self {
        self.width = Some(width);
        self
    }

    pub fn editable(mut self) -> Self {
        self.editable = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Raw projection of `rows` onto `columns`, no formatting.
    pub fn project(rows: &[ProductRow], columns: &[ProductColumn]) -> Self {
        Self {
            columns: columns.iter().map(|c| Column::plain(c.as_ref())).collect(),
            rows: rows
                .iter()
                .map(|row| columns.iter().map(|c| Cell::raw(row.value(*c))).collect())
                .collect(),
        }
    }

    pub fn column_index(&self, key: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.key == key)
    }

    pub fn column_values(&self, key: &str) -> Vec<&CellValue> {
        match self.column_index(key) {
            Some(index) => self.rows.iter().map(|row| &row[index].value).collect(),
            None => Vec::new(),
        }
    }
}
