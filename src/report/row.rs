use crate::extensions::value_ext::PlainText;
use indexmap::{IndexMap, IndexSet};
use serde_json::{Map, Value};

/// One spreadsheet row, keyed by column name in insertion order.
pub type Row = IndexMap<String, Cell>;

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    String(String),
    Number(f64),
    Boolean(bool),
}

impl Cell {
    /// Converts a JSON value into a cell, flattening lists and objects into text.
    pub fn flatten(value: &Value) -> Self {
        match value {
            Value::Null => Cell::Empty,
            Value::Bool(b) => Cell::Boolean(*b),
            Value::Number(n) => n.as_f64().map(Cell::Number).unwrap_or_else(|| Cell::String(n.to_string())),
            Value::String(s) => Cell::String(s.clone()),
            Value::Array(items) => Cell::String(join_list(items)),
            Value::Object(map) => Cell::String(join_pairs(map)),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::String(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::String(value)
    }
}

impl From<Option<&str>> for Cell {
    fn from(value: Option<&str>) -> Self {
        value.map(Cell::from).unwrap_or(Cell::Empty)
    }
}

/// `["a", "b"]` becomes `a, b`.
pub fn join_list(items: &[Value]) -> String {
    items.iter().map(PlainText::plain_text).collect::<Vec<_>>().join(", ")
}

/// `{"a": 1, "b": "x"}` becomes `a:1; b:x`.
pub fn join_pairs(map: &Map<String, Value>) -> String {
    map.iter()
        .map(|(key, value)| format!("{}:{}", key, value.plain_text()))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Builds a row from API fields, keeping their order and flattening nested values.
pub fn flatten_fields(fields: &Map<String, Value>) -> Row {
    fields.iter().map(|(key, value)| (key.clone(), Cell::flatten(value))).collect()
}

/// Column names in first-seen order across all rows.
pub fn columns(rows: &[Row]) -> Vec<&str> {
    let columns: IndexSet<&str> = rows.iter().flat_map(|row| row.keys()).map(String::as_str).collect();
    columns.into_iter().collect()
}
