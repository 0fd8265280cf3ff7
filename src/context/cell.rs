//! Cell values as read from a row.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value as JsonValue};
use std::borrow::Cow;

/// A cell that went through reconciliation
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReconciledCell {
    pub text: String,
    /// Matched item id, if reconciliation found one
    #[serde(rename = "match", default)]
    pub matched: Option<String>,
}

/// Non-empty cell content.
///
/// Numbers keep the literal they were written with, so an amount read from a
/// numeric cell is parsed from exactly the digits in the input.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Boolean(bool),
    Number(Number),
    Text(String),
    Reconciled(ReconciledCell),
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    pub fn number(value: impl Into<Number>) -> Self {
        CellValue::Number(value.into())
    }

    pub fn reconciled(text: impl Into<String>, matched: Option<&str>) -> Self {
        CellValue::Reconciled(ReconciledCell {
            text: text.into(),
            matched: matched.map(str::to_string),
        })
    }

    /// Textual form of the cell
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            CellValue::Boolean(b) => Cow::Owned(b.to_string()),
            CellValue::Number(n) => Cow::Owned(n.to_string()),
            CellValue::Text(s) => Cow::Borrowed(s),
            CellValue::Reconciled(cell) => Cow::Borrowed(&cell.text),
        }
    }
}

impl<'de> Deserialize<'de> for CellValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match JsonValue::deserialize(deserializer)? {
            JsonValue::Bool(b) => Ok(CellValue::Boolean(b)),
            JsonValue::Number(n) => Ok(CellValue::Number(n)),
            JsonValue::String(s) => Ok(CellValue::Text(s)),
            object @ JsonValue::Object(_) => serde_json::from_value(object)
                .map(CellValue::Reconciled)
                .map_err(D::Error::custom),
            JsonValue::Null => Err(D::Error::custom("empty cell where a value was expected")),
            JsonValue::Array(_) => Err(D::Error::custom("a cell cannot hold an array")),
        }
    }
}
