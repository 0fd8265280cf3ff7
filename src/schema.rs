//! Schemas and their evaluation against rows.
//!
//! A schema is an ordered list of named fields, each holding the expression
//! tree of one statement. This module provides:
//!
//! - **Schema**: loading from JSON with load-time validation
//! - **RowEvaluator**: evaluates every field against one row, omitting the
//!   fields that skip and aborting the row on fatal errors
//! - **BatchEvaluator**: evaluates many rows on worker threads sharing one
//!   immutable schema

pub mod batch;
pub mod error;
pub mod evaluator;
pub mod validator;

pub use batch::{BatchConfig, BatchEvaluator, BatchReport};
pub use error::SchemaError;
pub use evaluator::{evaluate_row, FieldValue, RowError, RowEvaluator, RowOutput};
pub use validator::SchemaValidator;

use crate::context::ColumnRef;
use crate::expression::{ItemExpr, LanguageExpr, SnakExpr, StringExpr, ValueExpr};
use serde::{Deserialize, Deserializer};
use std::collections::BTreeSet;
use std::path::Path;

/// One named field of a schema
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SchemaField {
    pub name: String,
    pub statement: SnakExpr,
}

impl SchemaField {
    pub fn new(name: impl Into<String>, statement: SnakExpr) -> Self {
        Self {
            name: name.into(),
            statement,
        }
    }
}

#[derive(Deserialize)]
struct RawSchema {
    fields: Vec<SchemaField>,
}

/// A validated, immutable list of fields
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    fields: Vec<SchemaField>,
}

impl<'de> Deserialize<'de> for Schema {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawSchema::deserialize(deserializer)?;
        Schema::new(raw.fields).map_err(serde::de::Error::custom)
    }
}

impl Schema {
    /// Build a schema, validating every field
    pub fn new(fields: Vec<SchemaField>) -> Result<Self, SchemaError> {
        SchemaValidator::validate_fields(&fields)?;
        Ok(Self { fields })
    }

    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let raw: RawSchema = serde_json::from_str(json)?;
        Schema::new(raw.fields)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SchemaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn fields(&self) -> &[SchemaField] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Names of all columns the schema reads
    pub fn columns(&self) -> BTreeSet<&str> {
        let mut columns = BTreeSet::new();
        for field in &self.fields {
            collect_value_columns(&field.statement.value, &mut columns);
        }
        columns
    }
}

fn collect_value_columns<'a>(expr: &'a ValueExpr, out: &mut BTreeSet<&'a str>) {
    let mut add = |column: &'a ColumnRef| {
        out.insert(column.name.as_str());
    };
    match expr {
        ValueExpr::StringVariable(v) => add(&v.column),
        ValueExpr::ItemVariable(v) => add(&v.column),
        ValueExpr::LocationVariable(v) => add(&v.column),
        ValueExpr::Monolingual(m) => {
            if let LanguageExpr::Variable(v) = &m.language {
                add(&v.column);
            }
            if let StringExpr::Variable(v) = &m.value {
                add(&v.column);
            }
        }
        ValueExpr::Quantity(q) => {
            if let StringExpr::Variable(v) = &q.amount {
                add(&v.column);
            }
            if let Some(ItemExpr::Variable(v)) = &q.unit {
                add(&v.column);
            }
        }
        ValueExpr::StringConstant(_)
        | ValueExpr::ItemConstant(_)
        | ValueExpr::PropertyConstant(_)
        | ValueExpr::LocationConstant(_) => {}
    }
}
