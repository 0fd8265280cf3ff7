//! Schema loading errors.

use crate::value::ValueType;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating a schema.
///
/// These never occur during evaluation: a schema that loads is structurally
/// sound.
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Invalid schema JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Cannot read schema {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Field #{index} has an empty name")]
    EmptyFieldName { index: usize },

    #[error("Duplicate field name: {0}")]
    DuplicateField(String),

    #[error("Field {field}: empty column name in {expression}")]
    EmptyColumnName { field: String, expression: String },

    #[error("Field {field}: invalid {expression} {value:?}")]
    InvalidConstant {
        field: String,
        expression: String,
        value: String,
    },

    #[error("Field {field}: unknown datatype {datatype:?}")]
    UnknownDatatype { field: String, datatype: String },

    #[error("Field {field}: property {property} expects {expected} values, got {actual}")]
    DatatypeMismatch {
        field: String,
        property: String,
        expected: ValueType,
        actual: ValueType,
    },
}
