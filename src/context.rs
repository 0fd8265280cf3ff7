//! Evaluation context for schema expressions.
//!
//! This module provides the capability boundary between the expression tree
//! and the data being converted:
//!
//! - **EvaluationContext**: per-row access to cells and lookup services
//! - **ColumnRef / CellValue**: how expressions address and read cells
//! - **TableContext / RowContext**: an in-memory implementation
//! - **EntityResolver**: pluggable entity lookup, with a shared cache
//!
//! Any `ContextError` is fatal for the row being evaluated.

pub mod cell;
pub mod resolver;
pub mod row;

pub use cell::{CellValue, ReconciledCell};
pub use resolver::{CachedResolver, EntityResolver, NoResolver, StaticResolver};
pub use row::{RowContext, TableContext};

use crate::value::{EntityIdValue, LanguageCode};
use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// Column reference in an expression
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct ColumnRef {
    /// Column name as it appears in the table header
    pub name: String,
}

impl ColumnRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Failures at the context boundary
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContextError {
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Entity lookup failed for {reference:?}: {message}")]
    LookupFailed { reference: String, message: String },

    #[error("Resolver returned an invalid entity id {id:?} for {reference:?}")]
    InvalidResolution { reference: String, id: String },
}

/// Result type for context operations
pub type ContextResult<T> = Result<T, ContextError>;

/// Read-only access to one row and the services needed to evaluate it.
///
/// Implementations must not let evaluation mutate shared state visible to
/// other rows, apart from caches whose contents do not change answers.
pub trait EvaluationContext {
    /// Get the cell stored under `column`.
    ///
    /// Returns `Ok(None)` for an empty cell and an error for a column the
    /// table does not have.
    fn cell_value(&self, column: &ColumnRef) -> ContextResult<Option<CellValue>>;

    /// Resolve a textual reference (label, identifier) to an item.
    ///
    /// `Ok(None)` means the reference has no match.
    fn resolve_entity(&self, reference: &str) -> ContextResult<Option<EntityIdValue>>;

    /// Normalize a language code, or return `Ok(None)` if the site does not
    /// accept it.
    fn normalize_language(&self, code: &str) -> ContextResult<Option<LanguageCode>>;

    /// IRI prefix of the entities of the target site
    fn site_iri(&self) -> &str;
}
