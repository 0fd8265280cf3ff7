//! Test doubles for the evaluation context.

use crate::context::{CellValue, ColumnRef, ContextError, ContextResult, EvaluationContext};
use crate::value::{EntityIdValue, LanguageCode, DEFAULT_SITE_IRI};
use std::cell::RefCell;
use std::collections::HashMap;

/// Context answering from fixed maps and recording which columns were read
#[derive(Default)]
pub struct StubContext {
    cells: HashMap<String, Option<CellValue>>,
    entities: HashMap<String, String>,
    failing: Vec<String>,
    reads: RefCell<Vec<String>>,
}

impl StubContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cell(mut self, column: &str, cell: CellValue) -> Self {
        self.cells.insert(column.to_string(), Some(cell));
        self
    }

    pub fn with_text(self, column: &str, text: &str) -> Self {
        self.with_cell(column, CellValue::text(text))
    }

    pub fn with_empty(mut self, column: &str) -> Self {
        self.cells.insert(column.to_string(), None);
        self
    }

    pub fn with_entity(mut self, reference: &str, id: &str) -> Self {
        self.entities.insert(reference.to_string(), id.to_string());
        self
    }

    /// Make lookups of `reference` fail
    pub fn with_failing_lookup(mut self, reference: &str) -> Self {
        self.failing.push(reference.to_string());
        self
    }

    pub fn reads(&self) -> Vec<String> {
        self.reads.borrow().clone()
    }
}

impl EvaluationContext for StubContext {
    fn cell_value(&self, column: &ColumnRef) -> ContextResult<Option<CellValue>> {
        self.reads.borrow_mut().push(column.name.clone());
        self.cells
            .get(&column.name)
            .cloned()
            .ok_or_else(|| ContextError::UnknownColumn(column.name.clone()))
    }

    fn resolve_entity(&self, reference: &str) -> ContextResult<Option<EntityIdValue>> {
        if self.failing.iter().any(|r| r == reference) {
            return Err(ContextError::LookupFailed {
                reference: reference.to_string(),
                message: "stub failure".to_string(),
            });
        }
        Ok(self
            .entities
            .get(reference)
            .and_then(|id| EntityIdValue::item(id.clone(), DEFAULT_SITE_IRI).ok()))
    }

    fn normalize_language(&self, code: &str) -> ContextResult<Option<LanguageCode>> {
        let code = code.trim().to_lowercase();
        Ok(matches!(code.as_str(), "en" | "fr" | "de").then(|| LanguageCode::new(code)))
    }

    fn site_iri(&self) -> &str {
        DEFAULT_SITE_IRI
    }
}
