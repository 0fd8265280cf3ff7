//! In-memory rows.

use crate::context::{
    CellValue, ColumnRef, ContextError, ContextResult, EntityResolver, EvaluationContext,
    StaticResolver,
};
use crate::value::{EntityIdValue, LanguageCode, DEFAULT_SITE_IRI};
use std::collections::{HashMap, HashSet};

/// Everything the rows of one table share: the header, the target site and
/// the lookup services.
pub struct TableContext {
    columns: HashSet<String>,
    site_iri: String,
    resolver: Box<dyn EntityResolver>,
    /// Accepted language codes; `None` accepts any well-formed code
    languages: Option<HashSet<String>>,
}

impl TableContext {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            site_iri: DEFAULT_SITE_IRI.to_string(),
            resolver: Box::new(StaticResolver::new()),
            languages: None,
        }
    }

    pub fn with_site_iri(mut self, site_iri: impl Into<String>) -> Self {
        self.site_iri = site_iri.into();
        self
    }

    pub fn with_resolver(mut self, resolver: impl EntityResolver + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    pub fn with_languages<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages = Some(codes.into_iter().map(Into::into).collect());
        self
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains(name)
    }

    /// Create the context of one row
    pub fn row(&self, cells: HashMap<String, CellValue>) -> RowContext<'_> {
        RowContext { table: self, cells }
    }

    /// Create the context of one row from `(column, cell)` pairs
    pub fn row_from_pairs<I, K>(&self, cells: I) -> RowContext<'_>
    where
        I: IntoIterator<Item = (K, CellValue)>,
        K: Into<String>,
    {
        self.row(cells.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// One row of a table; cells not present are empty
pub struct RowContext<'t> {
    table: &'t TableContext,
    cells: HashMap<String, CellValue>,
}

impl EvaluationContext for RowContext<'_> {
    fn cell_value(&self, column: &ColumnRef) -> ContextResult<Option<CellValue>> {
        if !self.table.has_column(&column.name) {
            return Err(ContextError::UnknownColumn(column.name.clone()));
        }
        Ok(self.cells.get(&column.name).cloned())
    }

    fn resolve_entity(&self, reference: &str) -> ContextResult<Option<EntityIdValue>> {
        let Some(id) = self.table.resolver.resolve(reference)? else {
            return Ok(None);
        };
        EntityIdValue::item(id.clone(), self.table.site_iri.clone())
            .map(Some)
            .map_err(|_| ContextError::InvalidResolution {
                reference: reference.to_string(),
                id,
            })
    }

    fn normalize_language(&self, code: &str) -> ContextResult<Option<LanguageCode>> {
        let code = code.trim().to_ascii_lowercase();
        let accepted = match &self.table.languages {
            Some(languages) => languages.contains(&code),
            None => LanguageCode::is_well_formed(&code),
        };
        Ok(accepted.then(|| LanguageCode::new(code)))
    }

    fn site_iri(&self) -> &str {
        &self.table.site_iri
    }
}
