//! Entity resolution services.

use crate::context::{ContextError, ContextResult};
use crate::value::entity::is_valid_id;
use crate::value::EntityKind;
use dashmap::DashMap;
use log::debug;
use std::collections::HashMap;

/// Resolves a textual reference to an item id.
///
/// Implementations may perform I/O; they are shared by every worker
/// evaluating rows of the same table.
pub trait EntityResolver: Send + Sync {
    /// Return the item id matching `reference`, `Ok(None)` if there is none
    fn resolve(&self, reference: &str) -> ContextResult<Option<String>>;
}

/// Resolver backed by a fixed label → id table.
///
/// References that already are item ids resolve to themselves.
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    entries: HashMap<String, String>,
}

impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, label: impl Into<String>, id: impl Into<String>) -> Self {
        self.entries.insert(label.into(), id.into());
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for StaticResolver {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl EntityResolver for StaticResolver {
    fn resolve(&self, reference: &str) -> ContextResult<Option<String>> {
        let reference = reference.trim();
        if is_valid_id(EntityKind::Item, reference) {
            return Ok(Some(reference.to_string()));
        }
        Ok(self.entries.get(reference).cloned())
    }
}

/// Memoizes the answers of another resolver.
///
/// Both matches and misses are cached; errors are not, so a failed lookup is
/// retried by the next row that needs it.
pub struct CachedResolver<R> {
    inner: R,
    cache: DashMap<String, Option<String>>,
}

impl<R: EntityResolver> CachedResolver<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            cache: DashMap::new(),
        }
    }

    /// Number of cached answers
    pub fn cached(&self) -> usize {
        self.cache.len()
    }
}

impl<R: EntityResolver> EntityResolver for CachedResolver<R> {
    fn resolve(&self, reference: &str) -> ContextResult<Option<String>> {
        if let Some(hit) = self.cache.get(reference) {
            return Ok(hit.value().clone());
        }

        let answer = self.inner.resolve(reference)?;
        debug!("Resolved {:?} to {:?}", reference, answer);
        self.cache.insert(reference.to_string(), answer.clone());
        Ok(answer)
    }
}

/// Resolver that fails every lookup, for tables that must not need one
#[derive(Debug, Clone, Copy, Default)]
pub struct NoResolver;

impl EntityResolver for NoResolver {
    fn resolve(&self, reference: &str) -> ContextResult<Option<String>> {
        Err(ContextError::LookupFailed {
            reference: reference.to_string(),
            message: "no entity resolver configured".to_string(),
        })
    }
}
