//! Entity references.

use crate::value::ValueError;
use std::fmt;

/// Site IRI used when none is configured
pub const DEFAULT_SITE_IRI: &str = "http://www.wikidata.org/entity/";

/// Kind of entity an identifier points to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Item,
    Property,
}

impl EntityKind {
    fn prefix(self) -> char {
        match self {
            EntityKind::Item => 'Q',
            EntityKind::Property => 'P',
        }
    }
}

/// Reference to an entity of a Wikibase site
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityIdValue {
    kind: EntityKind,
    id: String,
    site_iri: String,
}

impl EntityIdValue {
    /// Build an item reference such as `Q42`
    pub fn item(id: impl Into<String>, site_iri: impl Into<String>) -> Result<Self, ValueError> {
        Self::with_kind(EntityKind::Item, id.into(), site_iri.into())
    }

    /// Build a property reference such as `P31`
    pub fn property(
        id: impl Into<String>,
        site_iri: impl Into<String>,
    ) -> Result<Self, ValueError> {
        Self::with_kind(EntityKind::Property, id.into(), site_iri.into())
    }

    fn with_kind(kind: EntityKind, id: String, site_iri: String) -> Result<Self, ValueError> {
        if !is_valid_id(kind, &id) {
            return Err(ValueError::InvalidEntityId(id));
        }
        Ok(Self { kind, id, site_iri })
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn site_iri(&self) -> &str {
        &self.site_iri
    }

    /// Full IRI of the entity (site IRI followed by the id)
    pub fn iri(&self) -> String {
        format!("{}{}", self.site_iri, self.id)
    }
}

/// Check that `id` is the prefix letter followed by a positive number
pub(crate) fn is_valid_id(kind: EntityKind, id: &str) -> bool {
    let mut chars = id.chars();
    if chars.next() != Some(kind.prefix()) {
        return false;
    }
    let digits = chars.as_str();
    !digits.is_empty() && !digits.starts_with('0') && digits.chars().all(|c| c.is_ascii_digit())
}

impl fmt::Display for EntityIdValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}
