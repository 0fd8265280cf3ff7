//! Domain values produced by schema expressions.
//!
//! This module provides the typed output model of the engine:
//!
//! - **StringValue / MonolingualTextValue**: plain and language-tagged text
//! - **EntityIdValue**: references to items (`Q…`) and properties (`P…`)
//! - **QuantityValue**: an exact decimal amount with an optional unit
//! - **GlobeCoordinatesValue**: a latitude/longitude pair on a globe
//! - **Snak**: a property paired with one of the values above
//!
//! Values are immutable once built and are handed to the caller by value.
//! How they are encoded for the target knowledge base is not decided here.

pub mod coordinates;
pub mod entity;
pub mod quantity;
pub mod text;

pub use coordinates::GlobeCoordinatesValue;
pub use entity::{EntityIdValue, EntityKind, DEFAULT_SITE_IRI};
pub use quantity::QuantityValue;
pub use text::{LanguageCode, MonolingualTextValue, StringValue};

use std::fmt;
use thiserror::Error;

/// Errors raised while building a value from its textual form
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValueError {
    #[error("Invalid entity id: {0:?}")]
    InvalidEntityId(String),

    #[error("Invalid coordinates {input:?}: {reason}")]
    InvalidCoordinates { input: String, reason: String },
}

/// Value types a schema expression can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    String,
    Item,
    Property,
    Quantity,
    MonolingualText,
    GlobeCoordinates,
}

impl ValueType {
    /// Map a property datatype name to the value type it accepts.
    ///
    /// Several datatypes (identifiers, URLs, media files) are carried as
    /// plain strings.
    pub fn from_datatype(datatype: &str) -> Option<Self> {
        match datatype {
            "string" | "external-id" | "url" | "commonsMedia" | "math"
            | "musical-notation" | "tabular-data" | "geo-shape" => Some(ValueType::String),
            "wikibase-item" => Some(ValueType::Item),
            "wikibase-property" => Some(ValueType::Property),
            "quantity" => Some(ValueType::Quantity),
            "monolingualtext" => Some(ValueType::MonolingualText),
            "globe-coordinate" => Some(ValueType::GlobeCoordinates),
            _ => None,
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueType::String => "string",
            ValueType::Item => "item",
            ValueType::Property => "property",
            ValueType::Quantity => "quantity",
            ValueType::MonolingualText => "monolingual text",
            ValueType::GlobeCoordinates => "globe coordinates",
        };
        f.write_str(name)
    }
}

/// Any value an expression can produce
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(StringValue),
    Item(EntityIdValue),
    Property(EntityIdValue),
    Quantity(QuantityValue),
    MonolingualText(MonolingualTextValue),
    GlobeCoordinates(GlobeCoordinatesValue),
}

impl Value {
    /// Get the value type of this value
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::String(_) => ValueType::String,
            Value::Item(_) => ValueType::Item,
            Value::Property(_) => ValueType::Property,
            Value::Quantity(_) => ValueType::Quantity,
            Value::MonolingualText(_) => ValueType::MonolingualText,
            Value::GlobeCoordinates(_) => ValueType::GlobeCoordinates,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(v) => write!(f, "{}", v),
            Value::Item(v) | Value::Property(v) => write!(f, "{}", v),
            Value::Quantity(v) => write!(f, "{}", v),
            Value::MonolingualText(v) => write!(f, "{}", v),
            Value::GlobeCoordinates(v) => write!(f, "{}", v),
        }
    }
}

/// A property paired with a value, the main part of a statement
#[derive(Debug, Clone, PartialEq)]
pub struct Snak {
    pub property: EntityIdValue,
    pub value: Value,
}

impl fmt::Display for Snak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.property, self.value)
    }
}
