//! Expression trees for schema fields.
//!
//! This module provides:
//! - The `Expression` contract and the skip/fatal outcome types
//! - Leaf expressions reading constants or row cells
//! - Composite expressions (quantity, monolingual text, snak)
//! - `ValueExpr`, which dispatches over every value-producing node
//!
//! Trees are built by deserializing their JSON form and are immutable
//! afterwards, so one tree can be evaluated from many threads at once.

pub mod entity;
pub mod error;
pub mod expr;
pub mod language;
pub mod location;
pub mod monolingual;
pub mod quantity;
pub mod snak;
pub mod string;
pub mod value_expr;

pub use entity::{ItemConstant, ItemExpr, ItemVariable, PropertyConstant, PropertyExpr};
pub use error::{EvalError, EvalResult, ExpressionError};
pub use expr::Expression;
pub use language::{LanguageConstant, LanguageExpr, LanguageVariable};
pub use location::{LocationConstant, LocationVariable};
pub use monolingual::MonolingualExpr;
pub use quantity::QuantityExpr;
pub use snak::SnakExpr;
pub use string::{StringConstant, StringExpr, StringVariable};
pub use value_expr::ValueExpr;

#[cfg(test)]
pub(crate) mod testing;
