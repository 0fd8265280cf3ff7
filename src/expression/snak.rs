//! Snak expressions.

use crate::context::EvaluationContext;
use crate::expression::{EvalResult, Expression, PropertyExpr, ValueExpr};
use crate::value::Snak;
use serde::Deserialize;

/// A property and the expression of its value
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SnakExpr {
    #[serde(rename = "prop")]
    pub property: PropertyExpr,
    pub value: ValueExpr,
}

impl SnakExpr {
    pub fn new(property: PropertyExpr, value: ValueExpr) -> Self {
        Self { property, value }
    }
}

impl Expression for SnakExpr {
    type Output = Snak;

    fn evaluate(&self, ctx: &dyn EvaluationContext) -> EvalResult<Snak> {
        let property = self.property.evaluate(ctx)?;
        let value = self.value.evaluate(ctx)?;
        Ok(Snak { property, value })
    }
}
