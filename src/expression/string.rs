//! String expressions.

use crate::context::{ColumnRef, EvaluationContext};
use crate::expression::expr::cell_text;
use crate::expression::{EvalResult, Expression};
use crate::value::StringValue;
use serde::Deserialize;

/// A fixed string
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StringConstant {
    pub value: String,
}

impl Expression for StringConstant {
    type Output = StringValue;

    fn evaluate(&self, _ctx: &dyn EvaluationContext) -> EvalResult<StringValue> {
        Ok(StringValue::new(self.value.clone()))
    }
}

/// The trimmed content of a cell; skips on empty cells
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StringVariable {
    #[serde(rename = "columnName")]
    pub column: ColumnRef,
}

impl Expression for StringVariable {
    type Output = StringValue;

    fn evaluate(&self, ctx: &dyn EvaluationContext) -> EvalResult<StringValue> {
        cell_text(ctx, &self.column).map(StringValue::new)
    }
}

/// Any expression producing a string
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum StringExpr {
    #[serde(rename = "wbstringconstant")]
    Constant(StringConstant),
    #[serde(rename = "wbstringvariable")]
    Variable(StringVariable),
}

impl StringExpr {
    pub fn constant(value: impl Into<String>) -> Self {
        StringExpr::Constant(StringConstant {
            value: value.into(),
        })
    }

    pub fn variable(column: impl Into<String>) -> Self {
        StringExpr::Variable(StringVariable {
            column: ColumnRef::new(column),
        })
    }
}

impl Expression for StringExpr {
    type Output = StringValue;

    fn evaluate(&self, ctx: &dyn EvaluationContext) -> EvalResult<StringValue> {
        match self {
            StringExpr::Constant(expr) => expr.evaluate(ctx),
            StringExpr::Variable(expr) => expr.evaluate(ctx),
        }
    }
}
