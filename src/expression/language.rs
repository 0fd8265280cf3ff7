//! Language code expressions.

use crate::context::{ColumnRef, EvaluationContext};
use crate::expression::expr::cell_text;
use crate::expression::{EvalError, EvalResult, Expression, ExpressionError};
use crate::value::LanguageCode;
use log::debug;
use serde::Deserialize;

/// A fixed language code
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LanguageConstant {
    #[serde(rename = "id")]
    pub code: String,
    #[serde(default)]
    pub label: String,
}

impl Expression for LanguageConstant {
    type Output = LanguageCode;

    fn evaluate(&self, ctx: &dyn EvaluationContext) -> EvalResult<LanguageCode> {
        ctx.normalize_language(&self.code)?.ok_or_else(|| {
            ExpressionError::InvalidConstant {
                expression: "language constant".to_string(),
                value: self.code.clone(),
            }
            .into()
        })
    }
}

/// A language code read from a cell; skips codes the site rejects
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LanguageVariable {
    #[serde(rename = "columnName")]
    pub column: ColumnRef,
}

impl Expression for LanguageVariable {
    type Output = LanguageCode;

    fn evaluate(&self, ctx: &dyn EvaluationContext) -> EvalResult<LanguageCode> {
        let code = cell_text(ctx, &self.column)?;
        ctx.normalize_language(&code)?.ok_or_else(|| {
            debug!("Unsupported language code {:?} in {}", code, self.column);
            EvalError::Skip
        })
    }
}

/// Any expression producing a language code
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum LanguageExpr {
    #[serde(rename = "wblanguageconstant")]
    Constant(LanguageConstant),
    #[serde(rename = "wblanguagevariable")]
    Variable(LanguageVariable),
}

impl LanguageExpr {
    pub fn constant(code: impl Into<String>) -> Self {
        LanguageExpr::Constant(LanguageConstant {
            code: code.into(),
            label: String::new(),
        })
    }

    pub fn variable(column: impl Into<String>) -> Self {
        LanguageExpr::Variable(LanguageVariable {
            column: ColumnRef::new(column),
        })
    }
}

impl Expression for LanguageExpr {
    type Output = LanguageCode;

    fn evaluate(&self, ctx: &dyn EvaluationContext) -> EvalResult<LanguageCode> {
        match self {
            LanguageExpr::Constant(expr) => expr.evaluate(ctx),
            LanguageExpr::Variable(expr) => expr.evaluate(ctx),
        }
    }
}
