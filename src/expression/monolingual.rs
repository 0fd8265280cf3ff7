//! Monolingual text expressions.

use crate::context::EvaluationContext;
use crate::expression::{EvalResult, Expression, LanguageExpr, StringExpr};
use crate::value::MonolingualTextValue;
use serde::Deserialize;

/// Text paired with its language; both parts are required
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MonolingualExpr {
    pub language: LanguageExpr,
    pub value: StringExpr,
}

impl MonolingualExpr {
    pub fn new(language: LanguageExpr, value: StringExpr) -> Self {
        Self { language, value }
    }
}

impl Expression for MonolingualExpr {
    type Output = MonolingualTextValue;

    fn evaluate(&self, ctx: &dyn EvaluationContext) -> EvalResult<MonolingualTextValue> {
        let language = self.language.evaluate(ctx)?;
        let text = self.value.evaluate(ctx)?;
        Ok(MonolingualTextValue::new(text.as_str(), language))
    }
}
