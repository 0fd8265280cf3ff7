//! The expression contract.

use crate::context::{ColumnRef, EvaluationContext};
use crate::expression::{EvalError, EvalResult};
use std::fmt;

/// A node of a schema expression tree producing values of type `Output`.
///
/// Evaluation is a pure function of the node and the context: nodes hold no
/// state besides their children and never mutate the context. A node that
/// cannot produce a value returns `EvalError::Skip`; parents propagate it
/// with `?` unless the child is optional.
pub trait Expression: fmt::Debug + Send + Sync {
    type Output;

    fn evaluate(&self, ctx: &dyn EvaluationContext) -> EvalResult<Self::Output>;
}

/// Read a cell as trimmed text, skipping when it is absent or blank
pub(crate) fn cell_text(ctx: &dyn EvaluationContext, column: &ColumnRef) -> EvalResult<String> {
    let Some(cell) = ctx.cell_value(column)? else {
        return Err(EvalError::Skip);
    };
    let text = cell.as_text().trim().to_string();
    if text.is_empty() {
        return Err(EvalError::Skip);
    }
    Ok(text)
}
