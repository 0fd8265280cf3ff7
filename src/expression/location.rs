//! Globe coordinate expressions.

use crate::context::{ColumnRef, EvaluationContext};
use crate::expression::expr::cell_text;
use crate::expression::{EvalError, EvalResult, Expression, ExpressionError};
use crate::value::GlobeCoordinatesValue;
use log::debug;
use serde::Deserialize;

/// Fixed coordinates written as `"lat,lng"`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LocationConstant {
    pub value: String,
}

impl Expression for LocationConstant {
    type Output = GlobeCoordinatesValue;

    fn evaluate(&self, _ctx: &dyn EvaluationContext) -> EvalResult<GlobeCoordinatesValue> {
        GlobeCoordinatesValue::parse(&self.value).map_err(|_| {
            ExpressionError::InvalidConstant {
                expression: "location constant".to_string(),
                value: self.value.clone(),
            }
            .into()
        })
    }
}

/// Coordinates read from a cell; malformed cells skip
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LocationVariable {
    #[serde(rename = "columnName")]
    pub column: ColumnRef,
}

impl Expression for LocationVariable {
    type Output = GlobeCoordinatesValue;

    fn evaluate(&self, ctx: &dyn EvaluationContext) -> EvalResult<GlobeCoordinatesValue> {
        let text = cell_text(ctx, &self.column)?;
        GlobeCoordinatesValue::parse(&text).map_err(|err| {
            debug!("{} in {}", err, self.column);
            EvalError::Skip
        })
    }
}
