//! Item and property expressions.

use crate::context::{CellValue, ColumnRef, EvaluationContext};
use crate::expression::{EvalError, EvalResult, Expression, ExpressionError};
use crate::value::EntityIdValue;
use log::debug;
use serde::Deserialize;

/// A fixed item, such as a unit chosen when the schema was written
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ItemConstant {
    pub qid: String,
    #[serde(default)]
    pub label: String,
}

impl Expression for ItemConstant {
    type Output = EntityIdValue;

    fn evaluate(&self, ctx: &dyn EvaluationContext) -> EvalResult<EntityIdValue> {
        EntityIdValue::item(self.qid.clone(), ctx.site_iri()).map_err(|_| {
            ExpressionError::InvalidConstant {
                expression: "item constant".to_string(),
                value: self.qid.clone(),
            }
            .into()
        })
    }
}

/// The item a cell stands for.
///
/// Reconciled cells give their match directly; other cells are resolved
/// through the context.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ItemVariable {
    #[serde(rename = "columnName")]
    pub column: ColumnRef,
}

impl Expression for ItemVariable {
    type Output = EntityIdValue;

    fn evaluate(&self, ctx: &dyn EvaluationContext) -> EvalResult<EntityIdValue> {
        match ctx.cell_value(&self.column)? {
            None => Err(EvalError::Skip),
            Some(CellValue::Reconciled(cell)) => {
                let Some(id) = cell.matched else {
                    debug!("Cell {:?} in {} is not matched", cell.text, self.column);
                    return Err(EvalError::Skip);
                };
                EntityIdValue::item(id, ctx.site_iri()).map_err(|err| {
                    debug!("Cell {:?} in {}: {}", cell.text, self.column, err);
                    EvalError::Skip
                })
            }
            Some(cell) => {
                let reference = cell.as_text();
                let reference = reference.trim();
                if reference.is_empty() {
                    return Err(EvalError::Skip);
                }
                ctx.resolve_entity(reference)?.ok_or_else(|| {
                    debug!("No entity matches {:?} in {}", reference, self.column);
                    EvalError::Skip
                })
            }
        }
    }
}

/// Any expression producing an item
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum ItemExpr {
    #[serde(rename = "wbitemconstant")]
    Constant(ItemConstant),
    #[serde(rename = "wbitemvariable")]
    Variable(ItemVariable),
}

impl ItemExpr {
    pub fn constant(qid: impl Into<String>) -> Self {
        ItemExpr::Constant(ItemConstant {
            qid: qid.into(),
            label: String::new(),
        })
    }

    pub fn variable(column: impl Into<String>) -> Self {
        ItemExpr::Variable(ItemVariable {
            column: ColumnRef::new(column),
        })
    }
}

impl Expression for ItemExpr {
    type Output = EntityIdValue;

    fn evaluate(&self, ctx: &dyn EvaluationContext) -> EvalResult<EntityIdValue> {
        match self {
            ItemExpr::Constant(expr) => expr.evaluate(ctx),
            ItemExpr::Variable(expr) => expr.evaluate(ctx),
        }
    }
}

/// A fixed property, with the datatype its values must have
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PropertyConstant {
    pub pid: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub datatype: Option<String>,
}

impl Expression for PropertyConstant {
    type Output = EntityIdValue;

    fn evaluate(&self, ctx: &dyn EvaluationContext) -> EvalResult<EntityIdValue> {
        EntityIdValue::property(self.pid.clone(), ctx.site_iri()).map_err(|_| {
            ExpressionError::InvalidConstant {
                expression: "property constant".to_string(),
                value: self.pid.clone(),
            }
            .into()
        })
    }
}

/// Any expression producing a property
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum PropertyExpr {
    #[serde(rename = "wbpropconstant")]
    Constant(PropertyConstant),
}

impl PropertyExpr {
    pub fn constant(pid: impl Into<String>, datatype: Option<&str>) -> Self {
        PropertyExpr::Constant(PropertyConstant {
            pid: pid.into(),
            label: String::new(),
            datatype: datatype.map(str::to_string),
        })
    }
}

impl Expression for PropertyExpr {
    type Output = EntityIdValue;

    fn evaluate(&self, ctx: &dyn EvaluationContext) -> EvalResult<EntityIdValue> {
        match self {
            PropertyExpr::Constant(expr) => expr.evaluate(ctx),
        }
    }
}
