//! Expressions producing any kind of value.

use crate::context::EvaluationContext;
use crate::expression::{
    EvalResult, Expression, ItemConstant, ItemVariable, LocationConstant, LocationVariable,
    MonolingualExpr, PropertyConstant, QuantityExpr, StringConstant, StringVariable,
};
use crate::value::{Value, ValueType};
use serde::Deserialize;

/// Any value-producing node, tagged by its `type` in the schema
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum ValueExpr {
    #[serde(rename = "wbstringconstant")]
    StringConstant(StringConstant),
    #[serde(rename = "wbstringvariable")]
    StringVariable(StringVariable),
    #[serde(rename = "wbitemconstant")]
    ItemConstant(ItemConstant),
    #[serde(rename = "wbitemvariable")]
    ItemVariable(ItemVariable),
    #[serde(rename = "wbpropconstant")]
    PropertyConstant(PropertyConstant),
    #[serde(rename = "wbmonolingualexpr")]
    Monolingual(MonolingualExpr),
    #[serde(rename = "wbquantityexpr")]
    Quantity(QuantityExpr),
    #[serde(rename = "wblocationconstant")]
    LocationConstant(LocationConstant),
    #[serde(rename = "wblocationvariable")]
    LocationVariable(LocationVariable),
}

impl ValueExpr {
    /// Type of the values this expression produces
    pub fn value_type(&self) -> ValueType {
        match self {
            ValueExpr::StringConstant(_) | ValueExpr::StringVariable(_) => ValueType::String,
            ValueExpr::ItemConstant(_) | ValueExpr::ItemVariable(_) => ValueType::Item,
            ValueExpr::PropertyConstant(_) => ValueType::Property,
            ValueExpr::Monolingual(_) => ValueType::MonolingualText,
            ValueExpr::Quantity(_) => ValueType::Quantity,
            ValueExpr::LocationConstant(_) | ValueExpr::LocationVariable(_) => {
                ValueType::GlobeCoordinates
            }
        }
    }
}

impl Expression for ValueExpr {
    type Output = Value;

    fn evaluate(&self, ctx: &dyn EvaluationContext) -> EvalResult<Value> {
        let value = match self {
            ValueExpr::StringConstant(expr) => Value::String(expr.evaluate(ctx)?),
            ValueExpr::StringVariable(expr) => Value::String(expr.evaluate(ctx)?),
            ValueExpr::ItemConstant(expr) => Value::Item(expr.evaluate(ctx)?),
            ValueExpr::ItemVariable(expr) => Value::Item(expr.evaluate(ctx)?),
            ValueExpr::PropertyConstant(expr) => Value::Property(expr.evaluate(ctx)?),
            ValueExpr::Monolingual(expr) => Value::MonolingualText(expr.evaluate(ctx)?),
            ValueExpr::Quantity(expr) => Value::Quantity(expr.evaluate(ctx)?),
            ValueExpr::LocationConstant(expr) => Value::GlobeCoordinates(expr.evaluate(ctx)?),
            ValueExpr::LocationVariable(expr) => Value::GlobeCoordinates(expr.evaluate(ctx)?),
        };
        Ok(value)
    }
}
