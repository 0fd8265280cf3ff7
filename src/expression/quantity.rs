//! Quantity expressions.

use crate::context::EvaluationContext;
use crate::expression::{EvalError, EvalResult, Expression, ItemExpr, StringExpr};
use crate::value::QuantityValue;
use bigdecimal::BigDecimal;
use log::debug;
use serde::Deserialize;
use std::str::FromStr;

/// A decimal amount with an optional unit.
///
/// Without a unit expression the quantity is unitless. With one, the unit is
/// mandatory: if it cannot be evaluated the whole quantity is skipped rather
/// than produced without its unit.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QuantityExpr {
    pub amount: StringExpr,
    #[serde(default)]
    pub unit: Option<ItemExpr>,
}

impl QuantityExpr {
    pub fn new(amount: StringExpr, unit: Option<ItemExpr>) -> Self {
        Self { amount, unit }
    }
}

impl Expression for QuantityExpr {
    type Output = QuantityValue;

    fn evaluate(&self, ctx: &dyn EvaluationContext) -> EvalResult<QuantityValue> {
        let amount = self.amount.evaluate(ctx)?;
        let amount = parse_amount(amount.as_str())?;

        match &self.unit {
            Some(unit) => {
                let unit = unit.evaluate(ctx)?;
                Ok(QuantityValue::with_unit(amount, unit))
            }
            None => Ok(QuantityValue::new(amount)),
        }
    }
}

/// Parse a decimal numeral exactly, skipping blank or malformed input
fn parse_amount(text: &str) -> EvalResult<BigDecimal> {
    if text.trim().is_empty() {
        return Err(EvalError::Skip);
    }
    parse_decimal(text).ok_or_else(|| {
        debug!("Not a decimal number: {:?}", text);
        EvalError::Skip
    })
}

/// Parse a decimal numeral whose scale fits in 32 bits.
///
/// Numerals like `15e9223372036854775807` match the grammar but are out of
/// range and yield `None`.
pub(crate) fn parse_decimal(text: &str) -> Option<BigDecimal> {
    if !is_decimal_numeral(text) {
        return None;
    }
    let value = BigDecimal::from_str(text).ok()?;
    let (_, scale) = value.as_bigint_and_exponent();
    i32::try_from(scale).is_ok().then_some(value)
}

/// `[+-]? (digits [. digits?] | . digits) ([eE] [+-]? digits)?`, ASCII only
fn is_decimal_numeral(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut pos = 0;

    let skip_sign = |pos: &mut usize| {
        if matches!(bytes.get(*pos), Some(b'+') | Some(b'-')) {
            *pos += 1;
        }
    };
    let count_digits = |pos: &mut usize| {
        let start = *pos;
        while bytes.get(*pos).is_some_and(u8::is_ascii_digit) {
            *pos += 1;
        }
        *pos - start
    };

    skip_sign(&mut pos);
    let mut mantissa_digits = count_digits(&mut pos);
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        mantissa_digits += count_digits(&mut pos);
    }
    if mantissa_digits == 0 {
        return false;
    }

    if matches!(bytes.get(pos), Some(b'e') | Some(b'E')) {
        pos += 1;
        skip_sign(&mut pos);
        if count_digits(&mut pos) == 0 {
            return false;
        }
    }

    pos == bytes.len()
}
