//! Evaluation of a schema against one row.

use crate::context::EvaluationContext;
use crate::expression::{EvalError, Expression, ExpressionError};
use crate::schema::Schema;
use crate::value::Snak;
use log::{debug, warn};
use thiserror::Error;

/// The statement produced for one field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue {
    pub field: String,
    pub snak: Snak,
}

/// Everything a row produced, in schema order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RowOutput {
    pub values: Vec<FieldValue>,
    /// Fields omitted because they skipped
    pub skipped: Vec<String>,
}

impl RowOutput {
    /// Get the statement produced for `field`
    pub fn get(&self, field: &str) -> Option<&Snak> {
        self.values
            .iter()
            .find(|value| value.field == field)
            .map(|value| &value.snak)
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.values.iter().map(|value| value.field.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A fatal error that aborted a row
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Field {field:?} failed: {source}")]
pub struct RowError {
    pub field: String,
    #[source]
    pub source: ExpressionError,
}

/// Evaluator for the fields of a schema
pub struct RowEvaluator<'s> {
    schema: &'s Schema,
}

impl<'s> RowEvaluator<'s> {
    pub fn new(schema: &'s Schema) -> Self {
        Self { schema }
    }

    /// Evaluate every field against `ctx`.
    ///
    /// Fields that skip are left out of the output; the first fatal error
    /// aborts the row.
    pub fn evaluate(&self, ctx: &dyn EvaluationContext) -> Result<RowOutput, RowError> {
        let mut output = RowOutput::default();

        for field in self.schema.fields() {
            match field.statement.evaluate(ctx) {
                Ok(snak) => output.values.push(FieldValue {
                    field: field.name.clone(),
                    snak,
                }),
                Err(EvalError::Skip) => {
                    debug!("Skipping field {:?}", field.name);
                    output.skipped.push(field.name.clone());
                }
                Err(EvalError::Fatal(source)) => {
                    warn!("Field {:?} aborted the row: {}", field.name, source);
                    return Err(RowError {
                        field: field.name.clone(),
                        source,
                    });
                }
            }
        }

        Ok(output)
    }
}

/// Helper function to evaluate a schema against one row
pub fn evaluate_row(schema: &Schema, ctx: &dyn EvaluationContext) -> Result<RowOutput, RowError> {
    RowEvaluator::new(schema).evaluate(ctx)
}
