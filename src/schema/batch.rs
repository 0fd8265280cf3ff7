//! Parallel evaluation of many rows.

use crate::context::EvaluationContext;
use crate::schema::{RowError, RowEvaluator, RowOutput, Schema};
use log::info;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::thread;

/// Configuration of a batch evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchConfig {
    /// Maximum number of worker threads
    pub workers: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            workers: thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1),
        }
    }
}

/// Per-row results of a batch, in input order
#[derive(Debug, Default)]
pub struct BatchReport {
    pub rows: Vec<Result<RowOutput, RowError>>,
}

impl BatchReport {
    /// Number of rows evaluated without a fatal error
    pub fn succeeded(&self) -> usize {
        self.rows.iter().filter(|row| row.is_ok()).count()
    }

    /// Number of rows aborted by a fatal error
    pub fn failed(&self) -> usize {
        self.rows.len() - self.succeeded()
    }

    /// Total number of skipped fields over the successful rows
    pub fn skipped_fields(&self) -> usize {
        self.rows
            .iter()
            .filter_map(|row| row.as_ref().ok())
            .map(|output| output.skipped.len())
            .sum()
    }
}

/// Evaluates rows on worker threads sharing one schema
#[derive(Debug, Clone)]
pub struct BatchEvaluator {
    schema: Arc<Schema>,
    config: BatchConfig,
}

impl BatchEvaluator {
    pub fn new(schema: Arc<Schema>) -> Self {
        Self::with_config(schema, BatchConfig::default())
    }

    pub fn with_config(schema: Arc<Schema>, config: BatchConfig) -> Self {
        Self { schema, config }
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    /// Evaluate every row; a fatal error only affects its own row
    pub fn evaluate<C>(&self, rows: &[C]) -> BatchReport
    where
        C: EvaluationContext + Sync,
    {
        if rows.is_empty() {
            return BatchReport::default();
        }

        let workers = self.config.workers.clamp(1, rows.len());
        let chunk_size = rows.len().div_ceil(workers);
        let schema: &Schema = &self.schema;

        let results: Vec<_> = thread::scope(|scope| {
            let handles: Vec<_> = rows
                .chunks(chunk_size)
                .map(|chunk| {
                    scope.spawn(move || {
                        let evaluator = RowEvaluator::new(schema);
                        chunk
                            .iter()
                            .map(|row| evaluator.evaluate(row))
                            .collect::<Vec<_>>()
                    })
                })
                .collect();

            handles
                .into_iter()
                .flat_map(|handle| {
                    handle
                        .join()
                        .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
                })
                .collect()
        });

        let report = BatchReport { rows: results };
        info!(
            "Evaluated {} rows on {} workers: {} failed, {} fields skipped",
            report.rows.len(),
            workers,
            report.failed(),
            report.skipped_fields()
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{CellValue, StaticResolver, TableContext};
    use crate::expression::{
        ItemExpr, PropertyExpr, QuantityExpr, SnakExpr, StringExpr, ValueExpr,
    };
    use crate::schema::SchemaField;

    fn schema() -> Arc<Schema> {
        let field = SchemaField::new(
            "mass",
            SnakExpr::new(
                PropertyExpr::constant("P2067", Some("quantity")),
                ValueExpr::Quantity(QuantityExpr::new(
                    StringExpr::variable("mass"),
                    Some(ItemExpr::variable("unit")),
                )),
            ),
        );
        Arc::new(Schema::new(vec![field]).unwrap())
    }

    fn table() -> TableContext {
        TableContext::new(["mass", "unit"])
            .with_resolver(StaticResolver::new().with_entry("kg", "Q11570"))
    }

    #[test]
    fn test_results_keep_row_order() {
        let table = table();
        let rows: Vec<_> = (0..25)
            .map(|i| {
                table.row_from_pairs([
                    ("mass", CellValue::number(i)),
                    ("unit", CellValue::text("kg")),
                ])
            })
            .collect();

        for workers in [1, 2, 4, 7, 64] {
            let evaluator = BatchEvaluator::with_config(schema(), BatchConfig { workers });
            let report = evaluator.evaluate(&rows);
            assert_eq!(report.rows.len(), 25);
            assert_eq!(report.failed(), 0);
            for (i, row) in report.rows.iter().enumerate() {
                let snak = row.as_ref().unwrap().get("mass").unwrap();
                assert_eq!(snak.to_string(), format!("P2067 = {} Q11570", i));
            }
        }
    }

    #[test]
    fn test_skipped_fields_are_counted() {
        let table = table();
        let rows = vec![
            table.row_from_pairs([("mass", CellValue::text("1")), ("unit", CellValue::text("kg"))]),
            table.row_from_pairs([("mass", CellValue::text("2")), ("unit", CellValue::text("lb"))]),
            table.row_from_pairs([
                ("mass", CellValue::text("3")),
                ("unit", CellValue::reconciled("kilogram", Some("Q11570"))),
            ]),
        ];

        let evaluator = BatchEvaluator::with_config(schema(), BatchConfig { workers: 2 });
        let report = evaluator.evaluate(&rows);
        assert_eq!(report.succeeded(), 3);
        assert_eq!(report.skipped_fields(), 1);
    }

    #[test]
    fn test_fatal_rows_are_reported() {
        let failing = TableContext::new(["mass"]);
        let rows = vec![failing.row_from_pairs([("mass", CellValue::text("1"))])];

        let report = BatchEvaluator::new(schema()).evaluate(&rows);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.rows[0].as_ref().unwrap_err().field, "mass");
    }

    #[test]
    fn test_empty_batch() {
        let rows: Vec<crate::context::RowContext<'_>> = Vec::new();
        let report = BatchEvaluator::new(schema()).evaluate(&rows);
        assert!(report.rows.is_empty());
    }
}
