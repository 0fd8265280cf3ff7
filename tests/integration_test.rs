use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;
use std::thread;

use bigdecimal::BigDecimal;
use wbschema::context::{CachedResolver, CellValue, StaticResolver, TableContext};
use wbschema::expression::{Expression, QuantityExpr, StringExpr};
use wbschema::schema::{evaluate_row, BatchConfig, BatchEvaluator, Schema, SchemaError};
use wbschema::value::{QuantityValue, Value};

const SCHEMA: &str = r#"{
    "fields": [
        {
            "name": "height",
            "statement": {
                "prop": {"type": "wbpropconstant", "pid": "P2048", "label": "height", "datatype": "quantity"},
                "value": {
                    "type": "wbquantityexpr",
                    "amount": {"type": "wbstringvariable", "columnName": "height"},
                    "unit": {"type": "wbitemvariable", "columnName": "unit"}
                }
            }
        },
        {
            "name": "architect",
            "statement": {
                "prop": {"type": "wbpropconstant", "pid": "P84", "datatype": "wikibase-item"},
                "value": {"type": "wbitemvariable", "columnName": "architect"}
            }
        },
        {
            "name": "location",
            "statement": {
                "prop": {"type": "wbpropconstant", "pid": "P625", "datatype": "globe-coordinate"},
                "value": {"type": "wblocationvariable", "columnName": "coordinates"}
            }
        },
        {
            "name": "name",
            "statement": {
                "prop": {"type": "wbpropconstant", "pid": "P1448", "datatype": "monolingualtext"},
                "value": {
                    "type": "wbmonolingualexpr",
                    "language": {"type": "wblanguageconstant", "id": "fr"},
                    "value": {"type": "wbstringvariable", "columnName": "name"}
                }
            }
        }
    ]
}"#;

fn table() -> TableContext {
    TableContext::new(["name", "height", "unit", "architect", "coordinates"]).with_resolver(
        CachedResolver::new(
            StaticResolver::new()
                .with_entry("metre", "Q11573")
                .with_entry("Gustave Eiffel", "Q20882"),
        ),
    )
}

#[test]
fn test_full_row() {
    let schema = Schema::from_json(SCHEMA).unwrap();
    let table = table();
    let row = table.row_from_pairs([
        ("name", CellValue::text("Tour Eiffel")),
        ("height", CellValue::text("330")),
        ("unit", CellValue::text("metre")),
        ("architect", CellValue::text("Gustave Eiffel")),
        ("coordinates", CellValue::text("48.8584,2.2945")),
    ]);

    let output = evaluate_row(&schema, &row).unwrap();
    assert_eq!(
        output.field_names(),
        vec!["height", "architect", "location", "name"]
    );
    assert!(output.skipped.is_empty());

    let height = output.get("height").unwrap();
    assert_eq!(height.property.id(), "P2048");
    match &height.value {
        Value::Quantity(quantity) => {
            assert_eq!(quantity.amount(), &BigDecimal::from_str("330").unwrap());
            assert_eq!(
                quantity.unit_iri().as_deref(),
                Some("http://www.wikidata.org/entity/Q11573")
            );
        }
        other => panic!("expected a quantity, got {:?}", other),
    }
    assert_eq!(output.get("architect").unwrap().to_string(), "P84 = Q20882");
    assert_eq!(
        output.get("name").unwrap().to_string(),
        "P1448 = \"Tour Eiffel\"@fr"
    );
}

#[test]
fn test_partial_row() {
    let schema = Schema::from_json(SCHEMA).unwrap();
    let table = table();
    let row = table.row_from_pairs([
        ("name", CellValue::text("Tour Montparnasse")),
        ("height", CellValue::text("210")),
        ("unit", CellValue::text("storeys")),
        ("architect", CellValue::reconciled("Eugène Beaudouin", None)),
        ("coordinates", CellValue::text("48.8421,2.3220")),
    ]);

    let output = evaluate_row(&schema, &row).unwrap();
    assert_eq!(output.field_names(), vec!["location", "name"]);
    assert_eq!(
        output.skipped,
        vec!["height".to_string(), "architect".to_string()]
    );
}

#[test]
fn test_amount_only_quantity() {
    let table = TableContext::new(["amount"]);
    let expr = QuantityExpr::new(StringExpr::variable("amount"), None);

    let row = table.row_from_pairs([("amount", CellValue::text("-0.000000000000000000000000000001"))]);
    assert_eq!(
        expr.evaluate(&row).unwrap(),
        QuantityValue::new(BigDecimal::from_str("-1e-30").unwrap())
    );

    for bad in ["abc", "", "  "] {
        let row = table.row_from_pairs([("amount", CellValue::text(bad))]);
        assert!(expr.evaluate(&row).unwrap_err().is_skip(), "{:?}", bad);
    }
}

#[test]
fn test_numeric_cells_are_exact() {
    let table = TableContext::new(["amount"]);
    let expr = QuantityExpr::new(StringExpr::variable("amount"), None);

    for literal in ["0.1000000000000000000001", "12345678901234567890123", "12.50"] {
        let json = format!(r#"{{"amount": {}}}"#, literal);
        let cells: HashMap<String, CellValue> = serde_json::from_str(&json).unwrap();
        let row = table.row(cells);
        assert_eq!(
            expr.evaluate(&row).unwrap().amount().to_string(),
            literal,
            "{}",
            literal
        );
    }
}

#[test]
fn test_invalid_schemas() {
    let missing_amount = SCHEMA.replace(
        r#""amount": {"type": "wbstringvariable", "columnName": "height"},"#,
        "",
    );
    assert!(matches!(
        Schema::from_json(&missing_amount),
        Err(SchemaError::Parse(_))
    ));

    let bad_unit_type = SCHEMA.replace(
        r#""unit": {"type": "wbitemvariable", "columnName": "unit"}"#,
        r#""unit": {"type": "wbstringvariable", "columnName": "unit"}"#,
    );
    assert!(Schema::from_json(&bad_unit_type).is_err());

    let wrong_datatype = SCHEMA.replace(r#""datatype": "quantity""#, r#""datatype": "url""#);
    assert!(Schema::from_json(&wrong_datatype).is_err());
}

#[test]
fn test_shared_schema_across_threads() {
    let schema = Arc::new(Schema::from_json(SCHEMA).unwrap());
    let table = Arc::new(table());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let schema = Arc::clone(&schema);
            let table = Arc::clone(&table);
            thread::spawn(move || {
                let height = format!("{}.5", i);
                let row = table.row_from_pairs([
                    ("name", CellValue::text(format!("Tower {}", i))),
                    ("height", CellValue::text(height.clone())),
                    ("unit", CellValue::text("metre")),
                    ("architect", CellValue::reconciled("unknown", None)),
                    ("coordinates", CellValue::text("0,0")),
                ]);
                let output = evaluate_row(&schema, &row).unwrap();
                (height, output)
            })
        })
        .collect();

    for handle in handles {
        let (height, output) = handle.join().unwrap();
        assert_eq!(
            output.get("height").unwrap().to_string(),
            format!("P2048 = {} Q11573", height)
        );
        assert_eq!(output.skipped, vec!["architect".to_string()]);
    }
}

#[test]
fn test_batch_with_failing_row() {
    let schema = Arc::new(Schema::from_json(SCHEMA).unwrap());
    let complete = table();
    let no_coordinates = TableContext::new(["name", "height", "unit", "architect"]);

    let mut rows = vec![
        complete.row_from_pairs([("height", CellValue::number(10))]),
        complete.row_from_pairs([("height", serde_json::from_str::<CellValue>("2.5").unwrap())]),
    ];
    rows.push(no_coordinates.row_from_pairs([("height", CellValue::number(1))]));

    let report = BatchEvaluator::with_config(schema, BatchConfig { workers: 3 }).evaluate(&rows);
    assert_eq!(report.rows.len(), 3);
    assert_eq!(report.succeeded(), 2);
    assert_eq!(report.failed(), 1);
    // Without a unit every row skips the height, and empty cells skip the rest
    assert_eq!(report.skipped_fields(), 8);
    assert_eq!(report.rows[2].as_ref().unwrap_err().field, "location");
}
