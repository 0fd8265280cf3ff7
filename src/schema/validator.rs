//! Load-time validation of schema fields.

use crate::context::ColumnRef;
use crate::expression::quantity::parse_decimal;
use crate::expression::{
    ItemConstant, ItemExpr, LanguageExpr, PropertyExpr, QuantityExpr, StringConstant,
    StringExpr, ValueExpr,
};
use crate::schema::{SchemaError, SchemaField};
use crate::value::entity::is_valid_id;
use crate::value::{EntityKind, GlobeCoordinatesValue, LanguageCode, ValueType};
use std::collections::HashSet;

/// Validates the fields of a schema before any row is evaluated
pub struct SchemaValidator<'a> {
    /// Name of the field being checked, for error reports
    field: &'a str,
}

impl<'a> SchemaValidator<'a> {
    /// Validate a whole list of fields: names, then each field's tree
    pub fn validate_fields(fields: &[SchemaField]) -> Result<(), SchemaError> {
        let mut seen = HashSet::new();
        for (index, field) in fields.iter().enumerate() {
            if field.name.trim().is_empty() {
                return Err(SchemaError::EmptyFieldName { index });
            }
            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateField(field.name.clone()));
            }
            SchemaValidator { field: &field.name }.check_field(field)?;
        }
        Ok(())
    }

    fn check_field(&self, field: &SchemaField) -> Result<(), SchemaError> {
        let statement = &field.statement;
        let PropertyExpr::Constant(property) = &statement.property;
        if !is_valid_id(EntityKind::Property, &property.pid) {
            return Err(self.invalid("property constant", &property.pid));
        }

        let actual = self.check_value(&statement.value)?;
        if let Some(datatype) = &property.datatype {
            let expected =
                ValueType::from_datatype(datatype).ok_or_else(|| SchemaError::UnknownDatatype {
                    field: self.field.to_string(),
                    datatype: datatype.clone(),
                })?;
            if expected != actual {
                return Err(SchemaError::DatatypeMismatch {
                    field: self.field.to_string(),
                    property: property.pid.clone(),
                    expected,
                    actual,
                });
            }
        }
        Ok(())
    }

    /// Check a value expression and return its output type
    fn check_value(&self, expr: &ValueExpr) -> Result<ValueType, SchemaError> {
        match expr {
            ValueExpr::StringConstant(c) => self.check_string_constant(c)?,
            ValueExpr::StringVariable(v) => self.check_column(&v.column, "string variable")?,
            ValueExpr::ItemConstant(c) => self.check_item_constant(c)?,
            ValueExpr::ItemVariable(v) => self.check_column(&v.column, "item variable")?,
            ValueExpr::PropertyConstant(c) => {
                if !is_valid_id(EntityKind::Property, &c.pid) {
                    return Err(self.invalid("property constant", &c.pid));
                }
            }
            ValueExpr::Monolingual(m) => {
                self.check_language(&m.language)?;
                self.check_string(&m.value)?;
            }
            ValueExpr::Quantity(q) => self.check_quantity(q)?,
            ValueExpr::LocationConstant(c) => {
                if GlobeCoordinatesValue::parse(&c.value).is_err() {
                    return Err(self.invalid("location constant", &c.value));
                }
            }
            ValueExpr::LocationVariable(v) => {
                self.check_column(&v.column, "location variable")?
            }
        }
        Ok(expr.value_type())
    }

    fn check_quantity(&self, expr: &QuantityExpr) -> Result<(), SchemaError> {
        if let StringExpr::Constant(c) = &expr.amount {
            if parse_decimal(&c.value).is_none() {
                return Err(self.invalid("quantity amount", &c.value));
            }
        }
        self.check_string(&expr.amount)?;
        if let Some(unit) = &expr.unit {
            self.check_item(unit)?;
        }
        Ok(())
    }

    fn check_string(&self, expr: &StringExpr) -> Result<(), SchemaError> {
        match expr {
            StringExpr::Constant(c) => self.check_string_constant(c),
            StringExpr::Variable(v) => self.check_column(&v.column, "string variable"),
        }
    }

    fn check_string_constant(&self, constant: &StringConstant) -> Result<(), SchemaError> {
        if constant.value.trim().is_empty() {
            return Err(self.invalid("string constant", &constant.value));
        }
        Ok(())
    }

    fn check_item(&self, expr: &ItemExpr) -> Result<(), SchemaError> {
        match expr {
            ItemExpr::Constant(c) => self.check_item_constant(c),
            ItemExpr::Variable(v) => self.check_column(&v.column, "item variable"),
        }
    }

    fn check_item_constant(&self, constant: &ItemConstant) -> Result<(), SchemaError> {
        if !is_valid_id(EntityKind::Item, &constant.qid) {
            return Err(self.invalid("item constant", &constant.qid));
        }
        Ok(())
    }

    fn check_language(&self, expr: &LanguageExpr) -> Result<(), SchemaError> {
        match expr {
            LanguageExpr::Constant(c) => {
                if !LanguageCode::is_well_formed(&c.code.trim().to_ascii_lowercase()) {
                    return Err(self.invalid("language constant", &c.code));
                }
                Ok(())
            }
            LanguageExpr::Variable(v) => self.check_column(&v.column, "language variable"),
        }
    }

    fn check_column(&self, column: &ColumnRef, expression: &str) -> Result<(), SchemaError> {
        if column.name.trim().is_empty() {
            return Err(SchemaError::EmptyColumnName {
                field: self.field.to_string(),
                expression: expression.to_string(),
            });
        }
        Ok(())
    }

    fn invalid(&self, expression: &str, value: &str) -> SchemaError {
        SchemaError::InvalidConstant {
            field: self.field.to_string(),
            expression: expression.to_string(),
            value: value.to_string(),
        }
    }
}
