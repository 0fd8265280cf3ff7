//! Quantity values.

use crate::value::EntityIdValue;
use bigdecimal::BigDecimal;
use std::fmt;

/// An exact decimal amount, optionally paired with a unit item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantityValue {
    amount: BigDecimal,
    unit: Option<EntityIdValue>,
}

impl QuantityValue {
    /// Create a unitless quantity
    pub fn new(amount: BigDecimal) -> Self {
        Self { amount, unit: None }
    }

    /// Create a quantity measured in `unit`
    pub fn with_unit(amount: BigDecimal, unit: EntityIdValue) -> Self {
        Self {
            amount,
            unit: Some(unit),
        }
    }

    pub fn amount(&self) -> &BigDecimal {
        &self.amount
    }

    pub fn unit(&self) -> Option<&EntityIdValue> {
        self.unit.as_ref()
    }

    /// IRI of the unit, if any
    pub fn unit_iri(&self) -> Option<String> {
        self.unit.as_ref().map(EntityIdValue::iri)
    }
}

impl fmt::Display for QuantityValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.unit {
            Some(unit) => write!(f, "{} {}", self.amount, unit),
            None => write!(f, "{}", self.amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::DEFAULT_SITE_IRI;
    use std::str::FromStr;

    #[test]
    fn test_unitless_quantity() {
        let quantity = QuantityValue::new(BigDecimal::from_str("0.1").unwrap());
        assert!(quantity.unit().is_none());
        assert_eq!(quantity.unit_iri(), None);
        assert_eq!(quantity.to_string(), "0.1");
    }

    #[test]
    fn test_quantity_with_unit() {
        let unit = EntityIdValue::item("Q11573", DEFAULT_SITE_IRI).unwrap();
        let quantity = QuantityValue::with_unit(BigDecimal::from_str("12.5").unwrap(), unit);
        assert_eq!(
            quantity.unit_iri().as_deref(),
            Some("http://www.wikidata.org/entity/Q11573")
        );
    }

    #[test]
    fn test_amount_is_exact() {
        let amount = BigDecimal::from_str("0.30000000000000000000000000000000001").unwrap();
        let quantity = QuantityValue::new(amount.clone());
        assert_eq!(quantity.amount(), &amount);
        assert_ne!(quantity.amount(), &BigDecimal::from_str("0.3").unwrap());
    }
}
