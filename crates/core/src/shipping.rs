//! Shipping

use std::{fs, path::Path};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors related to shipping method lookup and rate tables.
#[derive(Debug, Error)]
pub enum ShippingError {
    /// No shipping method was chosen.
    #[error("no shipping method selected")]
    NotSelected,

    /// The label is not a key of the rate table.
    #[error("unknown shipping method: {0}")]
    UnknownMethod(String),

    /// The same label appears twice in a rate table.
    #[error("duplicate shipping method: {0}")]
    DuplicateMethod(String),

    /// A rate is negative.
    #[error("shipping method {0} has a negative cost")]
    NegativeCost(String),

    /// A rate table has no methods at all.
    #[error("shipping rate table is empty")]
    Empty,

    /// IO error reading a rate table file
    #[error("failed to read shipping rate table: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("failed to parse shipping rate table: {0}")]
    Yaml(#[from] serde_norway::Error),
}

/// A shipping method and its flat cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingRate {
    /// Label shown to the customer
    pub method: String,

    /// Flat cost in the shop currency
    pub cost: Decimal,
}

/// Static lookup from shipping method label to flat cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShippingRateTable {
    rates: Vec<ShippingRate>,
}

impl ShippingRateTable {
    /// Builds a table from rates, keeping their order for display.
    ///
    /// # Errors
    ///
    /// - [`ShippingError::Empty`]: no rates were given.
    /// - [`ShippingError::DuplicateMethod`]: a label appears twice.
    /// - [`ShippingError::NegativeCost`]: a cost is below zero.
    /// - [`ShippingError::UnknownMethod`]: a label is blank.
    pub fn new(rates: impl Into<Vec<ShippingRate>>) -> Result<Self, ShippingError> {
        let rates = rates.into();

        if rates.is_empty() {
            return Err(ShippingError::Empty);
        }

        for (idx, rate) in rates.iter().enumerate() {
            if rate.method.trim().is_empty() {
                return Err(ShippingError::UnknownMethod(rate.method.clone()));
            }

            if rate.cost < Decimal::ZERO {
                return Err(ShippingError::NegativeCost(rate.method.clone()));
            }

            if rates
                .iter()
                .take(idx)
                .any(|earlier| earlier.method == rate.method)
            {
                return Err(ShippingError::DuplicateMethod(rate.method.clone()));
            }
        }

        Ok(Self { rates })
    }

    /// Parses a YAML rate table of the form `rates: [{ method, cost }, ...]`.
    ///
    /// # Errors
    ///
    /// Returns a [`ShippingError`] if the YAML is malformed or the table is invalid.
    pub fn from_yaml(yaml: &str) -> Result<Self, ShippingError> {
        let file: RateTableFile = serde_norway::from_str(yaml)?;

        Self::new(file.rates)
    }

    /// Reads a YAML rate table from disk.
    ///
    /// # Errors
    ///
    /// Returns a [`ShippingError`] if the file cannot be read or parsed.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ShippingError> {
        let contents = fs::read_to_string(path)?;

        Self::from_yaml(&contents)
    }

    /// Cost of a shipping method.
    pub fn cost(&self, method: &str) -> Option<Decimal> {
        self.rates
            .iter()
            .find(|rate| rate.method == method)
            .map(|rate| rate.cost)
    }

    /// Resolves a label into a selection whose cost is taken from this table.
    ///
    /// # Errors
    ///
    /// - [`ShippingError::NotSelected`]: the label is blank.
    /// - [`ShippingError::UnknownMethod`]: the label is not in the table.
    pub fn select(&self, method: &str) -> Result<ShippingSelection, ShippingError> {
        if method.trim().is_empty() {
            return Err(ShippingError::NotSelected);
        }

        let cost = self
            .cost(method)
            .ok_or_else(|| ShippingError::UnknownMethod(method.to_string()))?;

        Ok(ShippingSelection {
            method: method.to_string(),
            cost,
        })
    }

    /// Rates in display order.
    pub fn rates(&self) -> &[ShippingRate] {
        &self.rates
    }
}

impl Default for ShippingRateTable {
    fn default() -> Self {
        let rates = [
            ("Wells Fargo Nairobi", 320),
            ("Wells Fargo Nairobi Outskirts", 330),
            ("Matatu Courier Mt. Kenya Region", 250),
            ("Ena Coach Western Kenya", 300),
            ("Pick up from shop", 0),
            ("Matatu Courier Eldoret", 250),
            ("Super Metro Juja", 150),
            ("Matatu Courier Coastal Region", 300),
        ]
        .into_iter()
        .map(|(method, cost)| ShippingRate {
            method: method.to_string(),
            cost: Decimal::from(cost),
        })
        .collect();

        Self { rates }
    }
}

#[derive(Debug, Deserialize)]
struct RateTableFile {
    rates: Vec<ShippingRate>,
}

/// A chosen shipping method. The cost is always the table's rate for the method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShippingSelection {
    method: String,
    cost: Decimal,
}

impl ShippingSelection {
    /// Method label.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Derived cost.
    pub fn cost(&self) -> Decimal {
        self.cost
    }
}
