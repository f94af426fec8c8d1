//! Unit representation with conversion factors

use std::fmt;
use serde::Serialize;
use convtool_core::{Number, NumberError};
use crate::Category;

/// A measurement unit belonging to exactly one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Unit {
    /// The unit symbol, also its catalog id (e.g., "km", "degC")
    pub symbol: String,
    /// Long singular name (e.g., "kilometer", "degree Celsius")
    pub name: String,
    /// Long plural name (e.g., "kilometers", "degrees Celsius")
    pub plural: String,
    /// Category this unit belongs to
    pub category: Category,
    /// Factor to the category base unit (base = value * to_base_factor + to_base_offset)
    #[serde(skip)]
    pub to_base_factor: Number,
    /// Offset for affine units (Celsius, Fahrenheit)
    #[serde(skip)]
    pub to_base_offset: Number,
}

impl Unit {
    /// Create a new unit with proportional conversion (no offset)
    pub fn new(
        symbol: &str,
        name: &str,
        plural: &str,
        category: Category,
        to_base_factor: Number,
    ) -> Self {
        Self::with_offset(symbol, name, plural, category, to_base_factor, Number::from_i64(0))
    }

    /// Create a unit with offset (for temperature conversions)
    pub fn with_offset(
        symbol: &str,
        name: &str,
        plural: &str,
        category: Category,
        to_base_factor: Number,
        to_base_offset: Number,
    ) -> Self {
        Unit {
            symbol: symbol.to_string(),
            name: name.to_string(),
            plural: plural.to_string(),
            category,
            to_base_factor,
            to_base_offset,
        }
    }

    /// Check if two units can be converted into each other
    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.category == other.category
    }

    /// Convert a value from this unit to the category base unit
    pub fn to_base(&self, value: &Number) -> Number {
        value.mul(&self.to_base_factor).add(&self.to_base_offset)
    }

    /// Convert a value from the category base unit to this unit
    pub fn from_base(&self, value_base: &Number) -> Result<Number, NumberError> {
        // value = (value_base - offset) / factor
        value_base.sub(&self.to_base_offset).checked_div(&self.to_base_factor)
    }

    /// Long name agreeing in number with `singular`
    pub fn long_name(&self, singular: bool) -> &str {
        if singular { &self.name } else { &self.plural }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}
