//! Measurement type - an amount with an associated unit

use std::fmt;
use serde::Serialize;
use convtool_core::Result;
use crate::Unit;
use crate::convert::convert;
use crate::format::{format_with, FormatOptions};

/// An amount expressed in a unit. Created per request, never retained.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Measurement<'a> {
    pub amount: f64,
    pub unit: &'a Unit,
}

impl<'a> Measurement<'a> {
    pub fn new(amount: f64, unit: &'a Unit) -> Self {
        Measurement { amount, unit }
    }

    /// Re-express this measurement in another unit of the same category
    pub fn converted<'b>(&self, target: &'b Unit) -> Result<Measurement<'b>> {
        let amount = convert(self.amount, self.unit, target)?;
        Ok(Measurement::new(amount, target))
    }

    /// Render with explicit formatting options
    pub fn render(&self, options: &FormatOptions) -> String {
        format_with(options, self.amount, self.unit)
    }
}

impl fmt::Display for Measurement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(&FormatOptions::default()))
    }
}
