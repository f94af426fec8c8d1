//! Conversion engine
//!
//! Every conversion pivots through the category base unit:
//! `to.from_base(from.to_base(amount))`. The pivot arithmetic runs on
//! `Number`; only the final value is rounded back to f64.

use convtool_core::{ConvertError, Number, Result};
use tracing::{debug, warn};
use crate::Unit;
use crate::units::UNITS;

/// Convert `amount` expressed in `from` into `to`.
///
/// Both units must belong to the same category. Identical units return the
/// amount untouched.
pub fn convert(amount: f64, from: &Unit, to: &Unit) -> Result<f64> {
    if !amount.is_finite() {
        debug!(amount, from = %from, to = %to, "rejected non-finite amount");
        return Err(ConvertError::NonFiniteAmount(amount));
    }

    if !from.is_compatible(to) {
        warn!(from = %from, to = %to, "rejected cross-category conversion");
        return Err(ConvertError::InvalidUnitPairing {
            from: from.symbol.clone(),
            to: to.symbol.clone(),
        });
    }

    if from == to {
        return Ok(amount);
    }

    let value = Number::from_f64(amount)?;
    let base = from.to_base(&value);
    let result = to.from_base(&base)?.to_f64()?;

    debug!(amount, from = %from, to = %to, result, "converted");
    Ok(result)
}

/// Convert between units given by symbol or alias.
///
/// Unknown ids fail with UnknownUnit; nothing is ever defaulted.
pub fn convert_ids(amount: f64, from: &str, to: &str) -> Result<f64> {
    let from = UNITS.unit(from)?;
    let to = UNITS.unit(to)?;
    convert(amount, from, to)
}
