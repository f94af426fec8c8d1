//! convtool Units - Unit catalog, conversion and result formatting
//!
//! Categories:
//! - Distance (km, m, mi, ft, in)
//! - Mass (kg, lb, g, oz)
//! - Temperature (degC, degF, K)
//! - Time (h, min, s)
//!
//! UI code calls `convert_and_format` with the current form values and
//! displays the returned string. Everything here is pure; the catalog is
//! built once and never mutated.

mod category;
mod unit;
mod units;
mod measurement;
mod convert;
mod format;
mod parse;

pub use category::Category;
pub use unit::Unit;
pub use units::{UnitCatalog, UNITS};
pub use measurement::Measurement;
pub use convert::{convert, convert_ids};
pub use format::{
    format, format_with, format_number, unit_label, capitalize_first_letter,
    FormatOptions, DEFAULT_SIGNIFICANT_DIGITS, MAX_SIGNIFICANT_DIGITS,
};
pub use parse::parse_amount;

use serde::{Serialize, Deserialize};
use tracing::debug;
use convtool_core::Result;

/// Category entry for a selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub id: String,
    pub name: String,
}

/// Unit entry for a from/to selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitInfo {
    pub id: String,
    pub name: String,
}

impl From<Category> for CategoryInfo {
    fn from(c: Category) -> Self {
        CategoryInfo { id: c.id().to_string(), name: c.name().to_string() }
    }
}

impl From<&Unit> for UnitInfo {
    fn from(u: &Unit) -> Self {
        UnitInfo { id: u.symbol.clone(), name: unit_label(u) }
    }
}

/// Categories in selector order
pub fn list_categories() -> Vec<CategoryInfo> {
    Category::ALL.into_iter().map(CategoryInfo::from).collect()
}

/// Units of a category in picker order
pub fn list_units(category: &str) -> Result<Vec<UnitInfo>> {
    let category: Category = category.parse()?;
    Ok(UNITS.units_for(category).into_iter().map(UnitInfo::from).collect())
}

/// Initial (from, to) selection for a category
pub fn default_pair(category: &str) -> Result<(UnitInfo, UnitInfo)> {
    let category: Category = category.parse()?;
    let (from, to) = UNITS.default_pair(category);
    Ok((from.into(), to.into()))
}

/// Convert and render with default formatting
pub fn convert_and_format(amount: f64, category: &str, from: &str, to: &str) -> Result<String> {
    convert_and_format_with(&FormatOptions::default(), amount, category, from, to)
}

/// Resolve the request, convert, and render the result.
///
/// Both unit ids are resolved within `category`.
pub fn convert_and_format_with(
    options: &FormatOptions,
    amount: f64,
    category: &str,
    from: &str,
    to: &str,
) -> Result<String> {
    let category: Category = category.parse()?;
    let from = UNITS.unit_in(category, from)?;
    let to = UNITS.unit_in(category, to)?;

    let result = Measurement::new(amount, from).converted(to)?;
    let text = result.render(options);
    debug!(%category, %text, "rendered conversion");
    Ok(text)
}
