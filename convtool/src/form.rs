//! Form state and rendering
//!
//! The form holds what the user has entered. The displayed result is never
//! stored: `render` recomputes it from the current state on every change.

use serde::Serialize;
use convtool_core::{ConvertError, Result};
use convtool_units::{convert_and_format_with, parse_amount, Category, FormatOptions, UNITS};
use tracing::{debug, warn};

/// Amount shown when the form first opens
pub const INITIAL_AMOUNT: &str = "100";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormState {
    /// Amount text exactly as typed
    pub amount: String,
    pub category: Category,
    pub from: String,
    pub to: String,
}

impl FormState {
    pub fn new(category: Category) -> Self {
        let (from, to) = UNITS.default_pair(category);
        FormState {
            amount: INITIAL_AMOUNT.to_string(),
            category,
            from: from.symbol.clone(),
            to: to.symbol.clone(),
        }
    }

    /// Switch category and reset both pickers to the category's default pair
    pub fn select_category(&mut self, category: Category) {
        let (from, to) = UNITS.default_pair(category);
        self.category = category;
        self.from = from.symbol.clone();
        self.to = to.symbol.clone();
        debug!(%category, from = %self.from, to = %self.to, "category selected");
    }

    pub fn set_amount(&mut self, text: &str) {
        self.amount = text.to_string();
    }

    /// Pick the source unit; it must belong to the current category
    pub fn set_from(&mut self, id: &str) -> Result<()> {
        self.from = UNITS.unit_in(self.category, id)?.symbol.clone();
        Ok(())
    }

    /// Pick the destination unit; it must belong to the current category
    pub fn set_to(&mut self, id: &str) -> Result<()> {
        self.to = UNITS.unit_in(self.category, id)?.symbol.clone();
        Ok(())
    }
}

/// Result text for the current form, or None when there is nothing to show.
///
/// Empty, unparseable and non-finite amounts suppress the result.
pub fn render(form: &FormState, options: &FormatOptions) -> Option<String> {
    let amount = parse_amount(&form.amount, options.decimal_separator)?;

    match convert_and_format_with(options, amount, form.category.id(), &form.from, &form.to) {
        Ok(text) => Some(text),
        Err(ConvertError::NonFiniteAmount(_)) => None,
        Err(e) => {
            warn!(error = %e, "form could not be rendered");
            None
        }
    }
}
