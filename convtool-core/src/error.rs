//! Conversion errors
//!
//! Errors are values returned to the caller. A rejected request never
//! produces a numeric result.

use crate::NumberError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const UNKNOWN_CATEGORY: &str = "UNKNOWN_CATEGORY";
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const INVALID_UNIT_PAIRING: &str = "INVALID_UNIT_PAIRING";
    pub const NON_FINITE_AMOUNT: &str = "NON_FINITE_AMOUNT";
    pub const NUMBER_ERROR: &str = "NUMBER_ERROR";
    pub const BAD_REQUEST: &str = "BAD_REQUEST";
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("unknown unit: {unit}{}", scope_suffix(.category))]
    UnknownUnit {
        unit: String,
        /// Set when the lookup was scoped to a category
        category: Option<String>,
    },

    #[error("cannot convert {from} to {to}: units belong to different categories")]
    InvalidUnitPairing { from: String, to: String },

    #[error("amount is not a finite number: {0}")]
    NonFiniteAmount(f64),

    #[error("numeric error: {0}")]
    Number(#[from] NumberError),
}

fn scope_suffix(category: &Option<String>) -> String {
    match category {
        Some(c) => format!(" (in {})", c),
        None => String::new(),
    }
}

impl ConvertError {
    pub fn unknown_unit(unit: impl Into<String>) -> Self {
        Self::UnknownUnit { unit: unit.into(), category: None }
    }

    pub fn unknown_unit_in(unit: impl Into<String>, category: impl Into<String>) -> Self {
        Self::UnknownUnit { unit: unit.into(), category: Some(category.into()) }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownCategory(_) => codes::UNKNOWN_CATEGORY,
            Self::UnknownUnit { .. } => codes::UNKNOWN_UNIT,
            Self::InvalidUnitPairing { .. } => codes::INVALID_UNIT_PAIRING,
            Self::NonFiniteAmount(_) => codes::NON_FINITE_AMOUNT,
            Self::Number(_) => codes::NUMBER_ERROR,
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            Self::UnknownCategory(_) => {
                Some("Use list_categories to see valid categories".to_string())
            }
            Self::UnknownUnit { category: Some(c), .. } => {
                Some(format!("Use list_units(\"{}\") to see valid units", c))
            }
            Self::UnknownUnit { category: None, .. } => {
                Some("Check the unit symbol or name".to_string())
            }
            Self::InvalidUnitPairing { .. } => {
                Some("Pick both units from the same category".to_string())
            }
            Self::NonFiniteAmount(_) => Some("Enter a finite number".to_string()),
            Self::Number(_) => None,
        }
    }
}

/// Structured error for display by a calling UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ErrorReport {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn bad_request(details: impl Into<String>) -> Self {
        Self::new(codes::BAD_REQUEST, format!("Bad request: {}", details.into()))
    }
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl From<&ConvertError> for ErrorReport {
    fn from(err: &ConvertError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
            suggestion: err.suggestion(),
        }
    }
}

impl From<ConvertError> for ErrorReport {
    fn from(err: ConvertError) -> Self {
        Self::from(&err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(ConvertError::UnknownCategory("x".into()).code(), codes::UNKNOWN_CATEGORY);
        assert_eq!(ConvertError::unknown_unit("x").code(), codes::UNKNOWN_UNIT);
        assert_eq!(ConvertError::NonFiniteAmount(f64::NAN).code(), codes::NON_FINITE_AMOUNT);
        assert_eq!(ConvertError::from(NumberError::DivisionByZero).code(), codes::NUMBER_ERROR);
    }

    #[test]
    fn test_unknown_unit_message() {
        assert_eq!(ConvertError::unknown_unit("parsec").to_string(), "unknown unit: parsec");
        assert_eq!(
            ConvertError::unknown_unit_in("kg", "distance").to_string(),
            "unknown unit: kg (in distance)"
        );
    }

    #[test]
    fn test_report_from_error() {
        let err = ConvertError::InvalidUnitPairing { from: "km".into(), to: "kg".into() };
        let report = ErrorReport::from(&err);
        assert_eq!(report.code, "INVALID_UNIT_PAIRING");
        assert!(report.message.contains("km"));
        assert!(report.suggestion.is_some());
    }

    #[test]
    fn test_report_display() {
        let report = ErrorReport::new("X", "broken").with_suggestion("fix it");
        assert_eq!(report.to_string(), "[X] broken (suggestion: fix it)");
    }

    #[test]
    fn test_report_serializes_without_empty_suggestion() {
        let json = serde_json::to_string(&ErrorReport::new("X", "y")).unwrap();
        assert_eq!(json, r#"{"code":"X","message":"y"}"#);
    }
}
