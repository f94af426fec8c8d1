//! Conversion categories

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use convtool_core::ConvertError;

/// A family of mutually convertible units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Distance,
    Mass,
    Temperature,
    Time,
}

impl Category {
    /// All categories in selector order
    pub const ALL: [Category; 4] = [
        Category::Distance,
        Category::Mass,
        Category::Temperature,
        Category::Time,
    ];

    /// Stable identifier (e.g., "distance")
    pub fn id(&self) -> &'static str {
        match self {
            Category::Distance => "distance",
            Category::Mass => "mass",
            Category::Temperature => "temperature",
            Category::Time => "time",
        }
    }

    /// Display name (e.g., "Distance")
    pub fn name(&self) -> &'static str {
        match self {
            Category::Distance => "Distance",
            Category::Mass => "Mass",
            Category::Temperature => "Temperature",
            Category::Time => "Time",
        }
    }

    /// Symbol of the pivot unit every conversion in this category goes through
    pub fn base_symbol(&self) -> &'static str {
        match self {
            Category::Distance => "m",
            Category::Mass => "kg",
            Category::Temperature => "K",
            Category::Time => "s",
        }
    }

    /// Temperature is the only affine category
    pub fn is_linear(&self) -> bool {
        !matches!(self, Category::Temperature)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Category {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ConvertError::UnknownCategory(s.to_string()))
    }
}
