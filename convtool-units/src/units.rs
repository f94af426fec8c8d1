//! Unit definitions - the built-in catalog, organized by category
//!
//! Registration order is picker order. Every factor is the exact SI
//! definition (1 mi = 1609.344 m, 1 lb = 0.45359237 kg, ...).

use std::collections::HashMap;
use std::sync::LazyLock;
use convtool_core::{ConvertError, Number, Result};
use crate::{Category, Unit};

/// Global unit catalog, built on first access and read-only afterwards
pub static UNITS: LazyLock<UnitCatalog> = LazyLock::new(UnitCatalog::new);

/// Parse a decimal literal from the tables below
fn dec(s: &str) -> Number {
    Number::from_str(s).expect("unit table constants are valid decimals")
}

/// Registry of all known units
pub struct UnitCatalog {
    units: Vec<Unit>,
    by_symbol: HashMap<String, usize>,
    aliases: HashMap<String, String>,
}

impl UnitCatalog {
    pub fn new() -> Self {
        let mut catalog = UnitCatalog {
            units: Vec::new(),
            by_symbol: HashMap::new(),
            aliases: HashMap::new(),
        };
        catalog.register_all_units();
        catalog
    }

    /// Get a unit by symbol or alias
    pub fn get(&self, symbol: &str) -> Option<&Unit> {
        let symbol = symbol.trim();
        if let Some(&idx) = self.by_symbol.get(symbol) {
            return Some(&self.units[idx]);
        }
        let canonical = self.aliases.get(symbol)
            .or_else(|| self.aliases.get(&symbol.to_lowercase()))?;
        self.by_symbol.get(canonical).map(|&idx| &self.units[idx])
    }

    /// Catalog-wide lookup, failing with UnknownUnit
    pub fn unit(&self, id: &str) -> Result<&Unit> {
        self.get(id).ok_or_else(|| ConvertError::unknown_unit(id))
    }

    /// Lookup scoped to one category.
    ///
    /// A unit that exists but belongs to another category is unknown here.
    pub fn unit_in(&self, category: Category, id: &str) -> Result<&Unit> {
        self.get(id)
            .filter(|u| u.category == category)
            .ok_or_else(|| ConvertError::unknown_unit_in(id, category.id()))
    }

    /// Units of a category, in picker order
    pub fn units_for(&self, category: Category) -> Vec<&Unit> {
        self.units.iter()
            .filter(|u| u.category == category)
            .collect()
    }

    /// Initial (from, to) selection for a category: its first two units
    pub fn default_pair(&self, category: Category) -> (&Unit, &Unit) {
        let units = self.units_for(category);
        (units[0], units[1])
    }

    fn register(&mut self, unit: Unit) {
        self.by_symbol.insert(unit.symbol.clone(), self.units.len());
        self.aliases.insert(unit.name.to_lowercase(), unit.symbol.clone());
        self.aliases.insert(unit.plural.to_lowercase(), unit.symbol.clone());
        self.units.push(unit);
    }

    fn alias(&mut self, alias: &str, symbol: &str) {
        self.aliases.insert(alias.to_string(), symbol.to_string());
    }

    fn register_all_units(&mut self) {
        self.register_distance_units();
        self.register_mass_units();
        self.register_temperature_units();
        self.register_time_units();
    }

    fn register_distance_units(&mut self) {
        let c = Category::Distance;
        self.register(Unit::new("km", "kilometer", "kilometers", c, Number::from_i64(1000)));
        self.register(Unit::new("m", "meter", "meters", c, Number::from_i64(1)));
        self.register(Unit::new("mi", "mile", "miles", c, dec("1609.344")));
        self.register(Unit::new("ft", "foot", "feet", c, dec("0.3048")));
        self.register(Unit::new("in", "inch", "inches", c, dec("0.0254")));

        self.alias("metre", "m");
        self.alias("metres", "m");
        self.alias("kilometre", "km");
        self.alias("kilometres", "km");
        self.alias("'", "ft");
        self.alias("\"", "in");
    }

    fn register_mass_units(&mut self) {
        let c = Category::Mass;
        self.register(Unit::new("kg", "kilogram", "kilograms", c, Number::from_i64(1)));
        self.register(Unit::new("lb", "pound", "pounds", c, dec("0.45359237")));
        self.register(Unit::new("g", "gram", "grams", c, dec("0.001")));
        self.register(Unit::new("oz", "ounce", "ounces", c, dec("0.028349523125")));

        self.alias("lbs", "lb");
        self.alias("gramme", "g");
        self.alias("grammes", "g");
    }

    fn register_temperature_units(&mut self) {
        let c = Category::Temperature;

        // Celsius: K = C + 273.15
        self.register(Unit::with_offset(
            "degC", "degree Celsius", "degrees Celsius", c,
            Number::from_i64(1),
            dec("273.15"),
        ));

        // Fahrenheit: K = (F + 459.67) * 5/9 = F * 5/9 + 459.67 * 5/9
        let five_ninths = dec("5/9");
        self.register(Unit::with_offset(
            "degF", "degree Fahrenheit", "degrees Fahrenheit", c,
            five_ninths.clone(),
            dec("459.67").mul(&five_ninths),
        ));

        // Kelvin is the base unit
        self.register(Unit::new("K", "kelvin", "kelvins", c, Number::from_i64(1)));

        self.alias("C", "degC");
        self.alias("celsius", "degC");
        self.alias("°C", "degC");
        self.alias("F", "degF");
        self.alias("fahrenheit", "degF");
        self.alias("°F", "degF");
    }

    fn register_time_units(&mut self) {
        let c = Category::Time;
        self.register(Unit::new("h", "hour", "hours", c, Number::from_i64(3600)));
        self.register(Unit::new("min", "minute", "minutes", c, Number::from_i64(60)));
        self.register(Unit::new("s", "second", "seconds", c, Number::from_i64(1)));

        self.alias("hr", "h");
        self.alias("hrs", "h");
        self.alias("sec", "s");
        self.alias("secs", "s");
        self.alias("mins", "min");
    }
}

impl Default for UnitCatalog {
    fn default() -> Self {
        Self::new()
    }
}
