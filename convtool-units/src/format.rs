//! Result formatting
//!
//! Renders a measurement as `<number> <long unit name>`:
//! - at most `significant_digits` significant digits (default 6), trailing
//!   zeros trimmed, no grouping separators
//! - positional notation for decimal exponents in [-6, 15), scientific
//!   (`1.5e20`) outside that range
//! - singular name when the displayed number is exactly 1 or -1
//! - first letter capitalized, the rest untouched

use serde::{Serialize, Deserialize};
use crate::Unit;

pub const DEFAULT_SIGNIFICANT_DIGITS: u8 = 6;
pub const MAX_SIGNIFICANT_DIGITS: u8 = 15;

const POSITIONAL_MIN_EXP: i32 = -6;
const POSITIONAL_MAX_EXP: i32 = 15;

/// Formatting knobs a calling UI may set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatOptions {
    pub significant_digits: u8,
    pub decimal_separator: char,
}

impl FormatOptions {
    /// Digits are clamped to 1..=15
    pub fn new(significant_digits: u8, decimal_separator: char) -> Self {
        FormatOptions {
            significant_digits: significant_digits.clamp(1, MAX_SIGNIFICANT_DIGITS),
            decimal_separator,
        }
    }

    pub fn with_significant_digits(self, digits: u8) -> Self {
        Self::new(digits, self.decimal_separator)
    }

    pub fn with_decimal_separator(self, separator: char) -> Self {
        Self::new(self.significant_digits, separator)
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            significant_digits: DEFAULT_SIGNIFICANT_DIGITS,
            decimal_separator: '.',
        }
    }
}

/// Format with default options
pub fn format(amount: f64, unit: &Unit) -> String {
    format_with(&FormatOptions::default(), amount, unit)
}

/// Format a measurement as display text
pub fn format_with(options: &FormatOptions, amount: f64, unit: &Unit) -> String {
    let number = format_number(amount, options);
    let singular = number == "1" || number == "-1";
    capitalize_first_letter(&format!("{} {}", number, unit.long_name(singular)))
}

/// Picker label for a unit (e.g., "Kilometers")
pub fn unit_label(unit: &Unit) -> String {
    capitalize_first_letter(&unit.plural)
}

/// Render a number with the configured precision and separator
pub fn format_number(value: f64, options: &FormatOptions) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    // Also folds negative zero
    if value == 0.0 {
        return "0".to_string();
    }

    let precision = options.significant_digits.clamp(1, MAX_SIGNIFICANT_DIGITS) as usize;

    // "{:.Ne}" rounds to N+1 significant digits: "-1.23457e3"
    let sci = format!("{:.*e}", precision - 1, value);
    let (mantissa, exp) = match sci.split_once('e') {
        Some(parts) => parts,
        None => return value.to_string(),
    };
    let exp: i32 = match exp.parse() {
        Ok(e) => e,
        Err(_) => return value.to_string(),
    };

    let negative = mantissa.starts_with('-');
    let digits: String = mantissa.chars().filter(|c| c.is_ascii_digit()).collect();
    let digits = digits.trim_end_matches('0');
    let digits = if digits.is_empty() { "0" } else { digits };

    let (int_part, frac_part) = if (POSITIONAL_MIN_EXP..POSITIONAL_MAX_EXP).contains(&exp) {
        positional(digits, exp)
    } else {
        let (head, tail) = digits.split_at(1);
        (head.to_string(), format!("{}e{}", tail, exp))
    };

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&int_part);
    if let Some(stripped) = frac_part.strip_prefix('e') {
        // Scientific with a single significant digit: "1e20"
        out.push('e');
        out.push_str(stripped);
    } else if !frac_part.is_empty() {
        out.push(options.decimal_separator);
        out.push_str(&frac_part);
    }
    out
}

/// Split significant `digits` (d.ddd × 10^exp) into integer and fraction parts
fn positional(digits: &str, exp: i32) -> (String, String) {
    if exp < 0 {
        let zeros = "0".repeat((-exp - 1) as usize);
        return ("0".to_string(), format!("{}{}", zeros, digits));
    }

    let int_len = exp as usize + 1;
    if digits.len() <= int_len {
        let padding = "0".repeat(int_len - digits.len());
        (format!("{}{}", digits, padding), String::new())
    } else {
        let (int_part, frac_part) = digits.split_at(int_len);
        (int_part.to_string(), frac_part.to_string())
    }
}

/// Uppercase the first alphabetic character, leaving everything else as is
pub fn capitalize_first_letter(s: &str) -> String {
    match s.char_indices().find(|(_, c)| c.is_alphabetic()) {
        Some((idx, c)) => {
            let mut out = String::with_capacity(s.len());
            out.push_str(&s[..idx]);
            out.extend(c.to_uppercase());
            out.push_str(&s[idx + c.len_utf8()..]);
            out
        }
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::UNITS;

    fn unit(id: &str) -> &'static Unit {
        UNITS.get(id).unwrap()
    }

    fn num(value: f64) -> String {
        format_number(value, &FormatOptions::default())
    }

    #[test]
    fn test_thousand_meters() {
        let s = format(1000.0, unit("m"));
        assert!(s.contains("1000"));
        assert_eq!(s, "1000 Meters");
    }

    #[test]
    fn test_negative_temperature_keeps_sign() {
        assert_eq!(format(-40.0, unit("degC")), "-40 Degrees Celsius");
        assert_eq!(format(-0.5, unit("degF")), "-0.5 Degrees Fahrenheit");
    }

    #[test]
    fn test_singular_plural() {
        assert_eq!(format(1.0, unit("km")), "1 Kilometer");
        assert_eq!(format(-1.0, unit("ft")), "-1 Foot");
        assert_eq!(format(2.0, unit("ft")), "2 Feet");
        assert_eq!(format(0.0, unit("in")), "0 Inches");
        assert_eq!(format(1.5, unit("h")), "1.5 Hours");
        assert_eq!(format(1.0, unit("degC")), "1 Degree Celsius");
        // Rounds to "1" at six digits
        assert_eq!(format(1.0000001, unit("kg")), "1 Kilogram");
    }

    #[test]
    fn test_significant_digits() {
        assert_eq!(num(0.621371192237334), "0.621371");
        assert_eq!(num(1609.344), "1609.34");
        assert_eq!(num(3.28084), "3.28084");
        assert_eq!(num(100000.0), "100000");
        assert_eq!(num(1234567.0), "1234570");
        assert_eq!(num(999999.7), "1000000");
        assert_eq!(num(-17.7777777), "-17.7778");
    }

    #[test]
    fn test_trailing_zeros_trimmed() {
        assert_eq!(num(2.5), "2.5");
        assert_eq!(num(32.0), "32");
        assert_eq!(num(273.15), "273.15");
    }

    #[test]
    fn test_small_and_large() {
        assert_eq!(num(0.000001), "0.000001");
        assert_eq!(num(0.0000001), "1e-7");
        assert_eq!(num(0.00000012345678), "1.23457e-7");
        assert_eq!(num(1e15), "1e15");
        assert_eq!(num(-2.5e20), "-2.5e20");
        assert_eq!(num(123456789012345.0), "123457000000000");
    }

    #[test]
    fn test_negative_zero() {
        assert_eq!(num(-0.0), "0");
        assert_eq!(format(-0.0, unit("degC")), "0 Degrees Celsius");
    }

    #[test]
    fn test_decimal_separator() {
        let opts = FormatOptions::default().with_decimal_separator(',');
        assert_eq!(format_number(2.5, &opts), "2,5");
        assert_eq!(format_with(&opts, 1609.344, unit("m")), "1609,34 Meters");
        assert_eq!(format_number(1000.0, &opts), "1000");
    }

    #[test]
    fn test_precision_option() {
        let opts = FormatOptions::default().with_significant_digits(3);
        assert_eq!(format_number(3.28084, &opts), "3.28");

        let opts = FormatOptions::new(0, '.');
        assert_eq!(opts.significant_digits, 1);
        assert_eq!(format_number(3.7, &opts), "4");

        let opts = FormatOptions::new(40, '.');
        assert_eq!(opts.significant_digits, MAX_SIGNIFICANT_DIGITS);
    }

    #[test]
    fn test_non_finite_does_not_panic() {
        assert_eq!(num(f64::NAN), "NaN");
        assert_eq!(num(f64::INFINITY), "inf");
    }

    #[test]
    fn test_capitalize_first_letter() {
        assert_eq!(capitalize_first_letter("5 kilometers"), "5 Kilometers");
        assert_eq!(capitalize_first_letter("kelvins"), "Kelvins");
        assert_eq!(capitalize_first_letter("-40 degrees Celsius"), "-40 Degrees Celsius");
        assert_eq!(capitalize_first_letter("123"), "123");
        assert_eq!(capitalize_first_letter(""), "");
    }

    #[test]
    fn test_unit_label() {
        assert_eq!(unit_label(unit("km")), "Kilometers");
        assert_eq!(unit_label(unit("degF")), "Degrees Fahrenheit");
        assert_eq!(unit_label(unit("K")), "Kelvins");
    }
}
