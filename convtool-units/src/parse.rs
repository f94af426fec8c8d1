//! Amount parsing for form input

/// Parse an amount as typed into a form field.
///
/// Returns None for empty or unparseable text. Numeric parsing is the
/// standard library's; the only localization is accepting the configured
/// decimal separator in place of '.'. Non-finite values ("inf", "1e999")
/// are returned as-is and rejected later by the engine.
pub fn parse_amount(text: &str, decimal_separator: char) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let normalized = if decimal_separator == '.' {
        text.to_string()
    } else {
        text.replace(decimal_separator, ".")
    };

    normalized.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("100", '.'), Some(100.0));
        assert_eq!(parse_amount("  -40.5 ", '.'), Some(-40.5));
        assert_eq!(parse_amount("1e3", '.'), Some(1000.0));
    }

    #[test]
    fn test_parse_amount_empty_or_garbage() {
        assert_eq!(parse_amount("", '.'), None);
        assert_eq!(parse_amount("   ", '.'), None);
        assert_eq!(parse_amount("12abc", '.'), None);
        assert_eq!(parse_amount("-", '.'), None);
    }

    #[test]
    fn test_parse_amount_comma_separator() {
        assert_eq!(parse_amount("2,5", ','), Some(2.5));
        assert_eq!(parse_amount("2,5", '.'), None);
    }

    #[test]
    fn test_parse_amount_non_finite_passes_through() {
        assert!(parse_amount("inf", '.').unwrap().is_infinite());
        assert!(parse_amount("1e999", '.').unwrap().is_infinite());
        assert!(parse_amount("NaN", '.').unwrap().is_nan());
    }
}
