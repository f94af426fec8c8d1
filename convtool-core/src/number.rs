//! Exact decimal numbers using dashu
//!
//! Conversion factors such as 0.3048 or 0.45359237 are exact in decimal but
//! not in binary floating point. Routing the pivot arithmetic through DBig
//! keeps published fixed points (100 °C = 212 °F, 1 mi = 5280 ft) exact
//! until the final rounding back to f64.

use dashu_float::DBig;
use dashu_int::IBig;
use thiserror::Error;

/// Error type for number operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NumberError {
    #[error("Invalid number format: {0}")]
    ParseError(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Value is not finite: {0}")]
    NotFinite(f64),

    #[error("Overflow: result does not fit in f64")]
    Overflow,
}

/// Working precision for conversions (decimal digits)
const WORK_PRECISION: usize = 50;

/// Decimal number with a fixed working precision.
///
/// All operations return Results or new Numbers - never panic.
#[derive(Debug, Clone)]
pub struct Number {
    inner: DBig,
}

impl Number {
    // ========== Construction ==========

    fn with_work_precision(val: DBig) -> DBig {
        val.with_precision(WORK_PRECISION).value()
    }

    /// Create from string representation
    /// Supports: "123", "3.14", "1/3", "1.5e10", "-42"
    pub fn from_str(s: &str) -> Result<Self, NumberError> {
        let s = s.trim();

        // Rational format "a/b"
        if let Some((num_str, den_str)) = s.split_once('/') {
            let num: DBig = num_str.trim().parse()
                .map_err(|_| NumberError::ParseError(s.to_string()))?;
            let den: DBig = den_str.trim().parse()
                .map_err(|_| NumberError::ParseError(s.to_string()))?;

            if den == DBig::ZERO {
                return Err(NumberError::DivisionByZero);
            }

            let result = Self::with_work_precision(num) / Self::with_work_precision(den);
            return Ok(Self { inner: result });
        }

        // Scientific notation: fold the fractional digits into the exponent
        let lower = s.to_lowercase();
        if let Some((mantissa, exp)) = lower.split_once('e') {
            let exp: isize = exp.parse()
                .map_err(|_| NumberError::ParseError(s.to_string()))?;
            let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
            let digits = format!("{}{}", int_part, frac_part);
            let significand: IBig = digits.parse()
                .map_err(|_| NumberError::ParseError(s.to_string()))?;
            let result = DBig::from_parts(significand, exp - frac_part.len() as isize);
            return Ok(Self { inner: Self::with_work_precision(result) });
        }

        let inner: DBig = s.parse()
            .map_err(|_| NumberError::ParseError(s.to_string()))?;

        Ok(Self { inner: Self::with_work_precision(inner) })
    }

    /// Create from i64 with working precision
    pub fn from_i64(n: i64) -> Self {
        Self { inner: Self::with_work_precision(DBig::from(n)) }
    }

    /// Create from f64.
    ///
    /// Uses the shortest decimal that round-trips to `f`, so `0.1` becomes
    /// exactly one tenth rather than its binary approximation.
    pub fn from_f64(f: f64) -> Result<Self, NumberError> {
        if !f.is_finite() {
            return Err(NumberError::NotFinite(f));
        }
        Self::from_str(&format!("{:e}", f))
    }

    // ========== Predicates ==========

    /// Check if zero
    pub fn is_zero(&self) -> bool {
        self.inner == DBig::ZERO
    }

    // ========== Basic Arithmetic ==========

    /// Addition
    pub fn add(&self, other: &Self) -> Self {
        Self { inner: &self.inner + &other.inner }
    }

    /// Subtraction
    pub fn sub(&self, other: &Self) -> Self {
        Self { inner: &self.inner - &other.inner }
    }

    /// Multiplication
    pub fn mul(&self, other: &Self) -> Self {
        Self { inner: &self.inner * &other.inner }
    }

    /// Safe division (returns Result, never panics)
    pub fn checked_div(&self, other: &Self) -> Result<Self, NumberError> {
        if other.is_zero() {
            Err(NumberError::DivisionByZero)
        } else {
            Ok(Self { inner: &self.inner / &other.inner })
        }
    }

    // ========== Conversion ==========

    /// Round to the nearest f64.
    ///
    /// The repr is printed as `significand e exponent` and handed to the
    /// standard float parser, which rounds correctly.
    pub fn to_f64(&self) -> Result<f64, NumberError> {
        let (significand, exponent) = self.inner.clone().into_repr().into_parts();
        let f: f64 = format!("{}e{}", significand, exponent)
            .parse()
            .map_err(|_| NumberError::ParseError(self.inner.to_string()))?;

        if f.is_finite() {
            Ok(f)
        } else {
            Err(NumberError::Overflow)
        }
    }
}

// ========== Trait Implementations ==========

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.inner.partial_cmp(&other.inner)
    }
}
