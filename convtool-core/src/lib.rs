//! convtool Core - Fundamental types
//!
//! This crate provides the core types used throughout convtool:
//! - `Number`: Exact decimal numbers for conversion arithmetic
//! - `ConvertError`: Typed conversion failures
//! - `ErrorReport`: Structured, serializable errors for UI layers

mod number;
mod error;

pub use number::{Number, NumberError};
pub use error::{ConvertError, ErrorReport, codes};

/// Result alias for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Number, ConvertError, ErrorReport, Result};
    pub use crate::error::codes;
}
