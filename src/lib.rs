// ============================================================================
// Fix64 Library
// Deterministic Q32.32 fixed-point arithmetic
// ============================================================================

//! # Fix64
//!
//! A signed fixed-point number with 32 integer bits and 32 fractional bits,
//! stored in an `i64`. Every operation is pure integer arithmetic, so results
//! are bit-identical across machines, compilers and FPUs.
//!
//! ## Features
//!
//! - **Saturating operators**: `+`, `-`, `*`, `/` and unary `-` clamp to
//!   `MIN`/`MAX` instead of wrapping
//! - **Fast twins** (`fast_add`, `fast_sub`, `fast_mul`, `fast_abs`) that wrap,
//!   for loops where overflow is ruled out
//! - **Limb arithmetic**: multiply and divide use only 64-bit operations
//! - **Math functions**: `abs`, `sign`, `floor`, `ceil`, `round`, `sqrt`,
//!   `sin`, `cos`
//! - **Conversions** to and from integers, `f32`/`f64` and `rust_decimal::Decimal`
//!
//! ## Example
//!
//! ```rust
//! use fix64::prelude::*;
//!
//! let a = Fix64::from_integer(3);
//! let b = Fix64::from_f64(0.5);
//!
//! assert_eq!(a * b, Fix64::from_f64(1.5));
//! assert_eq!(Fix64::from_integer(4).sqrt(), Ok(Fix64::from_integer(2)));
//! assert_eq!(Fix64::PI_OVER_2.sin(), Fix64::ONE);
//!
//! // Overflow saturates
//! assert_eq!(Fix64::MAX + Fix64::ONE, Fix64::MAX);
//!
//! // Operations with no representable result are errors
//! assert_eq!(Fix64::MIN.abs(), Err(NumericError::Overflow));
//! assert_eq!(a.checked_div(Fix64::ZERO), Err(NumericError::DivisionByZero));
//! ```

pub mod numeric;

pub use numeric::{Fix64, NumericError, NumericResult};

// Re-exports for convenience
pub mod prelude {
    pub use crate::numeric::{Fix64, NumericError, NumericResult};
}
