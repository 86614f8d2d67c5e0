// ============================================================================
// Numeric Module
// Deterministic Q32.32 fixed-point arithmetic
// ============================================================================
//
// This module provides:
// - Fix64: signed fixed-point value with 32 integer and 32 fractional bits
// - NumericError: Error types for operations with no representable result
//
// Design principles:
// - No floating-point operations in arithmetic (floats only at conversions)
// - No native wide integers: products and quotients are built from 64-bit limbs
// - Operators saturate; fast_* twins wrap; fallible math returns Result
// - Read-only sine table compiled into the binary

mod divide;
mod errors;
mod fix64;
mod multiply;
mod rounding;
mod saturating;
mod sqrt;
mod trig;

pub use errors::{NumericError, NumericResult};
pub use fix64::Fix64;
