// ============================================================================
// Q32.32 Fixed-Point Value
// Encoding, constants, conversions, comparison and operator wiring
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt;
use std::iter::{Product, Sum};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Signed Q32.32 fixed-point number.
///
/// Internally stores `value × 2^32` as an i64: the high 32 bits carry the
/// integer part and the low 32 bits the fraction, with the sign applying to the
/// whole word. Every bit pattern is a valid, distinct value.
///
/// # Value Range
/// - Minimum: -2147483648.0
/// - Maximum: +2147483647.99999999976716935634613037109375
/// - Precision: 2^-32 (about 2.3e-10)
///
/// # Overflow
/// `+`, `-`, `*`, `/` and unary `-` saturate to [`Fix64::MIN`] / [`Fix64::MAX`].
/// The `fast_*` methods wrap instead and must only be used where the caller
/// has ruled out overflow.
///
/// # Example
/// ```
/// use fix64::Fix64;
///
/// let a = Fix64::from_integer(3);
/// let b = Fix64::from(2);
/// assert_eq!((a / b).to_f64(), 1.5);
/// assert_eq!(Fix64::MAX + Fix64::ONE, Fix64::MAX);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[repr(transparent)]
pub struct Fix64(pub(crate) i64);

// ============================================================================
// Encoding Constants
// ============================================================================

impl Fix64 {
    /// Number of fractional bits.
    pub const FRAC_BITS: u32 = 32;

    /// Raw encoding of 1.0
    pub const ONE_RAW: i64 = 1 << Self::FRAC_BITS;

    /// Raw encoding of pi (truncated to 32 fractional bits)
    pub const PI_RAW: i64 = 0x3_243F_6A88;

    /// Raw encoding of pi / 2
    pub const PI_OVER_2_RAW: i64 = 0x1_921F_B544;

    /// Raw encoding of 2 * pi
    pub const PI_TIMES_2_RAW: i64 = 0x6_487E_D511;

    /// Mask selecting the fractional bits of the raw value.
    pub(crate) const FRAC_MASK: i64 = 0x0000_0000_FFFF_FFFF;

    /// Zero value
    pub const ZERO: Self = Self(0);

    /// One (1.0)
    pub const ONE: Self = Self(Self::ONE_RAW);

    /// Minus one (-1.0)
    pub const NEG_ONE: Self = Self(-Self::ONE_RAW);

    /// Maximum representable value
    pub const MAX: Self = Self(i64::MAX);

    /// Minimum representable value
    pub const MIN: Self = Self(i64::MIN);

    /// Smallest positive value (one raw unit, 2^-32)
    pub const EPSILON: Self = Self(1);

    /// Pi
    pub const PI: Self = Self(Self::PI_RAW);

    /// Pi / 2
    pub const PI_OVER_2: Self = Self(Self::PI_OVER_2_RAW);

    /// 2 * Pi
    pub const PI_TIMES_2: Self = Self(Self::PI_TIMES_2_RAW);

    /// Real value of one raw unit (2^-32) as a decimal.
    ///
    /// `Decimal` holds at most 28 fractional digits, so the exact value
    /// `0.00000000023283064365386962890625` is rounded to 28 places.
    pub fn precision() -> Decimal {
        Decimal::from_i128_with_scale(2_328_306_436_538_696_289, 28)
    }

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from raw internal representation.
    ///
    /// All raw values are legal; use this for table data and bit-exact tests.
    #[inline]
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Create from an integer value.
    ///
    /// Values outside the 32-bit integer range wrap: the bits shifted out of the
    /// word are lost. Use [`Fix64::checked_from_integer`] when the input is
    /// not known to fit.
    #[inline]
    pub const fn from_integer(value: i64) -> Self {
        Self(value << Self::FRAC_BITS)
    }

    /// Create from an integer value.
    ///
    /// # Errors
    /// Returns `Overflow` if the value does not fit in the 32-bit integer part.
    #[inline]
    pub fn checked_from_integer(value: i64) -> NumericResult<Self> {
        i32::try_from(value)
            .map(|v| Self::from_integer(i64::from(v)))
            .map_err(|_| NumericError::Overflow)
    }

    /// Create from an `f64`, truncating toward zero.
    ///
    /// Follows Rust's `as` conversion: out-of-range inputs clamp to
    /// [`Fix64::MIN`]/[`Fix64::MAX`] and NaN maps to zero. Range checking is
    /// the caller's responsibility; see [`Fix64::checked_from_f64`].
    #[inline]
    pub fn from_f64(value: f64) -> Self {
        Self((value * Self::ONE_RAW as f64) as i64)
    }

    /// Create from an `f32`, truncating toward zero.
    ///
    /// Same conversion rules as [`Fix64::from_f64`].
    #[inline]
    pub fn from_f32(value: f32) -> Self {
        Self((value * Self::ONE_RAW as f32) as i64)
    }

    /// Create from an `f64`, rejecting values that cannot be represented.
    ///
    /// # Errors
    /// - `InvalidInput` for NaN and infinities
    /// - `Overflow` if the scaled value is outside the i64 range
    pub fn checked_from_f64(value: f64) -> NumericResult<Self> {
        if !value.is_finite() {
            tracing::debug!(value, "rejecting non-finite fixed-point conversion");
            return Err(NumericError::InvalidInput);
        }
        // 2^63 is exactly representable; anything at or above it cannot fit.
        let scaled = value * Self::ONE_RAW as f64;
        if scaled >= 9_223_372_036_854_775_808.0 || scaled < -9_223_372_036_854_775_808.0 {
            tracing::debug!(value, "fixed-point conversion out of range");
            return Err(NumericError::Overflow);
        }
        Ok(Self(scaled as i64))
    }

    /// Convert from rust_decimal::Decimal, truncating toward zero.
    ///
    /// # Errors
    /// Returns `Overflow` if the value is outside the representable range.
    pub fn from_decimal(value: Decimal) -> NumericResult<Self> {
        value
            .checked_mul(Decimal::from(Self::ONE_RAW))
            .and_then(|scaled| scaled.trunc().to_i64())
            .map(Self)
            .ok_or_else(|| {
                tracing::debug!(%value, "fixed-point conversion out of range");
                NumericError::Overflow
            })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the raw internal value (scaled by 2^32).
    #[inline]
    pub const fn raw_value(self) -> i64 {
        self.0
    }

    /// Integer part, rounded toward negative infinity.
    ///
    /// `-1.25` yields `-2`: this is an arithmetic shift, not truncation.
    #[inline]
    pub const fn to_integer(self) -> i64 {
        self.0 >> Self::FRAC_BITS
    }

    /// The low 32 bits of the encoding.
    ///
    /// Always the distance above [`Fix64::floor`], so it is non-negative for
    /// negative values too.
    #[inline]
    pub const fn fractional_bits(self) -> u32 {
        (self.0 & Self::FRAC_MASK) as u32
    }

    /// Convert to `f64` by dividing the raw value by 2^32.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / Self::ONE_RAW as f64
    }

    /// Convert to `f32` by dividing the raw value by 2^32.
    #[inline]
    pub fn to_f32(self) -> f32 {
        self.0 as f32 / Self::ONE_RAW as f32
    }

    /// Convert to rust_decimal::Decimal.
    ///
    /// Exact up to `Decimal`'s 28 fractional digits.
    pub fn to_decimal(self) -> Decimal {
        Decimal::from(self.0) / Decimal::from(Self::ONE_RAW)
    }

    /// Check if value is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Check if value is positive.
    #[inline]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Check if value is negative.
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Returns -1, 0 or 1 according to the sign of the value.
    #[inline]
    pub const fn sign(self) -> i32 {
        self.0.signum() as i32
    }
}

// ============================================================================
// Conversion Traits
// ============================================================================

impl From<i32> for Fix64 {
    #[inline]
    fn from(value: i32) -> Self {
        Self::from_integer(i64::from(value))
    }
}

impl From<Fix64> for f64 {
    #[inline]
    fn from(value: Fix64) -> Self {
        value.to_f64()
    }
}

impl From<Fix64> for Decimal {
    #[inline]
    fn from(value: Fix64) -> Self {
        value.to_decimal()
    }
}

impl TryFrom<Decimal> for Fix64 {
    type Error = NumericError;

    #[inline]
    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::from_decimal(value)
    }
}

// ============================================================================
// Operator Traits
// ============================================================================

impl Neg for Fix64 {
    type Output = Self;

    /// Saturating: `-MIN` yields `MAX`.
    #[inline]
    fn neg(self) -> Self::Output {
        self.saturating_neg()
    }
}

impl Add for Fix64 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.saturating_add(rhs)
    }
}

impl Sub for Fix64 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.saturating_sub(rhs)
    }
}

impl Mul for Fix64 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.saturating_mul(rhs)
    }
}

// Infallible Div/Rem for ergonomics (panics on a zero divisor like integer
// division - use checked_* where the divisor is untrusted)
impl Div for Fix64 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        match self.checked_div(rhs) {
            Ok(quotient) => quotient,
            Err(_) => panic!("Fix64 division by zero"),
        }
    }
}

impl Rem for Fix64 {
    type Output = Self;

    #[inline]
    fn rem(self, rhs: Self) -> Self::Output {
        match self.checked_rem(rhs) {
            Ok(remainder) => remainder,
            Err(_) => panic!("Fix64 remainder with a divisor of zero"),
        }
    }
}

macro_rules! impl_assign_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait for Fix64 {
            #[inline]
            fn $method(&mut self, rhs: Self) {
                *self = *self $op rhs;
            }
        }
    };
}

impl_assign_op!(AddAssign, add_assign, +);
impl_assign_op!(SubAssign, sub_assign, -);
impl_assign_op!(MulAssign, mul_assign, *);
impl_assign_op!(DivAssign, div_assign, /);
impl_assign_op!(RemAssign, rem_assign, %);

impl Sum for Fix64 {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl Product for Fix64 {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for Fix64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fix64({}, raw={})", self, self.0)
    }
}

impl fmt::Display for Fix64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal().normalize())
    }
}

// ============================================================================
// Tests
// ============================================================================
