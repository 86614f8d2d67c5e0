// ============================================================================
// Saturating Arithmetic
// Add, subtract, negate and absolute value with clamp-on-overflow semantics
// ============================================================================
//
// Each checked operation has a "fast" twin that wraps modulo 2^64 instead of
// detecting overflow. The fast forms exist for inner loops where the caller
// has already bounded the operands.

use super::errors::{NumericError, NumericResult};
use super::fix64::Fix64;

impl Fix64 {
    /// Saturating addition.
    ///
    /// Overflow happens iff both operands share a sign and the wrapped sum
    /// has the other one; the result then clamps toward the operands' sign.
    #[inline]
    pub const fn saturating_add(self, rhs: Self) -> Self {
        let (x, y) = (self.0, rhs.0);
        let sum = x.wrapping_add(y);
        if (!(x ^ y) & (x ^ sum)) < 0 {
            return if x > 0 { Self::MAX } else { Self::MIN };
        }
        Self(sum)
    }

    /// Saturating subtraction.
    #[inline]
    pub const fn saturating_sub(self, rhs: Self) -> Self {
        let (x, y) = (self.0, rhs.0);
        let diff = x.wrapping_sub(y);
        // operands of different sign, and result sign differs from the minuend
        if ((x ^ y) & (x ^ diff)) < 0 {
            return if x < 0 { Self::MIN } else { Self::MAX };
        }
        Self(diff)
    }

    /// Saturating negation.
    ///
    /// `MIN` has no positive counterpart and negates to `MAX`, so negating
    /// twice does not round-trip at `MIN`.
    #[inline]
    pub const fn saturating_neg(self) -> Self {
        if self.0 == i64::MIN {
            Self::MAX
        } else {
            Self(-self.0)
        }
    }

    /// Absolute value.
    ///
    /// # Errors
    /// Returns `Overflow` for `MIN`, whose magnitude is not representable.
    #[inline]
    pub fn abs(self) -> NumericResult<Self> {
        if self.0 == i64::MIN {
            tracing::debug!("absolute value of the minimum fixed-point value");
            Err(NumericError::Overflow)
        } else {
            Ok(self.fast_abs())
        }
    }

    /// Branchless absolute value without the `MIN` check.
    ///
    /// `fast_abs(MIN)` wraps back to `MIN`.
    #[inline]
    pub const fn fast_abs(self) -> Self {
        let mask = self.0 >> 63;
        Self(self.0.wrapping_add(mask) ^ mask)
    }

    /// Wrapping addition with no overflow detection.
    #[inline]
    pub const fn fast_add(self, rhs: Self) -> Self {
        Self(self.0.wrapping_add(rhs.0))
    }

    /// Wrapping subtraction with no overflow detection.
    #[inline]
    pub const fn fast_sub(self, rhs: Self) -> Self {
        Self(self.0.wrapping_sub(rhs.0))
    }
}
