// ============================================================================
// Division
// Normalized binary long division over unsigned magnitudes
// ============================================================================
//
// The quotient is produced with one extra fractional bit (33 bit positions
// below the binary point of the dividend) so it can be rounded to nearest at
// the end. Each step shifts the remainder left as far as the leading zeros
// allow, takes one native 64/64 division, and places the partial quotient at
// the remaining bit position.

use super::errors::{NumericError, NumericResult};
use super::fix64::Fix64;

/// Bit positions to produce: 32 fractional bits plus one rounding bit.
const QUOTIENT_BITS: i32 = Fix64::FRAC_BITS as i32 + 1;

impl Fix64 {
    /// Checked division, rounding to nearest (ties away from zero).
    ///
    /// Quotients outside the representable range saturate to `MAX`/`MIN`
    /// according to the combined operand sign.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero.
    pub fn checked_div(self, rhs: Self) -> NumericResult<Self> {
        let (x, y) = (self.0, rhs.0);
        if y == 0 {
            tracing::debug!(dividend = x, "fixed-point division by zero");
            return Err(NumericError::DivisionByZero);
        }

        let negative = (x ^ y) < 0;
        let mut remainder = x.unsigned_abs();
        let mut divider = y.unsigned_abs();
        let mut quotient = 0u64;
        let mut bit_pos = QUOTIENT_BITS;

        // Strip trailing zero nibbles from the divider; each one saves four
        // quotient positions.
        while divider & 0xF == 0 && bit_pos >= 4 {
            divider >>= 4;
            bit_pos -= 4;
        }

        while remainder != 0 && bit_pos >= 0 {
            let shift = (remainder.leading_zeros() as i32).min(bit_pos);
            remainder <<= shift;
            bit_pos -= shift;

            let digit = remainder / divider;
            remainder %= divider;
            quotient = quotient.wrapping_add(digit << bit_pos);

            // The digit must fit below the remaining bit budget.
            if digit & !(u64::MAX >> bit_pos) != 0 {
                let bound = if negative { Self::MIN } else { Self::MAX };
                tracing::trace!(lhs = x, rhs = y, result = bound.0, "fixed-point divide saturated");
                return Ok(bound);
            }

            remainder <<= 1;
            bit_pos -= 1;
        }

        // Round to nearest on the extra bit.
        let result = (quotient.wrapping_add(1) >> 1) as i64;
        Ok(Self(if negative { result.wrapping_neg() } else { result }))
    }

    /// Checked remainder, with the sign of the dividend.
    ///
    /// `MIN % -1` is zero rather than an overflow.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero.
    pub fn checked_rem(self, rhs: Self) -> NumericResult<Self> {
        if rhs.0 == 0 {
            tracing::debug!(dividend = self.0, "fixed-point remainder by zero");
            return Err(NumericError::DivisionByZero);
        }
        Ok(Self(self.0.wrapping_rem(rhs.0)))
    }
}
