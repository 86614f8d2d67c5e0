// ============================================================================
// Rounding
// Floor, ceiling and round-half-to-even on the fractional bits
// ============================================================================

use super::fix64::Fix64;

/// Fractional bits of exactly one half.
const HALF_FRAC: i64 = 0x8000_0000;

impl Fix64 {
    /// Largest integer less than or equal to the value.
    #[inline]
    pub const fn floor(self) -> Self {
        Self(self.0 & !Self::FRAC_MASK)
    }

    /// Smallest integer greater than or equal to the value.
    ///
    /// Saturates to `MAX` when the next integer is out of range.
    #[inline]
    pub const fn ceil(self) -> Self {
        if self.0 & Self::FRAC_MASK != 0 {
            self.floor().saturating_add(Self::ONE)
        } else {
            self
        }
    }

    /// Nearest integer, with ties going to the even neighbour.
    ///
    /// Saturates to `MAX` when rounding up leaves the range.
    #[inline]
    pub const fn round(self) -> Self {
        let fraction = self.0 & Self::FRAC_MASK;
        let integral = self.floor();
        if fraction < HALF_FRAC {
            return integral;
        }
        if fraction > HALF_FRAC {
            return integral.saturating_add(Self::ONE);
        }
        if integral.0 & Self::ONE_RAW == 0 {
            integral
        } else {
            integral.saturating_add(Self::ONE)
        }
    }
}
