// ============================================================================
// Multiplication
// Full-precision 64x64 product built from four 32-bit partial products
// ============================================================================
//
// The product of two Q32.32 values is a Q64.64 quantity; the result keeps bits
// 32..96 of it. Only 64-bit arithmetic is used so the result is bit-identical
// on every target:
//
//   x = xhi * 2^32 + xlo      (xhi signed, xlo unsigned)
//   y = yhi * 2^32 + ylo
//
//   (x * y) >> 32 = (xlo * ylo) >> 32 + xlo * yhi + xhi * ylo + (xhi * yhi) << 32

use super::fix64::Fix64;

/// The four partial products of a limb-decomposed multiply.
#[derive(Debug, Clone, Copy)]
struct PartialProducts {
    lolo: u64,
    lohi: i64,
    hilo: i64,
    hihi: i64,
}

impl PartialProducts {
    #[inline]
    fn of(x: i64, y: i64) -> Self {
        let xlo = (x & Fix64::FRAC_MASK) as u64;
        let xhi = x >> Fix64::FRAC_BITS;
        let ylo = (y & Fix64::FRAC_MASK) as u64;
        let yhi = y >> Fix64::FRAC_BITS;

        // Each limb product fits in 64 bits: |lo| < 2^32 and |hi| <= 2^31.
        Self {
            lolo: xlo * ylo,
            lohi: xlo as i64 * yhi,
            hilo: xhi * ylo as i64,
            hihi: xhi * yhi,
        }
    }

    #[inline]
    fn lo_result(&self) -> i64 {
        (self.lolo >> Fix64::FRAC_BITS) as i64
    }

    #[inline]
    fn hi_result(&self) -> i64 {
        self.hihi << Fix64::FRAC_BITS
    }
}

/// Wrapping add that records a carry into the sign bit.
///
/// The flag is raised when the sign of the sum disagrees with the parity of
/// the operand signs, which also catches a wrapped `hihi << 32` term.
#[inline]
fn add_tracking_overflow(x: i64, y: i64, overflow: &mut bool) -> i64 {
    let sum = x.wrapping_add(y);
    *overflow |= (x ^ y ^ sum) < 0;
    sum
}

impl Fix64 {
    /// Saturating multiplication.
    ///
    /// The result is the exact product rounded toward negative infinity, or
    /// `MAX`/`MIN` (by the sign of the true product) when it does not fit.
    pub fn saturating_mul(self, rhs: Self) -> Self {
        let (x, y) = (self.0, rhs.0);
        let parts = PartialProducts::of(x, y);

        let mut overflow = false;
        let mut sum = add_tracking_overflow(parts.lo_result(), parts.lohi, &mut overflow);
        sum = add_tracking_overflow(sum, parts.hilo, &mut overflow);
        sum = add_tracking_overflow(sum, parts.hi_result(), &mut overflow);

        let signs_equal = (x ^ y) >= 0;

        // A non-negative true product that came out negative, or carried out of
        // the word on the positive path, overflowed upward; the mirror case
        // overflowed downward.
        if signs_equal {
            if sum < 0 || (overflow && x > 0) {
                return saturated(x, y, Self::MAX);
            }
        } else if sum > 0 {
            return saturated(x, y, Self::MIN);
        }

        // The top 32 bits of hihi are dropped by the shift; they must be a
        // sign extension of the kept bits.
        let top_carry = parts.hihi >> Fix64::FRAC_BITS;
        if top_carry != 0 && top_carry != -1 {
            return saturated(x, y, if signs_equal { Self::MAX } else { Self::MIN });
        }

        // With opposite signs and both magnitudes above one, the product must
        // be below the negative operand.
        if !signs_equal {
            let (pos_op, neg_op) = if x > y { (x, y) } else { (y, x) };
            if sum > neg_op && neg_op < -Self::ONE_RAW && pos_op > Self::ONE_RAW {
                return saturated(x, y, Self::MIN);
            }
        }

        Self(sum)
    }

    /// Multiplication without overflow detection.
    ///
    /// Same limb arithmetic as [`Fix64::saturating_mul`], wrapping modulo 2^64
    /// when the product does not fit.
    #[inline]
    pub fn fast_mul(self, rhs: Self) -> Self {
        let parts = PartialProducts::of(self.0, rhs.0);
        Self(
            parts
                .lo_result()
                .wrapping_add(parts.lohi)
                .wrapping_add(parts.hilo)
                .wrapping_add(parts.hi_result()),
        )
    }
}

#[cold]
fn saturated(x: i64, y: i64, bound: Fix64) -> Fix64 {
    tracing::trace!(lhs = x, rhs = y, result = bound.0, "fixed-point multiply saturated");
    bound
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fx(v: f64) -> Fix64 {
        Fix64::from_f64(v)
    }

    /// Exact product shifted down, clamped into range.
    fn reference_mul(x: i64, y: i64) -> i64 {
        let exact = (x as i128 * y as i128) >> 32;
        exact.clamp(i64::MIN as i128, i64::MAX as i128) as i64
    }

    #[test]
    fn test_mul_basic() {
        assert_eq!(fx(2.5) * fx(4.0), fx(10.0));
        assert_eq!(fx(1.5) * fx(1.5), fx(2.25));
        assert_eq!(fx(-1.5) * fx(2.0), fx(-3.0));
        assert_eq!(fx(-0.5) * fx(-0.5), fx(0.25));
        assert_eq!(Fix64::ONE * Fix64::ONE, Fix64::ONE);
    }

    #[test]
    fn test_mul_identity_and_zero() {
        for v in [Fix64::MAX, Fix64::MIN, fx(-3.25), Fix64::EPSILON] {
            assert_eq!(v * Fix64::ONE, v);
            assert_eq!(Fix64::ONE * v, v);
            assert_eq!(v * Fix64::ZERO, Fix64::ZERO);
        }
    }

    #[test]
    fn test_mul_rounds_toward_negative_infinity() {
        // 1 raw unit * 0.5 = half a unit -> 0; -1 raw unit * 0.5 -> -1
        assert_eq!(Fix64::EPSILON * fx(0.5), Fix64::ZERO);
        assert_eq!(Fix64::from_raw(-1) * fx(0.5), Fix64::from_raw(-1));
    }

    #[test]
    fn test_mul_saturates_positive() {
        assert_eq!(Fix64::MAX * fx(1.5), Fix64::MAX);
        assert_eq!(Fix64::MAX * (Fix64::ONE + Fix64::EPSILON), Fix64::MAX);
        assert_eq!(Fix64::MIN * Fix64::MIN, Fix64::MAX);
        assert_eq!(Fix64::MIN * Fix64::NEG_ONE, Fix64::MAX);
        assert_eq!(fx(65536.0) * fx(65536.0), Fix64::MAX);
    }

    #[test]
    fn test_mul_saturates_negative() {
        assert_eq!(Fix64::MAX * Fix64::from_integer(-2), Fix64::MIN);
        assert_eq!(Fix64::from_integer(-3) * Fix64::from_raw(i64::MAX / 2), Fix64::MIN);
        assert_eq!(fx(-65536.0) * fx(65536.0), Fix64::MIN);
    }

    #[test]
    fn test_mul_wrapped_high_product() {
        // hihi << 32 wraps while its top bits stay zero
        let x = Fix64::from_raw(8_344_192_569_788_096_793);
        let y = Fix64::from_raw(11_520_012_088);
        assert_eq!(x * y, Fix64::MAX);
    }

    #[test]
    fn test_mul_exact_min_boundary() {
        // -2^31 * 1 and 2^30 * -2 land exactly on MIN
        assert_eq!(fx(1073741824.0) * fx(-2.0), Fix64::MIN);
        assert_eq!(Fix64::MIN * Fix64::ONE, Fix64::MIN);
    }

    #[test]
    fn test_fast_mul() {
        assert_eq!(fx(2.5).fast_mul(fx(4.0)), fx(10.0));
        assert_eq!(fx(-1.25).fast_mul(fx(0.5)), fx(-0.625));
        // wraps instead of saturating
        assert_eq!(Fix64::MAX.fast_mul(fx(2.0)), Fix64::from_raw(-2));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn operand() -> impl Strategy<Value = i64> {
            prop_oneof![
                any::<i64>(),
                -(1i64 << 40)..(1i64 << 40),
                -(1i64 << 34)..(1i64 << 34),
                Just(i64::MIN),
                Just(i64::MAX),
                Just(Fix64::ONE_RAW),
                Just(-Fix64::ONE_RAW),
            ]
        }

        proptest! {
            /// Property: saturating multiply equals the clamped exact product
            #[test]
            fn mul_matches_i128_reference(a in operand(), b in operand()) {
                let got = Fix64::from_raw(a) * Fix64::from_raw(b);
                prop_assert_eq!(got.raw_value(), reference_mul(a, b));
            }

            /// Property: multiplication is commutative
            #[test]
            fn mul_is_commutative(a in operand(), b in operand()) {
                let x = Fix64::from_raw(a);
                let y = Fix64::from_raw(b);
                prop_assert_eq!(x * y, y * x);
            }

            /// Property: fast_mul equals the wrapped exact product
            #[test]
            fn fast_mul_wraps(a in operand(), b in operand()) {
                let wrapped = ((a as i128 * b as i128) >> 32) as i64;
                prop_assert_eq!(Fix64::from_raw(a).fast_mul(Fix64::from_raw(b)).raw_value(), wrapped);
            }
        }
    }
}
