// ============================================================================
// Square Root
// Digit-by-digit binary square root over the raw magnitude
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::fix64::Fix64;

const HALF_BITS: u32 = 32;

impl Fix64 {
    /// Square root, rounded to nearest.
    ///
    /// The root of a Q32.32 value needs a 96-bit radicand (`raw << 32`). To
    /// stay within 64 bits the extraction runs twice: the first pass yields
    /// the high half of the result from `raw` itself, the second rescales the
    /// remainder and partial root by 2^32 and extracts the low half.
    ///
    /// # Errors
    /// Returns `NegativeSqrt` if the value is negative.
    pub fn sqrt(self) -> NumericResult<Self> {
        if self.0 < 0 {
            tracing::debug!(raw = self.0, "square root of a negative fixed-point value");
            return Err(NumericError::NegativeSqrt);
        }

        let mut num = self.0 as u64;
        let mut result = 0u64;

        // second-to-top bit
        let mut bit = 1u64 << 62;
        while bit > num {
            bit >>= 2;
        }

        for pass in 0..2 {
            while bit != 0 {
                if num >= result + bit {
                    num -= result + bit;
                    result = (result >> 1) + bit;
                } else {
                    result >>= 1;
                }
                bit >>= 2;
            }

            if pass == 0 {
                if num > (1u64 << HALF_BITS) - 1 {
                    // num cannot be shifted left by 32 without losing bits.
                    // Step the root up by half a unit instead:
                    //   num' = num + result^2 - (result + 0.5)^2 = num - result - 0.5
                    num -= result;
                    num = (num << HALF_BITS) - 0x8000_0000;
                    result = (result << HALF_BITS) + 0x8000_0000;
                } else {
                    num <<= HALF_BITS;
                    result <<= HALF_BITS;
                }
                bit = 1u64 << (HALF_BITS - 2);
            }
        }

        // If the next bit would have been 1, round up.
        if num > result {
            result += 1;
        }
        Ok(Self(result as i64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Integer square root of `raw << 32` by Newton iteration on u128.
    fn isqrt_scaled(raw: i64) -> u128 {
        let n = (raw as u128) << 32;
        if n == 0 {
            return 0;
        }
        let mut x = n;
        let mut y = (x + 1) / 2;
        while y < x {
            x = y;
            y = (x + n / x) / 2;
        }
        x
    }

    #[test]
    fn test_sqrt_exact_squares() {
        assert_eq!(Fix64::ZERO.sqrt(), Ok(Fix64::ZERO));
        assert_eq!(Fix64::ONE.sqrt(), Ok(Fix64::ONE));
        assert_eq!(Fix64::from_integer(4).sqrt(), Ok(Fix64::from_integer(2)));
        assert_eq!(Fix64::from_integer(9).sqrt(), Ok(Fix64::from_integer(3)));
        assert_eq!(Fix64::from_f64(0.25).sqrt(), Ok(Fix64::from_f64(0.5)));
        assert_eq!(
            Fix64::from_integer(1 << 30).sqrt(),
            Ok(Fix64::from_integer(1 << 15))
        );
    }

    #[test]
    fn test_sqrt_two() {
        let root = Fix64::from_integer(2).sqrt().unwrap();
        assert!((root.to_f64() - std::f64::consts::SQRT_2).abs() < 1e-9);
    }

    #[test]
    fn test_sqrt_max() {
        let root = Fix64::MAX.sqrt().unwrap();
        assert_eq!(root.raw_value(), 199_032_864_766_430);
    }

    #[test]
    fn test_sqrt_smallest() {
        // sqrt(2^-32) = 2^-16
        assert_eq!(Fix64::EPSILON.sqrt(), Ok(Fix64::from_raw(1 << 16)));
    }

    #[test]
    fn test_sqrt_negative() {
        assert_eq!(Fix64::NEG_ONE.sqrt(), Err(NumericError::NegativeSqrt));
        assert_eq!(Fix64::from_raw(-1).sqrt(), Err(NumericError::NegativeSqrt));
        assert_eq!(Fix64::MIN.sqrt(), Err(NumericError::NegativeSqrt));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: result is floor(sqrt) or one above it
            #[test]
            fn sqrt_within_one_unit_of_isqrt(raw in 0i64..=i64::MAX) {
                let root = Fix64::from_raw(raw).sqrt().unwrap().raw_value() as u128;
                let floor = isqrt_scaled(raw);
                prop_assert!(root == floor || root == floor + 1,
                    "raw={} root={} floor={}", raw, root, floor);
            }

            /// Property: squaring the root lands close to the input
            #[test]
            fn sqrt_squared_is_close(raw in (1i64 << 32)..(1i64 << 48)) {
                let x = Fix64::from_raw(raw);
                let root = x.sqrt().unwrap();
                let back = root * root;
                let tolerance = (root.raw_value() >> 31) + 2;
                prop_assert!((back.raw_value() - raw).abs() <= tolerance);
            }
        }
    }
}
