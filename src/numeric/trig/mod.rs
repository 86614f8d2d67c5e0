// ============================================================================
// Trigonometry
// Table-driven sine with linear interpolation and quadrant reduction
// ============================================================================
//
// The table covers one quadrant. Any other angle has its sign split off, is
// reduced modulo the encoded 2*pi, then folded into [0, pi/2] using
//   sin(-a) = -sin(a),   sin(pi - a) = sin(a)   and   sin(a + pi) = -sin(a)
// Reduction uses the fixed-point value of 2*pi, so the period is exact in
// Q32.32 terms rather than in real terms.

mod sin_lut;

use super::fix64::Fix64;
use sin_lut::{SIN_LUT, SIN_LUT_SIZE};

/// Table index per radian: `(SIN_LUT_SIZE - 1) / (pi / 2)`, pre-encoded.
const LUT_INTERVAL: Fix64 = Fix64::from_raw(2_797_149_107_767);

impl Fix64 {
    /// Sine of an angle in radians.
    ///
    /// Exact at `0` and `pi/2`; elsewhere within about `3e-7` of the true
    /// value for moderate inputs.
    pub fn sin(self) -> Self {
        let (angle, negate) = reduce_angle(self);
        let value = sin_first_quadrant(angle);
        if negate {
            -value
        } else {
            value
        }
    }

    /// Cosine of an angle in radians, as the sine of the angle shifted by `pi/2`.
    pub fn cos(self) -> Self {
        // cos is even; reduce the magnitude first so the shift cannot saturate.
        let turn = Self((self.0.unsigned_abs() % Self::PI_TIMES_2_RAW as u64) as i64);
        turn.fast_add(Self::PI_OVER_2).sin()
    }
}

/// Fold an angle into `[0, pi/2]`, returning whether the sine must be negated.
///
/// Works on the magnitude so that `sin(-x) == -sin(x)` holds bit for bit.
fn reduce_angle(x: Fix64) -> (Fix64, bool) {
    let mut negate = x.0 < 0;
    let mut angle = (x.0.unsigned_abs() % Fix64::PI_TIMES_2_RAW as u64) as i64;
    if angle > Fix64::PI_RAW {
        angle -= Fix64::PI_RAW;
        negate = !negate;
    }
    if angle > Fix64::PI_OVER_2_RAW {
        angle = Fix64::PI_RAW - angle;
    }
    (Fix64(angle), negate)
}

/// Interpolated table lookup for `angle` in `[0, pi/2]`.
fn sin_first_quadrant(angle: Fix64) -> Fix64 {
    if angle.0 == 0 {
        return Fix64::ZERO;
    }
    if angle.0 == Fix64::PI_OVER_2_RAW {
        return Fix64::ONE;
    }

    let raw_index = angle.fast_mul(LUT_INTERVAL);
    let rounded_index = raw_index.round();
    let index_error = raw_index.fast_sub(rounded_index);

    let last = SIN_LUT_SIZE - 1;
    let nearest_index = (rounded_index.to_integer().max(0) as usize).min(last);
    let neighbour_index = nearest_index
        .saturating_add_signed(index_error.sign() as isize)
        .min(last);

    let nearest = Fix64(SIN_LUT[nearest_index]);
    let neighbour = Fix64(SIN_LUT[neighbour_index]);

    // Sine is increasing on the quadrant, so the step toward the neighbour has
    // the sign of the index error.
    let delta = index_error.fast_mul(nearest.fast_sub(neighbour).fast_abs());
    nearest + delta
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-6;

    fn fx(v: f64) -> Fix64 {
        Fix64::from_f64(v)
    }

    #[test]
    fn test_lut_shape() {
        assert_eq!(SIN_LUT.len(), SIN_LUT_SIZE);
        assert_eq!(SIN_LUT[0], 0);
        assert_eq!(SIN_LUT[SIN_LUT_SIZE - 1], Fix64::ONE_RAW);
        assert!(SIN_LUT.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_lut_interval_matches_division() {
        let expected = Fix64::from_integer(SIN_LUT_SIZE as i64 - 1) / Fix64::PI_OVER_2;
        assert_eq!(LUT_INTERVAL, expected);
    }

    #[test]
    fn test_sin_exact_points() {
        assert_eq!(Fix64::ZERO.sin(), Fix64::ZERO);
        assert_eq!(Fix64::PI_OVER_2.sin(), Fix64::ONE);
        assert_eq!(Fix64::PI.sin(), Fix64::ZERO);
        assert_eq!(Fix64::PI_TIMES_2.sin(), Fix64::ZERO);
    }

    #[test]
    fn test_sin_known_values() {
        assert_eq!(Fix64::ONE.sin().raw_value(), 3_614_089_536);
        assert_eq!(fx(0.5).sin().raw_value(), 2_059_116_444);
    }

    #[test]
    fn test_sin_first_quadrant_accuracy() {
        let steps = 20_000i64;
        for i in 0..=steps {
            let x = Fix64::from_raw(Fix64::PI_OVER_2_RAW * i / steps);
            let err = (x.sin().to_f64() - x.to_f64().sin()).abs();
            assert!(err <= TOLERANCE, "sin({}) off by {}", x, err);
        }
    }

    #[test]
    fn test_sin_symmetry() {
        for v in [0.1, 0.7, 1.3, 2.9, 5.5] {
            let x = fx(v);
            assert_eq!((-x).sin(), -x.sin(), "odd symmetry at {}", v);
        }
        assert_eq!(Fix64::NEG_ONE.sin(), -Fix64::ONE.sin());
    }

    #[test]
    fn test_sin_full_range_accuracy() {
        for i in -3_000i64..=3_000 {
            let x = Fix64::from_raw(i * (1 << 27) + 12_345);
            let err = (x.sin().to_f64() - x.to_f64().sin()).abs();
            assert!(err <= TOLERANCE, "sin({}) off by {}", x, err);
        }
    }

    #[test]
    fn test_sin_extreme_inputs_stay_in_range() {
        for x in [Fix64::MAX, Fix64::MIN, Fix64::from_raw(i64::MIN + 1)] {
            let s = x.sin();
            assert!(s >= Fix64::NEG_ONE && s <= Fix64::ONE, "sin({:?}) = {:?}", x, s);
        }
    }

    #[test]
    fn test_cos() {
        assert_eq!(Fix64::ZERO.cos(), Fix64::ONE);
        assert_eq!(Fix64::PI.cos(), Fix64::NEG_ONE);
        assert_eq!(Fix64::PI_OVER_2.cos(), Fix64::ZERO);
        for i in -2_000i64..=2_000 {
            let x = Fix64::from_raw(i * (1 << 27) + 999);
            let err = (x.cos().to_f64() - x.to_f64().cos()).abs();
            assert!(err <= TOLERANCE, "cos({}) off by {}", x, err);
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: sine stays within tolerance of f64 for |x| < 1000
            #[test]
            fn sin_close_to_f64(raw in -(1000i64 << 32)..(1000i64 << 32)) {
                let x = Fix64::from_raw(raw);
                prop_assert!((x.sin().to_f64() - x.to_f64().sin()).abs() <= TOLERANCE);
            }

            /// Property: sin^2 + cos^2 stays near one
            #[test]
            fn pythagorean_identity(raw in -(100i64 << 32)..(100i64 << 32)) {
                let x = Fix64::from_raw(raw);
                let s = x.sin();
                let c = x.cos();
                let sum = s * s + c * c;
                prop_assert!((sum.to_f64() - 1.0).abs() <= 4.0 * TOLERANCE);
            }
        }
    }
}
