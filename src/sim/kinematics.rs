//! Scalar motion primitives
//!
//! Every smoothed speed or position change in the simulation goes through
//! `move_towards`; it approaches a target by a bounded step and lands on it
//! exactly, so speeds never oscillate around their setpoint.

use rand::Rng;

use crate::consts::RAND_VAL_PRECISION;

/// Bound `value` to `[lo, hi]`.
#[inline]
pub fn clamp(value: f32, lo: f32, hi: f32) -> f32 {
    if value < lo {
        lo
    } else if value > hi {
        hi
    } else {
        value
    }
}

/// Move `current` toward `target` by at most `max_delta`.
///
/// Returns `target` exactly once the remaining distance is within
/// `max_delta`, preventing overshoot.
#[inline]
pub fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    if (current - target).abs() <= max_delta {
        target
    } else if current > target {
        current - max_delta
    } else {
        current + max_delta
    }
}

/// -1, 0 or +1 depending on the sign of `num`.
#[inline]
pub fn sign(num: f32) -> f32 {
    if num > 0.0 {
        1.0
    } else if num < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Uniform value in [0, 1), quantized to `RAND_VAL_PRECISION` steps.
pub fn rand_val<R: Rng>(rng: &mut R) -> f32 {
    rng.random_range(0..RAND_VAL_PRECISION) as f32 / RAND_VAL_PRECISION as f32
}

/// Uniform value in [lo, hi), same quantization as `rand_val`.
pub fn rand_range<R: Rng>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    lo + rand_val(rng) * (hi - lo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn clamp_bounds() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-1.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(11.0, 0.0, 10.0), 10.0);
    }

    #[test]
    fn move_towards_reaches_target() {
        assert_eq!(move_towards(0.0, 10.0, 4.0), 4.0);
        assert_eq!(move_towards(8.0, 10.0, 4.0), 10.0);
        assert_eq!(move_towards(10.0, 10.0, 4.0), 10.0);
        assert_eq!(move_towards(0.0, -10.0, 4.0), -4.0);
    }

    #[test]
    fn sign_cases() {
        assert_eq!(sign(3.5), 1.0);
        assert_eq!(sign(-0.1), -1.0);
        assert_eq!(sign(0.0), 0.0);
    }

    #[test]
    fn rand_helpers_stay_in_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..200 {
            let v = rand_val(&mut rng);
            assert!((0.0..1.0).contains(&v));
            let r = rand_range(&mut rng, -50.0, 50.0);
            assert!((-50.0..50.0).contains(&r));
        }
    }

    proptest! {
        #[test]
        fn move_towards_never_overshoots(
            current in -1e4f32..1e4,
            target in -1e4f32..1e4,
            delta in 0.0f32..1e4,
        ) {
            let result = move_towards(current, target, delta);
            let lo = current.min(target);
            let hi = current.max(target);
            prop_assert!(result >= lo && result <= hi);
            if (current - target).abs() <= delta {
                prop_assert_eq!(result, target);
            }
        }
    }
}
